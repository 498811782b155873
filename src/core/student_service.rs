// core/student_service.rs
use std::sync::Arc;

use crate::models::Student;
use crate::repositories::RepositoryFactory;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::is_valid_email;

/// Cas d'utilisation : création d'un étudiant
pub struct StudentService {
    repos: Arc<dyn RepositoryFactory>,
}

impl StudentService {
    pub fn new(repos: Arc<dyn RepositoryFactory>) -> Self {
        Self { repos }
    }

    /// Crée un étudiant à partir des champs saisis
    pub async fn create(
        &self,
        number: &str,
        last_name: &str,
        first_name: &str,
        email: &str,
    ) -> Result<Student> {
        let student = Student::new(number, last_name, first_name, email);
        self.create_entity(student).await
    }

    /// Crée un étudiant déjà construit, après contrôle des règles métier
    pub async fn create_entity(&self, student: Student) -> Result<Student> {
        self.check_business_rules(&student).await?;
        let created = self.repos.students().create(student).await?;
        self.repos.save_changes().await?;
        Ok(created)
    }

    async fn check_business_rules(&self, student: &Student) -> Result<()> {
        // Champs obligatoires
        if student.number.is_empty() {
            return Err(AppError::InvalidArgument(
                "le numéro d'étudiant est obligatoire".to_string(),
            ));
        }
        if student.email.is_empty() {
            return Err(AppError::InvalidArgument(
                "l'email est obligatoire".to_string(),
            ));
        }

        // Unicité du numéro d'étudiant
        let existing = self.repos.students().find_by_number(&student.number).await?;
        if !existing.is_empty() {
            return Err(AppError::DuplicateStudentNumber(student.number.clone()));
        }

        // Forme de l'email
        if !is_valid_email(&student.email) {
            return Err(AppError::InvalidEmail(student.email.clone()));
        }

        // Unicité de l'email
        let existing = self.repos.students().find_by_email(&student.email).await?;
        if !existing.is_empty() {
            return Err(AppError::DuplicateEmail(student.email.clone()));
        }

        // Le métier impose un nom d'au moins 3 caractères
        if student.last_name.chars().count() < 3 {
            return Err(AppError::InvalidStudentName(student.last_name.clone()));
        }

        Ok(())
    }
}

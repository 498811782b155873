// core/course_unit_service.rs
use std::sync::Arc;

use crate::models::CourseUnit;
use crate::repositories::RepositoryFactory;
use crate::utils::error::{AppError, Result};

/// Cas d'utilisation : création d'une UE
pub struct CourseUnitService {
    repos: Arc<dyn RepositoryFactory>,
}

impl CourseUnitService {
    pub fn new(repos: Arc<dyn RepositoryFactory>) -> Self {
        Self { repos }
    }

    /// Crée une UE à partir des champs saisis
    pub async fn create(&self, code: &str, title: &str) -> Result<CourseUnit> {
        let course_unit = CourseUnit::new(code, title);
        self.create_entity(course_unit).await
    }

    /// Crée une UE déjà construite, après contrôle des règles métier
    pub async fn create_entity(&self, course_unit: CourseUnit) -> Result<CourseUnit> {
        self.check_business_rules(&course_unit).await?;
        let created = self.repos.course_units().create(course_unit).await?;
        self.repos.save_changes().await?;
        Ok(created)
    }

    async fn check_business_rules(&self, course_unit: &CourseUnit) -> Result<()> {
        // Le numéro d'UE ne doit pas être vide
        if course_unit.code.is_empty() {
            return Err(AppError::InvalidCourseUnitCode(course_unit.code.clone()));
        }

        // L'intitulé ne doit pas être vide
        if course_unit.title.is_empty() {
            return Err(AppError::InvalidCourseUnitTitle(course_unit.title.clone()));
        }

        // Le métier impose un intitulé d'au moins 3 caractères
        if course_unit.title.chars().count() < 3 {
            return Err(AppError::InvalidCourseUnitTitle(course_unit.title.clone()));
        }

        // Unicité du numéro d'UE
        let existing = self
            .repos
            .course_units()
            .find_by_code(&course_unit.code)
            .await?;
        if !existing.is_empty() {
            return Err(AppError::DuplicateCourseUnitCode(course_unit.code.clone()));
        }

        Ok(())
    }
}

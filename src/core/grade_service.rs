// core/grade_service.rs
use std::sync::Arc;

use crate::models::Grade;
use crate::repositories::RepositoryFactory;
use crate::utils::error::{AppError, Result};

/// Cas d'utilisation : attribution d'une note à un étudiant
///
/// Le contrôle croise quatre repositories (étudiant, UE, parcours, notes) par
/// lectures ponctuelles successives ; aucune jointure, aucune atomicité entre
/// les lectures de contrôle et l'écriture finale.
pub struct GradeService {
    repos: Arc<dyn RepositoryFactory>,
}

impl GradeService {
    pub fn new(repos: Arc<dyn RepositoryFactory>) -> Self {
        Self { repos }
    }

    /// Attribue une note à un étudiant dans une UE
    pub async fn add_grade_to_student(
        &self,
        student_id: i64,
        course_unit_id: i64,
        value: f32,
    ) -> Result<Grade> {
        let grade = Grade::new(value, student_id, course_unit_id);
        self.add_entity(grade).await
    }

    /// Attribue une note déjà construite, après contrôle des règles métier
    pub async fn add_entity(&self, grade: Grade) -> Result<Grade> {
        self.check_business_rules(&grade).await?;
        let created = self.repos.grades().create(grade).await?;
        self.repos.save_changes().await?;
        Ok(created)
    }

    async fn check_business_rules(&self, grade: &Grade) -> Result<()> {
        // Identifiants strictement positifs
        if grade.student_id <= 0 {
            return Err(AppError::InvalidArgument(format!(
                "identifiant étudiant invalide: {}",
                grade.student_id
            )));
        }
        if grade.course_unit_id <= 0 {
            return Err(AppError::InvalidArgument(format!(
                "identifiant UE invalide: {}",
                grade.course_unit_id
            )));
        }

        // La valeur est contrôlée avant toute lecture du stockage
        if !(0.0..=20.0).contains(&grade.value) {
            return Err(AppError::InvalidGradeValue(grade.value));
        }

        // Recherche de l'étudiant
        let students = self.repos.students().find_by_id(grade.student_id).await?;
        let student = match students.into_iter().next() {
            Some(s) => s,
            None => return Err(AppError::StudentNotFound(grade.student_id)),
        };

        // Recherche de l'UE
        let course_units = self
            .repos
            .course_units()
            .find_by_id(grade.course_unit_id)
            .await?;
        if course_units.is_empty() {
            return Err(AppError::CourseUnitNotFound(grade.course_unit_id));
        }

        // L'étudiant doit être inscrit dans un parcours
        let track_id = match student.track_id {
            Some(id) if id > 0 => id,
            _ => return Err(AppError::StudentNotInTrack(grade.student_id)),
        };

        // Rechargement du parcours, garde contre une référence pendante
        let tracks = self.repos.tracks().find_by_id(track_id).await?;
        let track = match tracks.into_iter().next() {
            Some(t) => t,
            None => return Err(AppError::TrackNotFound(track_id)),
        };

        // L'UE doit être enseignée dans le parcours de l'étudiant
        if !track.course_unit_ids.contains(&grade.course_unit_id) {
            return Err(AppError::CourseUnitNotInTrack {
                course_unit_id: grade.course_unit_id,
                track_id,
            });
        }

        // Une seule note par couple (étudiant, UE)
        let existing = self
            .repos
            .grades()
            .find_by_student_and_course_unit(grade.student_id, grade.course_unit_id)
            .await?;
        if !existing.is_empty() {
            return Err(AppError::DuplicateGrade {
                student_id: grade.student_id,
                course_unit_id: grade.course_unit_id,
            });
        }

        Ok(())
    }
}

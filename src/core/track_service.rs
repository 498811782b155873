// core/track_service.rs
use std::sync::Arc;

use crate::models::{Student, Track};
use crate::repositories::RepositoryFactory;
use crate::utils::error::{AppError, Result};

/// Cas d'utilisation : création d'un parcours et gestion de ses associations
pub struct TrackService {
    repos: Arc<dyn RepositoryFactory>,
}

impl TrackService {
    pub fn new(repos: Arc<dyn RepositoryFactory>) -> Self {
        Self { repos }
    }

    /// Crée un parcours à partir des champs saisis
    pub async fn create(&self, name: &str, formation_year: i32) -> Result<Track> {
        let track = Track::new(name, formation_year);
        self.create_entity(track).await
    }

    /// Crée un parcours déjà construit, après contrôle des règles métier
    pub async fn create_entity(&self, track: Track) -> Result<Track> {
        self.check_business_rules(&track).await?;
        let created = self.repos.tracks().create(track).await?;
        self.repos.save_changes().await?;
        Ok(created)
    }

    /// Inscrit un étudiant dans un parcours
    pub async fn add_student_to_track(&self, student_id: i64, track_id: i64) -> Result<Student> {
        if student_id <= 0 {
            return Err(AppError::InvalidArgument(format!(
                "identifiant étudiant invalide: {}",
                student_id
            )));
        }
        if track_id <= 0 {
            return Err(AppError::InvalidArgument(format!(
                "identifiant parcours invalide: {}",
                track_id
            )));
        }

        let students = self.repos.students().find_by_id(student_id).await?;
        let mut student = match students.into_iter().next() {
            Some(s) => s,
            None => return Err(AppError::StudentNotFound(student_id)),
        };

        let tracks = self.repos.tracks().find_by_id(track_id).await?;
        if tracks.is_empty() {
            return Err(AppError::TrackNotFound(track_id));
        }

        if student.track_id == Some(track_id) {
            return Err(AppError::StudentAlreadyInTrack {
                student_id,
                track_id,
            });
        }

        student.track_id = Some(track_id);
        let updated = self.repos.students().update(student).await?;
        self.repos.save_changes().await?;
        Ok(updated)
    }

    /// Ajoute une UE à la liste des UEs enseignées dans un parcours
    pub async fn add_course_unit_to_track(
        &self,
        course_unit_id: i64,
        track_id: i64,
    ) -> Result<Track> {
        if course_unit_id <= 0 {
            return Err(AppError::InvalidArgument(format!(
                "identifiant UE invalide: {}",
                course_unit_id
            )));
        }
        if track_id <= 0 {
            return Err(AppError::InvalidArgument(format!(
                "identifiant parcours invalide: {}",
                track_id
            )));
        }

        let course_units = self.repos.course_units().find_by_id(course_unit_id).await?;
        if course_units.is_empty() {
            return Err(AppError::CourseUnitNotFound(course_unit_id));
        }

        let tracks = self.repos.tracks().find_by_id(track_id).await?;
        let mut track = match tracks.into_iter().next() {
            Some(t) => t,
            None => return Err(AppError::TrackNotFound(track_id)),
        };

        if track.course_unit_ids.contains(&course_unit_id) {
            return Err(AppError::CourseUnitAlreadyInTrack {
                course_unit_id,
                track_id,
            });
        }

        track.course_unit_ids.push(course_unit_id);
        let updated = self.repos.tracks().update(track).await?;
        self.repos.save_changes().await?;
        Ok(updated)
    }

    /// Liste les étudiants inscrits dans un parcours
    pub async fn enrolled_students(&self, track_id: i64) -> Result<Vec<Student>> {
        if track_id <= 0 {
            return Err(AppError::InvalidArgument(format!(
                "identifiant parcours invalide: {}",
                track_id
            )));
        }

        let tracks = self.repos.tracks().find_by_id(track_id).await?;
        if tracks.is_empty() {
            return Err(AppError::TrackNotFound(track_id));
        }

        self.repos.students().find_by_track(track_id).await
    }

    async fn check_business_rules(&self, track: &Track) -> Result<()> {
        // Unicité du nom, contrôlée avant la plage d'année et la longueur
        let existing = self.repos.tracks().find_by_name(&track.name).await?;
        if !existing.is_empty() {
            return Err(AppError::DuplicateTrackName(track.name.clone()));
        }

        // Le métier borne l'année de formation entre 1900 et 2100
        if !(1900..=2100).contains(&track.formation_year) {
            return Err(AppError::InvalidFormationYear(track.formation_year));
        }

        // Le métier impose un nom d'au moins 3 caractères
        if track.name.chars().count() < 3 {
            return Err(AppError::InvalidTrackName(track.name.clone()));
        }

        Ok(())
    }
}

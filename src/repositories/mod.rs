// repositories/mod.rs
//
// Contrat d'accès au stockage : un repository par entité, obtenu auprès d'une
// factory qui porte aussi le commit de l'unité de travail.
//
// `create` met en attente une insertion et renvoie l'entité munie de son
// identifiant ; rien n'est durable avant `save_changes`. Les lectures ne voient
// que l'état committé. Aucune transaction ne couvre l'intervalle entre les
// lectures de validation d'un cas d'utilisation et son écriture finale : une
// insertion concurrente peut s'y glisser, l'unicité définitive relève de
// l'adaptateur de stockage.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{CourseUnit, Grade, Student, Track};
use crate::utils::error::Result;

/// Accès aux étudiants
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Recherche par identifiant (liste vide si aucun étudiant ne correspond)
    async fn find_by_id(&self, id: i64) -> Result<Vec<Student>>;

    /// Recherche par numéro d'étudiant
    async fn find_by_number(&self, number: &str) -> Result<Vec<Student>>;

    /// Recherche par email
    async fn find_by_email(&self, email: &str) -> Result<Vec<Student>>;

    /// Étudiants inscrits dans un parcours
    async fn find_by_track(&self, track_id: i64) -> Result<Vec<Student>>;

    /// Met en attente la création d'un étudiant et renvoie la fiche avec son identifiant
    async fn create(&self, student: Student) -> Result<Student>;

    /// Met en attente le remplacement d'une fiche existante (même identifiant)
    async fn update(&self, student: Student) -> Result<Student>;
}

/// Accès aux parcours
#[async_trait]
pub trait TrackRepository: Send + Sync {
    /// Recherche par identifiant
    async fn find_by_id(&self, id: i64) -> Result<Vec<Track>>;

    /// Recherche par nom de parcours
    async fn find_by_name(&self, name: &str) -> Result<Vec<Track>>;

    /// Met en attente la création d'un parcours et renvoie la fiche avec son identifiant
    async fn create(&self, track: Track) -> Result<Track>;

    /// Met en attente le remplacement d'une fiche existante (même identifiant)
    async fn update(&self, track: Track) -> Result<Track>;
}

/// Accès aux UEs
#[async_trait]
pub trait CourseUnitRepository: Send + Sync {
    /// Recherche par identifiant
    async fn find_by_id(&self, id: i64) -> Result<Vec<CourseUnit>>;

    /// Recherche par numéro d'UE
    async fn find_by_code(&self, code: &str) -> Result<Vec<CourseUnit>>;

    /// Met en attente la création d'une UE et renvoie la fiche avec son identifiant
    async fn create(&self, course_unit: CourseUnit) -> Result<CourseUnit>;
}

/// Accès aux notes
#[async_trait]
pub trait GradeRepository: Send + Sync {
    /// Notes existantes pour un couple (étudiant, UE)
    async fn find_by_student_and_course_unit(
        &self,
        student_id: i64,
        course_unit_id: i64,
    ) -> Result<Vec<Grade>>;

    /// Met en attente la création d'une note et renvoie la fiche avec son identifiant
    async fn create(&self, grade: Grade) -> Result<Grade>;
}

/// Factory regroupant un repository par entité et le commit de l'unité de travail
///
/// Construite une fois par requête et passée explicitement aux cas d'utilisation.
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    fn students(&self) -> Arc<dyn StudentRepository>;
    fn tracks(&self) -> Arc<dyn TrackRepository>;
    fn course_units(&self) -> Arc<dyn CourseUnitRepository>;
    fn grades(&self) -> Arc<dyn GradeRepository>;

    /// Commet durablement toutes les écritures en attente de l'unité de travail
    ///
    /// Sans effet si rien n'est en attente.
    async fn save_changes(&self) -> Result<()>;
}

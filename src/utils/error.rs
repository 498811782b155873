// utils/error.rs
use thiserror::Error;

/// Erreurs métier de la plateforme de scolarité
///
/// Chaque invariant violé a sa propre variante ; les cas d'utilisation renvoient
/// toujours la première violation rencontrée, jamais un agrégat.
#[derive(Debug, Error)]
pub enum AppError {
    // Erreurs d'arguments
    #[error("Argument invalide: {0}")]
    InvalidArgument(String),

    // Erreurs étudiant
    #[error("{0} - ce numéro d'étudiant est déjà affecté")]
    DuplicateStudentNumber(String),

    #[error("{0} est déjà affecté à un étudiant")]
    DuplicateEmail(String),

    #[error("{0} - email mal formé")]
    InvalidEmail(String),

    #[error("{0} incorrect - le nom d'un étudiant doit contenir au moins 3 caractères")]
    InvalidStudentName(String),

    #[error("Étudiant {0} non trouvé")]
    StudentNotFound(i64),

    // Erreurs parcours
    #[error("{0} - ce nom de parcours est déjà utilisé")]
    DuplicateTrackName(String),

    #[error("{0} - l'année de formation doit être comprise entre 1900 et 2100")]
    InvalidFormationYear(i32),

    #[error("{0} - le nom du parcours doit contenir au moins 3 caractères")]
    InvalidTrackName(String),

    #[error("Parcours {0} non trouvé")]
    TrackNotFound(i64),

    #[error("L'étudiant {0} n'est inscrit dans aucun parcours")]
    StudentNotInTrack(i64),

    #[error("L'étudiant {student_id} est déjà inscrit dans le parcours {track_id}")]
    StudentAlreadyInTrack { student_id: i64, track_id: i64 },

    // Erreurs UE
    #[error("{0} - numéro d'UE invalide")]
    InvalidCourseUnitCode(String),

    #[error("{0} - l'intitulé d'une UE doit contenir au moins 3 caractères")]
    InvalidCourseUnitTitle(String),

    #[error("{0} - ce numéro d'UE est déjà utilisé")]
    DuplicateCourseUnitCode(String),

    #[error("UE {0} non trouvée")]
    CourseUnitNotFound(i64),

    #[error("L'UE {course_unit_id} n'est pas enseignée dans le parcours {track_id}")]
    CourseUnitNotInTrack { course_unit_id: i64, track_id: i64 },

    #[error("L'UE {course_unit_id} est déjà enseignée dans le parcours {track_id}")]
    CourseUnitAlreadyInTrack { course_unit_id: i64, track_id: i64 },

    // Erreurs note
    #[error("La note '{0}' est invalide, elle doit être comprise entre 0 et 20")]
    InvalidGradeValue(f32),

    #[error("L'étudiant {student_id} a déjà une note dans l'UE {course_unit_id}")]
    DuplicateGrade { student_id: i64, course_unit_id: i64 },

    // Erreurs de stockage
    // Les échecs de la couche de persistance remontent tels quels, sans traduction.
    #[error("Erreur de stockage: {0}")]
    Storage(String),
}

// Type de résultat standard
pub type Result<T> = std::result::Result<T, AppError>;

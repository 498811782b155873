// core/mod.rs
pub mod course_unit_service;
pub mod grade_service;
pub mod student_service;
pub mod track_service;

// Ré-exports pour faciliter l'import
pub use course_unit_service::CourseUnitService;
pub use grade_service::GradeService;
pub use student_service::StudentService;
pub use track_service::TrackService;

// Modèle: student.rs
pub mod student;
pub use student::Student;

// Modèle: track.rs
pub mod track;
pub use track::Track;

// Modèle: course_unit.rs
pub mod course_unit;
pub use course_unit::CourseUnit;

// Modèle: grade.rs
pub mod grade;
pub use grade::Grade;

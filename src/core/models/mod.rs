//! Data models for the student registry

pub mod catalog;
pub mod course;
pub mod student;

pub use catalog::CourseCatalog;
pub use course::Course;
pub use student::Student;

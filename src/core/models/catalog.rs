//! Course catalog model

use super::Course;
use serde::{Deserialize, Serialize};

/// Default course seeded into every catalog
pub const DEFAULT_COURSE_ID: &str = "BSIT";

/// Subject list for the default BSIT entry, in display order
const BSIT_SUBJECTS: [&str; 8] = [
    "CS 121",
    "CS 131",
    "IT 111",
    "GEd 102",
    "GEd 105",
    "GEd 109",
    "PE 103",
    "NSTP 121",
];

/// Catalog of courses, registered once at startup
///
/// Students reference courses by id only; nothing checks that a student's
/// course exists here, so removing or replacing catalog entries never touches
/// student records. The catalog is passed into the manager at construction
/// rather than living in process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCatalog {
    /// Registered courses in registration order
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    /// Create a catalog seeded with the fixed default BSIT entry
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.register(Course::with_subjects(DEFAULT_COURSE_ID, &BSIT_SUBJECTS));
        catalog
    }

    /// Insert a course, replacing any existing entry with the same id
    pub fn register(&mut self, course: Course) {
        if let Some(existing) = self.courses.iter_mut().find(|c| c.id == course.id) {
            *existing = course;
        } else {
            self.courses.push(course);
        }
    }

    /// Look up a course by id
    #[must_use]
    pub fn lookup(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// All registered courses, in registration order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

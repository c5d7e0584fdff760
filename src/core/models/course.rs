//! Course model

use serde::{Deserialize, Serialize};

/// A program of study with an ordered list of subject names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier (e.g., "BSIT")
    pub id: String,

    /// Subject names in display order
    pub subjects: Vec<String>,
}

impl Course {
    /// Create a new course with no subjects
    ///
    /// # Arguments
    /// * `id` - Course identifier (e.g., a program code like "BSIT")
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self {
            id,
            subjects: Vec::new(),
        }
    }

    /// Create a course with an initial subject list
    #[must_use]
    pub fn with_subjects(id: &str, subjects: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            subjects: subjects.iter().map(ToString::to_string).collect(),
        }
    }

    /// Append a subject, keeping the list free of duplicates
    pub fn add_subject(&mut self, subject: String) {
        if !self.subjects.contains(&subject) {
            self.subjects.push(subject);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("BSCS".to_string());

        assert_eq!(course.id, "BSCS");
        assert!(course.subjects.is_empty());
    }

    #[test]
    fn test_with_subjects_preserves_order() {
        let course = Course::with_subjects("BSIT", &["CS 121", "CS 131", "GEd 109"]);

        assert_eq!(course.subjects, vec!["CS 121", "CS 131", "GEd 109"]);
    }

    #[test]
    fn test_add_subject() {
        let mut course = Course::new("BSIT".to_string());

        course.add_subject("CS 131".to_string());
        assert_eq!(course.subjects.len(), 1);
        assert_eq!(course.subjects[0], "CS 131");

        // Adding duplicate should not duplicate
        course.add_subject("CS 131".to_string());
        assert_eq!(course.subjects.len(), 1);
    }
}

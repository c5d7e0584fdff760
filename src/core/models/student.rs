//! Student model

use crate::core::error::RegistryError;
use crate::core::grades::{self, GradeBand, UNGRADED};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A student record: identity, course assignment, and per-subject grades
///
/// The course assignment is a weak reference: it is a plain identifier that is
/// never checked against the catalog, so free-text course names are allowed
/// and removing a course from the catalog leaves students untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Student code, unique and immutable after creation (e.g., "24-49051")
    code: String,

    /// Display name
    pub name: String,

    /// Course identifier, unvalidated against the catalog
    course_id: String,

    /// Subject name → grade in [1.00, 5.00]
    grades: BTreeMap<String, f64>,
}

impl Student {
    /// Create a new student with no recorded grades
    ///
    /// # Arguments
    /// * `code` - Unique student code, the primary key
    /// * `name` - Display name
    /// * `course_id` - Course identifier (may be free text)
    #[must_use]
    pub const fn new(code: String, name: String, course_id: String) -> Self {
        Self {
            code,
            name,
            course_id,
            grades: BTreeMap::new(),
        }
    }

    /// The student's unique code
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The assigned course identifier
    #[must_use]
    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// Replace the course assignment
    ///
    /// The new id is not checked against the catalog.
    pub fn set_course(&mut self, course_id: String) {
        self.course_id = course_id;
    }

    /// Insert or overwrite the grade for a subject
    ///
    /// The range check is repeated here even though callers validate, so the
    /// [1.00, 5.00] invariant cannot be bypassed.
    ///
    /// # Errors
    /// Returns `InvalidGrade` when `grade` is outside [1.00, 5.00].
    pub fn record_grade(&mut self, subject: String, grade: f64) -> Result<(), RegistryError> {
        grades::validate_grade(grade)?;
        self.grades.insert(subject, grade);
        Ok(())
    }

    /// Recorded grades as (subject, grade) pairs, ordered by subject name
    pub fn grades(&self) -> impl Iterator<Item = (&str, f64)> {
        self.grades.iter().map(|(subject, grade)| (subject.as_str(), *grade))
    }

    /// Number of recorded grades
    #[must_use]
    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// General weighted average: the equal-weight arithmetic mean of all
    /// recorded grades, or the `UNGRADED` sentinel (0) when none exist.
    ///
    /// Every subject counts equally regardless of credit units; this matches
    /// the original tool's output and is intentional.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return UNGRADED;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.grades.len() as f64;
        self.grades.values().sum::<f64>() / count
    }

    /// Grade band for the current average
    #[must_use]
    pub fn band(&self) -> GradeBand {
        GradeBand::for_grade(self.average())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn juan() -> Student {
        Student::new(
            "24-49051".to_string(),
            "Juan".to_string(),
            "BSIT".to_string(),
        )
    }

    #[test]
    fn test_student_creation() {
        let student = juan();

        assert_eq!(student.code(), "24-49051");
        assert_eq!(student.name, "Juan");
        assert_eq!(student.course_id(), "BSIT");
        assert_eq!(student.grade_count(), 0);
    }

    #[test]
    fn test_ungraded_average_is_sentinel() {
        let student = juan();

        assert!((student.average() - UNGRADED).abs() < f64::EPSILON);
        assert_eq!(student.band(), GradeBand::NotYetGraded);
    }

    #[test]
    fn test_record_grade_and_average() {
        let mut student = juan();

        student.record_grade("CS 131".to_string(), 1.5).unwrap();
        student.record_grade("GEd 109".to_string(), 2.0).unwrap();

        assert!((student.average() - 1.75).abs() < 1e-9);
        assert_eq!(student.band(), GradeBand::VeryGood);
    }

    #[test]
    fn test_record_grade_overwrites_subject() {
        let mut student = juan();

        student.record_grade("CS 131".to_string(), 3.0).unwrap();
        student.record_grade("CS 131".to_string(), 1.25).unwrap();

        assert_eq!(student.grade_count(), 1);
        assert!((student.average() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_record_grade_rejects_out_of_range() {
        let mut student = juan();

        assert!(student.record_grade("CS 131".to_string(), 0.5).is_err());
        assert!(student.record_grade("CS 131".to_string(), 5.5).is_err());

        // Failed inserts must not leave a partial record behind
        assert_eq!(student.grade_count(), 0);
    }

    #[test]
    fn test_grades_ordered_by_subject() {
        let mut student = juan();

        student.record_grade("IT 111".to_string(), 2.0).unwrap();
        student.record_grade("CS 121".to_string(), 1.75).unwrap();
        student.record_grade("GEd 102".to_string(), 1.5).unwrap();

        let subjects: Vec<&str> = student.grades().map(|(s, _)| s).collect();
        assert_eq!(subjects, vec!["CS 121", "GEd 102", "IT 111"]);
    }

    #[test]
    fn test_set_course_allows_unknown_id() {
        let mut student = juan();

        student.set_course("Culinary Arts".to_string());
        assert_eq!(student.course_id(), "Culinary Arts");
    }

    #[test]
    fn test_average_matches_mean() {
        let mut student = juan();
        let grades = [1.0, 1.25, 2.75, 4.0, 3.5];

        for (i, grade) in grades.iter().enumerate() {
            student.record_grade(format!("Subject {i}"), *grade).unwrap();
        }

        let expected: f64 = grades.iter().sum::<f64>() / grades.len() as f64;
        assert!((student.average() - expected).abs() < 1e-9);
    }
}

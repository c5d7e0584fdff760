//! Student manager
//!
//! Owns the student collection and the course catalog, and exposes every
//! operation the CLI shell needs. Students live in a `Vec`, so listing and
//! reporting follow insertion order and deletes keep the survivors' relative
//! order.

use crate::core::error::RegistryError;
use crate::core::grades::GradeBand;
use crate::core::models::{CourseCatalog, Student};

/// One row of the class report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Student code
    pub code: String,
    /// Display name
    pub name: String,
    /// Assigned course identifier
    pub course_id: String,
    /// Computed average (0 sentinel when ungraded)
    pub average: f64,
    /// Band for the average
    pub band: GradeBand,
}

/// One subject row of a student's grade sheet
#[derive(Debug, Clone, PartialEq)]
pub struct GradeEntry {
    /// Subject name
    pub subject: String,
    /// Recorded grade
    pub grade: f64,
    /// Band for the grade
    pub band: GradeBand,
}

/// A single student's grades plus the derived average
#[derive(Debug, Clone, PartialEq)]
pub struct GradeSheet {
    /// Student code
    pub code: String,
    /// Display name
    pub name: String,
    /// Assigned course identifier
    pub course_id: String,
    /// Per-subject rows, ordered by subject name
    pub entries: Vec<GradeEntry>,
    /// Computed average (0 sentinel when ungraded)
    pub average: f64,
    /// Band for the average
    pub band: GradeBand,
}

/// Registry of students and the course catalog they draw subjects from
#[derive(Debug, Clone, Default)]
pub struct StudentManager {
    /// Students in insertion order, unique by code
    students: Vec<Student>,
    /// Catalog supplied at construction
    catalog: CourseCatalog,
}

impl StudentManager {
    /// Create a manager over the given catalog
    #[must_use]
    pub const fn new(catalog: CourseCatalog) -> Self {
        Self {
            students: Vec::new(),
            catalog,
        }
    }

    /// The course catalog
    #[must_use]
    pub const fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// All students, in insertion order
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Number of students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// True when no students are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Look up a student by code
    #[must_use]
    pub fn student(&self, code: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.code() == code)
    }

    fn student_mut(&mut self, code: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.code() == code)
    }

    /// Register a new student with no grades
    ///
    /// The course id is accepted as-is; it does not have to exist in the
    /// catalog.
    ///
    /// # Errors
    /// Returns `DuplicateCode` when a student with `code` already exists. The
    /// existing record is left unchanged.
    pub fn add_student(
        &mut self,
        code: String,
        name: String,
        course_id: String,
    ) -> Result<(), RegistryError> {
        if self.student(&code).is_some() {
            return Err(RegistryError::DuplicateCode(code));
        }
        self.students.push(Student::new(code, name, course_id));
        Ok(())
    }

    /// Permanently remove a student
    ///
    /// # Errors
    /// Returns `NotFound` when no student with `code` exists.
    pub fn delete_student(&mut self, code: &str) -> Result<(), RegistryError> {
        let position = self
            .students
            .iter()
            .position(|s| s.code() == code)
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))?;
        self.students.remove(position);
        Ok(())
    }

    /// Reassign a student's course
    ///
    /// No existence check is made on `new_course_id`, matching the free-text
    /// course behavior of `Student::set_course`.
    ///
    /// # Errors
    /// Returns `NotFound` when no student with `code` exists.
    pub fn update_course(
        &mut self,
        code: &str,
        new_course_id: String,
    ) -> Result<(), RegistryError> {
        let student = self
            .student_mut(code)
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))?;
        student.set_course(new_course_id);
        Ok(())
    }

    /// Record (or overwrite) a grade for one of a student's subjects
    ///
    /// Whether `subject` comes from the course's subject list or is free text
    /// is the shell's concern; the manager accepts any subject name.
    ///
    /// # Errors
    /// Returns `NotFound` when no student with `code` exists, or
    /// `InvalidGrade` when `grade` is outside [1.00, 5.00].
    pub fn record_grade(
        &mut self,
        code: &str,
        subject: String,
        grade: f64,
    ) -> Result<(), RegistryError> {
        let student = self
            .student_mut(code)
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))?;
        student.record_grade(subject, grade)
    }

    /// One report row per student, in insertion order
    #[must_use]
    pub fn report(&self) -> Vec<ReportRow> {
        self.students
            .iter()
            .map(|s| ReportRow {
                code: s.code().to_string(),
                name: s.name.clone(),
                course_id: s.course_id().to_string(),
                average: s.average(),
                band: s.band(),
            })
            .collect()
    }

    /// A single student's grade sheet
    ///
    /// # Errors
    /// Returns `NotFound` when no student with `code` exists.
    pub fn grades_for(&self, code: &str) -> Result<GradeSheet, RegistryError> {
        let student = self
            .student(code)
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))?;

        let entries = student
            .grades()
            .map(|(subject, grade)| GradeEntry {
                subject: subject.to_string(),
                grade,
                band: GradeBand::for_grade(grade),
            })
            .collect();

        Ok(GradeSheet {
            code: student.code().to_string(),
            name: student.name.clone(),
            course_id: student.course_id().to_string(),
            entries,
            average: student.average(),
            band: student.band(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::UNGRADED;

    fn manager() -> StudentManager {
        StudentManager::new(CourseCatalog::with_defaults())
    }

    fn add(m: &mut StudentManager, code: &str, name: &str) {
        m.add_student(code.to_string(), name.to_string(), "BSIT".to_string())
            .unwrap();
    }

    #[test]
    fn test_add_and_list_in_insertion_order() {
        let mut m = manager();
        add(&mut m, "24-49051", "Juan");
        add(&mut m, "24-49052", "Maria");
        add(&mut m, "24-49053", "Pedro");

        let codes: Vec<&str> = m.students().iter().map(Student::code).collect();
        assert_eq!(codes, vec!["24-49051", "24-49052", "24-49053"]);
    }

    #[test]
    fn test_add_duplicate_code_fails_and_preserves_record() {
        let mut m = manager();
        add(&mut m, "24-49051", "Juan");

        let err = m
            .add_student(
                "24-49051".to_string(),
                "Impostor".to_string(),
                "BSCS".to_string(),
            )
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateCode("24-49051".to_string()));

        assert_eq!(m.len(), 1);
        let juan = m.student("24-49051").unwrap();
        assert_eq!(juan.name, "Juan");
        assert_eq!(juan.course_id(), "BSIT");
    }

    #[test]
    fn test_delete_preserves_survivor_order() {
        let mut m = manager();
        add(&mut m, "24-49051", "Juan");
        add(&mut m, "24-49052", "Maria");
        add(&mut m, "24-49053", "Pedro");

        m.delete_student("24-49052").unwrap();

        let codes: Vec<&str> = m.students().iter().map(Student::code).collect();
        assert_eq!(codes, vec!["24-49051", "24-49053"]);
    }

    #[test]
    fn test_delete_missing_code() {
        let mut m = manager();
        add(&mut m, "24-49051", "Juan");

        let err = m.delete_student("99-00000").unwrap_err();
        assert_eq!(err, RegistryError::NotFound("99-00000".to_string()));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_update_course_accepts_unknown_id() {
        let mut m = manager();
        add(&mut m, "24-49051", "Juan");

        m.update_course("24-49051", "Culinary Arts".to_string())
            .unwrap();
        assert_eq!(m.student("24-49051").unwrap().course_id(), "Culinary Arts");

        let err = m
            .update_course("99-00000", "BSIT".to_string())
            .unwrap_err();
        assert_eq!(err, RegistryError::NotFound("99-00000".to_string()));
    }

    #[test]
    fn test_record_grade_error_kinds() {
        let mut m = manager();
        add(&mut m, "24-49051", "Juan");

        let err = m
            .record_grade("24-49051", "CS 131".to_string(), 6.0)
            .unwrap_err();
        assert_eq!(err, RegistryError::InvalidGrade("6.00".to_string()));

        let err = m
            .record_grade("99-00000", "CS 131".to_string(), 2.0)
            .unwrap_err();
        assert_eq!(err, RegistryError::NotFound("99-00000".to_string()));
    }

    #[test]
    fn test_report_rows() {
        let mut m = manager();
        add(&mut m, "24-49051", "Juan");
        add(&mut m, "24-49052", "Maria");
        m.record_grade("24-49051", "CS 131".to_string(), 1.5)
            .unwrap();
        m.record_grade("24-49051", "GEd 109".to_string(), 2.0)
            .unwrap();

        let rows = m.report();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].code, "24-49051");
        assert_eq!(rows[0].name, "Juan");
        assert_eq!(rows[0].course_id, "BSIT");
        assert!((rows[0].average - 1.75).abs() < 1e-9);
        assert_eq!(rows[0].band, GradeBand::VeryGood);

        assert_eq!(rows[1].code, "24-49052");
        assert!((rows[1].average - UNGRADED).abs() < f64::EPSILON);
        assert_eq!(rows[1].band, GradeBand::NotYetGraded);
    }

    #[test]
    fn test_grades_for() {
        let mut m = manager();
        add(&mut m, "24-49051", "Juan");
        m.record_grade("24-49051", "GEd 109".to_string(), 2.0)
            .unwrap();
        m.record_grade("24-49051", "CS 131".to_string(), 1.5)
            .unwrap();

        let sheet = m.grades_for("24-49051").unwrap();
        assert_eq!(sheet.code, "24-49051");
        assert_eq!(sheet.entries.len(), 2);
        // BTreeMap ordering: subjects alphabetical
        assert_eq!(sheet.entries[0].subject, "CS 131");
        assert_eq!(sheet.entries[0].band, GradeBand::VeryGood);
        assert_eq!(sheet.entries[1].subject, "GEd 109");
        assert_eq!(sheet.entries[1].band, GradeBand::Good);
        assert!((sheet.average - 1.75).abs() < 1e-9);
        assert_eq!(sheet.band, GradeBand::VeryGood);

        assert!(m.grades_for("99-00000").is_err());
    }

    #[test]
    fn test_catalog_is_reachable() {
        let m = manager();
        assert!(m.catalog().lookup("BSIT").is_some());
    }
}

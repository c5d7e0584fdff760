//! Grade bands and grade formatting
//!
//! Pure functions over the Philippine 1.00 (highest) to 5.00 (lowest) grading
//! scale. The value `0` is a sentinel meaning "no grades recorded yet" and is
//! never a real grade.

use crate::core::error::RegistryError;

/// Lowest numeric grade value (best mark)
pub const GRADE_MIN: f64 = 1.0;
/// Highest numeric grade value (worst mark)
pub const GRADE_MAX: f64 = 5.0;
/// Sentinel average for a student with no recorded grades
pub const UNGRADED: f64 = 0.0;

/// Descriptive category derived from a numeric grade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    /// Sentinel band for the ungraded average (0)
    NotYetGraded,
    /// Exactly 1.00
    Excellent,
    /// Up to 1.75
    VeryGood,
    /// Up to 2.50
    Good,
    /// Up to 3.00
    Satisfactory,
    /// Up to 4.00
    Passing,
    /// Above 4.00
    Failed,
}

impl GradeBand {
    /// Map a numeric grade (or the ungraded sentinel) to its band.
    ///
    /// Thresholds are inclusive upper bounds checked in ascending order, so a
    /// grade on a boundary falls into the tighter band. Grades are assumed to
    /// be within [1.00, 5.00] by upstream validation; the sentinel and the
    /// 1.00 boundary are exact values, so no epsilon is applied.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn for_grade(grade: f64) -> Self {
        if grade == UNGRADED {
            Self::NotYetGraded
        } else if grade == 1.0 {
            Self::Excellent
        } else if grade <= 1.75 {
            Self::VeryGood
        } else if grade <= 2.5 {
            Self::Good
        } else if grade <= 3.0 {
            Self::Satisfactory
        } else if grade <= 4.0 {
            Self::Passing
        } else {
            Self::Failed
        }
    }

    /// Human-readable label for this band
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotYetGraded => "Not yet graded",
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
            Self::Passing => "Passing",
            Self::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for GradeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Map a numeric grade to its band label
#[must_use]
pub fn describe(grade: f64) -> &'static str {
    GradeBand::for_grade(grade).label()
}

/// Fixed two-decimal rendering of a grade value, locale independent
#[must_use]
pub fn format_grade(grade: f64) -> String {
    format!("{grade:.2}")
}

/// Check that a grade lies within [`GRADE_MIN`, `GRADE_MAX`]
///
/// # Errors
/// Returns `InvalidGrade` for out-of-range or non-finite values.
pub fn validate_grade(grade: f64) -> Result<(), RegistryError> {
    if grade.is_finite() && (GRADE_MIN..=GRADE_MAX).contains(&grade) {
        Ok(())
    } else {
        Err(RegistryError::InvalidGrade(format_grade(grade)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(describe(1.0), "Excellent");
        assert_eq!(describe(1.75), "Very Good");
        assert_eq!(describe(1.76), "Good");
        assert_eq!(describe(2.5), "Good");
        assert_eq!(describe(2.51), "Satisfactory");
        assert_eq!(describe(3.0), "Satisfactory");
        assert_eq!(describe(3.01), "Passing");
        assert_eq!(describe(4.0), "Passing");
        assert_eq!(describe(4.01), "Failed");
        assert_eq!(describe(5.0), "Failed");
    }

    #[test]
    fn test_ungraded_sentinel() {
        assert_eq!(describe(UNGRADED), "Not yet graded");
        assert_eq!(GradeBand::for_grade(UNGRADED), GradeBand::NotYetGraded);
    }

    #[test]
    fn test_band_display_matches_label() {
        assert_eq!(GradeBand::VeryGood.to_string(), "Very Good");
        assert_eq!(GradeBand::NotYetGraded.to_string(), "Not yet graded");
    }

    #[test]
    fn test_format_grade_two_decimals() {
        assert_eq!(format_grade(1.75), "1.75");
        assert_eq!(format_grade(2.0), "2.00");
        assert_eq!(format_grade(1.333), "1.33");
        assert_eq!(format_grade(1.005), "1.00");
    }

    #[test]
    fn test_validate_grade_range() {
        assert!(validate_grade(1.0).is_ok());
        assert!(validate_grade(5.0).is_ok());
        assert!(validate_grade(3.25).is_ok());

        assert!(validate_grade(0.99).is_err());
        assert!(validate_grade(5.01).is_err());
        assert!(validate_grade(0.0).is_err());
        assert!(validate_grade(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_grade_error_carries_value() {
        let err = validate_grade(5.5).unwrap_err();
        assert_eq!(
            err,
            crate::core::error::RegistryError::InvalidGrade("5.50".to_string())
        );
    }
}

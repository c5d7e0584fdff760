//! Registry error types
//!
//! Every error here is recoverable at the CLI boundary: the shell prints the
//! message and re-prompts. No user-input mistake ever aborts the process.

use thiserror::Error;

/// Errors produced by registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A student with the given code already exists
    #[error("a student with code '{0}' already exists")]
    DuplicateCode(String),

    /// No student with the given code exists
    #[error("no student found with code '{0}'")]
    NotFound(String),

    /// Grade outside [1.00, 5.00], or non-numeric input at the boundary.
    /// Carries the offending value as entered/formatted for display.
    #[error("invalid grade '{0}': grades must be between 1.00 and 5.00")]
    InvalidGrade(String),

    /// Menu or subject selection out of range
    #[error("invalid selection '{0}'")]
    InvalidSelection(String),
}

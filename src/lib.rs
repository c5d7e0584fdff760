//! Shared library for `GwaRegistry`
//! Contains the student registry core used by the CLI binary

pub mod core;

pub use self::core::{config, error, get_version, grades, manager, models, report};

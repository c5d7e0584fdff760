//! Core module for the student registry

pub mod config;
pub mod error;
pub mod grades;
pub mod manager;
pub mod models;
pub mod report;

/// Returns the current version of the `GwaRegistry` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

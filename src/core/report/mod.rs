//! Class report generation
//!
//! Renders the class record (one row per student with code, name, course,
//! average, and band) to Markdown or HTML files via embedded templates.

pub mod html;
pub mod markdown;

use crate::core::grades::{self, UNGRADED};
use crate::core::manager::{ReportRow, StudentManager};
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use html::HtmlReporter;
pub use markdown::MarkdownReporter;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown format
    Markdown,
    /// Self-contained HTML format
    Html,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => Err(format!(
                "Unknown report format '{other}' (expected markdown or html)"
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
        };
        write!(f, "{as_str}")
    }
}

/// Data context for report generation
///
/// Borrows the manager so templates render from a single source of truth.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Registry being reported
    pub manager: &'a StudentManager,
    /// Report title
    pub title: &'a str,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(manager: &'a StudentManager, title: &'a str) -> Self {
        Self { manager, title }
    }

    /// Report rows, one per student in insertion order
    #[must_use]
    pub fn rows(&self) -> Vec<ReportRow> {
        self.manager.report()
    }

    /// Number of students in the registry
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.manager.len()
    }

    /// Mean of the averages of graded students, or `None` when nobody has a
    /// grade yet. Ungraded students carry the 0 sentinel and are excluded so
    /// they cannot drag the class average down.
    #[must_use]
    pub fn class_average(&self) -> Option<f64> {
        let graded: Vec<f64> = self
            .manager
            .students()
            .iter()
            .map(super::models::Student::average)
            .filter(|avg| *avg > UNGRADED)
            .collect();

        if graded.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = graded.len() as f64;
        Some(graded.iter().sum::<f64>() / count)
    }

    /// Class average rendered for display ("N/A" when nobody is graded)
    #[must_use]
    pub fn class_average_display(&self) -> String {
        self.class_average()
            .map_or_else(|| "N/A".to_string(), grades::format_grade)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseCatalog;

    #[test]
    fn test_format_parsing() {
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!(
            "Markdown".parse::<ReportFormat>(),
            Ok(ReportFormat::Markdown)
        );
        assert_eq!("HTML".parse::<ReportFormat>(), Ok(ReportFormat::Html));
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Html.extension(), "html");
    }

    #[test]
    fn test_class_average_excludes_ungraded() {
        let mut manager = StudentManager::new(CourseCatalog::with_defaults());
        manager
            .add_student("24-1".to_string(), "A".to_string(), "BSIT".to_string())
            .unwrap();
        manager
            .add_student("24-2".to_string(), "B".to_string(), "BSIT".to_string())
            .unwrap();
        manager
            .record_grade("24-1", "CS 131".to_string(), 2.0)
            .unwrap();

        let ctx = ReportContext::new(&manager, "Test");
        assert_eq!(ctx.student_count(), 2);
        assert!((ctx.class_average().unwrap() - 2.0).abs() < 1e-9);
        assert_eq!(ctx.class_average_display(), "2.00");
    }

    #[test]
    fn test_class_average_empty_registry() {
        let manager = StudentManager::new(CourseCatalog::with_defaults());
        let ctx = ReportContext::new(&manager, "Test");

        assert!(ctx.class_average().is_none());
        assert_eq!(ctx.class_average_display(), "N/A");
    }
}

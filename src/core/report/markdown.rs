//! Markdown report generator
//!
//! Renders the class record as a Markdown table. These reports render well in
//! GitHub, GitLab, and VS Code.

use crate::core::grades;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", ctx.title);
        output = output.replace("{{student_count}}", &ctx.student_count().to_string());
        output = output.replace("{{class_average}}", &ctx.class_average_display());
        output = output.replace("{{report_rows}}", &Self::generate_record_table(ctx));

        output
    }

    /// Generate the per-student class record table
    fn generate_record_table(ctx: &ReportContext) -> String {
        let rows = ctx.rows();
        if rows.is_empty() {
            return "_No students registered._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Code | Name | Course | GWA | Remarks |\n");
        table.push_str("|---|---|---|---|---|\n");

        for row in rows {
            let gwa = if row.band == crate::core::grades::GradeBand::NotYetGraded {
                "-".to_string()
            } else {
                grades::format_grade(row.average)
            };
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} |",
                row.code, row.name, row.course_id, gwa, row.band
            );
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manager::StudentManager;
    use crate::core::models::CourseCatalog;

    fn sample_manager() -> StudentManager {
        let mut manager = StudentManager::new(CourseCatalog::with_defaults());
        manager
            .add_student(
                "24-49051".to_string(),
                "Juan".to_string(),
                "BSIT".to_string(),
            )
            .unwrap();
        manager
            .record_grade("24-49051", "CS 131".to_string(), 1.5)
            .unwrap();
        manager
            .record_grade("24-49051", "GEd 109".to_string(), 2.0)
            .unwrap();
        manager
    }

    #[test]
    fn test_render_contains_row_values() {
        let manager = sample_manager();
        let ctx = ReportContext::new(&manager, "Class Grade Report");

        let rendered = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(rendered.contains("# Class Grade Report"));
        assert!(rendered.contains("| 24-49051 | Juan | BSIT | 1.75 | Very Good |"));
        assert!(rendered.contains("**Students:** 1"));
        assert!(rendered.contains("**Class Average:** 1.75"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_render_empty_registry() {
        let manager = StudentManager::new(CourseCatalog::with_defaults());
        let ctx = ReportContext::new(&manager, "Class Grade Report");

        let rendered = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(rendered.contains("_No students registered._"));
        assert!(rendered.contains("**Class Average:** N/A"));
    }

    #[test]
    fn test_ungraded_student_shows_dash() {
        let mut manager = StudentManager::new(CourseCatalog::with_defaults());
        manager
            .add_student(
                "24-49052".to_string(),
                "Maria".to_string(),
                "BSIT".to_string(),
            )
            .unwrap();
        let ctx = ReportContext::new(&manager, "Class Grade Report");

        let rendered = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(rendered.contains("| 24-49052 | Maria | BSIT | - | Not yet graded |"));
    }
}

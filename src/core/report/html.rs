//! HTML report generator
//!
//! Generates a self-contained class record page with embedded CSS.

use crate::core::grades::{self, GradeBand};
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{title}}", &escape(ctx.title));
        output = output.replace("{{student_count}}", &ctx.student_count().to_string());
        output = output.replace("{{class_average}}", &ctx.class_average_display());
        output = output.replace("{{report_rows}}", &Self::generate_record_rows(ctx));

        output
    }

    /// Generate the `<tr>` rows of the class record table
    fn generate_record_rows(ctx: &ReportContext) -> String {
        let rows = ctx.rows();
        if rows.is_empty() {
            return "    <tr><td colspan=\"5\">No students registered.</td></tr>".to_string();
        }

        let mut html = String::new();
        for row in rows {
            if row.band == GradeBand::NotYetGraded {
                let _ = writeln!(
                    html,
                    "    <tr><td>{}</td><td>{}</td><td>{}</td><td class=\"ungraded\">-</td><td class=\"ungraded\">{}</td></tr>",
                    escape(&row.code),
                    escape(&row.name),
                    escape(&row.course_id),
                    row.band
                );
            } else {
                let _ = writeln!(
                    html,
                    "    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&row.code),
                    escape(&row.name),
                    escape(&row.course_id),
                    grades::format_grade(row.average),
                    row.band
                );
            }
        }

        html
    }
}

/// Minimal HTML escaping for user-supplied names and codes
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

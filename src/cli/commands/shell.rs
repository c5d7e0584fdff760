//! Interactive registry shell
//!
//! Thin adapter between the terminal and the core: each menu choice reads its
//! fields, calls a single `StudentManager` operation, and renders the result.
//! All validation lives in the core, so a failed operation just prints the
//! error message and returns to the menu.

use gwa_registry::config::Config;
use gwa_registry::error::RegistryError;
use gwa_registry::grades::{self, GradeBand};
use gwa_registry::manager::StudentManager;
use gwa_registry::models::{Course, CourseCatalog};
use gwa_registry::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use logger::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

/// Title used for printed and exported class reports
const REPORT_TITLE: &str = "Class Grade Report";

const MENU: &str = "\
########## STUDENT MANAGEMENT ##########
1. Add Student
2. Delete Student
3. Update Student Course
4. Record Grade
5. View Student Grades
6. List Students
7. Class Report
8. Export Class Report
9. Exit";

/// Run the interactive shell until the user chooses to exit
pub fn run(config: &Config) {
    info!("Starting interactive registry session");
    let manager = StudentManager::new(CourseCatalog::with_defaults());
    let mut shell = Shell { manager, config };
    shell.run_loop();
    info!("Registry session ended");
}

struct Shell<'a> {
    manager: StudentManager,
    config: &'a Config,
}

impl Shell<'_> {
    fn run_loop(&mut self) {
        loop {
            println!("\n{MENU}");
            let choice = prompt("Enter your choice: ");

            let result = match choice.as_str() {
                "1" => self.add_student(),
                "2" => self.delete_student(),
                "3" => self.update_course(),
                "4" => self.record_grade(),
                "5" => self.view_grades(),
                "6" => {
                    self.list_students();
                    Ok(())
                }
                "7" => {
                    self.print_report();
                    Ok(())
                }
                "8" => self.export_report(),
                "9" => {
                    println!("Exiting the system...");
                    break;
                }
                other => Err(RegistryError::InvalidSelection(other.to_string()).to_string()),
            };

            // Recoverable by design: report and return to the menu
            if let Err(err) = result {
                eprintln!("✗ {err}");
            }
        }
    }

    fn add_student(&mut self) -> Result<(), String> {
        let code = prompt("Enter Student Code: ");
        let name = prompt("Enter Student Name: ");

        let default_course = &self.config.registry.default_course;
        let course = if default_course.is_empty() {
            prompt("Enter Course: ")
        } else {
            let entered = prompt(&format!("Enter Course [{default_course}]: "));
            if entered.is_empty() {
                default_course.clone()
            } else {
                entered
            }
        };

        self.manager
            .add_student(code.clone(), name, course)
            .map_err(|e| e.to_string())?;
        info!("Student added: {code}");
        println!("✓ Student added: {code}");
        Ok(())
    }

    fn delete_student(&mut self) -> Result<(), String> {
        let code = prompt("Enter Student Code: ");
        self.manager
            .delete_student(&code)
            .map_err(|e| e.to_string())?;
        info!("Student deleted: {code}");
        println!("✓ Student deleted: {code}");
        Ok(())
    }

    fn update_course(&mut self) -> Result<(), String> {
        let code = prompt("Enter Student Code: ");
        let course = prompt("Enter New Course: ");
        self.manager
            .update_course(&code, course.clone())
            .map_err(|e| e.to_string())?;
        println!("✓ Course updated to {course} for {code}");
        Ok(())
    }

    fn record_grade(&mut self) -> Result<(), String> {
        let code = prompt("Enter Student Code: ");
        let student = self
            .manager
            .student(&code)
            .ok_or_else(|| RegistryError::NotFound(code.clone()).to_string())?;

        // Suggest the subject list of the student's course when the catalog
        // knows it; otherwise fall back to free text.
        let course = self.manager.catalog().lookup(student.course_id());
        let subject = choose_subject(course).map_err(|e| e.to_string())?;

        let raw_grade = prompt(&format!("Enter Grade for {subject} (1.00-5.00): "));
        let grade: f64 = raw_grade
            .parse()
            .map_err(|_| RegistryError::InvalidGrade(raw_grade.clone()).to_string())?;

        self.manager
            .record_grade(&code, subject.clone(), grade)
            .map_err(|e| e.to_string())?;
        debug!("Recorded {subject} = {grade} for {code}");
        println!(
            "✓ Grade recorded: {subject} = {} ({})",
            grades::format_grade(grade),
            grades::describe(grade)
        );
        Ok(())
    }

    fn view_grades(&self) -> Result<(), String> {
        let code = prompt("Enter Student Code: ");
        let sheet = self.manager.grades_for(&code).map_err(|e| e.to_string())?;

        println!("\nGrades for {} ({}) - {}", sheet.name, sheet.code, sheet.course_id);
        if sheet.entries.is_empty() {
            println!("  (no grades recorded)");
        }
        for entry in &sheet.entries {
            println!(
                "  {:<12} {}  {}",
                entry.subject,
                grades::format_grade(entry.grade),
                entry.band
            );
        }
        let average = if sheet.band == GradeBand::NotYetGraded {
            "-".to_string()
        } else {
            grades::format_grade(sheet.average)
        };
        println!("  {:<12} {average}  {}", "GWA", sheet.band);
        Ok(())
    }

    fn list_students(&self) {
        if self.manager.is_empty() {
            println!("No students registered.");
            return;
        }
        for student in self.manager.students() {
            println!(
                "Code: {}, Name: {}, Course: {}",
                student.code(),
                student.name,
                student.course_id()
            );
        }
    }

    fn print_report(&self) {
        println!("\n=== {REPORT_TITLE} ===");
        let rows = self.manager.report();
        if rows.is_empty() {
            println!("No students registered.");
            return;
        }

        println!(
            "{:<10} {:<20} {:<10} {:>6}  Remarks",
            "Code", "Name", "Course", "GWA"
        );
        for row in rows {
            let gwa = if row.band == GradeBand::NotYetGraded {
                "-".to_string()
            } else {
                grades::format_grade(row.average)
            };
            println!(
                "{:<10} {:<20} {:<10} {:>6}  {}",
                row.code, row.name, row.course_id, gwa, row.band
            );
        }
    }

    fn export_report(&self) -> Result<(), String> {
        let raw_format = prompt("Report format (markdown/html): ");
        let format: ReportFormat = raw_format.parse()?;

        let reports_dir = PathBuf::from(&self.config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let output_path = reports_dir.join(format!("class_report.{}", format.extension()));
        let ctx = ReportContext::new(&self.manager, REPORT_TITLE);
        let reporter: Box<dyn ReportGenerator> = match format {
            ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
            ReportFormat::Html => Box::new(HtmlReporter::new()),
        };

        reporter
            .generate(&ctx, &output_path)
            .map_err(|e| format!("Failed to write report to {}: {e}", output_path.display()))?;

        info!("Report exported to: {}", output_path.display());
        println!("✓ Report exported to: {}", output_path.display());
        Ok(())
    }
}

/// Offer the course's subject list as a numbered menu, with `0` (or no known
/// course) falling back to free text
fn choose_subject(course: Option<&Course>) -> Result<String, RegistryError> {
    let Some(course) = course else {
        return Ok(prompt("Enter Subject: "));
    };

    println!("Subjects for {}:", course.id);
    for (index, subject) in course.subjects.iter().enumerate() {
        println!("  {}. {subject}", index + 1);
    }
    println!("  0. Enter a different subject");

    let raw = prompt("Select subject: ");
    let index: usize = raw
        .parse()
        .map_err(|_| RegistryError::InvalidSelection(raw.clone()))?;

    if index == 0 {
        return Ok(prompt("Enter Subject: "));
    }
    course
        .subjects
        .get(index - 1)
        .cloned()
        .ok_or(RegistryError::InvalidSelection(raw))
}

/// Print a prompt and read one trimmed line from stdin
fn prompt(label: &str) -> String {
    print!("{label}");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
    line.trim().to_string()
}

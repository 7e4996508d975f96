//! Markdown report generator
//!
//! Renders the semester and cumulative figures as Markdown tables. These
//! reports render well in GitHub, GitLab, and VS Code.

use crate::core::gpa::aggregate_semester;
use crate::core::models::SEMESTER_COUNT;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

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

        output = output.replace("{{cumulative}}", &format!("{:.2}", ctx.summary.cumulative));
        output = output.replace(
            "{{completed_semesters}}",
            &ctx.summary.completed_semesters.to_string(),
        );
        output = output.replace("{{semester_count}}", &SEMESTER_COUNT.to_string());
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.1}", ctx.summary.total_credits),
        );
        output = output.replace("{{module_count}}", &ctx.module_count().to_string());

        let overview_table = Self::generate_overview_table(ctx);
        output = output.replace("{{semester_overview}}", &overview_table);

        let detail_tables = Self::generate_detail_tables(ctx);
        output = output.replace("{{module_detail}}", &detail_tables);

        output
    }

    /// Generate the semester-by-semester overview table
    fn generate_overview_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Semester | SGPA | Credits | Modules |\n");
        table.push_str("|---|---|---|---|\n");

        for ((number, modules), summary) in ctx.program.iter().zip(ctx.semesters) {
            let counted = modules.iter().filter(|m| m.is_complete()).count();
            let _ = writeln!(
                table,
                "| {number} | {:.2} | {:.1} | {counted} |",
                summary.average, summary.total_credits
            );
        }

        table
    }

    /// Generate one module table per semester that has data
    fn generate_detail_tables(ctx: &ReportContext) -> String {
        let mut tables = String::new();

        for (number, modules) in ctx.program.iter() {
            let rows: Vec<_> = modules.iter().filter(|m| !m.is_blank()).collect();
            if rows.is_empty() {
                continue;
            }

            let summary = aggregate_semester(modules);
            let _ = writeln!(tables, "### Semester {number} (SGPA {:.2})\n", summary.average);
            tables.push_str("| Module | Code | Credit | Grade | Credit Point |\n");
            tables.push_str("|---|---|---|---|---|\n");

            for record in rows {
                let _ = writeln!(
                    tables,
                    "| {} | {} | {} | {} | {:.2} |",
                    record.module_name,
                    record.module_code,
                    record.credit(),
                    record.grade(),
                    record.credit_point()
                );
            }
            tables.push('\n');
        }

        if tables.is_empty() {
            tables.push_str("No modules entered yet.\n");
        }

        tables
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
    use crate::core::gpa::{aggregate_program, aggregate_semester};
    use crate::core::models::{Grade, ModuleRecord, Program};

    fn report_for(program: &Program) -> String {
        let semesters: Vec<_> = program
            .iter()
            .map(|(_, modules)| aggregate_semester(modules))
            .collect();
        let summary = aggregate_program(program);
        let ctx = ReportContext::new(program, &semesters, &summary);
        MarkdownReporter::new().render(&ctx).expect("render")
    }

    #[test]
    fn report_includes_cumulative_and_semester_rows() {
        let mut program = Program::new();
        program
            .add_module(
                1,
                ModuleRecord::new(
                    "Calculus I".to_string(),
                    "MATH1341".to_string(),
                    4.0,
                    Grade::A.into(),
                ),
            )
            .expect("add");

        let report = report_for(&program);

        assert!(report.contains("# GPA Report"));
        assert!(report.contains("**4.00**"), "CGPA should render to 2dp");
        assert!(report.contains("| 1 | 4.00 | 4.0 | 1 |"));
        assert!(report.contains("### Semester 1 (SGPA 4.00)"));
        assert!(report.contains("| Calculus I | MATH1341 | 4 | A | 16.00 |"));
    }

    #[test]
    fn empty_program_renders_placeholder() {
        let report = report_for(&Program::new());
        assert!(report.contains("No modules entered yet."));
        assert!(report.contains("**0.00**"));
    }
}

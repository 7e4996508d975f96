//! Plain text report generator
//!
//! Renders the same figures as the Markdown report in a terminal-friendly
//! layout with no markup.

use crate::core::models::SEMESTER_COUNT;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Plain text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::unused_self)]
    fn render_text(&self, ctx: &ReportContext) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "=== GPA Report ===\n");
        let _ = writeln!(
            output,
            "Cumulative GPA (CGPA): {:.2}",
            ctx.summary.cumulative
        );
        let _ = writeln!(
            output,
            "Completed Semesters: {} of {SEMESTER_COUNT}",
            ctx.summary.completed_semesters
        );
        let _ = writeln!(output, "Total Credits: {:.1}", ctx.summary.total_credits);
        let _ = writeln!(output, "Modules Entered: {}\n", ctx.module_count());

        for ((number, modules), summary) in ctx.program.iter().zip(ctx.semesters) {
            let _ = writeln!(
                output,
                "Semester {number}: SGPA {:.2} over {:.1} credits",
                summary.average, summary.total_credits
            );

            for record in modules.iter().filter(|m| !m.is_blank()) {
                let _ = writeln!(
                    output,
                    "  {} ({}) - {} credits, grade {}, {:.2} points",
                    record.module_name,
                    record.module_code,
                    record.credit(),
                    record.grade(),
                    record.credit_point()
                );
            }
        }

        output
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_text(ctx))
    }
}

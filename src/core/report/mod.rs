//! Report generation for the program dataset
//!
//! Renders a summary of per-semester and cumulative figures in Markdown or
//! plain text, suitable for saving alongside an exported CSV.

pub mod formats;

use crate::core::gpa::{ProgramSummary, SemesterSummary};
use crate::core::models::Program;
use std::error::Error;
use std::path::Path;

pub use formats::{MarkdownReporter, ReportFormat, TextReporter};

/// Data context for report generation
///
/// Aggregates everything needed to render a report, providing a single
/// source of truth for the format implementations.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// The full dataset being reported
    pub program: &'a Program,
    /// Per-semester summaries in fixed 1..8 order
    pub semesters: &'a [SemesterSummary],
    /// Cumulative summary across the program
    pub summary: &'a ProgramSummary,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        program: &'a Program,
        semesters: &'a [SemesterSummary],
        summary: &'a ProgramSummary,
    ) -> Self {
        Self {
            program,
            semesters,
            summary,
        }
    }

    /// Count of module records that carry data (non-blank rows)
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.program
            .iter()
            .map(|(_, modules)| modules.iter().filter(|m| !m.is_blank()).count())
            .sum()
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

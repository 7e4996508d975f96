//! Report command handler
//!
//! Renders the per-semester and cumulative figures through the report
//! generators (Markdown or plain text).

use crate::commands::{load_or_init, open_store};
use gradepoint::config::Config;
use gradepoint::core::gpa::{aggregate_program, aggregate_semester};
use gradepoint::core::report::{
    MarkdownReporter, ReportContext, ReportFormat, ReportGenerator, TextReporter,
};
use gradepoint::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `output` - Optional output path; defaults to the exports directory
/// * `format_str` - Report format (markdown, text)
/// * `config` - Configuration locating the dataset and exports directory
pub fn run(output: Option<&Path>, format_str: &str, config: &Config) {
    if let Err(err) = generate_report(output, format_str, config) {
        error!("Report generation failed: {err}");
        eprintln!("{err}");
    }
}

fn generate_report(
    output: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e} (expected markdown or text)"))?;

    let store = open_store(config);
    let program = load_or_init(&store);

    let semesters: Vec<_> = program
        .iter()
        .map(|(_, modules)| aggregate_semester(modules))
        .collect();
    let summary = aggregate_program(&program);
    let ctx = ReportContext::new(&program, &semesters, &summary);

    let output_path = output.map_or_else(
        || {
            PathBuf::from(&config.paths.exports_dir)
                .join(format!("gpa-report.{}", format.extension()))
        },
        Path::to_path_buf,
    );

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!(
                "✗ Failed to create output directory {}: {e}",
                parent.display()
            )
        })?;
    }

    let generator: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Text => Box::new(TextReporter::new()),
    };

    generator
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to generate report: {e}"))?;

    info!("Report generated: {}", output_path.display());
    println!("✓ Report generated: {}", output_path.display());
    Ok(())
}

//! Import command handler

use crate::commands::{confirm, load_or_init, open_store, persist};
use gradepoint::config::Config;
use gradepoint::core::codec;
use gradepoint::{error, info};
use std::path::Path;

/// Run the import command.
///
/// Non-`.csv` filenames are rejected before the file is read. A file that
/// yields no module data is reported as a parse failure and leaves the
/// saved dataset untouched. Importing over existing non-empty data asks for
/// confirmation first; declining discards the pending import with no
/// effect.
pub fn run(input: &Path, config: &Config) {
    let is_csv = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        eprintln!("✗ Import requires a .csv file: {}", input.display());
        return;
    }

    let text = match std::fs::read_to_string(input) {
        Ok(text) => text,
        Err(err) => {
            error!("Import read failed for {}: {err}", input.display());
            eprintln!("✗ Failed to read {}: {err}", input.display());
            return;
        }
    };

    let imported = codec::decode(&text);
    if imported.is_empty() {
        eprintln!(
            "✗ Could not read any module data from {}. The existing data is unchanged.",
            input.display()
        );
        return;
    }

    let store = open_store(config);
    let existing = load_or_init(&store);
    if !existing.is_empty()
        && !confirm("Importing will replace your existing data. Continue?")
    {
        println!("✗ Import cancelled");
        return;
    }

    if persist(&store, &imported) {
        let modules: usize = imported
            .iter()
            .map(|(_, records)| records.iter().filter(|r| !r.is_blank()).count())
            .sum();
        info!("Imported {modules} modules from {}", input.display());
        println!(
            "✓ Imported {modules} modules from {}",
            input.display()
        );
    }
}

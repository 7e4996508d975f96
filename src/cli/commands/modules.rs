//! Module record command handlers (add, edit, remove)

use crate::commands::{load_or_init, open_store, persist};
use gradepoint::config::Config;
use gradepoint::core::models::{Grade, GradeEntry, ModuleRecord};
use gradepoint::info;

/// Parse a grade flag value into an entry, rejecting unknown symbols.
///
/// The CLI is the one boundary where free-form grade input enters the
/// system, so unknown symbols are refused here rather than stored. An empty
/// value clears the grade.
fn parse_grade(value: &str) -> Result<GradeEntry, String> {
    if value.is_empty() {
        return Ok(GradeEntry::Unset);
    }

    value.parse::<Grade>().map(GradeEntry::Known).map_err(|_| {
        let symbols: Vec<&str> = Grade::ALL.iter().map(|g| g.symbol()).collect();
        format!(
            "Unknown grade symbol '{value}'. Valid grades: {}",
            symbols.join(", ")
        )
    })
}

/// Run the add command: append a module record to a semester.
///
/// # Arguments
/// * `semester` - Semester number, 1-based
/// * `name` - Module name (may be empty for a row filled in later)
/// * `code` - Module code (may be empty)
/// * `credit` - Credit-hours weight
/// * `grade` - Optional grade symbol
/// * `config` - Configuration locating the dataset
pub fn run_add(
    semester: usize,
    name: &str,
    code: &str,
    credit: f64,
    grade: Option<&str>,
    config: &Config,
) {
    let grade_entry = match grade.map_or(Ok(GradeEntry::Unset), parse_grade) {
        Ok(entry) => entry,
        Err(err) => {
            eprintln!("✗ {err}");
            return;
        }
    };

    let store = open_store(config);
    let mut program = load_or_init(&store);

    let record = ModuleRecord::new(name.to_string(), code.to_string(), credit, grade_entry);
    if let Err(err) = program.add_module(semester, record) {
        eprintln!("✗ {err}");
        return;
    }

    if persist(&store, &program) {
        info!("Added module to semester {semester}");
        println!("✓ Added module to semester {semester}");
    }
}

/// Run the edit command: update fields of one module record in place.
///
/// Only the provided fields change; the credit point is recomputed by the
/// record's setters whenever credit or grade changes.
pub fn run_edit(
    semester: usize,
    row: usize,
    name: Option<&str>,
    code: Option<&str>,
    credit: Option<f64>,
    grade: Option<&str>,
    config: &Config,
) {
    // Validate the grade before touching the dataset.
    let grade_entry = match grade.map(parse_grade).transpose() {
        Ok(entry) => entry,
        Err(err) => {
            eprintln!("✗ {err}");
            return;
        }
    };

    let store = open_store(config);
    let mut program = load_or_init(&store);

    let Some(record) = program.module_mut(semester, row) else {
        eprintln!("✗ No module at semester {semester} row {row}");
        return;
    };

    if let Some(name) = name {
        record.module_name = name.to_string();
    }
    if let Some(code) = code {
        record.module_code = code.to_string();
    }
    if let Some(credit) = credit {
        record.set_credit(credit);
    }
    if let Some(entry) = grade_entry {
        record.set_grade(entry);
    }

    if persist(&store, &program) {
        info!("Updated semester {semester} row {row}");
        println!("✓ Updated semester {semester} row {row}");
    }
}

/// Run the remove command: delete one module record.
pub fn run_remove(semester: usize, row: usize, config: &Config) {
    let store = open_store(config);
    let mut program = load_or_init(&store);

    if let Err(err) = program.remove_module(semester, row) {
        eprintln!("✗ {err}");
        return;
    }

    if persist(&store, &program) {
        info!("Removed semester {semester} row {row}");
        println!("✓ Removed module at semester {semester} row {row}");
    }
}

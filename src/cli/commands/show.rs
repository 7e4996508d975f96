//! Show command handler
//!
//! Prints one semester's module table with its SGPA, or all semesters plus
//! the cumulative figures. Averages display rounded to two decimal places;
//! stored values keep full precision.

use crate::commands::{load_or_init, open_store};
use gradepoint::config::Config;
use gradepoint::core::gpa::{aggregate_program, aggregate_semester};
use gradepoint::core::models::{ModuleRecord, Program, SEMESTER_COUNT};

/// Run the show command.
///
/// # Arguments
/// * `semester` - Optional 1-based semester number; all semesters when `None`
/// * `config` - Configuration locating the dataset
pub fn run(semester: Option<usize>, config: &Config) {
    let store = open_store(config);
    let program = load_or_init(&store);

    match semester {
        Some(number) => {
            let Some(modules) = program.semester(number) else {
                eprintln!("✗ Semester {number} is out of range (1-{SEMESTER_COUNT})");
                return;
            };
            print_semester(number, modules);
        }
        None => {
            for (number, modules) in program.iter() {
                print_semester(number, modules);
            }
            print_cumulative(&program);
        }
    }
}

fn print_semester(number: usize, modules: &[ModuleRecord]) {
    let summary = aggregate_semester(modules);

    println!("\n=== Semester {number} ===");
    println!(
        "{:<4} {:<28} {:<12} {:>6} {:>6} {:>13}",
        "Row", "Module Name", "Module Code", "Credit", "Grade", "Credit Point"
    );

    for (row, record) in modules.iter().enumerate() {
        println!(
            "{row:<4} {:<28} {:<12} {:>6} {:>6} {:>13.2}",
            record.module_name,
            record.module_code,
            record.credit(),
            record.grade().to_string(),
            record.credit_point()
        );
    }

    println!(
        "SGPA: {:.2} ({:.1} credits)",
        summary.average, summary.total_credits
    );
}

fn print_cumulative(program: &Program) {
    let summary = aggregate_program(program);

    println!("\n=== Cumulative ===");
    println!("CGPA: {:.2}", summary.cumulative);
    println!(
        "Completed Semesters: {} of {SEMESTER_COUNT}",
        summary.completed_semesters
    );
    println!("Total Credits: {:.1}", summary.total_credits);
}

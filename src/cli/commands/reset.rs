//! Reset command handler

use crate::commands::{confirm, load_or_init, open_store, persist};
use gradepoint::config::Config;
use gradepoint::core::store::ProgramStore;
use gradepoint::{error, info};

/// Run the reset command.
///
/// With a semester number, only that semester goes back to a single blank
/// row. Without one, the whole dataset is cleared after confirmation: the
/// persisted file is removed so the next load starts from the initial
/// state.
pub fn run(semester: Option<usize>, config: &Config) {
    let store = open_store(config);

    match semester {
        Some(number) => {
            let mut program = load_or_init(&store);
            if let Err(err) = program.reset_semester(number) {
                eprintln!("✗ {err}");
                return;
            }
            if persist(&store, &program) {
                info!("Reset semester {number}");
                println!("✓ Semester {number} reset");
            }
        }
        None => {
            if !confirm("Are you sure you want to reset all semesters?") {
                println!("✗ Reset cancelled");
                return;
            }

            if let Err(err) = store.clear() {
                error!("Failed to clear dataset: {err}");
                eprintln!("✗ Failed to clear data: {err}");
                return;
            }
            info!("Cleared all semester data");
            println!("✓ All semesters reset");
        }
    }
}

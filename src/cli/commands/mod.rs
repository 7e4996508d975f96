//! Command handlers for the `gradepoint` CLI

pub mod config;
pub mod export;
pub mod import;
pub mod modules;
pub mod report;
pub mod reset;
pub mod show;

use gradepoint::config::Config;
use gradepoint::core::models::Program;
use gradepoint::core::store::{JsonFileStore, ProgramStore};
use gradepoint::error;
use std::io::{self, Write};
use std::path::PathBuf;

/// Open the file store configured for the dataset.
pub fn open_store(config: &Config) -> JsonFileStore {
    JsonFileStore::new(PathBuf::from(&config.paths.data_file))
}

/// Load the saved program, falling back to the initial empty state.
///
/// Absent and corrupted datasets both come back as the initial state; a
/// hard storage failure is logged and also falls back, so a command never
/// dies on load.
pub fn load_or_init(store: &impl ProgramStore) -> Program {
    match store.load() {
        Ok(Some(program)) => program,
        Ok(None) => Program::new(),
        Err(err) => {
            error!("Failed to load dataset: {err}");
            Program::new()
        }
    }
}

/// Persist the program, reporting a failure to the user.
///
/// # Returns
/// `true` when the save succeeded
pub fn persist(store: &impl ProgramStore, program: &Program) -> bool {
    match store.save(program) {
        Ok(()) => true,
        Err(err) => {
            error!("Failed to save dataset: {err}");
            eprintln!("✗ Failed to save data: {err}");
            false
        }
    }
}

/// Ask the user a yes/no question on stdin.
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes")
}

//! Command-line interface entry point for `gradepoint`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gradepoint::config::Config;
use gradepoint::info;
use gradepoint::logger::{
    enable_debug, enable_verbose, init_file_logging, set_level, Level,
};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Handle subcommands
    match args.command {
        Command::Show { semester } => {
            commands::show::run(semester, &config);
        }
        Command::Add {
            semester,
            name,
            code,
            credit,
            grade,
        } => {
            commands::modules::run_add(semester, &name, &code, credit, grade.as_deref(), &config);
        }
        Command::Edit {
            semester,
            row,
            name,
            code,
            credit,
            grade,
        } => {
            commands::modules::run_edit(
                semester,
                row,
                name.as_deref(),
                code.as_deref(),
                credit,
                grade.as_deref(),
                &config,
            );
        }
        Command::Remove { semester, row } => {
            commands::modules::run_remove(semester, row, &config);
        }
        Command::Reset { semester } => {
            commands::reset::run(semester, &config);
        }
        Command::Export { output } => {
            commands::export::run(output.as_deref(), &config);
        }
        Command::Import { input } => {
            commands::import::run(&input, &config);
        }
        Command::Report { output, format } => {
            commands::report::run(output.as_deref(), &format, &config);
        }
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}

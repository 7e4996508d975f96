//! Export command handler

use crate::commands::{load_or_init, open_store};
use gradepoint::config::Config;
use gradepoint::core::codec;
use gradepoint::{error, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default export file name when no path is given.
const DEFAULT_EXPORT_NAME: &str = "gradepoint-data.csv";

/// Run the export command.
///
/// Refuses to run when there is no data, before any file I/O. The output
/// path gets a `.csv` suffix appended when missing; without an explicit
/// path the file lands in the configured exports directory.
pub fn run(output: Option<&Path>, config: &Config) {
    let store = open_store(config);
    let program = load_or_init(&store);

    if program.is_empty() {
        eprintln!("✗ No data to export. Add some modules first.");
        return;
    }

    let path = resolve_output_path(output, config);
    if let Some(parent) = path.parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            eprintln!("✗ Failed to create output directory {}: {err}", parent.display());
            return;
        }
    }

    let text = codec::encode(&program);
    match std::fs::write(&path, text) {
        Ok(()) => {
            info!("Exported data to: {}", path.display());
            println!("✓ Exported data to: {}", path.display());
        }
        Err(err) => {
            error!("Export failed for {}: {err}", path.display());
            eprintln!("✗ Failed to write {}: {err}", path.display());
        }
    }
}

/// Pick the output path and enforce the `.csv` suffix.
fn resolve_output_path(output: Option<&Path>, config: &Config) -> PathBuf {
    let mut path = output.map_or_else(
        || PathBuf::from(&config.paths.exports_dir).join(DEFAULT_EXPORT_NAME),
        Path::to_path_buf,
    );

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        let mut name = path
            .file_name()
            .map_or_else(|| OsString::from("export"), std::ffi::OsStr::to_os_string);
        name.push(".csv");
        path.set_file_name(name);
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_exports_dir(dir: &str) -> Config {
        let mut config = Config::from_defaults();
        config.set("exports_dir", dir).expect("set");
        config
    }

    #[test]
    fn appends_csv_suffix_when_missing() {
        let config = config_with_exports_dir("/tmp");
        let path = resolve_output_path(Some(Path::new("/out/grades")), &config);
        assert_eq!(path, PathBuf::from("/out/grades.csv"));

        let path = resolve_output_path(Some(Path::new("/out/grades.txt")), &config);
        assert_eq!(path, PathBuf::from("/out/grades.txt.csv"));
    }

    #[test]
    fn keeps_existing_csv_suffix() {
        let config = config_with_exports_dir("/tmp");
        let path = resolve_output_path(Some(Path::new("/out/grades.csv")), &config);
        assert_eq!(path, PathBuf::from("/out/grades.csv"));

        let path = resolve_output_path(Some(Path::new("/out/grades.CSV")), &config);
        assert_eq!(path, PathBuf::from("/out/grades.CSV"));
    }

    #[test]
    fn defaults_to_exports_dir() {
        let config = config_with_exports_dir("/exports");
        let path = resolve_output_path(None, &config);
        assert_eq!(path, PathBuf::from("/exports/gradepoint-data.csv"));
    }
}

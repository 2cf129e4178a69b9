//! Shared helper functions for CLI commands

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::cli::GlobalOpts;
use crate::core::store::DATA_FILE;

/// Resolve the data file location: explicit flag/env first, then the
/// per-user data directory, then the working directory as a last resort.
pub fn data_file_path(global: &GlobalOpts) -> PathBuf {
    if let Some(path) = &global.data_file {
        return path.clone();
    }
    match ProjectDirs::from("", "", "lotscan") {
        Some(dirs) => dirs.data_dir().join(DATA_FILE),
        None => PathBuf::from(DATA_FILE),
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

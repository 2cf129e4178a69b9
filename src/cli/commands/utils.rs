//! Shared utilities for CLI commands

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::data_file_path;
use crate::cli::GlobalOpts;
use crate::core::store::RecordStore;

/// Open the store for resolution, preserving the start-empty-on-failure
/// behavior but warning the operator so prior data is not silently lost.
pub fn open_store_lenient(global: &GlobalOpts) -> RecordStore {
    let (store, warning) = RecordStore::open_or_empty(data_file_path(global));
    if let Some(err) = warning {
        eprintln!(
            "{} {} (starting with an empty table)",
            style("warning:").yellow().bold(),
            err
        );
    }
    store
}

/// Open the store for maintenance; unreadable data is a hard error here
/// so an edit cannot clobber a table the operator could not see.
pub fn open_store_strict(global: &GlobalOpts) -> Result<RecordStore> {
    RecordStore::open(data_file_path(global)).into_diagnostic()
}

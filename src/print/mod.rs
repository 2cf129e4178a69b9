//! Print dispatch seam
//!
//! Rendering produces text; getting that text onto paper belongs to a
//! collaborator behind [`PrintDispatcher`]. The shipped implementation
//! only spools to a file - OS print submission (lp/lpr and friends) stays
//! outside this crate.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::render::Template;

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("failed to spool label to {path}: {source}")]
    Spool {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Accepts rendered label text for delivery to a printer
pub trait PrintDispatcher {
    /// Hand off rendered text; returns the spooled artifact path
    fn dispatch(&self, text: &str, template: Template) -> Result<PathBuf, PrintError>;
}

/// Writes labels as `lot_scan_<stamp>.txt` files into a spool directory
#[derive(Debug)]
pub struct SpoolDispatcher {
    dir: PathBuf,
    stamp: String,
}

impl SpoolDispatcher {
    /// `stamp` is a `YYYYmmdd_HHMMSS` string; callers derive it from their
    /// timestamp source so spooling stays deterministic under test.
    pub fn new(dir: impl Into<PathBuf>, stamp: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stamp: stamp.into(),
        }
    }

    pub fn spool_path(&self) -> PathBuf {
        self.dir.join(format!("lot_scan_{}.txt", self.stamp))
    }
}

impl PrintDispatcher for SpoolDispatcher {
    fn dispatch(&self, text: &str, _template: Template) -> Result<PathBuf, PrintError> {
        let path = self.spool_path();
        write_spool(&path, text)?;
        Ok(path)
    }
}

fn write_spool(path: &Path, text: &str) -> Result<(), PrintError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| PrintError::Spool {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, text).map_err(|source| PrintError::Spool {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_spool_writes_label_file() {
        let tmp = TempDir::new().unwrap();
        let dispatcher = SpoolDispatcher::new(tmp.path(), "20250805_145825");
        let path = dispatcher
            .dispatch("D3022A|B\nQSTZ8B2206\n05Aug25|14:58", Template::CompactLabel)
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "lot_scan_20250805_145825.txt");
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "D3022A|B\nQSTZ8B2206\n05Aug25|14:58"
        );
    }

    #[test]
    fn test_spool_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let dispatcher = SpoolDispatcher::new(tmp.path().join("spool"), "20250805_145825");
        let path = dispatcher.dispatch("text", Template::Standard).unwrap();
        assert!(path.exists());
    }
}

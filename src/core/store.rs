//! Persisted record store
//!
//! An unordered mapping of serialized composite keys to part records,
//! kept in a single JSON file. The whole mapping is rewritten on every
//! mutation; there is no incremental diff and no cross-process locking,
//! so callers must serialize their own access within a session.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::key::CompositeKey;
use crate::core::record::PartRecord;

/// Default data file name within the data directory
pub const DATA_FILE: &str = "part_data.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key already registered: {0}")]
    KeyExists(CompositeKey),

    #[error("no record for key: {0}")]
    NotFound(CompositeKey),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// In-memory mapping backed by a single persisted JSON object
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: HashMap<String, PartRecord>,
}

impl RecordStore {
    /// Open the store at `path`, failing loudly on unreadable content.
    ///
    /// A missing file is a normal first run and yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.clone(),
                    source,
                })
            }
        };
        Ok(Self { path, records })
    }

    /// Open the store, absorbing any read or parse failure into an empty
    /// store. The swallowed error is handed back so the caller can emit a
    /// diagnostic instead of silently losing sight of prior data.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> (Self, Option<StoreError>) {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => (store, None),
            Err(err) => (
                Self {
                    path,
                    records: HashMap::new(),
                },
                Some(err),
            ),
        }
    }

    /// Create an empty store that will persist to `path`
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: HashMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the entire persisted mapping. Write failures are hard
    /// errors surfaced to the caller, never swallowed.
    pub fn save(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.records)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Storage primitive: unconditional upsert, then save.
    ///
    /// Duplicate rejection belongs to the maintenance workflow
    /// ([`crate::core::maintenance::add_record`]), not here.
    pub fn put(&mut self, key: &CompositeKey, record: PartRecord) -> Result<(), StoreError> {
        self.records.insert(key.storage_key(), record);
        self.save()
    }

    /// Update an existing record. Only a non-empty `description`
    /// overwrites the stored one.
    pub fn update(
        &mut self,
        key: &CompositeKey,
        part: &str,
        revision: &str,
        description: Option<&str>,
    ) -> Result<(), StoreError> {
        let record = self
            .records
            .get_mut(&key.storage_key())
            .ok_or_else(|| StoreError::NotFound(key.clone()))?;
        record.part = part.to_string();
        record.revision = revision.to_string();
        if let Some(desc) = description {
            if !desc.is_empty() {
                record.description = desc.to_string();
            }
        }
        self.save()
    }

    pub fn remove(&mut self, key: &CompositeKey) -> Result<(), StoreError> {
        if self.records.remove(&key.storage_key()).is_none() {
            return Err(StoreError::NotFound(key.clone()));
        }
        self.save()
    }

    pub fn get(&self, key: &CompositeKey) -> Option<&PartRecord> {
        self.records.get(&key.storage_key())
    }

    pub fn contains(&self, key: &CompositeKey) -> bool {
        self.records.contains_key(&key.storage_key())
    }

    /// Iterate over (storage key, record) pairs, unordered
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PartRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! Part/revision record stored against a composite key

use serde::{Deserialize, Serialize};

use crate::core::key::CompositeKey;

/// A stored part/revision entry
///
/// Serialized shape matches the persisted mapping values:
/// `{ "part": ..., "revision": ..., "description": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRecord {
    /// Part number printed on labels
    pub part: String,

    /// Revision string as stored (e.g. "REV.B" or "B")
    pub revision: String,

    /// Operator-facing note; synthesized from the key when not provided
    #[serde(default)]
    pub description: String,
}

impl PartRecord {
    pub fn new(part: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            part: part.into(),
            revision: revision.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The default description used when registration supplies none
    pub fn default_description(key: &CompositeKey) -> String {
        format!("Digits 2-3: {}, Digit 6: {}", key.pair(), key.single())
    }
}

//! Maintenance workflow over the record store
//!
//! Registration rejects duplicate keys here, at the workflow layer, while
//! [`RecordStore::put`] stays an unconditional upsert. The two must not be
//! collapsed: the storage primitive is idempotent, the workflow is not.

use crate::core::key::CompositeKey;
use crate::core::record::PartRecord;
use crate::core::store::{RecordStore, StoreError};

/// Register a new record, failing with [`StoreError::KeyExists`] when the
/// key is already present. A missing description is synthesized from the
/// key components.
pub fn add_record(
    store: &mut RecordStore,
    key: &CompositeKey,
    part: &str,
    revision: &str,
    description: Option<String>,
) -> Result<(), StoreError> {
    if store.contains(key) {
        return Err(StoreError::KeyExists(key.clone()));
    }
    let description = match description {
        Some(d) if !d.is_empty() => d,
        _ => PartRecord::default_description(key),
    };
    store.put(
        key,
        PartRecord::new(part, revision).with_description(description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::DATA_FILE;
    use tempfile::TempDir;

    fn key(pair: &str, single: &str) -> CompositeKey {
        CompositeKey::new(pair, single).unwrap()
    }

    #[test]
    fn test_add_synthesizes_default_description() {
        let tmp = TempDir::new().unwrap();
        let mut store = RecordStore::empty(tmp.path().join(DATA_FILE));
        add_record(&mut store, &key("ST", "B"), "D3022A", "REV.B", None).unwrap();
        assert_eq!(
            store.get(&key("ST", "B")).unwrap().description,
            "Digits 2-3: ST, Digit 6: B"
        );
    }

    #[test]
    fn test_add_keeps_provided_description() {
        let tmp = TempDir::new().unwrap();
        let mut store = RecordStore::empty(tmp.path().join(DATA_FILE));
        add_record(
            &mut store,
            &key("ST", "B"),
            "D3022A",
            "REV.B",
            Some("line 3 stock".into()),
        )
        .unwrap();
        assert_eq!(store.get(&key("ST", "B")).unwrap().description, "line 3 stock");
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let mut store = RecordStore::empty(tmp.path().join(DATA_FILE));
        add_record(&mut store, &key("ST", "B"), "D3022A", "REV.A", None).unwrap();
        let err = add_record(&mut store, &key("ST", "B"), "D9999", "REV.Z", None).unwrap_err();
        assert!(matches!(err, StoreError::KeyExists(_)));
        // the original record is untouched
        assert_eq!(store.get(&key("ST", "B")).unwrap().part, "D3022A");
    }
}

//! Lot-to-record resolution

use crate::core::key::extract;
use crate::core::record::PartRecord;
use crate::core::store::RecordStore;

/// Resolve a scanned lot code to its stored record.
///
/// Lots too short to key and keys absent from the store both normalize to
/// `None`; resolution never errors on malformed input.
pub fn resolve<'a>(store: &'a RecordStore, lot: &str) -> Option<&'a PartRecord> {
    let key = extract(lot)?;
    store.get(&key)
}

//! Core module - key derivation, record storage and resolution

pub mod config;
pub mod key;
pub mod maintenance;
pub mod record;
pub mod resolve;
pub mod store;

pub use config::{PaperSize, PrintConfig, PrintQuality};
pub use key::{extract, CompositeKey, KeyError, MIN_LOT_LEN};
pub use maintenance::add_record;
pub use record::PartRecord;
pub use resolve::resolve;
pub use store::{RecordStore, StoreError, DATA_FILE};

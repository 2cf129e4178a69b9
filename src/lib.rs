//! lotscan: resolve scanned lot codes to part/revision records and render
//! print-ready labels
//!
//! The lookup table maps keys derived from fixed lot-code character
//! positions to `{part, revision, description}` records, persisted as a
//! single JSON file. Rendering is a fixed catalog of named layouts with
//! byte-exact output contracts.

pub mod cli;
pub mod core;
pub mod print;
pub mod render;

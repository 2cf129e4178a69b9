//! CLI command implementations

pub mod part;
pub mod scan;
pub mod template;
pub mod utils;

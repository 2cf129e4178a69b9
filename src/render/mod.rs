//! Label template catalog and rendering

pub mod catalog;
pub mod fields;
pub mod label;

pub use catalog::Template;
pub use fields::{derive, LabelFields};
pub use label::{render, render_template};

//! Print configuration
//!
//! Printer name, quality and paper size are carried as an explicit value
//! handed to the print collaborator, not as shared static state. This
//! crate only builds the lp invocation string; submitting it is the print
//! dispatcher's concern.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Print resolution presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PrintQuality {
    Draft,
    #[default]
    Normal,
    High,
}

impl PrintQuality {
    /// The lp resolution option value
    pub fn dpi(&self) -> &'static str {
        match self {
            PrintQuality::Draft => "150dpi",
            PrintQuality::Normal => "300dpi",
            PrintQuality::High => "600dpi",
        }
    }
}

impl std::fmt::Display for PrintQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintQuality::Draft => write!(f, "draft"),
            PrintQuality::Normal => write!(f, "normal"),
            PrintQuality::High => write!(f, "high"),
        }
    }
}

/// Supported paper geometries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PaperSize {
    #[default]
    A4,
    A5,
    Letter,
    /// Small adhesive label stock
    Label,
}

impl PaperSize {
    /// (width, height) in millimetres
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            PaperSize::A4 => (210, 297),
            PaperSize::A5 => (148, 210),
            PaperSize::Letter => (216, 279),
            PaperSize::Label => (100, 50),
        }
    }

    /// The lp media option value
    pub fn media_code(&self) -> &'static str {
        match self {
            PaperSize::A4 => "a4",
            PaperSize::A5 => "a5",
            PaperSize::Letter => "letter",
            PaperSize::Label => "custom",
        }
    }
}

impl std::fmt::Display for PaperSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaperSize::A4 => write!(f, "A4"),
            PaperSize::A5 => write!(f, "A5"),
            PaperSize::Letter => write!(f, "Letter"),
            PaperSize::Label => write!(f, "Label"),
        }
    }
}

/// Explicit configuration handed to the print collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintConfig {
    pub printer: String,
    pub quality: PrintQuality,
    pub paper: PaperSize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            printer: "Epson_L210".to_string(),
            quality: PrintQuality::default(),
            paper: PaperSize::default(),
        }
    }
}

impl PrintConfig {
    /// Build the lp invocation for a spooled label file
    pub fn lp_command(&self, file: &Path) -> String {
        format!(
            "lp -d {} -o resolution={} -o media={} {}",
            self.printer,
            self.quality.dpi(),
            self.paper.media_code(),
            file.display()
        )
    }
}

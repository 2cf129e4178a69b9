//! Template-specific field derivation
//!
//! Report layouts take the timestamp and stored revision verbatim. Label
//! stock layouts abbreviate the date and time and normalize the revision,
//! each with rules that differ slightly per layout.

use chrono::NaiveDate;

use crate::core::record::PartRecord;
use crate::render::catalog::Template;

/// The full field set a layout may interpolate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFields {
    pub lot: String,
    pub part: String,
    /// Stored revision, verbatim (report layouts)
    pub rev: String,
    /// Timestamp, verbatim (report layouts)
    pub time: String,
    /// Abbreviated date (label stock layouts)
    pub date_display: String,
    /// HH:MM (label stock layouts)
    pub time_display: String,
    /// Normalized revision (label stock layouts)
    pub rev_display: String,
    /// Placeholder barcode glyphs; not interpolated by any current
    /// pattern, kept for forward compatibility
    pub barcode: String,
}

/// Compute the field map for one record/timestamp/template combination.
///
/// `timestamp` is expected as `"YYYY-MM-DD HH:MM:SS"`; anything else
/// degrades to the truncation fallbacks rather than erroring.
pub fn derive(lot: &str, record: &PartRecord, timestamp: &str, template: Template) -> LabelFields {
    let (date_part, time_part) = timestamp.split_once(' ').unwrap_or((timestamp, ""));

    LabelFields {
        lot: lot.to_string(),
        part: record.part.clone(),
        rev: record.revision.clone(),
        time: timestamp.to_string(),
        date_display: short_date(date_part, template),
        time_display: short_time(time_part),
        rev_display: short_revision(&record.revision, template),
        barcode: barcode_text(lot),
    }
}

/// Abbreviate the date portion: `DD/MM/YY` for the macarton layout,
/// `DDMonYY` otherwise. Unparseable dates fall back to the raw date
/// portion truncated to 8 characters.
fn short_date(date_part: &str, template: Template) -> String {
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => {
            let fmt = if template == Template::MacartonLabel {
                "%d/%m/%y"
            } else {
                "%d%b%y"
            };
            date.format(fmt).to_string()
        }
        Err(_) => date_part.chars().take(8).collect(),
    }
}

/// First five characters of the time portion (HH:MM)
fn short_time(time_part: &str) -> String {
    time_part.chars().take(5).collect()
}

/// Normalize a stored revision for label stock.
///
/// A revision containing "REV." (any case) is reduced to the upper-cased
/// remainder after the marker. Otherwise the barcode/compact layouts
/// truncate to 3 characters while the macarton layout keeps it verbatim.
fn short_revision(revision: &str, template: Template) -> String {
    let trimmed = revision.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let upper = trimmed.to_uppercase();
    if let Some(pos) = upper.find("REV.") {
        return upper[pos + 4..].to_string();
    }
    match template {
        Template::MacartonLabel => trimmed.to_string(),
        _ => trimmed.chars().take(3).collect(),
    }
}

/// Deterministic placeholder for the barcode glyph line; not a real
/// symbology.
fn barcode_text(lot: &str) -> String {
    format!("*{}*", lot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(part: &str, revision: &str) -> PartRecord {
        PartRecord::new(part, revision)
    }

    #[test]
    fn test_report_fields_are_verbatim() {
        let fields = derive(
            "QSTZ8B2206",
            &record("D3022A", "REV.B"),
            "2024-01-15 14:30:25",
            Template::Standard,
        );
        assert_eq!(fields.time, "2024-01-15 14:30:25");
        assert_eq!(fields.rev, "REV.B");
    }

    #[test]
    fn test_short_date_month_abbreviation() {
        assert_eq!(short_date("2025-08-05", Template::CompactLabel), "05Aug25");
        assert_eq!(
            short_date("2025-12-31", Template::LabelWithBarcode),
            "31Dec25"
        );
    }

    #[test]
    fn test_short_date_macarton_is_numeric() {
        assert_eq!(short_date("2025-01-15", Template::MacartonLabel), "15/01/25");
    }

    #[test]
    fn test_short_date_fallback_truncates_to_eight() {
        assert_eq!(
            short_date("2025/08/05", Template::CompactLabel),
            "2025/08/"
        );
        assert_eq!(short_date("bad", Template::MacartonLabel), "bad");
    }

    #[test]
    fn test_short_time() {
        assert_eq!(short_time("14:58:25"), "14:58");
        assert_eq!(short_time("7:5"), "7:5");
        assert_eq!(short_time(""), "");
    }

    #[test]
    fn test_rev_marker_stripped_any_case() {
        assert_eq!(short_revision("REV.B", Template::CompactLabel), "B");
        assert_eq!(short_revision("rev.04", Template::MacartonLabel), "04");
        assert_eq!(short_revision("Rev.C1", Template::LabelWithBarcode), "C1");
    }

    #[test]
    fn test_rev_without_marker_truncates_except_macarton() {
        assert_eq!(short_revision("B", Template::CompactLabel), "B");
        assert_eq!(short_revision("ALPHA", Template::CompactLabel), "ALP");
        assert_eq!(short_revision("ALPHA", Template::LabelWithBarcode), "ALP");
        assert_eq!(short_revision("ALPHA", Template::MacartonLabel), "ALPHA");
    }

    #[test]
    fn test_blank_revision_is_empty() {
        assert_eq!(short_revision("", Template::CompactLabel), "");
        assert_eq!(short_revision("   ", Template::MacartonLabel), "");
    }

    #[test]
    fn test_barcode_placeholder() {
        let fields = derive(
            "QSTZ8B2206",
            &record("D3022A", "REV.B"),
            "2025-08-05 14:58:25",
            Template::LabelWithBarcode,
        );
        assert_eq!(fields.barcode, "*QSTZ8B2206*");
    }
}

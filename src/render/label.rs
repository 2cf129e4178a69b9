//! Label rendering - pattern lookup, field derivation, substitution

use crate::core::record::PartRecord;
use crate::render::catalog::Template;
use crate::render::fields::derive;

/// Render a resolved record into the named layout.
///
/// Unknown template names fall back to `standard`. Deterministic: the
/// same inputs always produce an identical byte sequence.
pub fn render(lot: &str, record: &PartRecord, timestamp: &str, template_name: &str) -> String {
    let template = Template::from_name(template_name);
    render_template(lot, record, timestamp, template)
}

/// Render against an already-selected template
pub fn render_template(
    lot: &str,
    record: &PartRecord,
    timestamp: &str,
    template: Template,
) -> String {
    let fields = derive(lot, record, timestamp, template);

    // {time} means the abbreviated HH:MM on label stock and the verbatim
    // timestamp on report layouts.
    let time = if template.is_label_stock() {
        &fields.time_display
    } else {
        &fields.time
    };

    template
        .pattern()
        .replace("{lot}", &fields.lot)
        .replace("{part}", &fields.part)
        .replace("{rev_display}", &fields.rev_display)
        .replace("{rev}", &fields.rev)
        .replace("{date}", &fields.date_display)
        .replace("{time}", time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(part: &str, revision: &str) -> PartRecord {
        PartRecord::new(part, revision)
    }

    #[test]
    fn test_standard_layout() {
        let out = render(
            "QSTZ8B2206",
            &record("D3022A", "REV.B"),
            "2024-01-15 14:30:25",
            "standard",
        );
        assert_eq!(
            out,
            "Lot Number: QSTZ8B2206\nPart Number: D3022A\nRevision: REV.B\nScan Time: 2024-01-15 14:30:25"
        );
    }

    #[test]
    fn test_compact_layout() {
        let out = render(
            "QSTZ8B2206",
            &record("D3022A", "REV.B"),
            "2024-01-15 14:30:25",
            "compact",
        );
        assert_eq!(
            out,
            "Lot: QSTZ8B2206 | Part: D3022A | Rev: REV.B | 2024-01-15 14:30:25"
        );
    }

    #[test]
    fn test_detailed_layout() {
        let out = render(
            "QSTZ8B2206",
            &record("D3022A", "REV.B"),
            "2024-01-15 14:30:25",
            "detailed",
        );
        let expected = concat!(
            "================================\n",
            "        LOT SCANNING REPORT\n",
            "================================\n",
            "Lot Number    : QSTZ8B2206\n",
            "Part Number   : D3022A  \n",
            "Revision      : REV.B\n",
            "Scan Date/Time: 2024-01-15 14:30:25\n",
            "System        : Lot Scanner v1.0\n",
            "================================",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_compact_label_layout() {
        let out = render(
            "QSTZ8B2206",
            &record("D3022A", "REV.B"),
            "2025-08-05 14:58:25",
            "compact_label",
        );
        assert_eq!(out, "D3022A|B\nQSTZ8B2206\n05Aug25|14:58");
    }

    #[test]
    fn test_macarton_label_layout() {
        let out = render(
            "QSTZ8B2206",
            &record("D3022A", "B"),
            "2025-01-15 14:58:25",
            "macarton_label",
        );
        assert_eq!(out, "D3022A\nQSTZ8B2206\n*QSTZ8B2206*\n15/01/25 14:58 B");
    }

    #[test]
    fn test_label_with_barcode_layout() {
        let out = render(
            "QSTZ8B2206",
            &record("D3022A", "REV.B"),
            "2025-08-05 14:58:25",
            "label_with_barcode",
        );
        assert_eq!(out, "D3022A B\nQSTZ8B2206\n05Aug25 14:58");
    }

    #[test]
    fn test_unknown_template_renders_standard() {
        let standard = render(
            "QSTZ8B2206",
            &record("D3022A", "REV.B"),
            "2024-01-15 14:30:25",
            "standard",
        );
        let fallback = render(
            "QSTZ8B2206",
            &record("D3022A", "REV.B"),
            "2024-01-15 14:30:25",
            "no_such_template",
        );
        assert_eq!(standard, fallback);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = render(
            "QSTZ8B2206",
            &record("D3022A", "REV.B"),
            "2025-08-05 14:58:25",
            "macarton_label",
        );
        let b = render(
            "QSTZ8B2206",
            &record("D3022A", "REV.B"),
            "2025-08-05 14:58:25",
            "macarton_label",
        );
        assert_eq!(a, b);
    }
}

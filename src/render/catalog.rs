//! Fixed catalog of label layouts
//!
//! Every layout is a literal pattern over `{field}` placeholders. Output
//! is a byte-exact contract: patterns must not be reformatted.

/// Named label layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Compact,
    Standard,
    Detailed,
    LabelWithBarcode,
    CompactLabel,
    MacartonLabel,
}

// Assembled per line so the report's interior spacing (including the
// trailing spaces after {part}) stays visible; the block is a byte-exact
// contract.
const DETAILED_PATTERN: &str = concat!(
    "================================\n",
    "        LOT SCANNING REPORT\n",
    "================================\n",
    "Lot Number    : {lot}\n",
    "Part Number   : {part}  \n",
    "Revision      : {rev}\n",
    "Scan Date/Time: {time}\n",
    "System        : Lot Scanner v1.0\n",
    "================================",
);

impl Template {
    /// Catalog order used for listings
    pub const ALL: [Template; 6] = [
        Template::Compact,
        Template::Standard,
        Template::Detailed,
        Template::LabelWithBarcode,
        Template::CompactLabel,
        Template::MacartonLabel,
    ];

    /// Look up a template by name; unknown names fall back to `standard`
    pub fn from_name(name: &str) -> Template {
        match name {
            "compact" => Template::Compact,
            "standard" => Template::Standard,
            "detailed" => Template::Detailed,
            "label_with_barcode" => Template::LabelWithBarcode,
            "compact_label" => Template::CompactLabel,
            "macarton_label" => Template::MacartonLabel,
            _ => Template::Standard,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Template::Compact => "compact",
            Template::Standard => "standard",
            Template::Detailed => "detailed",
            Template::LabelWithBarcode => "label_with_barcode",
            Template::CompactLabel => "compact_label",
            Template::MacartonLabel => "macarton_label",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Template::Compact => "Single-line summary",
            Template::Standard => "One field per line",
            Template::Detailed => "Bordered scanning report",
            Template::LabelWithBarcode => "Label stock layout with barcode placeholder",
            Template::CompactLabel => "Narrow label stock layout",
            Template::MacartonLabel => "Carton label with starred lot line",
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            Template::Compact => "Lot: {lot} | Part: {part} | Rev: {rev} | {time}",
            Template::Standard => {
                "Lot Number: {lot}\nPart Number: {part}\nRevision: {rev}\nScan Time: {time}"
            }
            Template::Detailed => DETAILED_PATTERN,
            Template::LabelWithBarcode => "{part} {rev_display}\n{lot}\n{date} {time}",
            Template::CompactLabel => "{part}|{rev_display}\n{lot}\n{date}|{time}",
            Template::MacartonLabel => "{part}\n{lot}\n*{lot}*\n{date} {time} {rev_display}",
        }
    }

    /// Whether this layout uses the abbreviated date/time/revision fields
    /// rather than the verbatim timestamp and stored revision
    pub fn is_label_stock(&self) -> bool {
        matches!(
            self,
            Template::LabelWithBarcode | Template::CompactLabel | Template::MacartonLabel
        )
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

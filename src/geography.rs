// 🗺️ Geography - canonical province/territory names
//
// The three source tables spell provinces differently:
// - "Québec 10" in the vacancy table (footnote marker)
// - "Québec" in the education table
// - "Quebec" in the income table
// All of them must join on the same key.

/// National aggregate row, excluded from every chart
pub const NATIONAL: &str = "Canada";

/// Footnote marker StatCan appends to some geography labels
const FOOTNOTE_SUFFIX: &str = " 10";

/// Known alternate spellings → canonical spelling
const ALIASES: &[(&str, &str)] = &[
    ("Québec", "Quebec"),
    // Same name with a combining accent (NFD)
    ("Que\u{301}bec", "Quebec"),
];

/// Canonicalize a raw geography label
///
/// Trims whitespace, removes the " 10" footnote marker and maps known
/// alternate spellings. Unknown names are returned trimmed but otherwise
/// unchanged.
///
/// NOTE: when the label ends with " 10", every occurrence of " 10" is
/// removed, not just the suffix. "Zone 100 10" becomes "Zone0".
pub fn normalize(raw: &str) -> String {
    let mut name = raw.trim().to_string();

    while name.ends_with(FOOTNOTE_SUFFIX) {
        name = name.replace(FOOTNOTE_SUFFIX, "").trim().to_string();
    }

    match ALIASES.iter().find(|(alias, _)| *alias == name) {
        Some((_, canonical)) => canonical.to_string(),
        None => name,
    }
}

pub fn is_national(name: &str) -> bool {
    name == NATIONAL
}

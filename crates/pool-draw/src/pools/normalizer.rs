use std::collections::BTreeSet;

/// Lower-cases and collapses inner whitespace, dropping invisible BOM/zero-width
/// characters that spreadsheet exports like to leave behind.
pub(crate) fn normalize_phrase(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Join key between roster rows and historical records: the first
/// whitespace-delimited token of the name, lower-cased. Blank names give "".
pub fn name_key(name: &str) -> String {
    name.replace(['\u{feff}', '\u{200b}'], "")
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Comma-separated sports list as a set of normalized, non-empty entries.
pub fn registered_sports(sports_interested: &str) -> BTreeSet<String> {
    sports_interested
        .split(',')
        .map(normalize_phrase)
        .filter(|sport| !sport.is_empty())
        .collect()
}

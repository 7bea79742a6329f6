//! Insulation color recognition for single-core lines.

use super::patterns::{COLOR_TOKEN, GREEN_YELLOW};

/// Fixed color-name → catalog abbreviation table. Recognized color words
/// outside this table pass through uppercased.
const COLOR_ABBREVIATIONS: &[(&str, &str)] = &[
    ("black", "BK"),
    ("red", "RD"),
    ("blue", "BL"),
    ("brown", "BN"),
    ("grey", "GY"),
    ("gray", "GY"),
    ("white", "WH"),
    ("yellow", "YL"),
    ("green", "GN"),
    ("violet", "VT"),
    ("orange", "OG"),
];

/// True when the line carries a green-yellow protective-earth marker in any
/// of its recognized spellings.
pub fn has_green_yellow_marker(text: &str) -> bool {
    GREEN_YELLOW.is_match(text)
}

/// First recognized insulation color token in the line, as its catalog
/// abbreviation. Case-insensitive search across the whole line; this can
/// false-positive on descriptions that incidentally contain a color word.
pub fn color_abbreviation(text: &str) -> Option<String> {
    let token = COLOR_TOKEN.captures(text)?[1].to_lowercase();

    let abbreviation = COLOR_ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, abbr)| (*abbr).to_string())
        .unwrap_or_else(|| token.to_uppercase());

    Some(abbreviation)
}

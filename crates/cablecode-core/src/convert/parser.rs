//! Attribute parser: priority-ordered structural patterns over one line.
//!
//! Patterns are evaluated top-to-bottom and the first structural match wins;
//! a line never gets multiple interpretations. A later pattern is only
//! attempted when every earlier one failed.

use std::str::FromStr;

use regex::Captures;
use rust_decimal::Decimal;
use tracing::trace;

use super::rules::patterns::{
    BARE_CROSS, COMMA_CORE, DECIMAL_COMMA, EARTH_MARKER, EXPLICIT_UNIT, FIRE_KEYWORD,
    NUMBER_TOKEN, PAREN_CORE, PAREN_CROSS, SINGLE_SIZE,
};
use crate::error::{ParseError, Result};
use crate::models::line::ParsedLine;

/// One named structural pattern in the priority table.
struct PatternEntry {
    name: &'static str,
    extract: fn(&str) -> Option<ParsedLine>,
}

/// The priority table. Order is load-bearing: several patterns overlap
/// (a "(4x150mm2)" line also contains a bare "4x150"), so the most specific
/// form must be consulted first.
const PATTERNS: &[PatternEntry] = &[
    PatternEntry { name: "paren-cross", extract: extract_paren_cross },
    PatternEntry { name: "earth-marker", extract: extract_earth_marker },
    PatternEntry { name: "paren-core", extract: extract_paren_core },
    PatternEntry { name: "explicit-unit", extract: extract_explicit_unit },
    PatternEntry { name: "bare-cross", extract: extract_bare_cross },
    PatternEntry { name: "single-size", extract: extract_single_size },
    PatternEntry { name: "comma-core", extract: extract_comma_core },
];

/// Parse one trimmed BOQ line into its structural attributes.
///
/// Decimal commas are normalized to points before matching. Returns
/// [`ParseError`] carrying the line text when no pattern applies.
pub fn parse_line(text: &str) -> Result<ParsedLine> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new(text));
    }

    let normalized = normalize_decimal_commas(trimmed);

    for pattern in PATTERNS {
        if let Some(mut parsed) = (pattern.extract)(&normalized) {
            trace!(pattern = pattern.name, line = trimmed, "structural pattern matched");
            parsed.is_fire_rated = FIRE_KEYWORD.is_match(&normalized);
            return Ok(parsed);
        }
    }

    Err(ParseError::new(trimmed))
}

/// Normalize decimal commas between digits to points ("2,5" → "2.5").
pub fn normalize_decimal_commas(text: &str) -> String {
    DECIMAL_COMMA.replace_all(text, "$1.$2").into_owned()
}

fn decimal(caps: &Captures<'_>, name: &str) -> Option<Decimal> {
    Decimal::from_str(caps.name(name)?.as_str()).ok()
}

/// Last standalone numeric token in `text`, with its byte offset.
///
/// "Standalone" excludes digits glued to letters, so the "2" inside "mm2"
/// or the size in "16mm2" never counts as a length.
fn last_standalone_number(text: &str) -> Option<(usize, Decimal)> {
    let bytes = text.as_bytes();
    NUMBER_TOKEN
        .find_iter(text)
        .filter(|m| {
            let before_ok =
                m.start() == 0 || !bytes[m.start() - 1].is_ascii_alphanumeric();
            let after_ok = bytes
                .get(m.end())
                .is_none_or(|b| !b.is_ascii_alphanumeric());
            before_ok && after_ok
        })
        .last()
        .and_then(|m| Decimal::from_str(m.as_str()).ok().map(|d| (m.start(), d)))
}

fn cores(caps: &Captures<'_>) -> Option<u32> {
    caps.name("cores")?.as_str().parse().ok()
}

/// "(NxM mm2) ... L" — cores and size inside parentheses, trailing length.
fn extract_paren_cross(text: &str) -> Option<ParsedLine> {
    let caps = PAREN_CROSS.captures(text)?;
    Some(ParsedLine::new(
        cores(&caps)?,
        decimal(&caps, "size")?,
        decimal(&caps, "length")?,
    ))
}

/// Standalone earth marker + size: the line itself is the earth item.
/// Length is the last standalone number in the line; when the size token
/// is the only number, length resolves to zero.
fn extract_earth_marker(text: &str) -> Option<ParsedLine> {
    let caps = EARTH_MARKER.captures(text)?;
    let size_token = caps.name("size")?;
    let size = Decimal::from_str(size_token.as_str()).ok()?;

    let length = last_standalone_number(text)
        .filter(|(start, _)| *start != size_token.start())
        .map(|(_, value)| value)
        .unwrap_or(Decimal::ZERO);

    let mut parsed = ParsedLine::new(1, size, length);
    parsed.is_earth_cable = true;
    Some(parsed)
}

/// "(NcM) ... L" — cores and size with a "c" separator in parentheses.
fn extract_paren_core(text: &str) -> Option<ParsedLine> {
    let caps = PAREN_CORE.captures(text)?;
    Some(ParsedLine::new(
        cores(&caps)?,
        decimal(&caps, "size")?,
        decimal(&caps, "length")?,
    ))
}

/// "NcM mm² [+ E = Kmm²] ... L" — explicit area unit, optional earth clause.
fn extract_explicit_unit(text: &str) -> Option<ParsedLine> {
    let caps = EXPLICIT_UNIT.captures(text)?;
    let mut parsed = ParsedLine::new(
        cores(&caps)?,
        decimal(&caps, "size")?,
        decimal(&caps, "length")?,
    );
    parsed.earth_size = decimal(&caps, "earth");
    Some(parsed)
}

/// Bare "NxM" — length is the last standalone number after the match,
/// anywhere in the line. No such number means the pattern fails.
fn extract_bare_cross(text: &str) -> Option<ParsedLine> {
    let caps = BARE_CROSS.captures(text)?;
    let match_end = caps.get(0)?.end();

    let (_, length) = last_standalone_number(&text[match_end..])?;

    Some(ParsedLine::new(cores(&caps)?, decimal(&caps, "size")?, length))
}

/// "M mm2 ... L" — no core count stated; assume a single core.
fn extract_single_size(text: &str) -> Option<ParsedLine> {
    let caps = SINGLE_SIZE.captures(text)?;
    Some(ParsedLine::new(
        1,
        decimal(&caps, "size")?,
        decimal(&caps, "length")?,
    ))
}

/// "NSC, M [unit] L" — cores with an SC/C marker and comma.
fn extract_comma_core(text: &str) -> Option<ParsedLine> {
    let caps = COMMA_CORE.captures(text)?;
    Some(ParsedLine::new(
        cores(&caps)?,
        decimal(&caps, "size")?,
        decimal(&caps, "length")?,
    ))
}

//! Rule cascade: priority-ordered business rules over a parsed line.
//!
//! Textual patterns overlap (a "3x50+25" line also parses as a bare
//! core-size form), so the most specific applicable rule must be consulted
//! before generic handling. Terminal rules short-circuit; field-override
//! steps adjust the parsed attributes and fall through.

pub mod codes;
pub mod colors;
pub mod patterns;

use std::str::FromStr;

use rust_decimal::Decimal;

use self::codes::{
    build_earth_row, build_power_code, build_single_core_code, cat6_roll_count, int_token,
};
use self::patterns::{ALT_FAMILY_KEYWORD, CAT6_KEYWORD, COMBINED_EARTH, LOCKED_THREE_PHASE};
use crate::models::config::CatalogConfig;
use crate::models::line::{OutputRow, ParsedLine};

/// Everything a rule may look at for one line.
pub(crate) struct RuleInput<'a> {
    /// Original trimmed line; carried verbatim into output rows.
    pub source: &'a str,
    /// Decimal-comma-normalized text used for keyword scans and re-scans.
    pub text: &'a str,
    /// Structural attributes from the attribute parser.
    pub parsed: &'a ParsedLine,
    /// Externally supplied fire-section flag.
    pub fire_context: bool,
}

/// A terminal rule: when it applies it produces the line's rows and no
/// later rule is consulted.
pub(crate) struct Rule {
    pub name: &'static str,
    pub apply: fn(&CatalogConfig, &RuleInput<'_>) -> Option<Vec<OutputRow>>,
}

/// Terminal rules in strict priority order.
pub(crate) const PRIORITY_RULES: &[Rule] = &[
    Rule { name: "fire-override", apply: fire_rule },
    Rule { name: "cat6", apply: cat6_rule },
    Rule { name: "alternate-family", apply: alternate_family_rule },
    Rule { name: "locked-three-phase", apply: locked_three_phase_rule },
];

/// Parse the combined "NxM+K" power+earth form out of the line, if present.
fn combined_earth_override(text: &str) -> Option<(u32, Decimal, Decimal)> {
    let caps = COMBINED_EARTH.captures(text)?;
    let cores = caps["cores"].parse().ok()?;
    let size = Decimal::from_str(&caps["size"]).ok()?;
    let earth = Decimal::from_str(&caps["earth"]).ok()?;
    Some((cores, size, earth))
}

/// Fire override: the context flag or a fire keyword forces the fire-rated
/// family. A combined "NxM+K" re-match overrides cores/size/earth first.
fn fire_rule(config: &CatalogConfig, input: &RuleInput<'_>) -> Option<Vec<OutputRow>> {
    if !(input.fire_context || input.parsed.is_fire_rated) {
        return None;
    }

    let mut cores = input.parsed.cores;
    let mut size = input.parsed.conductor_size;
    let mut earth = input.parsed.earth_size;

    if let Some((c, s, e)) = combined_earth_override(input.text) {
        cores = c;
        size = s;
        earth = Some(e);
    }

    let code = format!(
        "{} {}X{} --CEI",
        config.families.fire_prefix,
        cores,
        int_token(size)
    );

    let mut rows = vec![OutputRow::metered(input.source, code, input.parsed.length)];
    if let Some(earth_size) = earth {
        rows.push(build_earth_row(
            config,
            input.source,
            earth_size,
            input.parsed.length,
        ));
    }

    Some(rows)
}

/// Structured-cabling stock: fixed SKU, strict-ceiling roll count.
fn cat6_rule(config: &CatalogConfig, input: &RuleInput<'_>) -> Option<Vec<OutputRow>> {
    if !CAT6_KEYWORD.is_match(input.text) {
        return None;
    }

    let rolls = cat6_roll_count(input.parsed.length, config.stock.cat6_roll_length);
    Some(vec![OutputRow::rolls(
        input.source,
        config.families.cat6_sku.clone(),
        rolls,
    )])
}

/// Alternate power family selected by its keyword marker.
fn alternate_family_rule(config: &CatalogConfig, input: &RuleInput<'_>) -> Option<Vec<OutputRow>> {
    if !ALT_FAMILY_KEYWORD.is_match(input.text) {
        return None;
    }

    let code = format!(
        "{} {}X{}",
        config.families.alternate_prefix,
        input.parsed.cores,
        int_token(input.parsed.conductor_size)
    );

    Some(vec![OutputRow::metered(input.source, code, input.parsed.length)])
}

/// Locked 3-phase asymmetric rule: "3xA+B" with B < A and A above the
/// armored threshold maps to a single combined armored code.
fn locked_three_phase_rule(
    config: &CatalogConfig,
    input: &RuleInput<'_>,
) -> Option<Vec<OutputRow>> {
    let caps = LOCKED_THREE_PHASE.captures(input.text)?;
    let phase = Decimal::from_str(&caps["phase"]).ok()?;
    let neutral = Decimal::from_str(&caps["neutral"]).ok()?;

    if !(phase > config.stock.armored_threshold && neutral < phase) {
        return None;
    }

    let code = format!(
        "{} 3X{}+{}SM",
        config.families.armored_prefix,
        int_token(phase),
        int_token(neutral)
    );

    Some(vec![OutputRow::metered(input.source, code, input.parsed.length)])
}

/// Five-core convention: 5 cores with no explicit earth reads as 4 power
/// cores plus an earth core of the same size.
pub(crate) fn apply_five_core_convention(parsed: &mut ParsedLine) {
    if parsed.cores == 5 && parsed.earth_size.is_none() {
        parsed.earth_size = Some(parsed.conductor_size);
        parsed.cores = 4;
    }
}

/// Inline "+K" earth suffix: a combined "NxM+K" re-match overrides cores,
/// conductor size, and earth size regardless of the structural parse.
pub(crate) fn apply_inline_earth_suffix(text: &str, parsed: &mut ParsedLine) {
    if let Some((cores, size, earth)) = combined_earth_override(text) {
        parsed.cores = cores;
        parsed.conductor_size = size;
        parsed.earth_size = Some(earth);
    }
}

/// Single-core disambiguation: green-yellow (or an earth-marker line) is
/// earth stock; a recognized color is a color-coded single; no color at all
/// defaults to earth stock.
pub(crate) fn single_core_rows(
    config: &CatalogConfig,
    source: &str,
    text: &str,
    parsed: &ParsedLine,
) -> Vec<OutputRow> {
    if parsed.is_earth_cable || colors::has_green_yellow_marker(text) {
        return vec![build_earth_row(
            config,
            source,
            parsed.conductor_size,
            parsed.length,
        )];
    }

    if let Some(color) = colors::color_abbreviation(text) {
        let code = build_single_core_code(config, parsed.conductor_size, &color);
        return vec![OutputRow::metered(source, code, parsed.length)];
    }

    vec![build_earth_row(
        config,
        source,
        parsed.conductor_size,
        parsed.length,
    )]
}

/// Default multi-core power rule, plus an earth row when one is present.
pub(crate) fn default_power_rows(
    config: &CatalogConfig,
    source: &str,
    parsed: &ParsedLine,
) -> Vec<OutputRow> {
    let code = build_power_code(config, parsed.cores, parsed.conductor_size);
    let mut rows = vec![OutputRow::metered(source, code, parsed.length)];

    if let Some(earth_size) = parsed.earth_size {
        rows.push(build_earth_row(config, source, earth_size, parsed.length));
    }

    rows
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_combined_earth_override_extraction() {
        assert_eq!(
            combined_earth_override("4x10+6 run A 120"),
            Some((4, dec("10"), dec("6")))
        );
        assert_eq!(combined_earth_override("4x10 run A 120"), None);
    }

    #[test]
    fn test_five_core_convention() {
        let mut parsed = ParsedLine::new(5, dec("16"), dec("100"));
        apply_five_core_convention(&mut parsed);
        assert_eq!(parsed.cores, 4);
        assert_eq!(parsed.earth_size, Some(dec("16")));
    }

    #[test]
    fn test_five_core_convention_respects_explicit_earth() {
        let mut parsed = ParsedLine::new(5, dec("16"), dec("100"));
        parsed.earth_size = Some(dec("10"));
        apply_five_core_convention(&mut parsed);
        assert_eq!(parsed.cores, 5);
        assert_eq!(parsed.earth_size, Some(dec("10")));
    }

    #[test]
    fn test_inline_earth_suffix_overrides_parse() {
        let mut parsed = ParsedLine::new(4, dec("10"), dec("120"));
        apply_inline_earth_suffix("4x10+6 120", &mut parsed);
        assert_eq!(parsed.earth_size, Some(dec("6")));
        assert_eq!(parsed.cores, 4);
        assert_eq!(parsed.conductor_size, dec("10"));
    }
}

//! Conversion engine: drives the parse-once, rule-cascade pipeline.

use tracing::debug;

use super::parser::{normalize_decimal_commas, parse_line};
use super::rules::{
    PRIORITY_RULES, RuleInput, apply_five_core_convention, apply_inline_earth_suffix,
    default_power_rows, single_core_rows,
};
use crate::error::Result;
use crate::models::config::CatalogConfig;
use crate::models::line::OutputRow;

/// Trait for line transformation.
pub trait LineTransformer {
    /// Convert one trimmed, non-empty BOQ line into its output rows.
    fn transform(&self, line: &str, fire_context: bool) -> Result<Vec<OutputRow>>;
}

/// Rule-based BOQ line converter.
///
/// Stateless per line: the only cross-line input is the caller-maintained
/// fire-section flag passed into [`LineTransformer::transform`].
pub struct CableConverter {
    config: CatalogConfig,
}

impl CableConverter {
    /// Create a converter with the default CDL catalog.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Create a converter for a specific catalog configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

impl Default for CableConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineTransformer for CableConverter {
    fn transform(&self, line: &str, fire_context: bool) -> Result<Vec<OutputRow>> {
        let source = line.trim();
        let mut parsed = parse_line(source)?;
        let text = normalize_decimal_commas(source);

        // Terminal priority rules: first match wins, nothing else fires.
        {
            let input = RuleInput {
                source,
                text: &text,
                parsed: &parsed,
                fire_context,
            };
            for rule in PRIORITY_RULES {
                if let Some(rows) = (rule.apply)(&self.config, &input) {
                    debug!(rule = rule.name, line = source, "rule fired");
                    return Ok(rows);
                }
            }
        }

        // Field-override steps, then the generic tail.
        apply_five_core_convention(&mut parsed);
        apply_inline_earth_suffix(&text, &mut parsed);

        let rows = if parsed.cores == 1 {
            debug!(rule = "single-core", line = source, "rule fired");
            single_core_rows(&self.config, source, &text, &parsed)
        } else {
            debug!(rule = "default-power", line = source, "rule fired");
            default_power_rows(&self.config, source, &parsed)
        };

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn transform(line: &str) -> Vec<OutputRow> {
        CableConverter::new().transform(line, false).unwrap()
    }

    #[test]
    fn test_plain_molded_line() {
        let rows = transform("4x6 PVC 380");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].catalog_code, "CDL-NYM 4X6");
        assert_eq!(rows[0].quantity, "380.00");
        assert_eq!(rows[0].unit, "m");
        assert_eq!(rows[0].source_line, "4x6 PVC 380");
    }

    #[test]
    fn test_flexible_size_keeps_decimal() {
        let rows = transform("3x2.5 wiring run 120");
        assert_eq!(rows[0].catalog_code, "CDL-NYM 3X2.5RE");
    }

    #[test]
    fn test_fire_keyword_alone_triggers_fire_rule() {
        let rows = transform("4x10 FIRE 50");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].catalog_code, "CDL-SFC2XU 4X10 --CEI");
        assert_eq!(rows[0].quantity, "50.00");
        assert_eq!(rows[0].unit, "m");
    }

    #[test]
    fn test_fire_context_flag_triggers_fire_rule() {
        let rows = CableConverter::new().transform("4x10 PVC 50", true).unwrap();
        assert_eq!(rows[0].catalog_code, "CDL-SFC2XU 4X10 --CEI");
    }

    #[test]
    fn test_fire_rule_with_combined_earth_emits_earth_row() {
        let rows = transform("4x10+6 CEI 120");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].catalog_code, "CDL-SFC2XU 4X10 --CEI");
        assert_eq!(rows[0].quantity, "120.00");
        // 120 / 92 ≈ 1.3: remainder above the grace threshold.
        assert_eq!(rows[1].catalog_code, "CDL-NYA 6 GN-YL");
        assert_eq!(rows[1].quantity, "2");
    }

    #[test]
    fn test_cat6_fixed_sku_and_roll_count() {
        let rows = transform("CAT6 UTP 4x23 305");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].catalog_code, "NEX-CAT6UTPLSZH-GY");
        assert_eq!(rows[0].quantity, "1");
        assert_eq!(rows[0].unit, "");

        let rows = transform("CAT6 UTP 4x23 305.01");
        assert_eq!(rows[0].quantity, "2");
    }

    #[test]
    fn test_alternate_family_keyword() {
        let rows = transform("NYZ 3x6 braided 80");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].catalog_code, "CDL-NYZ 3X6");
        assert_eq!(rows[0].quantity, "80.00");
    }

    #[test]
    fn test_locked_three_phase_rule() {
        let rows = transform("3x50+25 XLPE 100");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].catalog_code, "CDL-NYY 3X50+25SM");
        assert_eq!(rows[0].quantity, "100.00");
    }

    #[test]
    fn test_three_phase_below_threshold_falls_through() {
        // 25 is not above 35, so the locked rule must not fire; the inline
        // "+K" override routes it through the generic power+earth path.
        let rows = transform("3x25+16 run 100");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].catalog_code, "CDL-NYM 3X25");
        assert_eq!(rows[1].catalog_code, "CDL-NYA 16 GN-YL--MT");
        assert_eq!(rows[1].quantity, "100.00");
    }

    #[test]
    fn test_five_core_splits_into_power_and_earth() {
        let rows = transform("5x16 200");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].catalog_code, "CDL-NYM 4X16");
        assert_eq!(rows[0].quantity, "200.00");
        assert_eq!(rows[1].catalog_code, "CDL-NYA 16 GN-YL--MT");
        assert_eq!(rows[1].quantity, "200.00");
    }

    #[test]
    fn test_inline_earth_suffix() {
        let rows = transform("4x10+6 feeder 120");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].catalog_code, "CDL-NYM 4X10");
        assert_eq!(rows[1].catalog_code, "CDL-NYA 6 GN-YL");
    }

    #[test]
    fn test_four_core_35_armored_override() {
        let rows = transform("4x35 riser 60");
        assert_eq!(rows[0].catalog_code, "CDL-NYY 4X35SM");
    }

    #[test]
    fn test_single_core_green_yellow_is_earth() {
        let rows = transform("1x16 GN-YL 50");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].catalog_code, "CDL-NYA 16 GN-YL--MT");
    }

    #[test]
    fn test_single_core_color_coded() {
        let rows = transform("1x16 black 50");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].catalog_code, "CDL-NYA 16 BK");
        assert_eq!(rows[0].quantity, "50.00");
        assert_eq!(rows[0].unit, "m");
    }

    #[test]
    fn test_single_core_without_color_defaults_to_earth() {
        let rows = transform("70 mm2 178 lm");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].catalog_code, "CDL-NYA 70 GN-YL--MT");
        assert_eq!(rows[0].quantity, "178.00");
    }

    #[test]
    fn test_earth_marker_line_routes_to_earth_builder() {
        let rows = transform("EARTH 6mm2 bare 100");
        assert_eq!(rows.len(), 1);
        // 100 / 92 ≈ 1.09: remainder below grace, one roll.
        assert_eq!(rows[0].catalog_code, "CDL-NYA 6 GN-YL");
        assert_eq!(rows[0].quantity, "1");
    }

    #[test]
    fn test_transform_is_idempotent() {
        let converter = CableConverter::new();
        let first = converter.transform("3x50+25 XLPE 100", false).unwrap();
        let second = converter.transform("3x50+25 XLPE 100", false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unparseable_line_is_an_error() {
        let err = CableConverter::new()
            .transform("banana 5", false)
            .unwrap_err();
        assert_eq!(err.line, "banana 5");
    }
}

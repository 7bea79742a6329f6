//! Shared regex patterns for BOQ line extraction.
//!
//! All patterns assume decimal commas have already been normalized to
//! points (see [`crate::convert::parser::normalize_decimal_commas`]).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Structural attribute patterns, in parser priority order.

    /// Parenthesized cross form: "(4X150mm2) ... 200".
    pub static ref PAREN_CROSS: Regex = Regex::new(
        r"(?i)\(\s*(?P<cores>\d+)\s*x\s*(?P<size>\d+(?:\.\d+)?)\s*mm?[²2]?\s*\).*?(?P<length>\d+(?:\.\d+)?)\s*(?:lm|ml|m)?\s*$"
    ).unwrap();

    /// Earth-cable marker form: "EARTH 16mm2 ...". The line IS the earth item.
    pub static ref EARTH_MARKER: Regex = Regex::new(
        r"(?i)\b(?:earth|ecc|cpc)\b\s*:?\s*(?P<size>\d+(?:\.\d+)?)\s*(?:mm²|mm2|mm)?"
    ).unwrap();

    /// Parenthesized core-count form: "(2C6) ... 20".
    pub static ref PAREN_CORE: Regex = Regex::new(
        r"(?i)\(\s*(?P<cores>\d+)\s*c\s*(?P<size>\d+(?:\.\d+)?)\s*\).*?(?P<length>\d+(?:\.\d+)?)\s*(?:lm|ml|m)?\s*$"
    ).unwrap();

    /// Explicit-unit form with optional earth suffix:
    /// "4C 16mm² + E = 16mm² ... 250".
    pub static ref EXPLICIT_UNIT: Regex = Regex::new(
        r"(?i)(?P<cores>\d+)\s*c\s*(?P<size>\d+(?:\.\d+)?)\s*(?:mm²|mm2)(?:\s*\+\s*e\s*=\s*(?P<earth>\d+(?:\.\d+)?)\s*(?:mm²|mm2))?.*?(?P<length>\d+(?:\.\d+)?)\s*(?:lm|ml|m)?\s*$"
    ).unwrap();

    /// Bare core-size form: "4x6". Length is taken separately from the
    /// last standalone number after the match.
    pub static ref BARE_CROSS: Regex = Regex::new(
        r"(?i)\b(?P<cores>\d+)\s*x\s*(?P<size>\d+(?:\.\d+)?)"
    ).unwrap();

    /// Single conductor-size form: "70 mm2 178 lm".
    pub static ref SINGLE_SIZE: Regex = Regex::new(
        r"(?i)(?P<size>\d+(?:\.\d+)?)\s*(?:mm²|mm2).*?(?P<length>\d+(?:\.\d+)?)\s*(?:lm|ml|m)?\s*$"
    ).unwrap();

    /// Comma core form: "4SC, 25 lm 100" or "4C, 25 100".
    pub static ref COMMA_CORE: Regex = Regex::new(
        r"(?i)\b(?P<cores>\d+)\s*(?:sc|c)\s*,\s*(?P<size>\d+(?:\.\d+)?)\s*(?:mm²|mm2|lm|ml|m)?\s*(?P<length>\d+(?:\.\d+)?)\s*$"
    ).unwrap();

    /// Any standalone numeric token.
    pub static ref NUMBER_TOKEN: Regex = Regex::new(
        r"\d+(?:\.\d+)?"
    ).unwrap();

    /// A decimal comma between digits ("2,5").
    pub static ref DECIMAL_COMMA: Regex = Regex::new(
        r"(\d),(\d)"
    ).unwrap();

    // Classification keyword patterns.

    /// Fire / flame-resistant / CEI-standard keywords.
    pub static ref FIRE_KEYWORD: Regex = Regex::new(
        r"(?i)\b(?:fire|fr|flame|resistant|cei)\b"
    ).unwrap();

    /// Structured-cabling (category-6) marker.
    pub static ref CAT6_KEYWORD: Regex = Regex::new(
        r"(?i)\bcat\s*-?\s*6\b"
    ).unwrap();

    /// Alternate power family marker.
    pub static ref ALT_FAMILY_KEYWORD: Regex = Regex::new(
        r"(?i)\bnyz\b"
    ).unwrap();

    /// Locked 3-phase asymmetric form: "3x50+25".
    pub static ref LOCKED_THREE_PHASE: Regex = Regex::new(
        r"(?i)\b3\s*x\s*(?P<phase>\d+(?:\.\d+)?)\s*\+\s*(?P<neutral>\d+(?:\.\d+)?)"
    ).unwrap();

    /// Combined power+earth form: "4x10+6", "4x10 + E=6", "4x10+PE 6".
    /// Overrides cores/size/earth wherever it re-matches.
    pub static ref COMBINED_EARTH: Regex = Regex::new(
        r"(?i)(?P<cores>\d+)\s*x\s*(?P<size>\d+(?:\.\d+)?)\s*\+\s*(?:pe|e)?\s*=?\s*(?P<earth>\d+(?:\.\d+)?)"
    ).unwrap();

    /// Green-yellow protective-earth color marker, in its usual spellings.
    pub static ref GREEN_YELLOW: Regex = Regex::new(
        r"(?i)\b(?:gn[-/ ]?yl|green[-/ ]?yellow|yellow[-/ ]?green|g/y)\b"
    ).unwrap();

    /// Recognized insulation color tokens.
    pub static ref COLOR_TOKEN: Regex = Regex::new(
        r"(?i)\b(black|red|blue|brown|grey|gray|white|yellow|green|violet|purple|orange|pink|turquoise)\b"
    ).unwrap();

    /// Cable-type section keywords for header detection.
    pub static ref SECTION_KEYWORD: Regex = Regex::new(
        r"(?i)\b(?:section|cables|wiring)\b"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paren_cross_matches_inner_x_form() {
        let caps = PAREN_CROSS.captures("(4X150mm2) XLPE/SWA 200").unwrap();
        assert_eq!(&caps["cores"], "4");
        assert_eq!(&caps["size"], "150");
        assert_eq!(&caps["length"], "200");
    }

    #[test]
    fn test_paren_cross_accepts_trailing_unit() {
        let caps = PAREN_CROSS.captures("(2x2.5 mm2) 45 lm").unwrap();
        assert_eq!(&caps["length"], "45");
    }

    #[test]
    fn test_explicit_unit_with_earth_clause() {
        let caps = EXPLICIT_UNIT
            .captures("4C 16mm² + E = 16mm² armored 250")
            .unwrap();
        assert_eq!(&caps["cores"], "4");
        assert_eq!(&caps["size"], "16");
        assert_eq!(&caps["earth"], "16");
        assert_eq!(&caps["length"], "250");
    }

    #[test]
    fn test_combined_earth_spellings() {
        for text in ["4x10+6", "4x10 + 6", "4x10 +E=6", "4x10 + PE 6"] {
            let caps = COMBINED_EARTH.captures(text).unwrap_or_else(|| {
                panic!("no combined-earth match in {text:?}")
            });
            assert_eq!(&caps["earth"], "6", "in {text:?}");
        }
    }

    #[test]
    fn test_fire_keyword_is_word_bounded() {
        assert!(FIRE_KEYWORD.is_match("4x10 FIRE 50"));
        assert!(FIRE_KEYWORD.is_match("cable to CEI 20-45"));
        assert!(!FIRE_KEYWORD.is_match("cable from panel 4x10 50"));
    }

    #[test]
    fn test_cat6_marker_spellings() {
        assert!(CAT6_KEYWORD.is_match("CAT6 UTP 4x23 305"));
        assert!(CAT6_KEYWORD.is_match("cat 6 utp"));
        assert!(!CAT6_KEYWORD.is_match("cat 66"));
    }

    #[test]
    fn test_green_yellow_spellings() {
        for text in ["GN-YL", "gnyl", "green/yellow", "green yellow", "g/y"] {
            assert!(GREEN_YELLOW.is_match(text), "missed {text:?}");
        }
        assert!(!GREEN_YELLOW.is_match("green cable"));
    }
}

//! Section-boundary detection over raw BOQ text.
//!
//! BOQ files group items under cable-type headers ("FIRE RATED CABLES:",
//! "LV POWER CABLES"). Headers are not items: the batch fold uses these
//! predicates to toggle the fire-section flag and drop the header line.

use super::rules::patterns::{FIRE_KEYWORD, SECTION_KEYWORD};

/// True when the line signals a new cable-type section rather than an item.
///
/// A header is a digit-free line carrying a section keyword, or any line
/// ending in a colon. Item lines always carry at least one number.
pub fn is_section_header(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }

    trimmed.ends_with(':')
        || (SECTION_KEYWORD.is_match(trimmed) && !trimmed.chars().any(|c| c.is_ascii_digit()))
}

/// True when a section header opens a fire-rated section.
pub fn is_fire_section(line: &str) -> bool {
    FIRE_KEYWORD.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_are_detected() {
        assert!(is_section_header("FIRE RATED CABLES:"));
        assert!(is_section_header("LV POWER CABLES"));
        assert!(is_section_header("Emergency circuits:"));
    }

    #[test]
    fn test_item_lines_are_not_headers() {
        assert!(!is_section_header("4x6 PVC 380"));
        assert!(!is_section_header("FIRE cable 4x10 50"));
        assert!(!is_section_header(""));
    }

    #[test]
    fn test_fire_section_detection() {
        assert!(is_fire_section("FIRE RATED CABLES:"));
        assert!(is_fire_section("CEI circuit integrity section:"));
        assert!(!is_fire_section("LV POWER CABLES"));
    }
}

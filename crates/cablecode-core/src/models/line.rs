//! Line-level data models: parsed attributes and output rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structural attributes extracted from one BOQ line.
///
/// Constructed fresh per line by the attribute parser, consumed by the rule
/// cascade, and discarded once the output rows exist. Never shared across
/// lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// Number of current-carrying conductors.
    pub cores: u32,

    /// Conductor cross-sectional area in mm².
    pub conductor_size: Decimal,

    /// Explicit earth/protective conductor size, when the line states one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earth_size: Option<Decimal>,

    /// Physical quantity to procure. Meters, unless the matched family
    /// counts in rolls.
    pub length: Decimal,

    /// Fire/flame-resistant keywords were present in the line.
    pub is_fire_rated: bool,

    /// The line itself is a single-core protective-earth item rather than
    /// a phase conductor.
    pub is_earth_cable: bool,
}

impl ParsedLine {
    /// A plain multi-core line with no earth, fire, or marker attributes.
    pub fn new(cores: u32, conductor_size: Decimal, length: Decimal) -> Self {
        Self {
            cores,
            conductor_size,
            earth_size: None,
            length,
            is_fire_rated: false,
            is_earth_cable: false,
        }
    }
}

/// One converted procurement row.
///
/// A single input line produces one row (power conductor) or two (power
/// followed by earth). The quantity is pre-formatted: an integer string for
/// roll counts, a fixed two-decimal string for metered lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    /// The original input line, verbatim.
    pub source_line: String,

    /// Vendor catalog code.
    pub catalog_code: String,

    /// Formatted quantity.
    pub quantity: String,

    /// Quantity unit: "m" for metered stock, empty for roll counts.
    pub unit: String,
}

impl OutputRow {
    pub fn new(
        source_line: impl Into<String>,
        catalog_code: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            source_line: source_line.into(),
            catalog_code: catalog_code.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    /// A metered row: length formatted to two decimals, unit "m".
    pub fn metered(
        source_line: impl Into<String>,
        catalog_code: impl Into<String>,
        length: Decimal,
    ) -> Self {
        Self::new(source_line, catalog_code, format!("{length:.2}"), "m")
    }

    /// A roll-counted row: integer quantity, empty unit.
    pub fn rolls(
        source_line: impl Into<String>,
        catalog_code: impl Into<String>,
        rolls: u64,
    ) -> Self {
        Self::new(source_line, catalog_code, rolls.to_string(), "")
    }
}

/// A line the batch fold skipped because it failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// The skipped input line, verbatim.
    pub line: String,

    /// Why it was skipped.
    pub reason: String,
}

/// Result of converting a whole pasted BOQ text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Output rows, in input-line order.
    pub rows: Vec<OutputRow>,

    /// Lines that failed to parse. Never silently dropped.
    pub skipped: Vec<SkippedLine>,
}

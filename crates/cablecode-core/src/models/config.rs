//! Configuration for catalog code generation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main configuration for the conversion engine.
///
/// Defaults match the CDL vendor catalog; every prefix and threshold can be
/// overridden from a JSON file for other catalogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog code families and SKUs.
    pub families: FamilyConfig,

    /// Stock units and classification thresholds.
    pub stock: StockConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            families: FamilyConfig::default(),
            stock: StockConfig::default(),
        }
    }
}

/// Catalog code prefixes per cable family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyConfig {
    /// Molded/flexible multi-core family (sizes below the armored threshold).
    pub molded_prefix: String,

    /// Armored multi-core family.
    pub armored_prefix: String,

    /// Single-core family, used for earth stock and color-coded singles.
    pub single_core_prefix: String,

    /// Fire-rated (circuit-integrity) family.
    pub fire_prefix: String,

    /// Alternate power family selected by its keyword marker.
    pub alternate_prefix: String,

    /// Fixed SKU for structured-cabling (category-6) stock.
    pub cat6_sku: String,
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            molded_prefix: "CDL-NYM".to_string(),
            armored_prefix: "CDL-NYY".to_string(),
            single_core_prefix: "CDL-NYA".to_string(),
            fire_prefix: "CDL-SFC2XU".to_string(),
            alternate_prefix: "CDL-NYZ".to_string(),
            cat6_sku: "NEX-CAT6UTPLSZH-GY".to_string(),
        }
    }
}

/// Stock units and size thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StockConfig {
    /// Roll length for earth/general single-core stock, in meters.
    pub earth_roll_length: Decimal,

    /// Roll length for category-6 stock, in meters.
    pub cat6_roll_length: Decimal,

    /// Fractional-roll remainder at or above which an extra earth roll is
    /// consumed. Below it, the partial roll is tolerated as waste.
    pub roll_grace: Decimal,

    /// Conductor size (mm²) at or above which the armored family applies.
    pub armored_threshold: Decimal,

    /// Earth size (mm²) up to which earth stock is counted in rolls;
    /// larger sizes are metered.
    pub earth_roll_max_size: Decimal,

    /// Molded-family sizes coded with the flexible/stranded "RE" suffix,
    /// keeping the decimal point in the size token.
    pub flexible_sizes: Vec<Decimal>,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            earth_roll_length: Decimal::from(92),
            cat6_roll_length: Decimal::from(305),
            roll_grace: Decimal::new(2, 1),
            armored_threshold: Decimal::from(35),
            earth_roll_max_size: Decimal::from(6),
            flexible_sizes: vec![Decimal::new(15, 1), Decimal::new(25, 1)],
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

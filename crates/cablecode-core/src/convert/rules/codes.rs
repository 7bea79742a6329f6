//! Catalog code and quantity builders.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::config::CatalogConfig;
use crate::models::line::OutputRow;

/// Catalog family for a multi-core power conductor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerFamily {
    /// Molded/flexible family, below the armored size threshold.
    Molded,
    /// Armored family.
    Armored,
}

/// Select the power family for a cores/size combination.
///
/// The 35 mm² boundary is ambiguous for 4-core cables in the source catalog
/// and must resolve to armored, hence the explicit override.
pub fn power_family(config: &CatalogConfig, cores: u32, size: Decimal) -> PowerFamily {
    if cores == 4 && size == config.stock.armored_threshold {
        return PowerFamily::Armored;
    }

    if size < config.stock.armored_threshold {
        PowerFamily::Molded
    } else {
        PowerFamily::Armored
    }
}

/// Size token with the decimal part truncated.
pub(crate) fn int_token(size: Decimal) -> String {
    size.trunc().normalize().to_string()
}

/// Build the catalog code for a multi-core power conductor.
pub fn build_power_code(config: &CatalogConfig, cores: u32, size: Decimal) -> String {
    match power_family(config, cores, size) {
        PowerFamily::Molded => {
            if config.stock.flexible_sizes.contains(&size) {
                // Flexible/stranded sizes keep the decimal point.
                format!(
                    "{} {}X{}RE",
                    config.families.molded_prefix,
                    cores,
                    size.normalize()
                )
            } else {
                format!(
                    "{} {}X{}",
                    config.families.molded_prefix,
                    cores,
                    int_token(size)
                )
            }
        }
        PowerFamily::Armored => format!(
            "{} {}X{}SM",
            config.families.armored_prefix,
            cores,
            int_token(size)
        ),
    }
}

/// Build the simplified single-core code: family prefix, size, color tag.
pub fn build_single_core_code(config: &CatalogConfig, size: Decimal, color: &str) -> String {
    format!(
        "{} {} {}",
        config.families.single_core_prefix,
        size.normalize(),
        color
    )
}

/// Build the earth/protective conductor row.
///
/// Small sizes are stocked in rolls with the 20%-grace rounding; larger
/// sizes are metered.
pub fn build_earth_row(
    config: &CatalogConfig,
    source_line: &str,
    size: Decimal,
    length: Decimal,
) -> OutputRow {
    if size <= config.stock.earth_roll_max_size {
        let rolls = roll_count(length, config.stock.earth_roll_length, config.stock.roll_grace);
        let code = format!(
            "{} {} GN-YL",
            config.families.single_core_prefix,
            int_token(size)
        );
        OutputRow::rolls(source_line, code, rolls)
    } else {
        let code = format!(
            "{} {} GN-YL--MT",
            config.families.single_core_prefix,
            int_token(size)
        );
        OutputRow::metered(source_line, code, length)
    }
}

/// Roll count with a grace threshold: a fractional remainder at or above
/// `grace` consumes a full extra roll; below it the partial roll is waste.
/// Always at least one roll.
pub fn roll_count(length: Decimal, roll_length: Decimal, grace: Decimal) -> u64 {
    if roll_length <= Decimal::ZERO {
        return 1;
    }

    let ratio = length / roll_length;
    let mut rolls = ratio.floor().to_u64().unwrap_or(0);
    if ratio - ratio.floor() >= grace {
        rolls += 1;
    }

    rolls.max(1)
}

/// Strict-ceiling roll count for category-6 stock. Unlike [`roll_count`]
/// there is no grace threshold; any remainder consumes a full roll.
/// TODO: confirm with procurement whether the two policies should be unified.
pub fn cat6_roll_count(length: Decimal, roll_length: Decimal) -> u64 {
    if roll_length <= Decimal::ZERO {
        return 1;
    }

    (length / roll_length).ceil().to_u64().unwrap_or(1).max(1)
}

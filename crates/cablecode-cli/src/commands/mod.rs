//! CLI subcommands.

pub mod check;
pub mod convert;

use std::io::Read;
use std::path::Path;

use cablecode_core::CatalogConfig;

/// Read the BOQ text from a file, or stdin when the path is "-".
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let path = Path::new(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(std::fs::read_to_string(path)?)
}

/// Load the catalog configuration, falling back to the built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CatalogConfig> {
    match config_path {
        Some(path) => Ok(CatalogConfig::from_file(Path::new(path))?),
        None => Ok(CatalogConfig::default()),
    }
}

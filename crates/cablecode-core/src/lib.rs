//! Core library for cable BOQ conversion.
//!
//! This crate provides:
//! - Attribute parsing of free-form cable BOQ lines (cores, size, earth, length)
//! - A priority-ordered rule cascade classifying each line into a cable family
//! - Catalog code and quantity builders (metered stock and roll stock)
//! - A batch fold that threads the fire-section flag across lines

pub mod convert;
pub mod error;
pub mod models;

pub use convert::{CableConverter, LineTransformer, parse_line};
pub use error::{ParseError, Result};
pub use models::config::CatalogConfig;
pub use models::line::{BatchReport, OutputRow, ParsedLine, SkippedLine};

//! BOQ line conversion: attribute parser, rule cascade, and batch fold.

mod batch;
mod engine;
mod parser;
pub mod rules;
pub mod sections;

pub use engine::{CableConverter, LineTransformer};
pub use parser::{normalize_decimal_commas, parse_line};

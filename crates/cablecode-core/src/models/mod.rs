//! Data models for BOQ line conversion.

pub mod config;
pub mod line;

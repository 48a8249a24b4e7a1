//! Shared types, errors, and configuration for Centavo.
//!
//! This crate provides the vocabulary every other crate speaks:
//! - Currency codes and minor-unit exponents
//! - The money error taxonomy
//! - Currency configuration loading

pub mod config;
pub mod error;
pub mod types;

pub use config::{CurrencyConfig, CurrencyEntry};
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, CurrencyCode, MAX_MINOR_UNIT_EXPONENT};

//! Common types used across the workspace.

pub mod currency;

pub use currency::{Currency, CurrencyCode, MAX_MINOR_UNIT_EXPONENT};

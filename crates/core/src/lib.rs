//! Currency-safe exact money for Centavo.
//!
//! This crate contains pure value arithmetic with ZERO web or database
//! dependencies and ZERO floating point. Every operation is a deterministic
//! function of its inputs; `Money` is `Copy` and freely shared across threads.
//!
//! # Modules
//!
//! - `money` - The `Money` value type: parsing, arithmetic, comparison, JSON
//! - `currency` - Currency codes, exponents and the currency registry
//! - `aggregate` - Sum, min, max and average over collections
//! - `format` - Locale-aware display
//!
//! Allocation (`Money::allocate`, `Money::split`) uses the Largest Remainder
//! Method and always sums exactly to the original total.

pub mod aggregate;
mod allocation;
pub mod currency;
pub mod format;
pub mod money;

pub use centavo_shared::{CurrencyConfig, MoneyError, MoneyResult};
pub use currency::{Currency, CurrencyCode, CurrencyDefinition, CurrencyRegistry};
pub use format::{Locale, SymbolPosition};
pub use money::{Money, MoneyRecord};

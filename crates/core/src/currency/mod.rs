//! Currency resolution.
//!
//! Codes and exponents live in `centavo_shared`; this module owns the
//! registry that maps codes to exponents and display metadata.

pub mod registry;

pub use centavo_shared::{Currency, CurrencyCode};
pub use registry::{CurrencyDefinition, CurrencyRegistry};

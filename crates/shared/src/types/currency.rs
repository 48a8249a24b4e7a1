//! Currency codes and minor-unit metadata.
//!
//! A currency is a runtime tag: a three-letter code plus the number of
//! decimal places its minor unit represents. Exponents are data, never
//! assumed to be 2.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// Largest supported minor-unit exponent. `10^18` still fits an `i64`.
pub const MAX_MINOR_UNIT_EXPONENT: u32 = 18;

/// ISO 4217 style currency code: exactly three ASCII uppercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Parses a code, accepting lowercase input and storing it uppercased.
    pub fn new(code: &str) -> MoneyResult<Self> {
        let bytes: [u8; 3] = code
            .as_bytes()
            .try_into()
            .map_err(|_| MoneyError::UnknownCurrency(code.to_string()))?;
        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(MoneyError::UnknownCurrency(code.to_string()));
        }
        Ok(Self(bytes.map(|b| b.to_ascii_uppercase())))
    }

    /// Builds a code from a literal, panicking at compile time when it is not
    /// three uppercase ASCII letters.
    #[must_use]
    pub const fn from_static(code: &[u8; 3]) -> Self {
        let mut i = 0;
        while i < 3 {
            assert!(
                code[i].is_ascii_uppercase(),
                "currency code must be uppercase ASCII"
            );
            i += 1;
        }
        Self(*code)
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

/// A currency tag: code plus minor-unit exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: CurrencyCode,
    minor_unit_exponent: u32,
}

impl Currency {
    /// Creates a currency, rejecting exponents above [`MAX_MINOR_UNIT_EXPONENT`].
    pub fn new(code: CurrencyCode, minor_unit_exponent: u32) -> MoneyResult<Self> {
        if minor_unit_exponent > MAX_MINOR_UNIT_EXPONENT {
            return Err(MoneyError::InvalidExponent {
                code,
                exponent: minor_unit_exponent,
            });
        }
        Ok(Self {
            code,
            minor_unit_exponent,
        })
    }

    /// Const constructor for built-in tables.
    #[must_use]
    pub const fn from_static(code: &[u8; 3], minor_unit_exponent: u32) -> Self {
        assert!(
            minor_unit_exponent <= MAX_MINOR_UNIT_EXPONENT,
            "minor-unit exponent out of range"
        );
        Self {
            code: CurrencyCode::from_static(code),
            minor_unit_exponent,
        }
    }

    /// Returns the currency code.
    #[must_use]
    pub const fn code(&self) -> CurrencyCode {
        self.code
    }

    /// Returns the number of decimal places of the minor unit.
    #[must_use]
    pub const fn minor_unit_exponent(&self) -> u32 {
        self.minor_unit_exponent
    }

    /// Number of minor units in one major unit (`10^exponent`).
    #[must_use]
    pub const fn minor_units_per_major(&self) -> i64 {
        10_i64.pow(self.minor_unit_exponent)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

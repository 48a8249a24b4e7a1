//! Money value type: an integer count of minor units tagged with a currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `i64` minor units; scaling goes through exact `i128`
//! rationals and is rounded exactly once.

mod arithmetic;
mod json;
mod parse;
pub(crate) mod rounding;

#[cfg(test)]
mod props;

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

use centavo_shared::{Currency, CurrencyCode, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::currency::CurrencyRegistry;

pub use json::MoneyRecord;

/// Represents a monetary amount with currency.
///
/// The amount is always a whole number of minor units in
/// `-(2^63 - 1)..=2^63 - 1`; `i64::MIN` is excluded so negation is total.
/// Values are immutable: every operation returns a new `Money`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord", into = "MoneyRecord")]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Parses a decimal string in a currency resolved from the global registry.
    ///
    /// # Example
    ///
    /// ```
    /// use centavo_core::Money;
    ///
    /// let price = Money::of("123.45", "BRL").unwrap();
    /// assert_eq!(price.to_minor_units(), 12345);
    /// assert!(Money::of("1.234", "BRL").is_err());
    /// ```
    pub fn of(amount: &str, code: &str) -> MoneyResult<Self> {
        Self::parse_in(amount, CurrencyRegistry::global().currency(code)?)
    }

    /// Parses a decimal string in an explicit currency.
    ///
    /// Accepts an optional sign, digits and an optional single decimal point.
    /// Fractional digits beyond the currency's exponent are rejected unless
    /// they are all zeros.
    pub fn parse_in(amount: &str, currency: Currency) -> MoneyResult<Self> {
        let minor = parse::parse_minor_units(amount, currency)?;
        Self::checked(minor, currency, "parse")
    }

    /// Creates a value from a count of minor units, resolving the code globally.
    pub fn from_minor_units(amount: i64, code: &str) -> MoneyResult<Self> {
        Self::from_minor_units_in(amount, CurrencyRegistry::global().currency(code)?)
    }

    /// Creates a value from a count of minor units in an explicit currency.
    pub fn from_minor_units_in(amount: i64, currency: Currency) -> MoneyResult<Self> {
        if amount == i64::MIN {
            return Err(MoneyError::invalid_amount(format!(
                "{amount} minor units is outside the representable range"
            )));
        }
        Ok(Self { amount, currency })
    }

    /// Creates a value from a decimal count of minor units.
    ///
    /// Fails with `InvalidAmount` when the count has a fractional part or does
    /// not fit the representable range.
    pub fn from_minor_units_decimal(amount: Decimal, code: &str) -> MoneyResult<Self> {
        if !amount.fract().is_zero() {
            return Err(MoneyError::invalid_amount(format!(
                "{amount} is not a whole number of minor units"
            )));
        }
        let whole = amount.to_i64().ok_or_else(|| {
            MoneyError::invalid_amount(format!(
                "{amount} minor units is outside the representable range"
            ))
        })?;
        Self::from_minor_units(whole, code)
    }

    /// Creates a zero amount, resolving the code globally.
    pub fn zero(code: &str) -> MoneyResult<Self> {
        Ok(Self::zero_in(CurrencyRegistry::global().currency(code)?))
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero_in(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Range-checks a wide intermediate result.
    pub(crate) fn checked(
        amount: i128,
        currency: Currency,
        operation: &'static str,
    ) -> MoneyResult<Self> {
        match i64::try_from(amount) {
            Ok(amount) if amount != i64::MIN => Ok(Self { amount, currency }),
            _ => {
                debug!(currency = %currency, operation, "Money result out of range");
                Err(MoneyError::Overflow { operation })
            }
        }
    }

    /// Returns the amount as a count of minor units.
    #[must_use]
    pub const fn to_minor_units(&self) -> i64 {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the currency code.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency.code()
    }

    /// Returns the exact amount in major units, e.g. `123.45` for 12345 cents.
    #[must_use]
    pub fn to_major_units(&self) -> Decimal {
        Decimal::new(self.amount, self.currency.minor_unit_exponent())
    }

    /// Lossless decimal string with exactly `minor_unit_exponent` fractional
    /// digits, e.g. `"-0.05"`.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        self.to_major_units().to_string()
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Returns true if both values share a currency, exponent included.
    ///
    /// Two currencies with the same code but different exponents count minor
    /// units of different sizes, so they never combine.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    /// Fails with `CurrencyMismatch` unless both values share a currency.
    pub fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.same_currency(other) {
            return Ok(());
        }
        debug!(
            left = %self.currency,
            left_exponent = self.currency.minor_unit_exponent(),
            right = %other.currency,
            right_exponent = other.currency.minor_unit_exponent(),
            "Rejected operation across currencies"
        );
        Err(MoneyError::CurrencyMismatch {
            left: self.currency.code(),
            right: other.currency.code(),
        })
    }

    /// Orders two values of the same currency.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Returns true if `self > other`.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Returns true if `self < other`.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }
}

/// Values in different currencies are unordered.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_currency(other)
            .then(|| self.amount.cmp(&other.amount))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_decimal(), self.currency.code())
    }
}

//! Decimal literal parsing into minor units.

use centavo_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Parses `[+-]digits[.digits]` into a count of minor units of `currency`.
///
/// Trailing fractional zeros carry no value and are dropped before the
/// precision check, so `"1.500"` is accepted at exponent 2.
pub(super) fn parse_minor_units(input: &str, currency: Currency) -> MoneyResult<i128> {
    let exponent = currency.minor_unit_exponent();
    let malformed = || MoneyError::invalid_amount(format!("{input:?} is not a decimal literal"));

    let (negative, unsigned) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(integer) || fraction.is_some_and(|f| !is_digits(f)) {
        return Err(malformed());
    }

    let significant = fraction.unwrap_or("").trim_end_matches('0');
    if significant.len() > exponent as usize {
        return Err(MoneyError::invalid_amount(format!(
            "{input:?} has more than {exponent} fractional digits"
        )));
    }

    let integer = match integer.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let sign = if negative { "-" } else { "" };
    let canonical = if significant.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{significant}")
    };

    let overflow = || MoneyError::Overflow { operation: "parse" };
    let value = Decimal::from_str_exact(&canonical).map_err(|_| overflow())?;
    let scale = Decimal::from(currency.minor_units_per_major());
    value
        .checked_mul(scale)
        .and_then(|minor| minor.to_i128())
        .ok_or_else(overflow)
}

//! Amount allocation using the Largest Remainder Method.
//!
//! The parts of an allocation always sum EXACTLY to the original total, for
//! negative totals and uneven or fractional ratios too.
//!
//! The method works by:
//! 1. Compute each exact share `total * ratio_i / sum(ratios)`
//! 2. Truncate each share toward zero
//! 3. Compute the leftover (total - sum of truncated shares)
//! 4. Hand leftover units out one at a time, largest fractional remainder
//!    first, ties going to the lowest index

use centavo_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use tracing::debug;

use crate::money::Money;
use crate::money::rounding::{gcd, mul_div_trunc, ratio_parts};

impl Money {
    /// Splits the amount proportionally to non-negative ratio weights.
    ///
    /// Returns one part per ratio, in input order, all in this currency.
    ///
    /// # Example
    ///
    /// ```
    /// use centavo_core::Money;
    ///
    /// let total = Money::of("100.00", "BRL").unwrap();
    /// let parts: Vec<String> = total
    ///     .allocate([1, 1, 1])
    ///     .unwrap()
    ///     .iter()
    ///     .map(Money::to_decimal)
    ///     .collect();
    /// assert_eq!(parts, ["33.34", "33.33", "33.33"]);
    /// ```
    pub fn allocate<I>(&self, ratios: I) -> MoneyResult<Vec<Self>>
    where
        I: IntoIterator,
        I::Item: Into<Decimal>,
    {
        let weights = integer_weights(ratios)?;
        let parts = largest_remainder(i128::from(self.to_minor_units()), &weights)
            .ok_or(MoneyError::Overflow {
                operation: "allocate",
            })?;
        parts
            .into_iter()
            .map(|part| Self::checked(part, self.currency(), "allocate"))
            .collect()
    }

    /// Splits the amount into `count` equal parts, remainder to the first parts.
    pub fn split(&self, count: usize) -> MoneyResult<Vec<Self>> {
        if count == 0 {
            return Err(MoneyError::invalid_amount(
                "cannot split into zero parts",
            ));
        }
        self.allocate(std::iter::repeat_n(1_u8, count))
    }
}

/// Validates ratios and rescales them to coprime integers over a common
/// denominator.
fn integer_weights<I>(ratios: I) -> MoneyResult<Vec<i128>>
where
    I: IntoIterator,
    I::Item: Into<Decimal>,
{
    let ratios: Vec<Decimal> = ratios.into_iter().map(Into::into).collect();

    if ratios.is_empty() {
        return Err(MoneyError::invalid_amount(
            "allocation needs at least one ratio",
        ));
    }
    if let Some(negative) = ratios.iter().find(|r| r.is_sign_negative() && !r.is_zero()) {
        return Err(MoneyError::invalid_amount(format!(
            "allocation ratio {negative} is negative"
        )));
    }
    if ratios.iter().all(Decimal::is_zero) {
        return Err(MoneyError::invalid_amount(
            "allocation ratios must not all be zero",
        ));
    }

    let parts: Vec<(i128, i128)> = ratios.into_iter().map(ratio_parts).collect();
    let common = parts.iter().map(|(_, den)| *den).max().unwrap_or(1);
    let weights: Vec<i128> = parts
        .into_iter()
        .map(|(num, den)| {
            // Denominators are powers of ten, so `common / den` is exact.
            num.checked_mul(common / den).ok_or(MoneyError::Overflow {
                operation: "allocate",
            })
        })
        .collect::<MoneyResult<_>>()?;

    // At least one weight is non-zero, so the divisor is positive.
    let divisor = weights
        .iter()
        .fold(0, |acc, w| gcd(acc, w.unsigned_abs()));
    let divisor = i128::try_from(divisor).map_err(|_| MoneyError::Overflow {
        operation: "allocate",
    })?;
    Ok(weights.into_iter().map(|w| w / divisor).collect())
}

/// Largest-remainder split of `total` by integer `weights`.
///
/// Returns `None` on overflow.
fn largest_remainder(total: i128, weights: &[i128]) -> Option<Vec<i128>> {
    let weight_sum = weights
        .iter()
        .try_fold(0_i128, |acc, w| acc.checked_add(*w))?;

    let mut parts = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    for (index, weight) in weights.iter().enumerate() {
        // Truncates toward zero for either sign.
        let (share, remainder) = mul_div_trunc(total, *weight, weight_sum)?;
        parts.push(share);
        remainders.push((index, remainder));
    }

    let allocated: i128 = parts.iter().sum();
    let leftover = total - allocated;
    if leftover == 0 {
        return Some(parts);
    }

    // Largest remainder first; equal remainders keep input order.
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let step = leftover.signum();
    let units = usize::try_from(leftover.unsigned_abs()).ok()?;
    debug!(
        parts = weights.len(),
        leftover = %leftover,
        "Distributing leftover minor units"
    );
    for (index, _) in remainders.iter().take(units) {
        parts[*index] += step;
    }

    Some(parts)
}

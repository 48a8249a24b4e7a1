//! Aggregation over collections of money.
//!
//! Every collection must be non-empty and single-currency. There is no
//! implicit zero: an empty collection has no currency to default to.

use std::borrow::Borrow;
use std::cmp::Ordering;

use centavo_shared::{MoneyError, MoneyResult};

use crate::money::Money;
use crate::money::rounding::mul_div_round_half_away;

/// Sums a non-empty, single-currency collection.
pub fn sum<I>(moneys: I) -> MoneyResult<Money>
where
    I: IntoIterator,
    I::Item: Borrow<Money>,
{
    let (first, total, _) = fold(moneys, "sum")?;
    Money::checked(total, first.currency(), "sum")
}

/// Mean of a non-empty, single-currency collection, rounded like `divide`.
///
/// An empty collection has a zero count and fails with `DivisionByZero`.
pub fn average<I>(moneys: I) -> MoneyResult<Money>
where
    I: IntoIterator,
    I::Item: Borrow<Money>,
{
    let mut moneys = moneys.into_iter().peekable();
    if moneys.peek().is_none() {
        return Err(MoneyError::DivisionByZero);
    }
    let (first, total, count) = fold(moneys, "average")?;
    let mean = mul_div_round_half_away(total, 1, count).ok_or(MoneyError::Overflow {
        operation: "average",
    })?;
    Money::checked(mean, first.currency(), "average")
}

/// Smallest element of a non-empty, single-currency collection.
pub fn min<I>(moneys: I) -> MoneyResult<Money>
where
    I: IntoIterator,
    I::Item: Borrow<Money>,
{
    extremum(moneys, Ordering::Less, "min")
}

/// Largest element of a non-empty, single-currency collection.
pub fn max<I>(moneys: I) -> MoneyResult<Money>
where
    I: IntoIterator,
    I::Item: Borrow<Money>,
{
    extremum(moneys, Ordering::Greater, "max")
}

/// Returns the first element, the `i128` total and the element count.
fn fold<I>(moneys: I, operation: &str) -> MoneyResult<(Money, i128, i128)>
where
    I: IntoIterator,
    I::Item: Borrow<Money>,
{
    let mut iter = moneys.into_iter();
    let first = iter.next().ok_or_else(|| {
        MoneyError::invalid_amount(format!("cannot {operation} an empty collection"))
    })?;
    let first = *Borrow::<Money>::borrow(&first);

    let mut total = i128::from(first.to_minor_units());
    let mut count = 1_i128;
    for money in iter {
        let money: &Money = money.borrow();
        first.ensure_same_currency(money)?;
        // i64 terms cannot overflow an i128 accumulator in practice.
        total += i128::from(money.to_minor_units());
        count += 1;
    }
    Ok((first, total, count))
}

fn extremum<I>(moneys: I, wanted: Ordering, operation: &str) -> MoneyResult<Money>
where
    I: IntoIterator,
    I::Item: Borrow<Money>,
{
    let mut iter = moneys.into_iter();
    let first = iter.next().ok_or_else(|| {
        MoneyError::invalid_amount(format!("cannot take the {operation} of an empty collection"))
    })?;
    let mut best = *Borrow::<Money>::borrow(&first);

    for money in iter {
        let money: &Money = money.borrow();
        if money.compare(&best)? == wanted {
            best = *money;
        }
    }
    Ok(best)
}

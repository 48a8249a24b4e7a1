//! Exact rational rounding.
//!
//! Scalars are `Decimal`s, i.e. `mantissa / 10^scale`. Scaling an amount
//! multiplies by one integer, divides by another and rounds once, half away
//! from zero. Banker's rounding is NOT used here.
//!
//! A 96-bit mantissa times a 64-bit amount does not fit `i128`, so the
//! product is carried in 256 bits and only the quotient must fit.

use rust_decimal::Decimal;

/// Splits a decimal into an exact `(numerator, denominator)` pair with a
/// positive denominator.
pub(crate) fn ratio_parts(value: Decimal) -> (i128, i128) {
    let normalized = value.normalize();
    (normalized.mantissa(), 10_i128.pow(normalized.scale()))
}

/// Greatest common divisor of two magnitudes; `gcd(0, 0) == 0`.
pub(crate) fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Full 256-bit product of two `u128`s as `(high, low)`.
fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    const MASK: u128 = (1 << 64) - 1;
    let (a_hi, a_lo) = (a >> 64, a & MASK);
    let (b_hi, b_lo) = (b >> 64, b & MASK);

    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    // At most three 64-bit terms, so no overflow.
    let middle = (lo_lo >> 64) + (lo_hi & MASK) + (hi_lo & MASK);
    let low = (lo_lo & MASK) | (middle << 64);
    let high = hi_hi + (lo_hi >> 64) + (hi_lo >> 64) + (middle >> 64);
    (high, low)
}

/// Divides the 256-bit `(high, low)` by `divisor`.
///
/// Returns `(quotient, remainder)`, or `None` for a zero divisor or a
/// quotient that needs more than 128 bits.
fn wide_div_rem(high: u128, low: u128, divisor: u128) -> Option<(u128, u128)> {
    if divisor == 0 || high >= divisor {
        return None;
    }
    let mut remainder = high;
    let mut quotient = 0_u128;
    for bit in (0..128).rev() {
        // The shifted-out top bit makes the running remainder 129 bits wide.
        let carry = remainder >> 127;
        remainder = (remainder << 1) | ((low >> bit) & 1);
        quotient <<= 1;
        if carry == 1 || remainder >= divisor {
            remainder = remainder.wrapping_sub(divisor);
            quotient |= 1;
        }
    }
    Some((quotient, remainder))
}

/// `value * factor / divisor` truncated toward zero, with the magnitude of
/// the remainder.
///
/// Returns `None` for a zero divisor or a quotient outside `i128`.
pub(crate) fn mul_div_trunc(value: i128, factor: i128, divisor: i128) -> Option<(i128, u128)> {
    let (high, low) = widening_mul(value.unsigned_abs(), factor.unsigned_abs());
    let (quotient, remainder) = wide_div_rem(high, low, divisor.unsigned_abs())?;
    let quotient = i128::try_from(quotient).ok()?;
    let negative = (value < 0) ^ (factor < 0) ^ (divisor < 0);
    Some((if negative { -quotient } else { quotient }, remainder))
}

/// `value * factor / divisor` rounded once, half away from zero.
///
/// Returns `None` for a zero divisor or on overflow.
pub(crate) fn mul_div_round_half_away(value: i128, factor: i128, divisor: i128) -> Option<i128> {
    let (quotient, remainder) = mul_div_trunc(value, factor, divisor)?;
    // remainder < |divisor|, so this is `2 * remainder >= |divisor|`.
    if remainder != 0 && remainder >= divisor.unsigned_abs() - remainder {
        let negative = (value < 0) ^ (factor < 0) ^ (divisor < 0);
        quotient.checked_add(if negative { -1 } else { 1 })
    } else {
        Some(quotient)
    }
}

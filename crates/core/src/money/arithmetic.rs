//! Currency-checked arithmetic.
//!
//! Addition and subtraction are exact. Scaling by a `Decimal` is exact rational
//! arithmetic followed by one round-half-away-from-zero step, so
//! `2.5 -> 3` and `-2.5 -> -3`.

use centavo_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;

use super::Money;
use super::rounding::{mul_div_round_half_away, ratio_parts};

impl Money {
    /// Adds two values of the same currency.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Self::checked(
            i128::from(self.amount) + i128::from(other.amount),
            self.currency,
            "add",
        )
    }

    /// Subtracts `other` from `self`; both must share a currency.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Self::checked(
            i128::from(self.amount) - i128::from(other.amount),
            self.currency,
            "subtract",
        )
    }

    /// Multiplies by a dimensionless factor and rounds to a whole minor unit.
    ///
    /// # Example
    ///
    /// ```
    /// use centavo_core::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let ten = Money::of("10.00", "BRL").unwrap();
    /// // 1000 * 0.005 = 5 minor units
    /// let fee = ten.multiply(Decimal::new(5, 3)).unwrap();
    /// assert_eq!(fee.to_decimal(), "0.05");
    /// ```
    pub fn multiply(&self, factor: impl Into<Decimal>) -> MoneyResult<Self> {
        let (numerator, denominator) = ratio_parts(factor.into());
        self.scale_by(numerator, denominator, "multiply")
    }

    /// Divides by a non-zero dimensionless divisor and rounds to a whole minor unit.
    pub fn divide(&self, divisor: impl Into<Decimal>) -> MoneyResult<Self> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let (numerator, denominator) = ratio_parts(divisor);
        self.scale_by(denominator, numerator, "divide")
    }

    /// Takes `percent`% of the amount, i.e. `multiply(percent / 100)`.
    pub fn percentage(&self, percent: impl Into<Decimal>) -> MoneyResult<Self> {
        let (numerator, denominator) = ratio_parts(percent.into());
        self.scale_by(numerator, denominator * 100, "percentage")
    }

    /// Flips the sign.
    #[must_use]
    pub const fn negate(&self) -> Self {
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub const fn absolute(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    fn scale_by(
        &self,
        numerator: i128,
        denominator: i128,
        operation: &'static str,
    ) -> MoneyResult<Self> {
        let rounded = mul_div_round_half_away(i128::from(self.amount), numerator, denominator)
            .ok_or(MoneyError::Overflow { operation })?;
        Self::checked(rounded, self.currency, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use centavo_shared::CurrencyCode;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn brl(amount: &str) -> Money {
        Money::of(amount, "BRL").unwrap()
    }

    fn usd(amount: &str) -> Money {
        Money::of(amount, "USD").unwrap()
    }

    #[test]
    fn test_add_and_subtract() {
        assert_eq!(brl("1.10").add(&brl("2.25")).unwrap(), brl("3.35"));
        assert_eq!(brl("1.10").subtract(&brl("2.25")).unwrap(), brl("-1.15"));
        assert_eq!(brl("0.10").add(&brl("0.20")).unwrap().to_decimal(), "0.30");
    }

    #[test]
    fn test_add_currency_mismatch() {
        let expected = Err(MoneyError::CurrencyMismatch {
            left: CurrencyCode::from_static(b"BRL"),
            right: CurrencyCode::from_static(b"USD"),
        });
        assert_eq!(brl("1.00").add(&usd("1.00")), expected);
        assert_eq!(brl("1.00").subtract(&usd("1.00")), expected);
    }

    #[test]
    fn test_add_overflow() {
        let max = Money::from_minor_units(i64::MAX, "BRL").unwrap();
        assert_eq!(
            max.add(&brl("0.01")),
            Err(MoneyError::Overflow { operation: "add" })
        );
        assert_eq!(
            max.negate().subtract(&brl("0.01")),
            Err(MoneyError::Overflow {
                operation: "subtract"
            })
        );
    }

    #[test]
    fn test_multiply_rounding_boundary() {
        // 1000 * 0.005 = 5 exactly
        assert_eq!(brl("10.00").multiply(dec!(0.005)).unwrap(), brl("0.05"));
        // 5 * 0.5 = 2.5 -> 3, and -2.5 -> -3
        assert_eq!(brl("0.05").multiply(dec!(0.5)).unwrap(), brl("0.03"));
        assert_eq!(brl("-0.05").multiply(dec!(0.5)).unwrap(), brl("-0.03"));
        assert_eq!(brl("0.05").multiply(dec!(-0.5)).unwrap(), brl("-0.03"));
        // 15 * 0.5 = 7.5 -> 8 (banker's would give 8 too, 2.5 is the telling case)
        assert_eq!(brl("0.15").multiply(dec!(0.5)).unwrap(), brl("0.08"));
    }

    #[rstest]
    #[case("10.00", dec!(3), "30.00")]
    #[case("10.00", dec!(1.5), "15.00")]
    #[case("0.01", dec!(0.49), "0.00")]
    #[case("0.01", dec!(0.5), "0.01")]
    #[case("-0.01", dec!(0.5), "-0.01")]
    #[case("19.99", dec!(0), "0.00")]
    #[case("33.33", dec!(-1), "-33.33")]
    fn test_multiply(#[case] amount: &str, #[case] factor: Decimal, #[case] expected: &str) {
        assert_eq!(brl(amount).multiply(factor).unwrap().to_decimal(), expected);
    }

    #[test]
    fn test_multiply_accepts_integers() {
        assert_eq!(brl("1.25").multiply(4).unwrap(), brl("5.00"));
        assert_eq!(brl("1.25").multiply(-2_i64).unwrap(), brl("-2.50"));
    }

    #[test]
    fn test_multiply_overflow() {
        let big = Money::from_minor_units(i64::MAX / 2 + 1, "BRL").unwrap();
        assert_eq!(
            big.multiply(2),
            Err(MoneyError::Overflow {
                operation: "multiply"
            })
        );
    }

    #[test]
    fn test_long_scalars_do_not_overflow() {
        let money = Money::from_minor_units(1_000_000_000_000_000, "BRL").unwrap();
        assert_eq!(
            money
                .multiply(dec!(0.1234567890123456789012345678))
                .unwrap()
                .to_minor_units(),
            123_456_789_012_346
        );
        assert_eq!(
            money
                .divide(dec!(3.000000000000000000000000001))
                .unwrap()
                .to_minor_units(),
            333_333_333_333_333
        );
        assert_eq!(
            money
                .percentage(dec!(12.345678901234567890123456789))
                .unwrap()
                .to_minor_units(),
            123_456_789_012_346
        );

        let max = Money::from_minor_units(i64::MAX, "BRL").unwrap();
        assert_eq!(
            max.multiply(dec!(0.9999999999999999999999999999)).unwrap(),
            max
        );
    }

    #[rstest]
    #[case("10.00", dec!(3), "3.33")]
    #[case("20.00", dec!(3), "6.67")]
    #[case("-20.00", dec!(3), "-6.67")]
    #[case("0.05", dec!(2), "0.03")]
    #[case("-0.05", dec!(2), "-0.03")]
    #[case("10.00", dec!(0.5), "20.00")]
    #[case("10.00", dec!(-4), "-2.50")]
    fn test_divide(#[case] amount: &str, #[case] divisor: Decimal, #[case] expected: &str) {
        assert_eq!(brl(amount).divide(divisor).unwrap().to_decimal(), expected);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(brl("10.00").divide(0), Err(MoneyError::DivisionByZero));
        assert_eq!(
            brl("10.00").divide(dec!(0.000)),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[rstest]
    #[case("200.00", dec!(15), "30.00")]
    #[case("10.00", dec!(12.5), "1.25")]
    #[case("0.10", dec!(25), "0.03")]
    #[case("-0.10", dec!(25), "-0.03")]
    #[case("99.99", dec!(100), "99.99")]
    #[case("50.00", dec!(-10), "-5.00")]
    fn test_percentage(#[case] amount: &str, #[case] percent: Decimal, #[case] expected: &str) {
        assert_eq!(brl(amount).percentage(percent).unwrap().to_decimal(), expected);
    }

    #[test]
    fn test_negate_and_absolute() {
        assert_eq!(brl("12.34").negate(), brl("-12.34"));
        assert_eq!(-brl("-12.34"), brl("12.34"));
        assert_eq!(brl("-12.34").absolute(), brl("12.34"));
        assert_eq!(brl("12.34").absolute(), brl("12.34"));
        assert_eq!(brl("0").negate(), brl("0"));
        assert_eq!(brl("1.00").negate().currency_code().as_str(), "BRL");
    }

    #[test]
    fn test_operations_do_not_mutate() {
        let original = brl("10.00");
        let _ = original.add(&brl("1.00")).unwrap();
        let _ = original.multiply(3).unwrap();
        assert_eq!(original, brl("10.00"));
    }
}

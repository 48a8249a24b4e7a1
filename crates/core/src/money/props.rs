//! Property-based tests for money operations.
//!
//! - Allocation sum invariant
//! - Currency safety
//! - Decimal and JSON round-trip
//! - Rounding symmetry

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::Money;
use crate::aggregate;
use centavo_shared::{Currency, MoneyError, MoneyResult};

/// Strategy over the registered currencies with interesting exponents.
fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::from_static(b"BRL", 2)),
        Just(Currency::from_static(b"JPY", 0)),
        Just(Currency::from_static(b"KWD", 3)),
        Just(Currency::from_static(b"CLF", 4)),
    ]
}

/// Any representable minor-unit amount.
fn any_amount() -> impl Strategy<Value = i64> {
    (i64::MIN + 1)..=i64::MAX
}

/// Amounts of realistic size (up to ±10^13 minor units).
fn modest_amount() -> impl Strategy<Value = i64> {
    -10_000_000_000_000_i64..10_000_000_000_000_i64
}

/// 1 to 20 non-negative ratios with up to 3 decimals, at least one non-zero.
fn ratios() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0u32..100_000, 1..20)
        .prop_filter("all ratios zero", |values| values.iter().any(|v| *v > 0))
        .prop_map(|values| values.into_iter().map(|v| Decimal::new(i64::from(v), 3)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Allocation Sum Invariant
    // =========================================================================

    /// Parts always sum exactly to the total, one part per ratio.
    #[test]
    fn prop_allocate_sum_invariant(
        amount in modest_amount(),
        currency in currency(),
        ratios in ratios(),
    ) {
        let total = Money::from_minor_units_in(amount, currency).unwrap();
        let parts = total.allocate(ratios.clone()).unwrap();

        prop_assert_eq!(parts.len(), ratios.len());
        prop_assert_eq!(aggregate::sum(&parts).unwrap(), total);
        prop_assert!(parts.iter().all(|p| p.currency() == currency));
    }

    /// The sum invariant survives full-precision ratios at any amount.
    #[test]
    fn prop_allocate_long_ratios(
        amount in any_amount(),
        ratios in prop::collection::vec(1i64..i64::MAX, 1..8),
        scale in 0u32..=28,
    ) {
        let total = Money::from_minor_units(amount, "BRL").unwrap();
        let ratios: Vec<Decimal> = ratios.into_iter().map(|r| Decimal::new(r, scale)).collect();
        let parts = total.allocate(ratios).unwrap();
        prop_assert_eq!(aggregate::sum(&parts).unwrap(), total);
    }

    /// Parts never carry the opposite sign of the total.
    #[test]
    fn prop_allocate_parts_follow_total_sign(
        amount in modest_amount(),
        ratios in ratios(),
    ) {
        let total = Money::from_minor_units(amount, "BRL").unwrap();
        for part in total.allocate(ratios).unwrap() {
            prop_assert!(part.to_minor_units().signum() * amount.signum() >= 0);
        }
    }

    /// A negative total splits as the mirror image of its positive counterpart.
    #[test]
    fn prop_allocate_sign_symmetry(
        amount in modest_amount(),
        ratios in ratios(),
    ) {
        let total = Money::from_minor_units(amount, "BRL").unwrap();
        let mirrored: Vec<Money> = total
            .negate()
            .allocate(ratios.clone())
            .unwrap()
            .iter()
            .map(Money::negate)
            .collect();
        prop_assert_eq!(total.allocate(ratios).unwrap(), mirrored);
    }

    /// Equal split parts differ by at most one minor unit.
    #[test]
    fn prop_split_is_fair(
        amount in any_amount(),
        count in 1usize..50,
    ) {
        let parts = Money::from_minor_units(amount, "BRL").unwrap().split(count).unwrap();
        let smallest = parts.iter().map(Money::to_minor_units).min().unwrap();
        let largest = parts.iter().map(Money::to_minor_units).max().unwrap();
        prop_assert!(largest - smallest <= 1);
        prop_assert_eq!(parts.len(), count);
    }

    // =========================================================================
    // Currency Safety
    // =========================================================================

    /// Operations across currencies never yield a value.
    #[test]
    fn prop_cross_currency_always_rejected(
        a in modest_amount(),
        b in modest_amount(),
    ) {
        let brl = Money::from_minor_units(a, "BRL").unwrap();
        let usd = Money::from_minor_units(b, "USD").unwrap();

        let mismatch = |result: MoneyResult<Money>| {
            matches!(result, Err(MoneyError::CurrencyMismatch { .. }))
        };

        prop_assert!(mismatch(brl.add(&usd)), "cross-currency add must fail");
        prop_assert!(mismatch(brl.subtract(&usd)), "cross-currency subtract must fail");
        prop_assert!(
            matches!(brl.compare(&usd), Err(MoneyError::CurrencyMismatch { .. })),
            "cross-currency compare must fail"
        );
        prop_assert!(mismatch(aggregate::sum(&[brl, usd])), "cross-currency sum must fail");
    }

    // =========================================================================
    // Round-trip
    // =========================================================================

    /// `of(to_decimal(m)) == m`
    #[test]
    fn prop_decimal_round_trip(
        amount in any_amount(),
        currency in currency(),
    ) {
        let money = Money::from_minor_units_in(amount, currency).unwrap();
        prop_assert_eq!(Money::parse_in(&money.to_decimal(), currency).unwrap(), money);
    }

    /// `from_json(to_json(m)) == m` and the wire form survives a second trip.
    #[test]
    fn prop_json_round_trip(amount in any_amount()) {
        let money = Money::from_minor_units(amount, "BRL").unwrap();
        let json = money.to_json();
        let back = Money::from_json(&json).unwrap();
        prop_assert_eq!(back, money);
        prop_assert_eq!(back.to_json(), json);
        prop_assert_eq!(Money::from_json_str(&money.to_json_string()).unwrap(), money);
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Rounding is symmetric around zero.
    #[test]
    fn prop_multiply_sign_symmetry(
        amount in modest_amount(),
        factor in -100_000i64..100_000,
        scale in 0u32..6,
    ) {
        let money = Money::from_minor_units(amount, "BRL").unwrap();
        let factor = Decimal::new(factor, scale);
        prop_assert_eq!(
            money.negate().multiply(factor).unwrap(),
            money.multiply(factor).unwrap().negate()
        );
    }

    /// Rounded result is within half a minor unit of the exact product.
    #[test]
    fn prop_multiply_within_half_unit(
        amount in modest_amount(),
        factor in -100_000i64..100_000,
        scale in 0u32..6,
    ) {
        let money = Money::from_minor_units(amount, "BRL").unwrap();
        let factor = Decimal::new(factor, scale);
        let exact = Decimal::from(amount) * factor;
        let rounded = Decimal::from(money.multiply(factor).unwrap().to_minor_units());
        prop_assert!((rounded - exact).abs() <= Decimal::new(5, 1));
    }

    /// `a + b - b == a`
    #[test]
    fn prop_add_subtract_inverse(
        a in modest_amount(),
        b in modest_amount(),
    ) {
        let a = Money::from_minor_units(a, "BRL").unwrap();
        let b = Money::from_minor_units(b, "BRL").unwrap();
        prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
    }

    /// Dividing by zero never produces a value.
    #[test]
    fn prop_divide_by_zero_rejected(amount in any_amount()) {
        let money = Money::from_minor_units(amount, "BRL").unwrap();
        prop_assert_eq!(money.divide(0), Err(MoneyError::DivisionByZero));
    }
}

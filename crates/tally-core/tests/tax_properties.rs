//! Property tests for the rounding arithmetic and its bounds.

use proptest::prelude::*;
use tally_core::tax::tax_for;
use tally_core::{
    aggregate, Item, Money, StandardTaxCalculator, TaxRate, MAX_LINE_AMOUNT_CENTS,
};

const UNIT: i64 = 5;

fn exact_ceil(price_cents: i64, pct: i64) -> i64 {
    (price_cents * pct + 99) / 100
}

proptest! {
    #[test]
    fn test_tax_is_a_multiple_of_the_unit(
        price_cents in 0i64..=100_000_000,
        pct in prop::sample::select(vec![0u32, 5, 10, 15]),
    ) {
        let tax = tax_for(Money::from_cents(price_cents), TaxRate::from_percent(pct), UNIT);
        prop_assert_eq!(tax.cents() % UNIT, 0);
    }

    #[test]
    fn test_tax_covers_exact_ceiling_within_one_unit(
        price_cents in 0i64..=100_000_000,
        pct in prop::sample::select(vec![0u32, 5, 10, 15]),
    ) {
        let tax = tax_for(Money::from_cents(price_cents), TaxRate::from_percent(pct), UNIT);
        let floor = exact_ceil(price_cents, pct as i64);
        prop_assert!(tax.cents() >= floor);
        prop_assert!(tax.cents() - floor < UNIT);
    }

    #[test]
    fn test_zero_rate_never_taxes(price_cents in 0i64..=i64::MAX / 20_000) {
        let tax = tax_for(Money::from_cents(price_cents), TaxRate::zero(), UNIT);
        prop_assert!(tax.is_zero());
    }

    #[test]
    fn test_rounding_is_idempotent(cents in 0i64..=1_000_000_000) {
        let once = Money::from_cents(cents).round_up_to_unit(UNIT);
        prop_assert_eq!(once.round_up_to_unit(UNIT), once);
    }

    #[test]
    fn test_accepted_items_always_total(
        quantity in 1i64..=1_000_000,
        price_cents in 0i64..=MAX_LINE_AMOUNT_CENTS,
    ) {
        match Item::new(quantity, "imported widget", price_cents) {
            Ok(item) => {
                let receipt = aggregate(&[item], &StandardTaxCalculator::default());
                prop_assert!(receipt.is_ok());
            }
            Err(_) => {
                prop_assert!(quantity.saturating_mul(price_cents) > MAX_LINE_AMOUNT_CENTS);
            }
        }
    }

    #[test]
    fn test_rounding_preserves_multiples(multiple in 0i64..=200_000_000) {
        let cents = multiple * UNIT;
        prop_assert_eq!(Money::from_cents(cents).round_up_to_unit(UNIT).cents(), cents);
    }
}

#[test]
fn test_rounding_examples() {
    assert_eq!(Money::from_cents(715).round_up_to_unit(UNIT).cents(), 715);
    assert_eq!(Money::from_cents(0).round_up_to_unit(UNIT).cents(), 0);
}

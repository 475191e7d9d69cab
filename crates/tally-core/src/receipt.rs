//! # Receipt Aggregation
//!
//! Folds priced items into per-line and grand totals.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each Item (input order):                                           │
//! │      unit_taxed  = calculator.calculate_tax(item)                       │
//! │      line_total  = unit_taxed × quantity                                │
//! │      line_tax    = (unit_taxed − price) × quantity                      │
//! │                                                                         │
//! │  total_sales_taxes = Σ line_tax         (checked, never wraps)          │
//! │  total_price       = Σ line_total       (checked, never wraps)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::tax::TaxCalculator;
use crate::types::Item;

/// One printed line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptEntry {
    pub name: String,
    pub quantity: i64,
    /// Taxed unit price × quantity.
    #[serde(rename = "total_cost_cents")]
    pub total_cost: Money,
    /// Tax portion of `total_cost`.
    #[serde(rename = "tax_amount_cents")]
    pub tax_amount: Money,
}

/// The complete output of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub entries: Vec<ReceiptEntry>,
    #[serde(rename = "total_sales_taxes_cents")]
    pub total_sales_taxes: Money,
    #[serde(rename = "total_price_cents")]
    pub total_price: Money,
}

impl Receipt {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Prices every item with `calculator` and sums the results.
///
/// Entries keep the input order. An empty slice yields an all-zero receipt.
/// Every product and sum is checked; a total that does not fit in `i64`
/// cents fails with [`CoreError::AmountOverflow`] naming the item.
///
/// ## Example
/// ```rust
/// use tally_core::{aggregate, Item, StandardTaxCalculator};
///
/// let items = vec![
///     Item::new(1, "book", 1249).unwrap(),
///     Item::new(1, "music CD", 1499).unwrap(),
/// ];
/// let receipt = aggregate(&items, &StandardTaxCalculator::default()).unwrap();
///
/// assert_eq!(receipt.total_sales_taxes.cents(), 150);
/// assert_eq!(receipt.total_price.cents(), 2898);
/// ```
pub fn aggregate<C>(items: &[Item], calculator: &C) -> CoreResult<Receipt>
where
    C: TaxCalculator + ?Sized,
{
    let mut receipt = Receipt::default();

    for item in items {
        let overflow = || CoreError::AmountOverflow {
            item: item.name().to_string(),
        };

        let unit_taxed = calculator.calculate_tax(item);
        let total_cost = unit_taxed
            .checked_mul_quantity(item.quantity())
            .ok_or_else(overflow)?;
        let tax_amount = unit_taxed
            .checked_sub(item.price())
            .and_then(|tax| tax.checked_mul_quantity(item.quantity()))
            .ok_or_else(overflow)?;

        receipt.total_sales_taxes = receipt
            .total_sales_taxes
            .checked_add(tax_amount)
            .ok_or_else(overflow)?;
        receipt.total_price = receipt
            .total_price
            .checked_add(total_cost)
            .ok_or_else(overflow)?;

        receipt.entries.push(ReceiptEntry {
            name: item.name().to_string(),
            quantity: item.quantity(),
            total_cost,
            tax_amount,
        });
    }

    debug!(
        entries = receipt.entries.len(),
        total_sales_taxes_cents = receipt.total_sales_taxes.cents(),
        total_price_cents = receipt.total_price.cents(),
        "aggregated receipt"
    );

    Ok(receipt)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Adds a flat 50 cents per unit regardless of the item.
    fn fifty_cents(item: &Item) -> Money {
        item.price() + Money::from_cents(50)
    }

    #[test]
    fn test_single_item() {
        let items = vec![Item::new(1, "book", 1000).unwrap()];
        let receipt = aggregate(&items, &fifty_cents).unwrap();

        assert_eq!(receipt.entries.len(), 1);
        let entry = &receipt.entries[0];
        assert_eq!(entry.name, "book");
        assert_eq!(entry.quantity, 1);
        assert_eq!(entry.total_cost.cents(), 1050);
        assert_eq!(entry.tax_amount.cents(), 50);
        assert_eq!(receipt.total_sales_taxes.cents(), 50);
        assert_eq!(receipt.total_price.cents(), 1050);
    }

    #[test]
    fn test_totals_across_items() {
        let items = vec![
            Item::new(2, "book", 1000).unwrap(),
            Item::new(1, "music CD", 1500).unwrap(),
        ];
        let by_name = |item: &Item| {
            if item.name() == "book" {
                item.price()
            } else {
                item.price() + Money::from_cents(150)
            }
        };
        let receipt = aggregate(&items, &by_name).unwrap();

        assert_eq!(receipt.entries[0].total_cost.cents(), 2000);
        assert_eq!(receipt.entries[0].tax_amount.cents(), 0);
        assert_eq!(receipt.entries[1].total_cost.cents(), 1650);
        assert_eq!(receipt.entries[1].tax_amount.cents(), 150);
        assert_eq!(receipt.total_sales_taxes.cents(), 150);
        assert_eq!(receipt.total_price.cents(), 3650);
    }

    #[test]
    fn test_quantity_multiplies_cost_and_tax() {
        let items = vec![Item::new(3, "chocolate bar", 200).unwrap()];
        let plus_twenty = |item: &Item| item.price() + Money::from_cents(20);
        let receipt = aggregate(&items, &plus_twenty).unwrap();

        assert_eq!(receipt.entries[0].total_cost.cents(), 660);
        assert_eq!(receipt.entries[0].tax_amount.cents(), 60);
    }

    #[test]
    fn test_empty_input() {
        let receipt = aggregate(&[], &fifty_cents).unwrap();
        assert!(receipt.is_empty());
        assert!(receipt.total_sales_taxes.is_zero());
        assert!(receipt.total_price.is_zero());
        assert_eq!(receipt, Receipt::default());
    }

    #[test]
    fn test_keeps_input_order() {
        let items = vec![
            Item::new(1, "zebra", 100).unwrap(),
            Item::new(1, "apple", 100).unwrap(),
        ];
        let receipt = aggregate(&items, &fifty_cents).unwrap();
        assert_eq!(receipt.entries[0].name, "zebra");
        assert_eq!(receipt.entries[1].name, "apple");
    }

    #[test]
    fn test_line_total_overflow_is_an_error() {
        let items = vec![Item::new(2, "imported widget", 100).unwrap()];
        let huge = |_: &Item| Money::from_cents(i64::MAX / 2 + 1);

        let err = aggregate(&items, &huge).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { ref item } if item == "imported widget"));
    }

    #[test]
    fn test_grand_total_overflow_is_an_error() {
        let items = vec![
            Item::new(1, "first", 100).unwrap(),
            Item::new(1, "second", 100).unwrap(),
        ];
        let huge = |_: &Item| Money::from_cents(i64::MAX / 2 + 1);

        let err = aggregate(&items, &huge).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { ref item } if item == "second"));
    }
}

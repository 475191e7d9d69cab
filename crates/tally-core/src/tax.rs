//! # Tax Module
//!
//! Turns an [`Item`] into its per-unit price including tax.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  rate = 0                                                               │
//! │  rate += 10%   unless the name matches the exemption vocabulary         │
//! │  rate += 5%    if the name contains "imported"                          │
//! │                                                                         │
//! │  raw    = ceil(price × rate)            integer cents, never floats     │
//! │  tax    = raw rounded UP to a multiple of 5 cents                       │
//! │  result = price + tax                   (per unit, not × quantity)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use tally_core::{Item, StandardTaxCalculator, TaxCalculator};
//!
//! let calc = StandardTaxCalculator::default();
//! let perfume = Item::new(1, "imported bottle of perfume", 4750).unwrap();
//!
//! // 4750 × 15% = 712.5 → 713 → 715
//! assert_eq!(calc.calculate_tax(&perfume).cents(), 5465);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Item, TaxRate};
use crate::validation::{validate_keyword, validate_rate_percent, validate_rounding_unit};
use crate::{
    BASIC_SALES_TAX_PERCENT, EXEMPT_KEYWORDS, IMPORTED_MARKER, IMPORT_DUTY_PERCENT,
    ROUNDING_UNIT_CENTS,
};

// =============================================================================
// Tax Policy
// =============================================================================

/// The immutable rule set a calculator closes over.
///
/// `TaxPolicy::default()` is the standard policy: 10% basic sales tax,
/// 5% import duty, rounding up to 5 cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxPolicy {
    /// Basic sales tax in whole percentage points.
    pub basic_rate_percent: u32,

    /// Import duty in whole percentage points.
    pub import_duty_percent: u32,

    /// Computed tax is rounded up to a multiple of this many cents.
    pub rounding_unit_cents: i64,

    /// Names containing any of these are exempt from basic sales tax.
    pub exempt_keywords: Vec<String>,

    /// Names containing this are subject to import duty.
    pub import_marker: String,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        TaxPolicy {
            basic_rate_percent: BASIC_SALES_TAX_PERCENT,
            import_duty_percent: IMPORT_DUTY_PERCENT,
            rounding_unit_cents: ROUNDING_UNIT_CENTS,
            exempt_keywords: EXEMPT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            import_marker: IMPORTED_MARKER.to_string(),
        }
    }
}

impl TaxPolicy {
    /// Checks every field. Configured policies must pass this before use.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_rate_percent("basic rate", self.basic_rate_percent)?;
        validate_rate_percent("import duty", self.import_duty_percent)?;
        validate_rounding_unit(self.rounding_unit_cents)?;
        validate_keyword("import marker", &self.import_marker)?;
        for keyword in &self.exempt_keywords {
            validate_keyword("exempt keyword", keyword)?;
        }
        Ok(())
    }

    pub fn basic_rate(&self) -> TaxRate {
        TaxRate::from_percent(self.basic_rate_percent)
    }

    pub fn import_duty(&self) -> TaxRate {
        TaxRate::from_percent(self.import_duty_percent)
    }

    pub fn is_exempt(&self, item: &Item) -> bool {
        item.name_contains_any(&self.exempt_keywords)
    }

    pub fn is_imported(&self, item: &Item) -> bool {
        item.name().contains(self.import_marker.as_str())
    }

    /// Sum of the component rates that apply to `item`.
    pub fn combined_rate(&self, item: &Item) -> TaxRate {
        let mut rate = TaxRate::zero();
        if !self.is_exempt(item) {
            rate = rate + self.basic_rate();
        }
        if self.is_imported(item) {
            rate = rate + self.import_duty();
        }
        rate
    }
}

// =============================================================================
// Calculator Seam
// =============================================================================

/// Anything that can price an item including tax.
///
/// The receipt aggregator only depends on this trait, so tests and
/// alternative jurisdictions can plug in their own rule sets. Plain closures
/// `Fn(&Item) -> Money` implement it too.
pub trait TaxCalculator {
    /// Per-unit price including tax (not multiplied by quantity).
    fn calculate_tax(&self, item: &Item) -> Money;
}

impl<F> TaxCalculator for F
where
    F: Fn(&Item) -> Money,
{
    fn calculate_tax(&self, item: &Item) -> Money {
        self(item)
    }
}

// =============================================================================
// Standard Calculator
// =============================================================================

/// Basic sales tax + import duty, rounded up to the policy's unit.
#[derive(Debug, Clone, Default)]
pub struct StandardTaxCalculator {
    policy: TaxPolicy,
}

impl StandardTaxCalculator {
    /// Wraps a policy after [`TaxPolicy::validate`] accepts it.
    ///
    /// A validated policy (rates at most 100% each, bounded rounding unit)
    /// together with the item bounds keeps per-item arithmetic in range.
    pub fn new(policy: TaxPolicy) -> Result<Self, ValidationError> {
        policy.validate()?;
        Ok(StandardTaxCalculator { policy })
    }

    /// Rounded tax amount for one unit of `item`.
    pub fn tax_amount(&self, item: &Item) -> Money {
        let rate = self.policy.combined_rate(item);
        tax_for(item.price(), rate, self.policy.rounding_unit_cents)
    }
}

impl TaxCalculator for StandardTaxCalculator {
    fn calculate_tax(&self, item: &Item) -> Money {
        let rate = self.policy.combined_rate(item);
        let tax = tax_for(item.price(), rate, self.policy.rounding_unit_cents);
        trace!(
            item = item.name(),
            price_cents = item.price_cents(),
            rate_pct = rate.percent(),
            tax_cents = tax.cents(),
            "priced item"
        );
        item.price() + tax
    }
}

/// Ceiling of `price × rate`, then rounded up to a multiple of `unit`.
///
/// A zero rate short-circuits to zero.
pub fn tax_for(price: Money, rate: TaxRate, unit: i64) -> Money {
    if rate.is_zero() {
        return Money::zero();
    }
    price.ceil_percentage(rate).round_up_to_unit(unit)
}

// =============================================================================
// Unit Tests
// =============================================================================

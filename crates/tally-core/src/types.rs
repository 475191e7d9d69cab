//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Item       │   │    TaxRate      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  quantity (>0)  │   │  bps (u32)      │                             │
//! │  │  name (!blank)  │   │  1000 = 10%     │                             │
//! │  │  price (>=0)    │   │  1500 = 15%     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An `Item` is built once from a basket line, never mutated, and dropped
//! after the receipt is produced.

use serde::{Deserialize, Serialize};
use std::ops::Add;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_item_name, validate_line_amount, validate_price_cents, validate_quantity,
};
use crate::{EXEMPT_KEYWORDS, IMPORTED_MARKER};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000.
/// Whole percentage points are scaled by 100 so the division that turns a
/// rate into cents happens once, at the very end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from whole percentage points.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::types::TaxRate;
    ///
    /// assert_eq!(TaxRate::from_percent(15).bps(), 1500);
    /// ```
    #[inline]
    pub const fn from_percent(pct: u32) -> Self {
        TaxRate(pct * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate in whole percentage points (truncated).
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0 / 100
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Component rates are summed before rounding.
impl Add for TaxRate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        TaxRate(self.0 + other.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A validated purchase record: one basket line.
///
/// Fields are private so an `Item` can only exist in a valid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    quantity: i64,
    name: String,
    price: Money,
}

impl Item {
    /// Builds an item, checking quantity, price, line amount and name in that
    /// order.
    ///
    /// The line amount bound ([`MAX_LINE_AMOUNT_CENTS`](crate::MAX_LINE_AMOUNT_CENTS))
    /// is what lets tax and receipt arithmetic stay in integer cents without
    /// overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Item;
    ///
    /// let item = Item::new(2, "book", 1249).unwrap();
    /// assert_eq!(item.quantity(), 2);
    /// assert_eq!(item.price().cents(), 1249);
    ///
    /// assert!(Item::new(0, "book", 1249).is_err());
    /// assert!(Item::new(1, "   ", 1249).is_err());
    /// ```
    pub fn new(
        quantity: i64,
        name: impl Into<String>,
        price_cents: i64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        validate_quantity(quantity)?;
        validate_price_cents(price_cents)?;
        validate_line_amount(quantity, price_cents)?;
        validate_item_name(&name)?;

        Ok(Item {
            quantity,
            name,
            price: Money::from_cents(price_cents),
        })
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price before tax.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn price_cents(&self) -> i64 {
        self.price.cents()
    }

    /// True iff the name contains `"imported"` (case-sensitive, anywhere).
    ///
    /// This is the standard-policy view. A configured
    /// [`TaxPolicy`](crate::TaxPolicy) may use another marker; ask
    /// [`TaxPolicy::is_imported`](crate::TaxPolicy::is_imported) for that.
    pub fn is_imported(&self) -> bool {
        self.name.contains(IMPORTED_MARKER)
    }

    /// True iff the name contains any standard exemption keyword.
    ///
    /// Standard-policy view, like [`Item::is_imported`]; see
    /// [`TaxPolicy::is_exempt`](crate::TaxPolicy::is_exempt) for a configured
    /// vocabulary.
    pub fn is_exempt(&self) -> bool {
        self.name_contains_any(EXEMPT_KEYWORDS)
    }

    /// Substring check against an arbitrary vocabulary.
    pub fn name_contains_any<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        keywords.iter().any(|k| self.name.contains(k.as_ref()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

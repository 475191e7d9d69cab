//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    14.99 * 0.10 = 1.4990000000000001  ❌ WRONG!                         │
//! │    A "round up to 0.05" step then lands on the wrong nickel.            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1499 cents * 1000 bps = 1_499_000                                    │
//! │    ceil(1_499_000 / 10_000) = 150 cents  → exact, every time            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let price = Money::from_cents(1249); // 12.49
//!
//! let doubled = price.checked_mul_quantity(2).unwrap();
//! assert_eq!(doubled.cents(), 2498);
//! assert_eq!(doubled.to_string(), "24.98");
//!
//! // Totals that do not fit are reported, never wrapped
//! assert!(Money::from_cents(i64::MAX).checked_mul_quantity(2).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::types::TaxRate;

/// Basis points in one whole (100% = 10_000 bps).
pub const BASIS_POINTS: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction of two amounts never needs a branch
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde transparent**: Serializes as the bare cent count
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "at 14.99" ──► Item.price ──► calculate_tax ──► unit taxed price      │
/// │                                                      │                  │
/// │                                  × quantity ◄────────┘                  │
/// │                                      │                                  │
/// │                                      ▼                                  │
/// │                       ReceiptEntry.total_cost ──► "16.49" on receipt    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fractional portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1185);
    /// assert_eq!(unit_price.checked_mul_quantity(3).unwrap().cents(), 3555);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Subtracts `other`, `None` on overflow.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Applies a rate and rounds the result toward positive infinity.
    ///
    /// ## Implementation
    /// Integer math only: `(amount * bps + 9999) / 10000`.
    /// Adding `BASIS_POINTS - 1` before the truncating division turns floor
    /// into ceiling for non-negative amounts. The product is widened to
    /// `i128` so it cannot overflow. The result fits in `i64` for any amount
    /// an [`Item`](crate::Item) can carry at rates up to 200%.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::types::TaxRate;
    ///
    /// // 1212 × 15% = 181.8 → 182
    /// let tax = Money::from_cents(1212).ceil_percentage(TaxRate::from_percent(15));
    /// assert_eq!(tax.cents(), 182);
    /// ```
    pub fn ceil_percentage(&self, rate: TaxRate) -> Money {
        let scaled = self.0 as i128 * rate.bps() as i128;
        Money::from_cents(((scaled + BASIS_POINTS - 1) / BASIS_POINTS) as i64)
    }

    /// Rounds up to the next multiple of `unit` cents.
    ///
    /// Values that are already a multiple are returned unchanged.
    /// `unit` must be positive; [`TaxPolicy::validate`](crate::TaxPolicy::validate)
    /// guarantees that for configured policies and also caps it at
    /// [`MAX_ROUNDING_UNIT_CENTS`](crate::MAX_ROUNDING_UNIT_CENTS), so item
    /// taxes never reach the edge of `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(712).round_up_to_unit(5).cents(), 715);
    /// assert_eq!(Money::from_cents(715).round_up_to_unit(5).cents(), 715);
    /// assert_eq!(Money::from_cents(0).round_up_to_unit(5).cents(), 0);
    /// ```
    pub fn round_up_to_unit(&self, unit: i64) -> Money {
        let remainder = self.0.rem_euclid(unit);
        if remainder == 0 {
            return *self;
        }
        Money(self.0 + (unit - remainder))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Receipt formatting: two fractional digits, no currency symbol, no
/// thousands separators.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Unchecked. Used for a single item's price plus tax, which the item and
/// policy bounds keep in range; receipt totals use [`Money::checked_add`].
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # tally-core: Pure Business Logic for Tally
//!
//! Computes a tax-inclusive receipt from basket lines. Every function here is
//! pure; reading files and writing output belong to the binary.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Pipeline                                 │
//! │                                                                         │
//! │   raw lines                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  ┌──────────┐   Vec<Item>   ┌──────────────┐  per item  ┌───────────┐   │
//! │  │  parser  │──────────────►│   receipt    │◄──────────│    tax    │   │
//! │  │parse_all │               │  aggregate   │           │Calculator │   │
//! │  └──────────┘               └──────┬───────┘           └───────────┘   │
//! │                                    │ Receipt                            │
//! │                                    ▼                                    │
//! │                             ┌──────────────┐                            │
//! │                             │    render    │──► receipt text / JSON     │
//! │                             └──────────────┘                            │
//! │                                                                         │
//! │   NO I/O • NO FLOATS • PURE FUNCTIONS                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Item` and `TaxRate`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`tax`] - Tax policy and calculators
//! - [`parser`] - Basket line grammar
//! - [`receipt`] - Aggregation into totals
//! - [`render`] - Text / JSON output
//! - [`error`] - Domain error types
//! - [`validation`] - Invariant checks
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{process_basket, render, StandardTaxCalculator};
//!
//! let lines = ["1 book at 12.49", "1 music CD at 14.99", "1 chocolate bar at 0.85"];
//! let receipt = process_basket(lines, &StandardTaxCalculator::default()).unwrap();
//!
//! assert_eq!(
//!     render(&receipt),
//!     "1 book: 12.49\n1 music CD: 16.49\n1 chocolate bar: 0.85\nSales Taxes: 1.50\nTotal: 29.83"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod parser;
pub mod receipt;
pub mod render;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{BatchParseError, CoreError, CoreResult, ParseError, ValidationError};
pub use money::Money;
pub use parser::{parse_all, parse_line};
pub use receipt::{aggregate, Receipt, ReceiptEntry};
pub use render::{render, render_as, render_json, ReceiptFormat};
pub use tax::{StandardTaxCalculator, TaxCalculator, TaxPolicy};
pub use types::{Item, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Basic sales tax, whole percentage points.
pub const BASIC_SALES_TAX_PERCENT: u32 = 10;

/// Import duty, whole percentage points. Applies to exempt items too.
pub const IMPORT_DUTY_PERCENT: u32 = 5;

/// Tax amounts are rounded up to a multiple of this many cents.
pub const ROUNDING_UNIT_CENTS: i64 = 5;

/// Substrings that exempt an item from basic sales tax (case-sensitive).
pub const EXEMPT_KEYWORDS: &[&str] = &["book", "chocolate", "chocolates", "pills", "food", "medicine"];

/// Substring that marks an item as imported (case-sensitive).
pub const IMPORTED_MARKER: &str = "imported";

/// Largest `quantity × price` an item may carry (ten trillion in cents).
///
/// Keeps every per-item tax computation inside `i64` even at 200% tax.
pub const MAX_LINE_AMOUNT_CENTS: i64 = 1_000_000_000_000_000;

/// Largest rounding unit a tax policy may configure.
pub const MAX_ROUNDING_UNIT_CENTS: i64 = 100_000;

// =============================================================================
// Pipeline
// =============================================================================

/// Parses `lines` and aggregates them with `calculator`.
///
/// Fails on the first invalid line, or when a receipt total does not fit.
pub fn process_basket<I, S, C>(lines: I, calculator: &C) -> CoreResult<Receipt>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    C: TaxCalculator + ?Sized,
{
    let items = parse_all(lines)?;
    aggregate(&items, calculator)
}

//! # Validation Module
//!
//! Invariant checks shared by [`Item`](crate::Item) construction and
//! [`TaxPolicy`](crate::TaxPolicy) configuration.
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_quantity, validate_price_cents};
//!
//! validate_quantity(3).unwrap();
//! validate_price_cents(0).unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_LINE_AMOUNT_CENTS, MAX_ROUNDING_UNIT_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty
/// - Must not be whitespace only
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a keyword used for substring classification.
///
/// A blank keyword would match every name, so it is rejected.
pub fn validate_keyword(field: &str, keyword: &str) -> ValidationResult<()> {
    if keyword.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates the line amount `quantity × price_cents`.
///
/// ## Rules
/// - Must not exceed [`MAX_LINE_AMOUNT_CENTS`]
///
/// Run after [`validate_quantity`] and [`validate_price_cents`].
pub fn validate_line_amount(qty: i64, price_cents: i64) -> ValidationResult<()> {
    match qty.checked_mul(price_cents) {
        Some(amount) if amount <= MAX_LINE_AMOUNT_CENTS => Ok(()),
        _ => Err(ValidationError::OutOfRange {
            field: "line amount".to_string(),
            min: 0,
            max: MAX_LINE_AMOUNT_CENTS,
        }),
    }
}

/// Validates a tax rate in whole percentage points.
///
/// ## Rules
/// - Must be between 0 and 100
pub fn validate_rate_percent(field: &str, pct: u32) -> ValidationResult<()> {
    if pct > 100 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates the rounding unit in cents.
///
/// ## Rules
/// - Must be positive; a zero unit has no multiples to round to
/// - Must not exceed [`MAX_ROUNDING_UNIT_CENTS`]
pub fn validate_rounding_unit(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "rounding unit".to_string(),
        });
    }

    if cents > MAX_ROUNDING_UNIT_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "rounding unit".to_string(),
            min: 1,
            max: MAX_ROUNDING_UNIT_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

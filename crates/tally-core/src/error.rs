//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── ValidationError  - Item / policy invariant violations             │
//! │  ├── ParseError       - One basket line could not be parsed            │
//! │  ├── BatchParseError  - ParseError + 1-based line number + line text   │
//! │  └── CoreError        - Umbrella: batch, overflow, JSON                │
//! │                                                                         │
//! │  tally-cli errors (separate crate)                                     │
//! │  └── CliError         - I/O, config, wraps CoreError                   │
//! │                                                                         │
//! │  Flow: ValidationError → ParseError → BatchParseError → CoreError      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, token, line)
//! 3. Errors are enum variants, never String
//! 4. Messages are informational text, not a machine-readable code scheme

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for the whole pipeline.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A basket line failed to parse (fail-fast batch).
    #[error(transparent)]
    Batch(#[from] BatchParseError),

    /// A receipt total does not fit in the money representation.
    #[error("Receipt amount out of range while adding '{item}'")]
    AmountOverflow { item: String },

    /// Receipt could not be serialized.
    #[error("Failed to serialize receipt: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Invariant violations raised while constructing an [`Item`](crate::Item)
/// or checking a [`TaxPolicy`](crate::TaxPolicy).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} cannot be blank")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Parse Error
// =============================================================================

/// Reasons a single basket line is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Blank or whitespace-only line.
    #[error("Line cannot be empty")]
    EmptyLine,

    /// The first token is not a base-10 integer.
    #[error("Invalid quantity '{token}': expected a whole number")]
    InvalidQuantity { token: String },

    /// No `at` token after the quantity.
    #[error("Missing 'at' in line: {line}")]
    MissingSeparator { line: String },

    /// Nothing after the `at` token.
    #[error("Missing price in line: {line}")]
    MissingPrice { line: String },

    /// The price text is not digits once the decimal point is removed.
    #[error("Invalid price '{price}' in line: {line}")]
    InvalidPrice { price: String, line: String },

    /// The parsed fields violate an item invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A [`ParseError`] annotated with where it happened in a basket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input at line {line_number}: {source} (line: \"{line}\")")]
pub struct BatchParseError {
    /// 1-based position of the offending line.
    pub line_number: usize,
    /// The offending line, verbatim.
    pub line: String,
    /// Why the line was rejected.
    pub source: ParseError,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result of parsing one line.
pub type ParseResult<T> = Result<T, ParseError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Line Parser
//!
//! Converts basket lines into validated [`Item`]s.
//!
//! ## Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   "3  imported boxes of chocolates  at  11.25"                          │
//! │    │  └──────────── name ─────────┘  │   └─ price                       │
//! │    quantity                    separator                                │
//! │                                                                         │
//! │   tokens are whitespace-delimited                                       │
//! │   name   = tokens between quantity and the first "at", joined by " "    │
//! │   price  = tokens after "at", joined by " ", with every "." removed     │
//! │            "12.49" → 1249    "5.5" → 55    "5" → 5                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The price digits are taken verbatim once the decimal point is dropped;
//! there is no normalisation to two decimal places.
//!
//! A quantity token that is not a base-10 integer is always rejected.

use tracing::{debug, warn};

use crate::error::{BatchParseError, ParseError, ParseResult};
use crate::types::Item;

/// Token that separates the item name from its price.
pub const SEPARATOR: &str = "at";

/// Parses a single basket line.
///
/// ## Example
/// ```rust
/// use tally_core::parser::parse_line;
///
/// let item = parse_line("1 music CD at 14.99").unwrap();
/// assert_eq!(item.quantity(), 1);
/// assert_eq!(item.name(), "music CD");
/// assert_eq!(item.price_cents(), 1499);
///
/// assert!(parse_line("1 book 12.49").is_err());
/// ```
pub fn parse_line(line: &str) -> ParseResult<Item> {
    let mut tokens = line.split_whitespace();

    let quantity_token = tokens.next().ok_or(ParseError::EmptyLine)?;
    let quantity = parse_quantity(quantity_token)?;

    let rest: Vec<&str> = tokens.collect();
    let at = rest
        .iter()
        .position(|t| *t == SEPARATOR)
        .ok_or_else(|| ParseError::MissingSeparator {
            line: line.to_string(),
        })?;

    let name = rest[..at].join(" ");
    let price_text = rest[at + 1..].join(" ");
    if price_text.is_empty() {
        return Err(ParseError::MissingPrice {
            line: line.to_string(),
        });
    }
    let price_cents = parse_price_cents(&price_text).ok_or_else(|| ParseError::InvalidPrice {
        price: price_text.clone(),
        line: line.to_string(),
    })?;

    Ok(Item::new(quantity, name, price_cents)?)
}

/// Parses every line, stopping at the first failure.
///
/// The error carries the 1-based line number and the line text.
///
/// ## Example
/// ```rust
/// use tally_core::parser::parse_all;
///
/// let err = parse_all(["1 book at 12.49", "bad line"]).unwrap_err();
/// assert_eq!(err.line_number, 2);
/// assert_eq!(err.line, "bad line");
/// ```
pub fn parse_all<I, S>(lines: I) -> Result<Vec<Item>, BatchParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let line = line.as_ref();
            parse_line(line).map_err(|source| {
                warn!(line_number = index + 1, %source, "rejected basket line");
                BatchParseError {
                    line_number: index + 1,
                    line: line.to_string(),
                    source,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = items.len(), "parsed basket");
    Ok(items)
}

fn parse_quantity(token: &str) -> ParseResult<i64> {
    token.parse::<i64>().map_err(|_| ParseError::InvalidQuantity {
        token: token.to_string(),
    })
}

/// Drops every `.` and reads what is left as a signed base-10 integer.
fn parse_price_cents(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(|c| *c != '.').collect();
    digits.parse::<i64>().ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use rstest::rstest;

    #[rstest]
    #[case::single_word("1 book at 12.49", 1, "book", 1249)]
    #[case::multiple_quantity("3 chocolate bar at 0.85", 3, "chocolate bar", 85)]
    #[case::multi_word("1 music CD at 14.99", 1, "music CD", 1499)]
    #[case::complex_name(
        "3 imported boxes of chocolates at 11.25",
        3,
        "imported boxes of chocolates",
        1125
    )]
    #[case::trailing_zeros("1 item at 10.00", 1, "item", 1000)]
    #[case::large_quantity("100 books at 12.49", 100, "books", 1249)]
    #[case::digits_in_name("1 3-pack of batteries at 5.99", 1, "3-pack of batteries", 599)]
    #[case::extra_whitespace("  2   book   at   12.49  ", 2, "book", 1249)]
    #[case::tab_separated("2\tbook\tat\t12.49", 2, "book", 1249)]
    fn test_parses_valid_lines(
        #[case] line: &str,
        #[case] quantity: i64,
        #[case] name: &str,
        #[case] price_cents: i64,
    ) {
        let item = parse_line(line).unwrap();
        assert_eq!(item.quantity(), quantity);
        assert_eq!(item.name(), name);
        assert_eq!(item.price_cents(), price_cents);
    }

    #[rstest]
    #[case::one_decimal_digit("1 item at 5.5", 55)]
    #[case::no_decimal_point("1 item at 5", 5)]
    #[case::zero("1 item at 0.00", 0)]
    fn test_price_digits_are_taken_verbatim(#[case] line: &str, #[case] price_cents: i64) {
        assert_eq!(parse_line(line).unwrap().price_cents(), price_cents);
    }

    #[test]
    fn test_first_at_is_the_separator() {
        // the second "at" belongs to the price text, which then fails
        let err = parse_line("1 look at that at 5.00").unwrap_err();
        assert!(matches!(err, ParseError::InvalidPrice { ref price, .. } if price == "that at 5.00"));
    }

    #[test]
    fn test_at_inside_a_word_is_not_a_separator() {
        let item = parse_line("1 hat at 9.99").unwrap();
        assert_eq!(item.name(), "hat");
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    fn test_rejects_blank_lines(#[case] line: &str) {
        assert_eq!(parse_line(line).unwrap_err(), ParseError::EmptyLine);
    }

    #[rstest]
    #[case::word("one book at 12.49")]
    #[case::decimal("1.5 book at 12.49")]
    #[case::missing_quantity("book at 12.49")]
    #[case::only_at("at")]
    fn test_rejects_non_integer_quantity(#[case] line: &str) {
        assert!(matches!(
            parse_line(line).unwrap_err(),
            ParseError::InvalidQuantity { .. }
        ));
    }

    #[rstest]
    #[case::zero("0 book at 12.49")]
    #[case::negative("-1 book at 12.49")]
    fn test_rejects_non_positive_quantity(#[case] line: &str) {
        assert!(matches!(
            parse_line(line).unwrap_err(),
            ParseError::Validation(ValidationError::MustBePositive { .. })
        ));
    }

    #[rstest]
    #[case::no_at("1 book 12.49")]
    #[case::no_at_no_price("1 book")]
    #[case::only_quantity("5")]
    fn test_rejects_missing_separator(#[case] line: &str) {
        let err = parse_line(line).unwrap_err();
        assert!(matches!(err, ParseError::MissingSeparator { .. }));
        assert!(err.to_string().contains("Missing 'at' in line"));
    }

    #[test]
    fn test_rejects_missing_price() {
        let err = parse_line("1 book at").unwrap_err();
        assert!(matches!(err, ParseError::MissingPrice { .. }));
        assert!(err.to_string().contains("Missing price in line"));
    }

    #[rstest]
    #[case::word("1 book at twelve")]
    #[case::split_digits("1 book at 12 49")]
    #[case::lone_point("1 book at .")]
    fn test_rejects_unparsable_price(#[case] line: &str) {
        assert!(matches!(
            parse_line(line).unwrap_err(),
            ParseError::InvalidPrice { .. }
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        assert!(matches!(
            parse_line("1 book at -5.00").unwrap_err(),
            ParseError::Validation(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[rstest]
    #[case::product_overflows("3000000000 imported widget at 99999999999.99")]
    #[case::price_at_i64_max("1 widget at 9223372036854775807")]
    #[case::just_over_the_bound("2 widget at 5000000000000.01")]
    fn test_rejects_unrepresentable_line_amount(#[case] line: &str) {
        let err = parse_line(line).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Validation(ValidationError::OutOfRange { ref field, .. }) if field == "line amount"
        ));
    }

    #[test]
    fn test_accepts_line_amount_at_the_bound() {
        let item = parse_line("2 widget at 5000000000000.00").unwrap();
        assert_eq!(item.price_cents(), 500_000_000_000_000);
    }

    #[test]
    fn test_rejects_missing_name() {
        assert!(matches!(
            parse_line("1 at 5.00").unwrap_err(),
            ParseError::Validation(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_parse_all_preserves_order() {
        let items = parse_all([
            "1 first item at 10.00",
            "2 second item at 20.00",
            "3 third item at 30.00",
        ])
        .unwrap();

        let names: Vec<_> = items.iter().map(Item::name).collect();
        assert_eq!(names, ["first item", "second item", "third item"]);
    }

    #[test]
    fn test_parse_all_empty_input() {
        let items = parse_all(Vec::<String>::new()).unwrap();
        assert!(items.is_empty());
    }

    #[rstest]
    #[case::first(&["invalid line", "1 book at 12.49"], 1)]
    #[case::middle(&["1 book at 12.49", "invalid line", "1 chocolate at 0.85"], 2)]
    #[case::last(&["1 book at 12.49", "1 chocolate at 0.85", "invalid line"], 3)]
    fn test_parse_all_reports_line_number(#[case] lines: &[&str], #[case] line_number: usize) {
        let err = parse_all(lines).unwrap_err();
        assert_eq!(err.line_number, line_number);
        assert_eq!(err.line, "invalid line");
        assert!(err.to_string().contains(&format!("line {line_number}")));
        assert!(err.to_string().contains("\"invalid line\""));
    }

    #[test]
    fn test_parse_all_stops_at_first_failure() {
        let err = parse_all([
            "1 valid item at 10.00",
            "2 another valid at 20.00",
            "this line is broken",
            "also broken",
        ])
        .unwrap_err();
        assert_eq!(err.line_number, 3);
    }

    #[test]
    fn test_parse_all_keeps_underlying_reason() {
        let err = parse_all(["1 book at 12.49", "1 chocolate 0.85"]).unwrap_err();
        assert_eq!(err.line_number, 2);
        assert!(matches!(err.source, ParseError::MissingSeparator { .. }));
        assert!(err.to_string().contains("Missing 'at'"));
    }
}

//! # Receipt Rendering
//!
//! Formats an aggregated [`Receipt`] for display. Writing the text anywhere
//! is the caller's job.
//!
//! ## Text Layout
//! ```text
//! 1 book: 12.49
//! 1 music CD: 16.49
//! Sales Taxes: 1.50
//! Total: 28.98
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::receipt::Receipt;

/// Output formats a receipt can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptFormat {
    /// Human-readable lines (the classic receipt).
    #[default]
    Text,
    /// Pretty-printed JSON with cent amounts.
    Json,
}

impl fmt::Display for ReceiptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptFormat::Text => write!(f, "text"),
            ReceiptFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReceiptFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReceiptFormat::Text),
            "json" => Ok(ReceiptFormat::Json),
            other => Err(format!(
                "Unknown receipt format: '{}'. Valid options: text, json",
                other
            )),
        }
    }
}

/// Renders the text receipt, lines joined by `\n`, no trailing newline.
pub fn render(receipt: &Receipt) -> String {
    let mut lines: Vec<String> = receipt
        .entries
        .iter()
        .map(|entry| format!("{} {}: {}", entry.quantity, entry.name, entry.total_cost))
        .collect();

    lines.push(format!("Sales Taxes: {}", receipt.total_sales_taxes));
    lines.push(format!("Total: {}", receipt.total_price));

    lines.join("\n")
}

/// Renders the receipt as pretty JSON.
pub fn render_json(receipt: &Receipt) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(receipt)
}

/// Renders in the requested format.
pub fn render_as(receipt: &Receipt, format: ReceiptFormat) -> Result<String, serde_json::Error> {
    match format {
        ReceiptFormat::Text => Ok(render(receipt)),
        ReceiptFormat::Json => render_json(receipt),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::receipt::ReceiptEntry;

    fn entry(quantity: i64, name: &str, total: i64, tax: i64) -> ReceiptEntry {
        ReceiptEntry {
            name: name.to_string(),
            quantity,
            total_cost: Money::from_cents(total),
            tax_amount: Money::from_cents(tax),
        }
    }

    #[test]
    fn test_render_text() {
        let receipt = Receipt {
            entries: vec![entry(1, "book", 1249, 0), entry(1, "music CD", 1649, 150)],
            total_sales_taxes: Money::from_cents(150),
            total_price: Money::from_cents(2898),
        };

        assert_eq!(
            render(&receipt),
            "1 book: 12.49\n1 music CD: 16.49\nSales Taxes: 1.50\nTotal: 28.98"
        );
    }

    #[test]
    fn test_render_shows_quantity() {
        let receipt = Receipt {
            entries: vec![entry(3, "chocolate bar", 660, 60)],
            total_sales_taxes: Money::from_cents(60),
            total_price: Money::from_cents(660),
        };

        assert_eq!(
            render(&receipt),
            "3 chocolate bar: 6.60\nSales Taxes: 0.60\nTotal: 6.60"
        );
    }

    #[test]
    fn test_render_zero_taxes() {
        let receipt = Receipt {
            entries: vec![entry(1, "book", 1000, 0)],
            total_sales_taxes: Money::zero(),
            total_price: Money::from_cents(1000),
        };

        assert_eq!(
            render(&receipt),
            "1 book: 10.00\nSales Taxes: 0.00\nTotal: 10.00"
        );
    }

    #[test]
    fn test_render_empty_receipt() {
        assert_eq!(
            render(&Receipt::default()),
            "Sales Taxes: 0.00\nTotal: 0.00"
        );
    }

    #[test]
    fn test_render_json_uses_cent_fields() {
        let receipt = Receipt {
            entries: vec![entry(1, "music CD", 1649, 150)],
            total_sales_taxes: Money::from_cents(150),
            total_price: Money::from_cents(1649),
        };

        let json = render_json(&receipt).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entries"][0]["name"], "music CD");
        assert_eq!(value["entries"][0]["total_cost_cents"], 1649);
        assert_eq!(value["entries"][0]["tax_amount_cents"], 150);
        assert_eq!(value["total_sales_taxes_cents"], 150);
        assert_eq!(value["total_price_cents"], 1649);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<ReceiptFormat>().unwrap(), ReceiptFormat::Text);
        assert_eq!("JSON".parse::<ReceiptFormat>().unwrap(), ReceiptFormat::Json);
        assert!("xml".parse::<ReceiptFormat>().is_err());
        assert_eq!(ReceiptFormat::default(), ReceiptFormat::Text);
    }
}

//! Number formatting utilities for human-readable display.
//!
//! Chart axis labels and price cards use `format_price`; coin cards use
//! `format_percent_change` for the 24h move.

use rust_decimal::Decimal;

/// Trims trailing zeros, adds thousands separators.
pub fn display_formatted_string(formatted: String) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", formatted),
    };

    let trimmed = if unsigned.contains('.') {
        unsigned
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        unsigned
    };

    let (integer, fraction) = match trimmed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (trimmed.as_str(), None),
    };

    let grouped = group_thousands(integer);
    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a price for chart labels and price tags.
///
/// - `>= 1000`: thousands separators, at most 3 fraction digits
/// - `>= 1`: exactly 2 decimals
/// - otherwise: exactly 6 decimals
pub fn format_price(price: f64) -> String {
    if price >= 1000.0 {
        display_formatted_string(format!("{:.3}", price))
    } else if price >= 1.0 {
        format!("{:.2}", price)
    } else {
        format!("{:.6}", price)
    }
}

/// Format a 24h change as `+1.23%` / `-4.50%`. Zero counts as positive.
pub fn format_percent_change(change: Decimal) -> String {
    let sign = if change >= Decimal::ZERO { "+" } else { "" };
    format!("{}{:.2}%", sign, change)
}

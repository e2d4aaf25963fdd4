//! Human-readable formatting for prices and percentage changes.

pub mod num;

pub use num::{display_formatted_string, format_percent_change, format_price};

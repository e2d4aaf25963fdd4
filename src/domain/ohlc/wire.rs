//! Wire types for the `/coin-ohlc` endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw OHLC prices as JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadResponse {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// One element of the OHLC array.
///
/// Every key besides `date` is a currency code (`usd`, `aed`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcResponse {
    /// Epoch milliseconds.
    pub date: i64,
    #[serde(flatten)]
    pub quotes: HashMap<String, QuadResponse>,
}

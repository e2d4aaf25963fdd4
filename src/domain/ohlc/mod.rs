//! OHLC domain: candle history per coin and interval.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::serde_util::timestamp_ms;
use crate::shared::Currency;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub use state::{OhlcHistoryState, OhlcRequest};

// ─── Interval ────────────────────────────────────────────────────────────────

/// History window requested from the OHLC endpoint (`days` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Days(u32),
    Max,
}

impl Interval {
    /// The windows offered by the interval selector.
    pub const PRESETS: [Interval; 5] = [
        Interval::Days(1),
        Interval::Days(7),
        Interval::Days(30),
        Interval::Days(365),
        Interval::Max,
    ];

    /// Value of the `days` query parameter.
    pub fn as_query(&self) -> String {
        match self {
            Interval::Days(d) => d.to_string(),
            Interval::Max => "max".to_string(),
        }
    }

    /// Selector label: `1D`, `7D`, ..., `MAX`.
    pub fn label(&self) -> String {
        match self {
            Interval::Days(d) => format!("{}D", d),
            Interval::Max => "MAX".to_string(),
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::Days(1)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query())
    }
}

impl From<u32> for Interval {
    fn from(days: u32) -> Self {
        Interval::Days(days)
    }
}

// ─── OhlcQuad / OhlcBar ──────────────────────────────────────────────────────

/// Open/high/low/close prices in one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OhlcQuad {
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl OhlcQuad {
    /// `low <= min(open, close) <= max(open, close) <= high`.
    ///
    /// Upstream does not guarantee this and the SDK does not enforce it.
    pub fn is_consistent(&self) -> bool {
        let body_low = self.open.min(self.close);
        let body_high = self.open.max(self.close);
        self.low <= body_low && body_high <= self.high
    }
}

/// One candle sample with a quote per currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    #[serde(with = "timestamp_ms")]
    pub timestamp: DateTime<Utc>,
    pub quotes: HashMap<Currency, OhlcQuad>,
}

impl OhlcBar {
    pub fn quote(&self, currency: &Currency) -> Option<&OhlcQuad> {
        self.quotes.get(currency)
    }

    pub fn usd(&self) -> Option<&OhlcQuad> {
        self.quote(&Currency::usd())
    }

    pub fn aed(&self) -> Option<&OhlcQuad> {
        self.quote(&Currency::aed())
    }

    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum OhlcValidationError {
    InvalidTimestamp(i64),
    NonFinitePrice { currency: String, field: &'static str },
}

impl fmt::Display for OhlcValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OhlcValidationError::InvalidTimestamp(ms) => write!(f, "Invalid timestamp: {}", ms),
            OhlcValidationError::NonFinitePrice { currency, field } => {
                write!(f, "Non-finite {} {} price", currency, field)
            }
        }
    }
}

impl std::error::Error for OhlcValidationError {}

//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;
pub mod ticket;

pub use ticket::{RequestSequencer, RequestTicket};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Currency ────────────────────────────────────────────────────────────────

/// Quote currency code (e.g. `"usd"`, `"aed"`), always stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(String);

impl Currency {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_ascii_lowercase())
    }

    pub fn usd() -> Self {
        Self("usd".to_string())
    }

    pub fn aed() -> Self {
        Self("aed".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::usd()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Currency {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl FromStr for Currency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Currency::new(s))
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Currency::new(s))
    }
}

// ─── ProductId ───────────────────────────────────────────────────────────────

/// Numeric coin identifier used by the OHLC endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_currency_is_lowercased() {
        assert_eq!(Currency::from("USD"), Currency::usd());
        assert_eq!(Currency::new(" Aed ").as_str(), "aed");
        assert_eq!(Currency::default().as_str(), "usd");
    }

    #[test]
    fn test_currency_serde() {
        let c: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(c.as_str(), "eur");
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"eur\"");
    }

    #[test]
    fn test_currency_as_map_key() {
        let json = r#"{"usd": 1, "aed": 2}"#;
        let map: HashMap<Currency, u32> = serde_json::from_str(json).unwrap();
        assert_eq!(map[&Currency::usd()], 1);
        assert_eq!(map[&Currency::aed()], 2);
    }

    #[test]
    fn test_product_id_serde() {
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ProductId::new(42));
        assert_eq!(id.to_string(), "42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}

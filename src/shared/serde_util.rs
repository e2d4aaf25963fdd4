//! Custom serde helpers for backend wire formats.

/// (De)serializes `DateTime<Utc>` as Unix epoch milliseconds.
///
/// The OHLC endpoint sends `date` as epoch milliseconds, not ISO 8601 strings.
pub mod timestamp_ms {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp_millis())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        from_millis(millis)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis)))
    }

    pub fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(millis)
    }
}

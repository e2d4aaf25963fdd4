//! Conversions from wire types to domain types for OHLC bars.

use super::wire::{OhlcResponse, QuadResponse};
use super::{OhlcBar, OhlcQuad, OhlcValidationError};
use crate::shared::serde_util::timestamp_ms;
use crate::shared::Currency;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

fn price(value: f64, currency: &str, field: &'static str) -> Result<Decimal, OhlcValidationError> {
    Decimal::from_f64(value).ok_or_else(|| OhlcValidationError::NonFinitePrice {
        currency: currency.to_string(),
        field,
    })
}

fn quad(q: &QuadResponse, currency: &str) -> Result<OhlcQuad, OhlcValidationError> {
    Ok(OhlcQuad {
        open: price(q.open, currency, "open")?,
        high: price(q.high, currency, "high")?,
        low: price(q.low, currency, "low")?,
        close: price(q.close, currency, "close")?,
    })
}

impl TryFrom<OhlcResponse> for OhlcBar {
    type Error = OhlcValidationError;

    fn try_from(r: OhlcResponse) -> Result<Self, Self::Error> {
        let timestamp = timestamp_ms::from_millis(r.date)
            .ok_or(OhlcValidationError::InvalidTimestamp(r.date))?;

        let quotes = r
            .quotes
            .iter()
            .map(|(code, q)| -> Result<(Currency, OhlcQuad), OhlcValidationError> {
                Ok((Currency::new(code), quad(q, code)?))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { timestamp, quotes })
    }
}

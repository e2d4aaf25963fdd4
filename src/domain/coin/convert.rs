//! Conversion: CoinData → CoinSummary, CoinPricesResponse → PagedCoinResult.

use super::wire::{CoinData, CoinPricesResponse};
use super::{CoinSummary, PagedCoinResult, ValidationError};
use crate::shared::ProductId;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

fn finite(value: f64, field: &'static str, errors: &mut Vec<ValidationError>) -> Decimal {
    match Decimal::from_f64(value) {
        Some(d) => d,
        None => {
            errors.push(ValidationError::NonFinite(field));
            Decimal::ZERO
        }
    }
}

fn non_negative(value: f64, field: &'static str, errors: &mut Vec<ValidationError>) -> Decimal {
    let d = finite(value, field, errors);
    if d.is_sign_negative() && !d.is_zero() {
        errors.push(ValidationError::Negative(field));
    }
    d
}

impl TryFrom<CoinData> for CoinSummary {
    type Error = ValidationError;

    fn try_from(source: CoinData) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let current_price = non_negative(source.current_price, "current price", &mut errors);
        let price_change_percent_24h =
            finite(source.price_change_percentage_24h, "24h change", &mut errors);
        let market_cap = non_negative(source.market_cap, "market cap", &mut errors);
        let trading_volume_24h = non_negative(source.trading_volume, "trading volume", &mut errors);

        let mut sparkline = Vec::with_capacity(source.sparkline.len());
        for (i, v) in source.sparkline.iter().enumerate() {
            match Decimal::from_f64(*v) {
                Some(d) => sparkline.push(d),
                None => errors.push(ValidationError::NonFiniteSparkline(i)),
            }
        }

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(source.id, errors));
        }

        Ok(Self {
            product_id: ProductId::new(source.product_id),
            slug: source.id,
            symbol: source.symbol,
            name: source.name,
            image_url: source.image,
            current_price,
            price_change_percent_24h,
            sparkline,
            market_cap,
            trading_volume_24h,
        })
    }
}

impl TryFrom<CoinPricesResponse> for PagedCoinResult {
    type Error = ValidationError;

    fn try_from(source: CoinPricesResponse) -> Result<Self, Self::Error> {
        if source.total_items > 0 && source.page > source.total_pages {
            tracing::warn!(
                page = source.page,
                total_pages = source.total_pages,
                "Coin page is past the last page"
            );
        }
        if source.data.len() > source.page_size as usize {
            tracing::warn!(
                items = source.data.len(),
                page_size = source.page_size,
                "Coin page holds more items than its page size"
            );
        }

        let items = source
            .data
            .into_iter()
            .map(CoinSummary::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            items,
            page: source.page,
            page_size: source.page_size,
            total_items: source.total_items,
            total_pages: source.total_pages,
        })
    }
}

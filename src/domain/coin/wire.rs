//! Wire types for the `/coin-prices-all` endpoint.

use serde::{Deserialize, Serialize};

/// One coin as the listing endpoint sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinData {
    pub product_id: i64,
    /// Slug, e.g. `"bitcoin"`.
    pub id: String,
    pub name: String,
    pub image: String,
    pub current_price: f64,
    pub price_change_percentage_24h: f64,
    #[serde(default)]
    pub sparkline: Vec<f64>,
    pub market_cap: f64,
    pub trading_volume: f64,
    pub symbol: String,
}

/// One page of the coin listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPricesResponse {
    pub data: Vec<CoinData>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

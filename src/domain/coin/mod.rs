//! Coin domain: listing pages, featured coins and 24h rankings.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod search;
pub mod state;
pub mod wire;

use crate::shared::ProductId;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use search::{CoinFilter, SearchField};
pub use state::{CoinListState, FeaturedState, LoadPhase, PageRequest, TabRequest};

/// Page size of the plain listing.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Number of coins shown on the featured tab.
pub const FEATURED_PAGE_SIZE: u32 = 5;
/// Gainers and losers are ranked within the first page of this size only.
pub const RANKING_WINDOW: u32 = 20;
pub const DEFAULT_RANK_LIMIT: usize = 5;

// ─── CoinSummary ─────────────────────────────────────────────────────────────

/// A coin's current market snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
    pub product_id: ProductId,
    /// Upstream `id`, e.g. `"bitcoin"`.
    pub slug: String,
    pub symbol: String,
    pub name: String,
    pub image_url: String,
    pub current_price: Decimal,
    pub price_change_percent_24h: Decimal,
    /// Recent prices, oldest first. May be empty.
    pub sparkline: Vec<Decimal>,
    pub market_cap: Decimal,
    pub trading_volume_24h: Decimal,
}

impl CoinSummary {
    /// Upper-cased ticker, e.g. `BTC`.
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Zero change counts as gaining.
    pub fn is_gaining(&self) -> bool {
        self.price_change_percent_24h >= Decimal::ZERO
    }

    /// Sparkline as `f64`, ready for [`line_points`](crate::chart::line_points).
    pub fn sparkline_values(&self) -> Vec<f64> {
        self.sparkline.iter().filter_map(|d| d.to_f64()).collect()
    }

    /// Encode the coin as a URL-safe string, for handing it to a details view.
    pub fn to_route_param(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(urlencoding::encode(&json).into_owned())
    }

    pub fn from_route_param(param: &str) -> Result<Self, crate::error::SdkError> {
        let json = urlencoding::decode(param)
            .map_err(|e| crate::error::SdkError::Validation(format!("Invalid route param: {}", e)))?;
        Ok(serde_json::from_str(&json)?)
    }
}

// ─── PagedCoinResult ─────────────────────────────────────────────────────────

/// One page of the coin listing, with upstream pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedCoinResult {
    pub items: Vec<CoinSummary>,
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PagedCoinResult {
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

// ─── MarketTab ───────────────────────────────────────────────────────────────

/// Derived views of the first listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarketTab {
    #[default]
    Featured,
    TopGainers,
    TopLosers,
}

impl MarketTab {
    pub const ALL: [MarketTab; 3] = [MarketTab::Featured, MarketTab::TopGainers, MarketTab::TopLosers];

    pub fn label(&self) -> &'static str {
        match self {
            MarketTab::Featured => "Featured",
            MarketTab::TopGainers => "Top Gainers",
            MarketTab::TopLosers => "Top Losers",
        }
    }
}

impl fmt::Display for MarketTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Ranking ─────────────────────────────────────────────────────────────────

/// The `limit` coins with the largest 24h change, highest first.
///
/// Ties keep their input order.
pub fn rank_gainers(coins: &[CoinSummary], limit: usize) -> Vec<CoinSummary> {
    let mut ranked = coins.to_vec();
    ranked.sort_by(|a, b| b.price_change_percent_24h.cmp(&a.price_change_percent_24h));
    ranked.truncate(limit);
    ranked
}

/// The `limit` coins with the smallest 24h change, lowest first.
///
/// Ties keep their input order.
pub fn rank_losers(coins: &[CoinSummary], limit: usize) -> Vec<CoinSummary> {
    let mut ranked = coins.to_vec();
    ranked.sort_by(|a, b| a.price_change_percent_24h.cmp(&b.price_change_percent_24h));
    ranked.truncate(limit);
    ranked
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    NonFinite(&'static str),
    Negative(&'static str),
    NonFiniteSparkline(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(slug, errors) => {
                writeln!(f, "Coin validation errors ({slug}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::NonFinite(field) => write!(f, "Non-finite {}", field),
            ValidationError::Negative(field) => write!(f, "Negative {}", field),
            ValidationError::NonFiniteSparkline(i) => {
                write!(f, "Non-finite sparkline value at index {}", i)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

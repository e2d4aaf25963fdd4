//! # BurjX SDK
//!
//! A Rust client for the BurjX coin market API, with a renderer-independent
//! chart engine. Supports both native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: types, domain models, state containers, chart math (always available, WASM-safe)
//! 2. **HTTP API**: `BurjxHttp` over a pluggable `Transport`, with opt-in retries
//! 3. **High-Level Client**: `BurjxClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use burjx_sdk::prelude::*;
//!
//! let client = BurjxClient::builder().build()?;
//!
//! let gainers = client.coins().top_gainers(&Currency::usd(), 5).await?;
//! let bars = client.ohlc().get(ProductId::new(1), Interval::Days(7)).await?;
//! let candles = compute_candle_geometry(&bars, &Currency::usd(), 320.0, 200.0)?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, request fencing and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Chart normalization: sparklines, candles, axis labels.
pub mod chart;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `BurjxClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Currency, ProductId, RequestSequencer, RequestTicket};

    // Domain types: coin
    pub use crate::domain::coin::{
        rank_gainers, rank_losers, CoinSummary, MarketTab, PagedCoinResult,
    };

    // Domain types: ohlc
    pub use crate::domain::ohlc::{Interval, OhlcBar, OhlcQuad};

    // State containers
    pub use crate::domain::coin::{
        CoinFilter, CoinListState, FeaturedState, LoadPhase, PageRequest, SearchField, TabRequest,
    };
    pub use crate::domain::ohlc::{OhlcHistoryState, OhlcRequest};

    // Chart engine
    pub use crate::chart::{
        compute_candle_geometry, generate_axis_labels, line_points, normalize_series, AxisLabel,
        CandleChart, CandleDirection, CandleGeometry, ChartError, NormalizedPoint, PlotArea,
    };

    // Formatting
    pub use crate::shared::fmt::{format_percent_change, format_price};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{BurjxClient, BurjxClientBuilder, CoinsClient, OhlcClient};
    #[cfg(feature = "http")]
    pub use crate::http::{RetryConfig, RetryPolicy, Transport};
}

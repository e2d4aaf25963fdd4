//! Network constants for the BurjX market API.

use std::time::Duration;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://coingeko.burjx.com";

/// Paginated coin listing with prices and sparklines.
pub const COIN_PRICES_PATH: &str = "/coin-prices-all";

/// Per-coin OHLC history.
pub const COIN_OHLC_PATH: &str = "/coin-ohlc";

/// Environment variable overriding the base URL (see `BurjxClientBuilder::from_env`).
pub const API_URL_ENV: &str = "BURJX_API_URL";

/// Default per-request timeout on native targets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

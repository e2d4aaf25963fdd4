//! High-level client: `BurjxClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::coin::client::Coins;
use crate::domain::ohlc::client::Ohlc;
use crate::error::SdkError;
use crate::http::{BurjxHttp, ReqwestTransport, RetryPolicy, Transport};
use crate::network::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::ohlc::client::Ohlc as OhlcClient;

/// The primary entry point for the BurjX SDK.
///
/// Provides nested sub-client accessors: `client.coins()`, `client.ohlc()`.
/// Cloning is cheap and shares the underlying transport.
#[derive(Debug, Clone)]
pub struct BurjxClient {
    pub(crate) http: BurjxHttp,
}

impl BurjxClient {
    pub fn builder() -> BurjxClientBuilder {
        BurjxClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn ohlc(&self) -> Ohlc<'_> {
        Ohlc { client: self }
    }

    /// The low-level client, for callers who want wire types.
    pub fn http(&self) -> &BurjxHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BurjxClientBuilder {
    base_url: String,
    timeout: Duration,
    retry_policy: RetryPolicy,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for BurjxClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::None,
            transport: None,
        }
    }
}

impl BurjxClientBuilder {
    /// Defaults, with the base URL taken from `BURJX_API_URL` when set.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => builder.base_url(url.trim()),
            _ => builder,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout of the default transport. Ignored on WASM and
    /// when a custom transport is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Replace the default `reqwest` transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<BurjxClient, SdkError> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SdkError::Other(format!("Invalid base URL: {}", self.base_url)));
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };

        Ok(BurjxClient {
            http: BurjxHttp::new(base_url, transport, self.retry_policy),
        })
    }
}

//! Low-level HTTP client: `BurjxHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). `BurjxClient` wraps this.

use crate::domain::coin::wire::CoinPricesResponse;
use crate::domain::ohlc::wire::OhlcResponse;
use crate::domain::ohlc::Interval;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::http::transport::Transport;
use crate::network::{COIN_OHLC_PATH, COIN_PRICES_PATH};
use crate::shared::{Currency, ProductId};

use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Low-level HTTP client for the BurjX REST API.
#[derive(Clone)]
pub struct BurjxHttp {
    base_url: String,
    transport: Arc<dyn Transport>,
    retry: RetryPolicy,
}

impl BurjxHttp {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, retry: RetryPolicy) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            retry,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    // ── Coins ────────────────────────────────────────────────────────────

    pub fn coin_prices_url(&self, currency: &Currency, page: u32, page_size: u32) -> String {
        format!(
            "{}{}?currency={}&page={}&pageSize={}",
            self.base_url,
            COIN_PRICES_PATH,
            urlencoding::encode(currency.as_str()),
            page,
            page_size
        )
    }

    pub async fn get_coin_prices(
        &self,
        currency: &Currency,
        page: u32,
        page_size: u32,
    ) -> Result<CoinPricesResponse, HttpError> {
        let url = self.coin_prices_url(currency, page, page_size);
        self.get(&url).await
    }

    // ── OHLC ─────────────────────────────────────────────────────────────

    pub fn coin_ohlc_url(&self, product_id: ProductId, interval: Interval) -> String {
        format!(
            "{}{}?productId={}&days={}",
            self.base_url,
            COIN_OHLC_PATH,
            product_id,
            interval.as_query()
        )
    }

    pub async fn get_coin_ohlc(
        &self,
        product_id: ProductId,
        interval: Interval,
    ) -> Result<Vec<OhlcResponse>, HttpError> {
        let url = self.coin_ohlc_url(product_id, interval);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let config = match self.retry.config() {
            None => return self.do_request(url).await,
            Some(c) => c,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if config.should_retry(&e) && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else if last_error.is_some() && config.should_retry(&e) {
                        last_error = Some(e);
                        break;
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);
        let resp = self.transport.get(url).await?;

        if !resp.is_success() {
            let body = resp.body_text();
            tracing::warn!(status = resp.status, body = %body, "Request to {} failed", url);
            return Err(HttpError::Status {
                status: resp.status,
                body,
            });
        }

        serde_json::from_slice(&resp.body).map_err(HttpError::Decode)
    }
}

impl std::fmt::Debug for BurjxHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BurjxHttp")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::retry::RetryConfig;
    use crate::http::transport::RawResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Replays canned responses in order and records requested URLs.
    struct Scripted {
        responses: Mutex<Vec<Result<RawResponse, HttpError>>>,
        urls: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(mut responses: Vec<Result<RawResponse, HttpError>>) -> Arc<Self> {
            responses.reverse();
            Arc::new(Self {
                responses: Mutex::new(responses),
                urls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.urls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for Scripted {
        async fn get(&self, url: &str) -> Result<RawResponse, HttpError> {
            self.urls.lock().unwrap().push(url.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(HttpError::network("script exhausted")))
        }
    }

    fn fast_retry() -> RetryPolicy {
        RetryPolicy::Custom(RetryConfig {
            max_retries: 2,
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
            jitter: false,
            ..RetryConfig::idempotent()
        })
    }

    #[test]
    fn test_urls_are_built_verbatim() {
        let http = BurjxHttp::new(
            "https://coingeko.burjx.com/",
            Scripted::new(vec![]),
            RetryPolicy::None,
        );
        assert_eq!(
            http.coin_prices_url(&Currency::usd(), 1, 10),
            "https://coingeko.burjx.com/coin-prices-all?currency=usd&page=1&pageSize=10"
        );
        assert_eq!(
            http.coin_ohlc_url(ProductId::new(1), Interval::Max),
            "https://coingeko.burjx.com/coin-ohlc?productId=1&days=max"
        );
        assert_eq!(
            http.coin_ohlc_url(ProductId::new(7), Interval::Days(30)),
            "https://coingeko.burjx.com/coin-ohlc?productId=7&days=30"
        );
    }

    #[tokio::test]
    async fn test_no_policy_means_one_attempt() {
        let transport = Scripted::new(vec![
            Ok(RawResponse::new(503, "")),
            Ok(RawResponse::new(200, "[]")),
        ]);
        let http = BurjxHttp::new("http://x", transport.clone(), RetryPolicy::None);
        let err = http
            .get_coin_ohlc(ProductId::new(1), Interval::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_retry_recovers_from_retryable_status() {
        let transport = Scripted::new(vec![
            Ok(RawResponse::new(503, "")),
            Ok(RawResponse::new(200, "[]")),
        ]);
        let http = BurjxHttp::new("http://x", transport.clone(), fast_retry());
        let bars = http
            .get_coin_ohlc(ProductId::new(1), Interval::default())
            .await
            .unwrap();
        assert!(bars.is_empty());
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_max() {
        let transport = Scripted::new(vec![
            Err(HttpError::network("reset")),
            Err(HttpError::network("reset")),
            Err(HttpError::network("reset")),
        ]);
        let http = BurjxHttp::new("http://x", transport.clone(), fast_retry());
        let err = http
            .get_coin_ohlc(ProductId::new(1), Interval::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::MaxRetriesExceeded { attempts: 3, .. }));
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_status_fails_fast_under_policy() {
        let transport = Scripted::new(vec![Ok(RawResponse::new(500, "boom"))]);
        let http = BurjxHttp::new("http://x", transport.clone(), fast_retry());
        let err = http
            .get_coin_ohlc(ProductId::new(1), Interval::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "API request failed with status 500");
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let transport = Scripted::new(vec![Ok(RawResponse::new(200, "{\"nope\": 1}"))]);
        let http = BurjxHttp::new("http://x", transport, RetryPolicy::None);
        let err = tokio_test::block_on(http.get_coin_ohlc(ProductId::new(1), Interval::default()))
            .unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
    }
}

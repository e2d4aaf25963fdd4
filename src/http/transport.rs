//! Transport seam: how a GET actually reaches the network.
//!
//! `BurjxHttp` only needs "GET this URL, give me status + body". Keeping that
//! behind a trait lets tests and embedders swap in their own transport.

use crate::error::HttpError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// A raw HTTP response: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs GET requests.
///
/// Implementations report failures to get any response as
/// `HttpError::Network`; non-2xx responses are returned as `Ok`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, HttpError>;
}

/// `reqwest`-backed transport used by default.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing `reqwest::Client` (shared pools, custom TLS, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok(RawResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse::new(200, "{}").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(199, "").is_success());
        assert!(!RawResponse::new(301, "").is_success());
        assert!(!RawResponse::new(500, "").is_success());
    }

    #[test]
    fn test_body_text_is_lossy() {
        let resp = RawResponse::new(500, vec![b'o', b'k', 0xff]);
        assert_eq!(resp.body_text(), "ok\u{fffd}");
    }
}

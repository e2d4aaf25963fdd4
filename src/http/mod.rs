//! HTTP client layer: `BurjxHttp` over a pluggable `Transport`, with opt-in retries.

pub mod client;
pub mod retry;
pub mod transport;

pub use client::BurjxHttp;
pub use retry::{RetryConfig, RetryPolicy};
pub use transport::{RawResponse, ReqwestTransport, Transport};

//! OHLC sub-client.

use crate::client::BurjxClient;
use crate::domain::ohlc::{Interval, OhlcBar, OhlcRequest};
use crate::error::SdkError;
use crate::shared::ProductId;

/// Sub-client for candle history.
pub struct Ohlc<'a> {
    pub(crate) client: &'a BurjxClient,
}

impl<'a> Ohlc<'a> {
    /// Bars for `product_id` over `interval`, in upstream order.
    pub async fn get(
        &self,
        product_id: ProductId,
        interval: Interval,
    ) -> Result<Vec<OhlcBar>, SdkError> {
        let result = self.fetch(product_id, interval).await;
        if let Err(e) = &result {
            tracing::error!(product_id = %product_id, interval = %interval, error = %e, "Error fetching OHLC data");
        }
        result
    }

    /// Last day of bars.
    pub async fn get_default(&self, product_id: ProductId) -> Result<Vec<OhlcBar>, SdkError> {
        self.get(product_id, Interval::default()).await
    }

    /// Perform a request issued by [`OhlcHistoryState`](super::OhlcHistoryState).
    pub async fn load(&self, request: &OhlcRequest) -> Result<Vec<OhlcBar>, SdkError> {
        self.get(request.product_id, request.interval).await
    }

    async fn fetch(
        &self,
        product_id: ProductId,
        interval: Interval,
    ) -> Result<Vec<OhlcBar>, SdkError> {
        let resp = self.client.http.get_coin_ohlc(product_id, interval).await?;
        resp.into_iter()
            .map(|r| OhlcBar::try_from(r).map_err(|e| SdkError::Validation(e.to_string())))
            .collect()
    }
}

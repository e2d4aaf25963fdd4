//! Coins sub-client: listing pages and the derived featured/ranking views.

use crate::client::BurjxClient;
use crate::domain::coin::{
    self, rank_gainers, rank_losers, CoinSummary, MarketTab, PageRequest, PagedCoinResult,
    TabRequest, DEFAULT_PAGE_SIZE, DEFAULT_RANK_LIMIT, FEATURED_PAGE_SIZE, RANKING_WINDOW,
};
use crate::error::SdkError;
use crate::shared::Currency;

/// Sub-client for coin listing operations.
///
/// Every call is one round trip to the listing endpoint. Nothing is cached.
pub struct Coins<'a> {
    pub(crate) client: &'a BurjxClient,
}

impl<'a> Coins<'a> {
    /// Fetch one page of the listing.
    pub async fn page(
        &self,
        currency: &Currency,
        page: u32,
        page_size: u32,
    ) -> Result<PagedCoinResult, SdkError> {
        let result = self.fetch_page(currency, page, page_size).await;
        if let Err(e) = &result {
            tracing::error!(currency = %currency, page, page_size, error = %e, "Error fetching coin data");
        }
        result
    }

    /// First page of 10 in USD.
    pub async fn page_default(&self) -> Result<PagedCoinResult, SdkError> {
        self.page(&Currency::usd(), 1, DEFAULT_PAGE_SIZE).await
    }

    async fn fetch_page(
        &self,
        currency: &Currency,
        page: u32,
        page_size: u32,
    ) -> Result<PagedCoinResult, SdkError> {
        let resp = self
            .client
            .http
            .get_coin_prices(currency, page, page_size)
            .await?;
        resp.try_into()
            .map_err(|e: coin::ValidationError| SdkError::Validation(e.to_string()))
    }

    /// The first five coins of the listing, in upstream order.
    pub async fn featured(&self, currency: &Currency) -> Result<Vec<CoinSummary>, SdkError> {
        Ok(self.page(currency, 1, FEATURED_PAGE_SIZE).await?.items)
    }

    /// The `limit` largest 24h gainers among the first 20 coins.
    pub async fn top_gainers(
        &self,
        currency: &Currency,
        limit: usize,
    ) -> Result<Vec<CoinSummary>, SdkError> {
        let window = self.page(currency, 1, RANKING_WINDOW).await?;
        Ok(rank_gainers(&window.items, limit))
    }

    /// The `limit` largest 24h losers among the first 20 coins.
    pub async fn top_losers(
        &self,
        currency: &Currency,
        limit: usize,
    ) -> Result<Vec<CoinSummary>, SdkError> {
        let window = self.page(currency, 1, RANKING_WINDOW).await?;
        Ok(rank_losers(&window.items, limit))
    }

    /// Coins shown on `tab`.
    pub async fn for_tab(
        &self,
        tab: MarketTab,
        currency: &Currency,
    ) -> Result<Vec<CoinSummary>, SdkError> {
        match tab {
            MarketTab::Featured => self.featured(currency).await,
            MarketTab::TopGainers => self.top_gainers(currency, DEFAULT_RANK_LIMIT).await,
            MarketTab::TopLosers => self.top_losers(currency, DEFAULT_RANK_LIMIT).await,
        }
    }

    /// Perform a request issued by [`CoinListState`](super::CoinListState).
    pub async fn load(&self, request: &PageRequest) -> Result<PagedCoinResult, SdkError> {
        self.page(&request.currency, request.page, request.page_size)
            .await
    }

    /// Perform a request issued by [`FeaturedState`](super::FeaturedState).
    pub async fn load_tab(&self, request: &TabRequest) -> Result<Vec<CoinSummary>, SdkError> {
        self.for_tab(request.tab, &request.currency).await
    }
}

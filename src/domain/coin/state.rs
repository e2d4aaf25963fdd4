//! Coin list state containers: app-owned, SDK-provided update logic.
//!
//! The app keeps these (e.g. inside a UI signal), asks them for the next
//! request, performs it with [`Coins`](super::client::Coins), and feeds the
//! outcome back through `apply*` / `fail`. Outcomes of superseded requests are
//! ignored.

use super::{CoinSummary, MarketTab, PagedCoinResult, DEFAULT_PAGE_SIZE};
use crate::error::SdkError;
use crate::shared::{Currency, RequestSequencer, RequestTicket};

// ─── CoinListState ───────────────────────────────────────────────────────────

/// Why a page is being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadPhase {
    Initial,
    More,
    Refresh,
}

impl LoadPhase {
    /// Message shown to the user when a fetch in this phase fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            LoadPhase::Initial => "Failed to load coin data. Please try again later.",
            LoadPhase::More => "Failed to load more coins. Please try again later.",
            LoadPhase::Refresh => "Failed to refresh coin data. Please try again later.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: RequestTicket,
    pub currency: Currency,
    pub page: u32,
    pub page_size: u32,
    pub phase: LoadPhase,
}

/// Paginated, infinitely scrolling coin list.
#[derive(Debug, Clone)]
pub struct CoinListState {
    currency: Currency,
    page_size: u32,
    coins: Vec<CoinSummary>,
    current_page: u32,
    total_pages: u32,
    loading: bool,
    loading_more: bool,
    error: Option<String>,
    sequencer: RequestSequencer,
}

impl Default for CoinListState {
    fn default() -> Self {
        Self::new(Currency::usd(), DEFAULT_PAGE_SIZE)
    }
}

impl CoinListState {
    pub fn new(currency: Currency, page_size: u32) -> Self {
        Self {
            currency,
            page_size,
            coins: Vec::new(),
            current_page: 1,
            total_pages: 1,
            loading: false,
            loading_more: false,
            error: None,
            sequencer: RequestSequencer::new(),
        }
    }

    /// First page, keeping whatever is already listed until it resolves.
    pub fn begin_initial(&mut self) -> PageRequest {
        self.begin_first_page(LoadPhase::Initial)
    }

    /// First page again. Supersedes any load-more in flight.
    pub fn begin_refresh(&mut self) -> PageRequest {
        self.begin_first_page(LoadPhase::Refresh)
    }

    fn begin_first_page(&mut self, phase: LoadPhase) -> PageRequest {
        self.loading = true;
        self.loading_more = false;
        PageRequest {
            ticket: self.sequencer.issue(),
            currency: self.currency.clone(),
            page: 1,
            page_size: self.page_size,
            phase,
        }
    }

    /// Next page, or `None` when one is already loading, the first page is
    /// loading, or the last page has been reached.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.loading || self.loading_more || self.current_page >= self.total_pages {
            return None;
        }
        self.loading_more = true;
        Some(PageRequest {
            ticket: self.sequencer.issue(),
            currency: self.currency.clone(),
            page: self.current_page + 1,
            page_size: self.page_size,
            phase: LoadPhase::More,
        })
    }

    /// First pages replace the list, later pages append to it.
    ///
    /// Returns `false` when `request` has been superseded.
    pub fn apply_page(&mut self, request: &PageRequest, result: PagedCoinResult) -> bool {
        if !self.sequencer.is_current(request.ticket) {
            tracing::debug!(ticket = request.ticket.id(), page = request.page, "Dropping stale coin page");
            return false;
        }
        match request.phase {
            LoadPhase::Initial | LoadPhase::Refresh => {
                self.coins = result.items;
                self.total_pages = result.total_pages;
                self.current_page = 1;
                self.loading = false;
            }
            LoadPhase::More => {
                self.coins.extend(result.items);
                self.current_page = request.page;
                self.loading_more = false;
            }
        }
        self.error = None;
        true
    }

    /// Returns `false` when `request` has been superseded.
    pub fn fail(&mut self, request: &PageRequest, error: &SdkError) -> bool {
        if !self.sequencer.is_current(request.ticket) {
            return false;
        }
        tracing::error!(page = request.page, phase = ?request.phase, error = %error, "Error fetching coin page");
        match request.phase {
            LoadPhase::Initial | LoadPhase::Refresh => self.loading = false,
            LoadPhase::More => self.loading_more = false,
        }
        self.error = Some(request.phase.failure_message().to_string());
        true
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn coins(&self) -> &[CoinSummary] {
        &self.coins
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

// ─── FeaturedState ───────────────────────────────────────────────────────────

pub const FEATURED_LOAD_FAILED: &str = "Failed to load featured coins. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRequest {
    pub ticket: RequestTicket,
    pub tab: MarketTab,
    pub currency: Currency,
}

/// The featured / top gainers / top losers carousel.
#[derive(Debug, Clone)]
pub struct FeaturedState {
    selected_tab: MarketTab,
    currency: Currency,
    coins: Vec<CoinSummary>,
    loading: bool,
    error: Option<String>,
    sequencer: RequestSequencer,
}

impl Default for FeaturedState {
    fn default() -> Self {
        Self::new(MarketTab::default(), Currency::usd())
    }
}

impl FeaturedState {
    pub fn new(selected_tab: MarketTab, currency: Currency) -> Self {
        Self {
            selected_tab,
            currency,
            coins: Vec::new(),
            loading: false,
            error: None,
            sequencer: RequestSequencer::new(),
        }
    }

    /// Switch tabs. Coins of the previous tab stay visible until this resolves.
    pub fn select_tab(&mut self, tab: MarketTab) -> TabRequest {
        self.selected_tab = tab;
        self.refresh()
    }

    pub fn refresh(&mut self) -> TabRequest {
        self.loading = true;
        TabRequest {
            ticket: self.sequencer.issue(),
            tab: self.selected_tab,
            currency: self.currency.clone(),
        }
    }

    /// Returns `false` when `request` has been superseded.
    pub fn apply(&mut self, request: &TabRequest, coins: Vec<CoinSummary>) -> bool {
        if !self.sequencer.is_current(request.ticket) {
            tracing::debug!(ticket = request.ticket.id(), tab = %request.tab, "Dropping stale tab response");
            return false;
        }
        self.coins = coins;
        self.loading = false;
        self.error = None;
        true
    }

    /// Returns `false` when `request` has been superseded.
    pub fn fail(&mut self, request: &TabRequest, error: &SdkError) -> bool {
        if !self.sequencer.is_current(request.ticket) {
            return false;
        }
        tracing::error!(tab = %request.tab, error = %error, "Error fetching featured coins");
        self.loading = false;
        self.error = Some(FEATURED_LOAD_FAILED.to_string());
        true
    }

    pub fn selected_tab(&self) -> MarketTab {
        self.selected_tab
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn coins(&self) -> &[CoinSummary] {
        &self.coins
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::tests::coin;
    use crate::error::HttpError;

    fn page(n: u32, total_pages: u32, slugs: &[&str]) -> PagedCoinResult {
        PagedCoinResult {
            items: slugs.iter().map(|s| coin(s, 1)).collect(),
            page: n,
            page_size: 2,
            total_items: total_pages as u64 * 2,
            total_pages,
        }
    }

    fn slugs(state: &CoinListState) -> Vec<&str> {
        state.coins().iter().map(|c| c.slug.as_str()).collect()
    }

    fn status_error() -> SdkError {
        SdkError::Http(HttpError::Status {
            status: 500,
            body: String::new(),
        })
    }

    #[test]
    fn test_load_more_appends_until_last_page() {
        let mut state = CoinListState::new(Currency::usd(), 2);
        let first = state.begin_initial();
        assert_eq!((first.page, first.page_size), (1, 2));
        assert!(state.begin_load_more().is_none());
        assert!(state.apply_page(&first, page(1, 2, &["a", "b"])));

        let more = state.begin_load_more().unwrap();
        assert_eq!(more.page, 2);
        assert_eq!(more.phase, LoadPhase::More);
        assert!(state.is_loading_more());
        assert!(state.begin_load_more().is_none());

        assert!(state.apply_page(&more, page(2, 2, &["c", "d"])));
        assert_eq!(slugs(&state), ["a", "b", "c", "d"]);
        assert_eq!(state.current_page(), 2);
        assert!(!state.has_more());
        assert!(state.begin_load_more().is_none());
    }

    #[test]
    fn test_refresh_supersedes_load_more() {
        let mut state = CoinListState::new(Currency::usd(), 2);
        let first = state.begin_initial();
        state.apply_page(&first, page(1, 3, &["a", "b"]));

        let more = state.begin_load_more().unwrap();
        let refresh = state.begin_refresh();
        assert!(!state.is_loading_more());

        assert!(!state.apply_page(&more, page(2, 3, &["c", "d"])));
        assert!(state.apply_page(&refresh, page(1, 3, &["x", "y"])));
        assert_eq!(slugs(&state), ["x", "y"]);
        assert_eq!(state.current_page(), 1);
        assert!(!state.fail(&more, &status_error()));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failure_messages_per_phase() {
        let mut state = CoinListState::default();
        let first = state.begin_initial();
        assert!(state.fail(&first, &status_error()));
        assert_eq!(state.error(), Some(LoadPhase::Initial.failure_message()));
        assert!(!state.is_loading());

        let refresh = state.begin_refresh();
        state.apply_page(&refresh, page(1, 5, &["a"]));
        assert!(state.error().is_none());

        let more = state.begin_load_more().unwrap();
        state.fail(&more, &status_error());
        assert_eq!(
            state.error(),
            Some("Failed to load more coins. Please try again later.")
        );
        assert_eq!(state.current_page(), 1);
        assert!(state.begin_load_more().is_some());
    }

    #[test]
    fn test_featured_tab_switch_drops_stale_response() {
        let mut state = FeaturedState::default();
        let featured = state.refresh();
        let gainers = state.select_tab(MarketTab::TopGainers);
        assert_eq!(gainers.tab, MarketTab::TopGainers);

        assert!(state.apply(&gainers, vec![coin("up", 9)]));
        assert!(!state.apply(&featured, vec![coin("a", 1), coin("b", 2)]));
        assert_eq!(state.coins().len(), 1);
        assert_eq!(state.selected_tab(), MarketTab::TopGainers);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_featured_failure_message() {
        let mut state = FeaturedState::new(MarketTab::TopLosers, Currency::aed());
        let req = state.refresh();
        assert_eq!(req.currency, Currency::aed());
        assert!(state.fail(&req, &status_error()));
        assert_eq!(state.error(), Some(FEATURED_LOAD_FAILED));
    }
}

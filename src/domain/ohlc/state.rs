//! OHLC history state: app-owned, SDK-provided update logic.

use super::{Interval, OhlcBar};
use crate::chart::{CandleChart, ChartError};
use crate::error::SdkError;
use crate::shared::{Currency, ProductId, RequestSequencer, RequestTicket};

pub const CHART_LOAD_FAILED: &str = "Failed to load chart data. Please try again.";

/// A fetch the state expects to be resolved with `apply` or `fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OhlcRequest {
    pub ticket: RequestTicket,
    pub product_id: ProductId,
    pub interval: Interval,
}

/// Candle history of one coin for the selected interval.
///
/// Switching the interval discards the bars of the previous one, and only the
/// most recent request may write into the state.
#[derive(Debug, Clone)]
pub struct OhlcHistoryState {
    product_id: ProductId,
    interval: Interval,
    bars: Vec<OhlcBar>,
    loading: bool,
    error: Option<String>,
    sequencer: RequestSequencer,
}

impl OhlcHistoryState {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            interval: Interval::default(),
            bars: Vec::new(),
            loading: false,
            error: None,
            sequencer: RequestSequencer::new(),
        }
    }

    /// Switch to `interval` and start loading it.
    pub fn select_interval(&mut self, interval: Interval) -> OhlcRequest {
        self.interval = interval;
        self.bars.clear();
        self.begin()
    }

    /// Fetch the current interval again, keeping the bars on screen meanwhile.
    pub fn reload(&mut self) -> OhlcRequest {
        self.begin()
    }

    fn begin(&mut self) -> OhlcRequest {
        self.loading = true;
        self.error = None;
        OhlcRequest {
            ticket: self.sequencer.issue(),
            product_id: self.product_id,
            interval: self.interval,
        }
    }

    /// Store the bars of `request`. Returns `false` for a superseded request.
    pub fn apply(&mut self, request: &OhlcRequest, bars: Vec<OhlcBar>) -> bool {
        if !self.sequencer.is_current(request.ticket) {
            tracing::debug!(ticket = request.ticket.id(), "Dropping stale OHLC response");
            return false;
        }
        self.bars = bars;
        self.loading = false;
        self.error = None;
        true
    }

    /// Record the failure of `request`. Returns `false` for a superseded request.
    pub fn fail(&mut self, request: &OhlcRequest, error: &SdkError) -> bool {
        if !self.sequencer.is_current(request.ticket) {
            return false;
        }
        tracing::error!(
            product_id = %request.product_id,
            interval = %request.interval,
            error = %error,
            "Error fetching OHLC data"
        );
        self.loading = false;
        self.error = Some(CHART_LOAD_FAILED.to_string());
        true
    }

    /// Candle chart of the loaded bars in `currency`.
    pub fn chart(&self, currency: &Currency) -> Result<CandleChart, ChartError> {
        CandleChart::new(&self.bars, currency)
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn bars(&self) -> &[OhlcBar] {
        &self.bars
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

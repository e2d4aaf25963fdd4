//! Candlestick geometry.
//!
//! All bars share one scale: the lowest `low` and highest `high` of the whole
//! series, so candles are comparable across the chart.

use super::axis::labels_for;
use super::{AxisLabel, ChartError, PlotArea, YScale};
use crate::domain::ohlc::{OhlcBar, OhlcQuad};
use crate::shared::Currency;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Narrowest body that is still visible.
pub const MIN_BODY_WIDTH: f64 = 2.0;
/// Shortest body that is still visible (doji bars).
pub const MIN_BODY_HEIGHT: f64 = 1.0;
/// Horizontal gap between neighbouring candles.
pub const CANDLE_GAP: f64 = 2.0;

/// Whether a bar closed at or above its open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandleDirection {
    /// `close >= open`. A flat bar is rising.
    Rising,
    Falling,
}

impl CandleDirection {
    pub fn of(quad: &OhlcQuad) -> Self {
        if quad.close >= quad.open {
            CandleDirection::Rising
        } else {
            CandleDirection::Falling
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, CandleDirection::Rising)
    }
}

/// Pixel geometry of one candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    /// Left edge of the body.
    pub x: f64,
    /// Center line of the wick.
    pub wick_x: f64,
    pub body_width: f64,
    pub open_y: f64,
    pub high_y: f64,
    pub low_y: f64,
    pub close_y: f64,
    pub body_top: f64,
    pub body_height: f64,
    pub direction: CandleDirection,
}

/// A candle series for one currency, with its price bounds resolved.
#[derive(Debug, Clone)]
pub struct CandleChart {
    quads: Vec<OhlcQuad>,
    min: Decimal,
    max: Decimal,
}

impl CandleChart {
    /// Fails on an empty series or when any bar lacks a `currency` quote.
    pub fn new(bars: &[OhlcBar], currency: &Currency) -> Result<Self, ChartError> {
        let quads = bars
            .iter()
            .map(|bar| {
                bar.quote(currency)
                    .copied()
                    .ok_or_else(|| ChartError::MissingCurrency(currency.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let min = quads
            .iter()
            .map(|q| q.low)
            .min()
            .ok_or(ChartError::EmptySeries)?;
        let max = quads
            .iter()
            .map(|q| q.high)
            .max()
            .ok_or(ChartError::EmptySeries)?;

        Ok(Self { quads, min, max })
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Lowest low and highest high across the series.
    pub fn bounds(&self) -> (Decimal, Decimal) {
        (self.min, self.max)
    }

    fn scale(&self, area: &PlotArea) -> YScale {
        YScale::new(to_f64(self.min), to_f64(self.max), area.height)
    }

    /// One geometry record per bar, in input order.
    pub fn geometry(&self, area: &PlotArea) -> Vec<CandleGeometry> {
        let scale = self.scale(area);
        let slot = area.width / self.quads.len() as f64;
        let body_width = (slot - CANDLE_GAP).max(MIN_BODY_WIDTH);

        self.quads
            .iter()
            .enumerate()
            .map(|(index, quad)| {
                let x = area.left + index as f64 * slot;
                let open_y = scale.y(to_f64(quad.open));
                let close_y = scale.y(to_f64(quad.close));
                let direction = CandleDirection::of(quad);
                let body_top = if direction.is_positive() {
                    close_y
                } else {
                    open_y
                };

                CandleGeometry {
                    x,
                    wick_x: x + body_width / 2.0,
                    body_width,
                    open_y,
                    high_y: scale.y(to_f64(quad.high)),
                    low_y: scale.y(to_f64(quad.low)),
                    close_y,
                    body_top,
                    body_height: (open_y - close_y).abs().max(MIN_BODY_HEIGHT),
                    direction,
                }
            })
            .collect()
    }

    /// Price labels spanning the series bounds.
    pub fn axis_labels(&self, count: usize, area: &PlotArea) -> Result<Vec<AxisLabel>, ChartError> {
        if count < 2 {
            return Err(ChartError::TooFewLabels(count));
        }
        Ok(labels_for(&self.scale(area), count))
    }

    /// Y coordinate of a horizontal marker line for `price` (e.g. the current price).
    pub fn price_marker_y(&self, price: Decimal, area: &PlotArea) -> f64 {
        self.scale(area).y(to_f64(price))
    }
}

/// Candle geometry for a `chart_width` x `chart_height` plot anchored at x = 0.
pub fn compute_candle_geometry(
    bars: &[OhlcBar],
    currency: &Currency,
    chart_width: f64,
    chart_height: f64,
) -> Result<Vec<CandleGeometry>, ChartError> {
    let chart = CandleChart::new(bars, currency)?;
    Ok(chart.geometry(&PlotArea::new(chart_width, chart_height)))
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    fn bar(open: i64, high: i64, low: i64, close: i64) -> OhlcBar {
        let mut quotes = HashMap::new();
        quotes.insert(
            Currency::usd(),
            OhlcQuad {
                open: Decimal::from(open),
                high: Decimal::from(high),
                low: Decimal::from(low),
                close: Decimal::from(close),
            },
        );
        OhlcBar {
            timestamp: Utc.timestamp_millis_opt(1625097600000).unwrap(),
            quotes,
        }
    }

    #[test]
    fn test_flat_bar_is_positive_with_min_height() {
        let bars = vec![bar(100, 110, 90, 100), bar(95, 120, 80, 105)];
        let geo = compute_candle_geometry(&bars, &Currency::usd(), 100.0, 200.0).unwrap();
        assert_eq!(geo[0].direction, CandleDirection::Rising);
        assert_eq!(geo[0].body_height, MIN_BODY_HEIGHT);
        assert_eq!(geo[0].body_top, geo[0].close_y);
    }

    #[test]
    fn test_global_bounds_across_series() {
        let bars = vec![bar(10, 20, 10, 15), bar(15, 40, 0, 5)];
        let geo = compute_candle_geometry(&bars, &Currency::usd(), 100.0, 400.0).unwrap();
        // scale is 0..40 over 400px
        assert_eq!(geo[0].high_y, 200.0);
        assert_eq!(geo[0].low_y, 300.0);
        assert_eq!(geo[1].high_y, 0.0);
        assert_eq!(geo[1].low_y, 400.0);
    }

    #[test]
    fn test_falling_bar_body_starts_at_open() {
        let bars = vec![bar(32, 32, 0, 8)];
        let geo = compute_candle_geometry(&bars, &Currency::usd(), 50.0, 320.0).unwrap();
        let c = geo[0];
        assert_eq!(c.direction, CandleDirection::Falling);
        assert_eq!(c.body_top, c.open_y);
        assert_eq!(c.open_y, 0.0);
        assert_eq!(c.close_y, 240.0);
        assert_eq!(c.body_height, 240.0);
    }

    #[test]
    fn test_x_positions_and_body_width() {
        let bars = vec![bar(1, 2, 0, 2); 4];
        let geo = compute_candle_geometry(&bars, &Currency::usd(), 200.0, 100.0).unwrap();
        let xs: Vec<f64> = geo.iter().map(|g| g.x).collect();
        assert_eq!(xs, vec![0.0, 50.0, 100.0, 150.0]);
        assert_eq!(geo[0].body_width, 48.0);
        assert_eq!(geo[1].wick_x, 74.0);
    }

    #[test]
    fn test_body_width_floor() {
        let bars = vec![bar(1, 2, 0, 2); 100];
        let geo = compute_candle_geometry(&bars, &Currency::usd(), 100.0, 100.0).unwrap();
        assert!(geo.iter().all(|g| g.body_width == MIN_BODY_WIDTH));
    }

    #[test]
    fn test_plot_area_offset() {
        let bars = vec![bar(1, 2, 0, 2); 2];
        let chart = CandleChart::new(&bars, &Currency::usd()).unwrap();
        let geo = chart.geometry(&PlotArea::with_axis_gutter(260.0, 300.0));
        assert_eq!(geo[0].x, 10.0);
        assert_eq!(geo[1].x, 110.0);
    }

    #[test]
    fn test_empty_and_missing_currency() {
        assert_eq!(
            compute_candle_geometry(&[], &Currency::usd(), 100.0, 100.0),
            Err(ChartError::EmptySeries)
        );
        let bars = vec![bar(1, 2, 0, 1)];
        assert_eq!(
            compute_candle_geometry(&bars, &Currency::aed(), 100.0, 100.0),
            Err(ChartError::MissingCurrency(Currency::aed()))
        );
    }

    #[test]
    fn test_axis_labels_and_price_marker() {
        let bars = vec![bar(35000, 36000, 34000, 35500)];
        let chart = CandleChart::new(&bars, &Currency::usd()).unwrap();
        let area = PlotArea::new(100.0, 200.0);
        let labels = chart.axis_labels(5, &area).unwrap();
        let values: Vec<f64> = labels.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![34000.0, 34500.0, 35000.0, 35500.0, 36000.0]);
        assert_eq!(chart.price_marker_y(Decimal::from(35000), &area), 100.0);
        assert_eq!(chart.axis_labels(1, &area), Err(ChartError::TooFewLabels(1)));
    }
}

//! Chart normalization: maps price series and OHLC bars into pixel space.
//!
//! Pure math, no I/O, no renderer. Y grows downwards (y = 0 is the top of the
//! plot), so larger values land higher on screen.

pub mod axis;
pub mod candle;
pub mod series;

pub use axis::{generate_axis_labels, AxisLabel, DEFAULT_LABEL_COUNT};
pub use candle::{compute_candle_geometry, CandleChart, CandleDirection, CandleGeometry};
pub use series::{line_points, normalize_series, NormalizedPoint};

use crate::shared::Currency;
use thiserror::Error;

/// Errors from the chart engine. All of them are caller contract violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Cannot normalize an empty series")]
    EmptySeries,

    #[error("Axis needs at least 2 labels, got {0}")]
    TooFewLabels(usize),

    #[error("Bar has no {0} quote")]
    MissingCurrency(Currency),
}

// ─── PlotArea ────────────────────────────────────────────────────────────────

/// Rectangle the geometry is laid out in, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    /// X offset of the first candle.
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Left margin used when the y-axis labels sit on the right.
    pub const AXIS_LEFT_MARGIN: f64 = 10.0;
    /// Space reserved for the y-axis labels (width) and the interval selector (height).
    pub const AXIS_GUTTER: f64 = 60.0;

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            width,
            height,
        }
    }

    /// Plot area for a full candle chart view of `total_width` x `total_height`,
    /// leaving room for price labels and the interval selector.
    pub fn with_axis_gutter(total_width: f64, total_height: f64) -> Self {
        Self {
            left: Self::AXIS_LEFT_MARGIN,
            width: (total_width - Self::AXIS_GUTTER).max(0.0),
            height: (total_height - Self::AXIS_GUTTER).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

// ─── YScale ──────────────────────────────────────────────────────────────────

/// Linear min-max mapping of values onto an inverted y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YScale {
    min: f64,
    max: f64,
    height: f64,
}

impl YScale {
    pub fn new(min: f64, max: f64, height: f64) -> Self {
        Self { min, max, height }
    }

    /// Fit the scale to the bounds of `values`.
    pub fn fit(values: &[f64], height: f64) -> Result<Self, ChartError> {
        let (min, max) = bounds(values.iter().copied()).ok_or(ChartError::EmptySeries)?;
        Ok(Self::new(min, max, height))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Pixel y for `value`. A flat series (zero range) plots at mid-height.
    pub fn y(&self, value: f64) -> f64 {
        let range = self.range();
        if range == 0.0 {
            return self.height / 2.0;
        }
        self.height - ((value - self.min) / range) * self.height
    }
}

/// Min and max of a sequence, `None` when it is empty.
pub(crate) fn bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

//! Scalar series (sparklines).

use super::{ChartError, YScale};
use serde::{Deserialize, Serialize};

/// One sparkline sample in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

/// Map every value to a y coordinate in `[0, height]`.
///
/// Larger values get smaller y (higher on screen). A constant series plots
/// every sample at `height / 2`.
pub fn normalize_series(values: &[f64], height: f64) -> Result<Vec<f64>, ChartError> {
    let scale = YScale::fit(values, height)?;
    Ok(values.iter().map(|&v| scale.y(v)).collect())
}

/// Points for a sparkline spread evenly across `width`.
///
/// The first sample is at `x = 0` and the last at `x = width`; a single
/// sample sits at `x = 0`.
pub fn line_points(
    values: &[f64],
    width: f64,
    height: f64,
) -> Result<Vec<NormalizedPoint>, ChartError> {
    let ys = normalize_series(values, height)?;
    let steps = (ys.len() - 1) as f64;
    Ok(ys
        .into_iter()
        .enumerate()
        .map(|(i, y)| NormalizedPoint {
            x: if steps > 0.0 {
                i as f64 / steps * width
            } else {
                0.0
            },
            y,
        })
        .collect())
}

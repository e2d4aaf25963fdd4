//! Y-axis price labels.

use super::{ChartError, YScale};
use crate::shared::fmt::format_price;
use serde::{Deserialize, Serialize};

/// Number of labels on the candle chart's price axis.
pub const DEFAULT_LABEL_COUNT: usize = 5;

/// A price label and the y coordinate of its grid line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub value: f64,
    pub y: f64,
}

impl AxisLabel {
    /// Label text, e.g. `35,500` or `0.004210`.
    pub fn text(&self) -> String {
        format_price(self.value)
    }
}

/// `count` evenly spaced values from `min` to `max` inclusive, bottom to top.
///
/// `count` must be at least 2.
pub fn generate_axis_labels(
    min: f64,
    max: f64,
    count: usize,
    height: f64,
) -> Result<Vec<AxisLabel>, ChartError> {
    if count < 2 {
        return Err(ChartError::TooFewLabels(count));
    }
    let scale = YScale::new(min, max, height);
    Ok(labels_for(&scale, count))
}

pub(crate) fn labels_for(scale: &YScale, count: usize) -> Vec<AxisLabel> {
    let steps = (count - 1) as f64;
    (0..count)
        .map(|i| {
            let value = scale.min() + scale.range() * i as f64 / steps;
            AxisLabel {
                value,
                y: scale.y(value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_labels_zero_to_hundred() {
        let labels = generate_axis_labels(0.0, 100.0, DEFAULT_LABEL_COUNT, 200.0).unwrap();
        let values: Vec<f64> = labels.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        let ys: Vec<f64> = labels.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![200.0, 150.0, 100.0, 50.0, 0.0]);
    }

    #[test]
    fn test_two_labels_are_the_bounds() {
        let labels = generate_axis_labels(34000.0, 36000.0, 2, 100.0).unwrap();
        assert_eq!(labels[0].value, 34000.0);
        assert_eq!(labels[1].value, 36000.0);
        assert_eq!(labels[1].text(), "36,000");
    }

    #[test]
    fn test_fewer_than_two_labels_is_an_error() {
        assert_eq!(
            generate_axis_labels(0.0, 1.0, 1, 10.0),
            Err(ChartError::TooFewLabels(1))
        );
        assert_eq!(
            generate_axis_labels(0.0, 1.0, 0, 10.0),
            Err(ChartError::TooFewLabels(0))
        );
    }

    #[test]
    fn test_flat_range_labels_share_mid_height() {
        let labels = generate_axis_labels(5.0, 5.0, 3, 60.0).unwrap();
        assert!(labels.iter().all(|l| l.value == 5.0 && l.y == 30.0));
    }
}

//! Timestamp rescaling for the charting layer.
//!
//! The backend reports timestamps in epoch seconds; the chart widgets expect
//! epoch milliseconds. The conversion is a naive multiplication: order and
//! length are preserved exactly, and a non-finite timestamp propagates
//! unchanged (no clamping).

use crate::core::domain::TimeSeriesPoint;

/// Rescale a series from epoch seconds to epoch milliseconds.
///
/// # Examples
///
/// ```
/// use dashboard_metrics::core::domain::TimeSeriesPoint;
/// use dashboard_metrics::transformations::to_epoch_millis;
///
/// let series = vec![TimeSeriesPoint::new(1453420800.0, Some(3.0))];
/// let millis = to_epoch_millis(&series);
/// assert_eq!(millis[0].timestamp, 1453420800000.0);
/// ```
pub fn to_epoch_millis(points: &[TimeSeriesPoint]) -> Vec<TimeSeriesPoint> {
    points
        .iter()
        .map(|p| TimeSeriesPoint::new(p.timestamp * 1000.0, p.value))
        .collect()
}

//! Ordinary-least-squares trend line over a time series.
//!
//! The final point of a series is assumed partial (the current day or week
//! is still accumulating) and is excluded from the fit, though a prediction
//! is still emitted for its x-value. Points with a null value are skipped
//! rather than zero-filled.
//!
//! Degenerate inputs are a defined outcome, not an error: with fewer than
//! two usable points, or all x identical, the denominator
//! `n*Σx² - (Σx)²` is zero and the gradient/intercept come out non-finite.
//! Those values propagate into the output unchanged; the charting layer is
//! responsible for ignoring non-finite predictions.

use crate::core::domain::TimeSeriesPoint;

/// Fit a least-squares line through a series and emit the prediction for
/// every input x-value, in input order.
///
/// The fit uses only points with a non-null value, excluding the final
/// point of the input; the output has the same length and x-values as the
/// full input.
///
/// # Examples
///
/// ```
/// use dashboard_metrics::core::domain::TimeSeriesPoint;
/// use dashboard_metrics::transformations::trend_line;
///
/// let points: Vec<_> = [(0.0, 1.0), (1.0, 2.0), (2.0, 3.0), (3.0, 999.0)]
///     .iter()
///     .map(|&(x, y)| TimeSeriesPoint::new(x, Some(y)))
///     .collect();
///
/// // The outlier is the partial last point: predicted, never fitted.
/// let fitted = trend_line(&points);
/// assert_eq!(fitted[3], TimeSeriesPoint::new(3.0, Some(4.0)));
/// ```
pub fn trend_line(points: &[TimeSeriesPoint]) -> Vec<TimeSeriesPoint> {
    let fit_points: Vec<(f64, f64)> = points
        .iter()
        .take(points.len().saturating_sub(1))
        .filter_map(|p| p.value.map(|y| (p.timestamp, y)))
        .collect();

    let n = fit_points.len() as f64;
    let sum_x: f64 = fit_points.iter().map(|&(x, _)| x).sum();
    let sum_y: f64 = fit_points.iter().map(|&(_, y)| y).sum();
    let sum_xy: f64 = fit_points.iter().map(|&(x, y)| x * y).sum();
    let sum_xx: f64 = fit_points.iter().map(|&(x, _)| x * x).sum();

    // Zero denominator yields NaN/Infinity and is propagated as-is.
    let gradient = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - gradient * sum_x) / n;

    points
        .iter()
        .map(|p| TimeSeriesPoint::new(p.timestamp, Some(gradient * p.timestamp + intercept)))
        .collect()
}

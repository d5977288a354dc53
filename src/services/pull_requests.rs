//! Assemble the `pullrequests` page view-model.

use crate::api::PullRequestMetrics;
use crate::core::domain::NamedSeries;
use crate::parsing::issues::PullRequestsPayload;
use crate::transformations::{timestamps::to_epoch_millis, trend_line};

/// Build the pull-requests view-model.
pub fn pull_request_metrics(payload: &PullRequestsPayload) -> PullRequestMetrics {
    let opened = to_epoch_millis(&payload.opened_per_day);
    let closed = to_epoch_millis(&payload.closed_per_day);
    let merged = to_epoch_millis(&payload.merged_per_day);
    let days_open = to_epoch_millis(&payload.days_open_before_close);
    let days_open_trend = trend_line(&days_open);

    PullRequestMetrics {
        days_open_current_mean: format!("{:.2}", payload.current_open_age_days_mean),
        open_close_per_day: vec![
            NamedSeries::new("PRs Opened Per Day", opened),
            NamedSeries::new("PRs Closed Per Day", closed),
            NamedSeries::new("PRs Merged Per Day", merged),
        ],
        days_open_before_close: vec![
            NamedSeries::new("PR Days Open Before Closed (by week)", days_open),
            NamedSeries::new("Trend", days_open_trend),
        ],
        bors_retries: payload.bors_retries.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::TimeSeriesPoint;

    #[test]
    fn test_three_series_in_open_close_chart() {
        let payload = PullRequestsPayload {
            opened_per_day: vec![TimeSeriesPoint::new(1.0, Some(30.0))],
            closed_per_day: vec![TimeSeriesPoint::new(1.0, Some(28.0))],
            merged_per_day: vec![TimeSeriesPoint::new(1.0, Some(25.0))],
            days_open_before_close: vec![],
            current_open_age_days_mean: 4.9,
            bors_retries: vec![],
        };

        let metrics = pull_request_metrics(&payload);
        assert_eq!(metrics.days_open_current_mean, "4.90");
        assert_eq!(metrics.open_close_per_day.len(), 3);
        assert_eq!(metrics.open_close_per_day[2].name, "PRs Merged Per Day");
        assert_eq!(metrics.open_close_per_day[2].data[0].timestamp, 1000.0);
    }
}

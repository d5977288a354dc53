//! Assemble the `releases` page view-model and the stable-release
//! projection.

use chrono::{NaiveDate, Utc};

use crate::api::{ReleaseMetrics, StableReleaseSchedule};
use crate::core::domain::{NamedSeries, ReleaseAnchor};
use crate::parsing::releases::ReleasesPayload;
use crate::transformations::{project_releases, timestamps::to_epoch_millis};

/// Build the releases view-model. Nightlies and the streak summary pass
/// through unchanged; builder timings are rescaled for charting.
pub fn release_metrics(payload: &ReleasesPayload) -> ReleaseMetrics {
    ReleaseMetrics {
        nightlies: payload.nightlies.clone(),
        streak_summary: payload.streak_summary.clone(),
        builder_times: payload
            .builder_times_mins
            .iter()
            .map(|(name, series)| NamedSeries::new(name.clone(), to_epoch_millis(series)))
            .collect(),
    }
}

/// Project the stable-release train as of `today`.
pub fn stable_schedule(today: NaiveDate) -> StableReleaseSchedule {
    project_releases(ReleaseAnchor::stable(), today).into()
}

/// Project the stable-release train as of the current date. The clock read
/// lives here so the projection itself stays deterministic.
pub fn current_stable_schedule() -> StableReleaseSchedule {
    stable_schedule(Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::TimeSeriesPoint;

    #[test]
    fn test_stable_schedule_formats_dates() {
        let today = NaiveDate::from_ymd_opt(2016, 2, 1).unwrap();
        let schedule = stable_schedule(today);

        assert_eq!(schedule.previous_date, "Fri Jan 22 2016");
        assert_eq!(schedule.next_date, "Fri Mar 04 2016");
        assert_eq!(schedule.next_next_date, "Fri Apr 15 2016");
        assert_eq!(schedule.previous_version, 6);
        assert_eq!(schedule.next_version, 7);
        assert_eq!(schedule.next_next_version, 8);
    }

    #[test]
    fn test_release_metrics_passthrough_and_rescale() {
        let payload = ReleasesPayload {
            nightlies: vec![("nightly-2016-01-22".to_string(), 14)],
            streak_summary: None,
            builder_times_mins: vec![(
                "auto-linux-64".to_string(),
                vec![TimeSeriesPoint::new(2.0, Some(75.0))],
            )],
        };

        let metrics = release_metrics(&payload);
        assert_eq!(metrics.nightlies[0].1, 14);
        assert_eq!(metrics.builder_times[0].data[0].timestamp, 2000.0);
    }
}

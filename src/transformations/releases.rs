//! Project the stable-release train forward from a known anchor.
//!
//! Releases ship on a fixed 6-week cadence, so the upcoming dates are pure
//! date arithmetic from any historical pair of releases. `today` is an
//! explicit parameter rather than a system-clock read, which keeps the
//! projection deterministic and testable; the service wrapper supplies the
//! current date.

use chrono::Duration;
use chrono::NaiveDate;

use crate::core::domain::{ReleaseAnchor, ReleaseSchedule};

/// Length of one release cycle in days (6 weeks).
pub const RELEASE_CYCLE_DAYS: i64 = 42;

/// Advance the release train from `anchor` until the next release date is
/// in the future of `today`.
///
/// Each step shifts the whole train by one cycle: the next release becomes
/// the previous one, every date moves forward 42 days from its own base,
/// and every version number increments by one. The loop terminates because
/// the next date strictly increases while `today` is fixed.
pub fn project_releases(anchor: ReleaseAnchor, today: NaiveDate) -> ReleaseSchedule {
    let cycle = Duration::days(RELEASE_CYCLE_DAYS);

    let mut schedule = ReleaseSchedule {
        previous: anchor.previous,
        next: anchor.next,
        next_next: anchor.next_next,
        previous_version: anchor.previous_version,
        next_version: anchor.next_version,
        next_next_version: anchor.next_next_version,
    };

    while today > schedule.next {
        schedule.previous = schedule.next;
        schedule.next += cycle;
        schedule.next_next += cycle;

        schedule.previous_version += 1;
        schedule.next_version += 1;
        schedule.next_next_version += 1;
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_step_advancement() {
        let schedule = project_releases(ReleaseAnchor::stable(), date(2016, 2, 1));

        assert_eq!(schedule.previous, date(2016, 1, 22));
        assert_eq!(schedule.next, date(2016, 3, 4));
        assert_eq!(schedule.previous_version, 6);
        assert_eq!(schedule.next_version, 7);
    }

    #[test]
    fn test_no_advancement_before_next_date() {
        let anchor = ReleaseAnchor::stable();
        let schedule = project_releases(anchor, date(2016, 1, 10));

        assert_eq!(schedule.previous, anchor.previous);
        assert_eq!(schedule.next, anchor.next);
        assert_eq!(schedule.previous_version, 5);
        assert_eq!(schedule.next_version, 6);
    }

    #[test]
    fn test_release_day_itself_does_not_advance() {
        // The loop condition is strictly greater-than.
        let schedule = project_releases(ReleaseAnchor::stable(), date(2016, 1, 22));
        assert_eq!(schedule.next, date(2016, 1, 22));
        assert_eq!(schedule.next_version, 6);
    }

    #[test]
    fn test_versions_track_42_day_steps() {
        // 2016-01-22 plus 10 cycles is 2017-03-17.
        let schedule = project_releases(ReleaseAnchor::stable(), date(2017, 3, 1));

        assert_eq!(schedule.previous, date(2017, 2, 3));
        assert_eq!(schedule.next, date(2017, 3, 17));
        assert_eq!(schedule.next_version - 6, 10);
        assert_eq!(schedule.next_version, schedule.previous_version + 1);
        assert_eq!(schedule.next_next_version, schedule.next_version + 1);
    }

    #[test]
    fn test_next_next_stays_one_cycle_ahead() {
        let schedule = project_releases(ReleaseAnchor::stable(), date(2016, 6, 15));
        assert_eq!(
            schedule.next_next - schedule.next,
            Duration::days(RELEASE_CYCLE_DAYS)
        );
    }
}

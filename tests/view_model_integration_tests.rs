//! End-to-end tests over the parse-then-assemble pipeline: one raw JSON
//! payload per endpoint family, through the parsers and services, checked
//! against the shape the chart templates bind to.

use chrono::NaiveDate;
use dashboard_metrics::parsing::builds::parse_buildbots;
use dashboard_metrics::parsing::fcp::parse_fcp_list;
use dashboard_metrics::parsing::issues::parse_issues;
use dashboard_metrics::parsing::summary::parse_summary;
use dashboard_metrics::services::{
    buildbot_metrics, fcp_dashboard, issue_metrics, stable_schedule, summary_metrics,
};

#[test]
fn test_issues_pipeline() {
    let json = r#"{
        "opened_per_day": [[1453420800, 24], [1453507200, 17], [1453593600, 21]],
        "closed_per_day": [[1453420800, 20], [1453507200, 19], [1453593600, 16]],
        "days_open_before_close": [[1453420800, 4.5], [1453507200, 3.75], [1453593600, 5.0]],
        "current_open_age_days_mean": 136.17825,
        "num_open_p_high_issues": 12,
        "num_open_regression_nightly_issues": 3,
        "num_open_regression_beta_issues": 2,
        "num_open_regression_stable_issues": 7
    }"#;

    let metrics = issue_metrics(&parse_issues(json).unwrap());

    assert_eq!(metrics.days_open_current_mean, "136.18");
    assert_eq!(metrics.open_close_per_day.len(), 2);
    assert_eq!(metrics.open_close_per_day[0].data[0].timestamp, 1453420800000.0);

    // Serialized points stay two-element arrays for the chart widget.
    let serialized = serde_json::to_value(&metrics).unwrap();
    assert_eq!(
        serialized["open_close_per_day"][0]["data"][0],
        serde_json::json!([1453420800000.0, 24.0])
    );
}

#[test]
fn test_buildbots_pipeline_with_precedence() {
    let json = r#"{
        "per_builder_times_mins": [
            ["auto-win-auto-mac-hybrid", [[1453420800, 100.0]]],
            ["auto-linux-64-opt", [[1453420800, 95.2]]],
            ["dist-docs", [[1453420800, 12.0]]]
        ],
        "per_builder_failures": []
    }"#;

    let metrics = buildbot_metrics(&parse_buildbots(json).unwrap());

    // "auto-win" is tested before "auto-mac", so the hybrid is windows.
    assert_eq!(metrics.windows.per_builder_times.len(), 1);
    assert_eq!(metrics.windows.per_builder_times[0].name, "auto-win-auto-mac-hybrid");
    assert!(metrics.mac.per_builder_times.is_empty());
    assert_eq!(metrics.linux.per_builder_times.len(), 1);
    assert_eq!(metrics.other.per_builder_times.len(), 1);
}

#[test]
fn test_fcp_pipeline() {
    let json = r#"[
        {
            "fcp": {"disposition": "merge"},
            "issue": {"number": 1, "title": "first", "labels": ["T-core"]},
            "status_comment": "",
            "reviews": [[{"login": "bob"}, false]]
        },
        {
            "fcp": {"disposition": "merge"},
            "issue": {"number": 2, "title": "second", "labels": ["T-core", "T-lang"]},
            "status_comment": "",
            "reviews": [[{"login": "alice"}, true], [{"login": "carol"}, true]]
        }
    ]"#;

    let dashboard = fcp_dashboard(&parse_fcp_list(json).unwrap());

    assert_eq!(dashboard.fcps.len(), 2);
    let core = &dashboard.fcps[0];
    assert_eq!(core.team, "T-core");
    assert_eq!(core.fcps.len(), 2);
    assert_eq!(core.fcps[0].pending_reviewers, vec!["bob"]);
    assert!(core.fcps[1].pending_reviewers.is_empty());

    let lang = &dashboard.fcps[1];
    assert_eq!(lang.team, "T-lang");
    assert_eq!(lang.fcps.len(), 1);
    assert!(lang.fcps[0].pending_reviewers.is_empty());

    // The templates read camelCase field names.
    let serialized = serde_json::to_value(&dashboard).unwrap();
    assert!(serialized["fcps"][0]["fcps"][0].get("pendingReviewers").is_some());
    assert!(serialized["fcps"][0]["fcps"][0].get("statusComment").is_some());
}

#[test]
fn test_summary_pipeline() {
    let json = r#"{
        "issues": {
            "opened_per_day": [[1453420800, 24]],
            "closed_per_day": [[1453420800, 20]],
            "days_open_before_close": [],
            "current_open_age_days_mean": 10.0,
            "num_open_p_high_issues": 1,
            "num_open_regression_nightly_issues": 0,
            "num_open_regression_beta_issues": 0,
            "num_open_regression_stable_issues": 0
        },
        "pull_requests": {
            "opened_per_day": [[1453420800, 31]],
            "closed_per_day": [[1453420800, 29]],
            "merged_per_day": [[1453420800, 25]],
            "days_open_before_close": [],
            "current_open_age_days_mean": 4.9
        },
        "buildbots": {
            "per_builder_times_mins": [["auto-linux-64-opt", [[1453420800, 95.2]]]],
            "per_builder_failures": []
        },
        "nightlies": {
            "nightlies": [["nightly-2016-01-22", 14]]
        }
    }"#;

    let metrics = summary_metrics(&parse_summary(json).unwrap());

    assert_eq!(metrics.issues.num_high_priority, 1);
    assert_eq!(metrics.pull_requests.open_close_per_day.len(), 3);
    assert_eq!(metrics.buildbots.linux.per_builder_times.len(), 1);
    assert_eq!(metrics.nightlies.nightlies.len(), 1);
}

#[test]
fn test_stable_schedule_projection() {
    let schedule = stable_schedule(NaiveDate::from_ymd_opt(2016, 2, 1).unwrap());

    assert_eq!(schedule.previous_date, "Fri Jan 22 2016");
    assert_eq!(schedule.next_date, "Fri Mar 04 2016");
    assert_eq!(schedule.previous_version, 6);
    assert_eq!(schedule.next_version, 7);
}

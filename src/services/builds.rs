//! Assemble the `builds` page view-model.
//!
//! Unlike the buildbots page, builds are classified by the explicit `os`
//! field of their [`BuildInfo`] header. Records the partition cannot
//! classify are dropped from every bucket and logged.

use log::warn;

use crate::api::{BuildMetrics, PlatformSection, RecentFailureView};
use crate::core::domain::{BuilderBuckets, TimeSeriesPoint};
use crate::parsing::builds::{BuildInfo, BuildsPayload, RecentFailure};
use crate::transformations::partition_by_os;

/// Build the builds view-model.
pub fn build_metrics(payload: &BuildsPayload) -> BuildMetrics {
    let times = partition(&payload.per_builder_times);
    let fails = partition(&payload.per_builder_failures);

    BuildMetrics {
        windows: PlatformSection {
            per_builder_times: times.windows,
            per_builder_fails: fails.windows,
        },
        linux: PlatformSection {
            per_builder_times: times.linux,
            per_builder_fails: fails.linux,
        },
        mac: PlatformSection {
            per_builder_times: times.mac,
            per_builder_fails: fails.mac,
        },
        recent_failures: payload.failures_last_day.iter().map(failure_view).collect(),
    }
}

fn partition(records: &[(BuildInfo, Vec<TimeSeriesPoint>)]) -> BuilderBuckets {
    let records: Vec<(String, Option<String>, Vec<TimeSeriesPoint>)> = records
        .iter()
        .map(|(info, series)| (display_name(info), info.os.clone(), series.clone()))
        .collect();

    let (buckets, skipped) = partition_by_os(&records);
    for record in &skipped {
        warn!(
            "builder {} has unrecognized os {:?}, omitting from all buckets",
            record.builder_name, record.os
        );
    }
    buckets
}

/// The CI providers report an opaque builder name; the env string is the
/// readable label for the providers we know.
fn display_name(info: &BuildInfo) -> String {
    match info.builder_name.as_str() {
        "buildbot" | "travis" | "appveyor" => info.env.clone(),
        _ => info.builder_name.clone(),
    }
}

fn failure_view(failure: &RecentFailure) -> RecentFailureView {
    RecentFailureView {
        builder_name: failure.builder_name.clone(),
        display_name: display_name(&BuildInfo {
            builder_name: failure.builder_name.clone(),
            os: None,
            env: failure.env.clone(),
        }),
        env: failure.env.clone(),
        url: build_url(failure),
    }
}

/// Link a failure back to its CI provider's build page.
fn build_url(failure: &RecentFailure) -> Option<String> {
    match failure.builder_name.as_str() {
        "buildbot" => failure.build_id.map(|build_id| {
            format!(
                "https://buildbot.rust-lang.org/builders/{}/builds/{}",
                failure.builder_name, build_id
            )
        }),
        "travis" => failure
            .job_id
            .map(|job_id| format!("https://travis-ci.org/rust-lang/rust/jobs/{}", job_id)),
        "appveyor" => match (failure.build_id, failure.job_id) {
            (Some(build_id), Some(job_id)) => Some(format!(
                "https://ci.appveyor.com/project/rust-lang/rust/build/{}/job/{}",
                build_id, job_id
            )),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(builder: &str, os: Option<&str>, env: &str) -> BuildInfo {
        BuildInfo {
            builder_name: builder.to_string(),
            os: os.map(|s| s.to_string()),
            env: env.to_string(),
        }
    }

    #[test]
    fn test_partition_by_os_field() {
        let payload = BuildsPayload {
            per_builder_times: vec![
                (info("travis", Some("linux"), "IMAGE=x86_64-gnu"), vec![
                    TimeSeriesPoint::new(5.0, Some(88.0)),
                ]),
                (info("appveyor", Some("windows"), "msvc-64"), vec![]),
                (info("travis", Some("osx"), "xcode8"), vec![]),
            ],
            per_builder_failures: vec![],
            failures_last_day: vec![],
        };

        let metrics = build_metrics(&payload);
        assert_eq!(metrics.linux.per_builder_times.len(), 1);
        assert_eq!(metrics.linux.per_builder_times[0].name, "IMAGE=x86_64-gnu");
        assert_eq!(metrics.linux.per_builder_times[0].data[0].timestamp, 5000.0);
        assert_eq!(metrics.windows.per_builder_times.len(), 1);
        assert_eq!(metrics.mac.per_builder_times.len(), 1);
    }

    #[test]
    fn test_unknown_os_omitted_everywhere() {
        let payload = BuildsPayload {
            per_builder_times: vec![(info("travis", Some("emscripten"), "wasm"), vec![])],
            per_builder_failures: vec![(info("travis", None, "wasm"), vec![])],
            failures_last_day: vec![],
        };

        let metrics = build_metrics(&payload);
        assert!(metrics.linux.per_builder_times.is_empty());
        assert!(metrics.windows.per_builder_times.is_empty());
        assert!(metrics.mac.per_builder_times.is_empty());
        assert!(metrics.linux.per_builder_fails.is_empty());
    }

    #[test]
    fn test_failure_urls_per_provider() {
        let travis = RecentFailure {
            builder_name: "travis".to_string(),
            env: "IMAGE=x86_64-gnu".to_string(),
            build_id: None,
            job_id: Some(998877),
        };
        let appveyor = RecentFailure {
            builder_name: "appveyor".to_string(),
            env: "msvc-64".to_string(),
            build_id: Some(12),
            job_id: Some(34),
        };
        let unknown = RecentFailure {
            builder_name: "circle".to_string(),
            env: "x".to_string(),
            build_id: Some(1),
            job_id: Some(2),
        };

        assert_eq!(
            build_url(&travis).unwrap(),
            "https://travis-ci.org/rust-lang/rust/jobs/998877"
        );
        assert_eq!(
            build_url(&appveyor).unwrap(),
            "https://ci.appveyor.com/project/rust-lang/rust/build/12/job/34"
        );
        assert_eq!(build_url(&unknown), None);
    }

    #[test]
    fn test_display_name_falls_back_to_builder_name() {
        assert_eq!(display_name(&info("travis", None, "xcode8")), "xcode8");
        assert_eq!(display_name(&info("custom-ci", None, "env")), "custom-ci");
    }
}

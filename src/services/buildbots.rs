//! Assemble the `buildbots` page view-model.

use crate::api::{BuildbotMetrics, PlatformSection};
use crate::core::domain::BuilderBuckets;
use crate::parsing::builds::BuildbotsPayload;
use crate::transformations::partition_by_builder_name;

/// Build the buildbots view-model: the same name-based partition applied
/// once to build timings and once to failure counts.
pub fn buildbot_metrics(payload: &BuildbotsPayload) -> BuildbotMetrics {
    let times = partition_by_builder_name(&payload.per_builder_times_mins);
    let fails = partition_by_builder_name(&payload.per_builder_failures);

    zip_sections(times, fails)
}

fn zip_sections(times: BuilderBuckets, fails: BuilderBuckets) -> BuildbotMetrics {
    BuildbotMetrics {
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
        other: PlatformSection {
            per_builder_times: times.other,
            per_builder_fails: fails.other,
        },
    }
}

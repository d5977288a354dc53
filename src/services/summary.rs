//! Assemble the `summary` landing-page view-model by reusing the
//! per-endpoint services on each nested section.

use crate::api::SummaryMetrics;
use crate::parsing::summary::SummaryPayload;
use crate::services::{buildbot_metrics, issue_metrics, pull_request_metrics, release_metrics};

/// Build the summary view-model.
pub fn summary_metrics(payload: &SummaryPayload) -> SummaryMetrics {
    SummaryMetrics {
        issues: issue_metrics(&payload.issues),
        pull_requests: pull_request_metrics(&payload.pull_requests),
        buildbots: buildbot_metrics(&payload.buildbots),
        nightlies: release_metrics(&payload.nightlies),
    }
}

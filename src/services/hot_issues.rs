//! Assemble the `hot-issues` page view-model.

use crate::api::{HotIssuesMetrics, WordCount};
use crate::parsing::hot_issues::HotIssuesPayload;

/// Build the hot-issues view-model, reshaping the `[word, count]` pairs
/// into typed records.
pub fn hot_issues_metrics(payload: &HotIssuesPayload) -> HotIssuesMetrics {
    HotIssuesMetrics {
        word_counts: payload
            .word_counts
            .iter()
            .map(|(word, count)| WordCount {
                word: word.clone(),
                count: *count,
            })
            .collect(),
        issues: payload.issues.clone(),
    }
}

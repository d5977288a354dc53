//! Group FCP proposals by team label with pending-reviewer detection.

use crate::core::domain::{FcpProposal, PendingReviewSummary, TeamGroup};

/// Prefix marking the labels that name a team.
pub const TEAM_LABEL_PREFIX: &str = "T-";

/// Reduce a proposal to its display summary: the logins of reviewers who
/// have not yet approved, sorted lexicographically ascending.
fn summarize(proposal: &FcpProposal) -> PendingReviewSummary {
    let mut pending: Vec<String> = proposal
        .reviews
        .iter()
        .filter(|r| !r.approved)
        .map(|r| r.reviewer.clone())
        .collect();
    pending.sort();

    PendingReviewSummary {
        disposition: proposal.disposition.clone(),
        issue: proposal.issue.clone(),
        status_comment: proposal.status_comment.clone(),
        pending_reviewers: pending,
    }
}

/// Group FCP proposals under their "T-" team labels.
///
/// A proposal contributes its summary to every team label on its issue, so
/// one proposal may appear in several groups; a proposal with no team label
/// contributes to none. Groups are ordered by first encounter across the
/// input, not sorted.
pub fn group_by_team(proposals: &[FcpProposal]) -> Vec<TeamGroup> {
    let mut groups: Vec<TeamGroup> = Vec::new();

    for proposal in proposals {
        let summary = summarize(proposal);

        for label in &proposal.issue.labels {
            if !label.starts_with(TEAM_LABEL_PREFIX) {
                continue;
            }

            match groups.iter_mut().find(|g| g.team == *label) {
                Some(group) => group.fcps.push(summary.clone()),
                None => groups.push(TeamGroup {
                    team: label.clone(),
                    fcps: vec![summary.clone()],
                }),
            }
        }
    }

    groups
}

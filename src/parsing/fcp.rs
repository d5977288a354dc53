//! Raw payloads of the `fcp/all` and `nag/*` endpoints.
//!
//! The wire shape nests the disposition under an `fcp` object and encodes
//! each review as a `[reviewerObject, approvedBool]` pair; conversion
//! flattens both into the domain records.

use serde::Deserialize;

use crate::core::domain::{FcpProposal, GitHubUser, IndividualFcp, Issue, Review};
use crate::error::MetricsResult;
use crate::parsing::from_json;

#[derive(Debug, Deserialize)]
struct RawProposal {
    fcp: RawFcpInfo,
    issue: Issue,
    status_comment: String,
    reviews: Vec<(RawReviewer, bool)>,
}

#[derive(Debug, Deserialize)]
struct RawFcpInfo {
    disposition: String,
}

#[derive(Debug, Deserialize)]
struct RawReviewer {
    login: String,
}

#[derive(Debug, Deserialize)]
struct RawIndividualFcp {
    issue: Issue,
    proposal: RawFcpInfo,
}

/// Parse the `fcp/all` payload into domain proposals.
pub fn parse_fcp_list(json: &str) -> MetricsResult<Vec<FcpProposal>> {
    let raw: Vec<RawProposal> = from_json(json)?;
    Ok(raw.into_iter().map(convert_proposal).collect())
}

/// Parse the `nag/users` payload: a plain list of logins.
pub fn parse_nag_users(json: &str) -> MetricsResult<Vec<String>> {
    from_json(json)
}

/// Parse a `nag/:username` payload: a `[user, fcps]` pair.
pub fn parse_nag_user(json: &str) -> MetricsResult<(GitHubUser, Vec<IndividualFcp>)> {
    let (user, raw_fcps): (GitHubUser, Vec<RawIndividualFcp>) = from_json(json)?;

    let fcps = raw_fcps
        .into_iter()
        .map(|raw| IndividualFcp {
            issue: raw.issue,
            disposition: raw.proposal.disposition,
        })
        .collect();

    Ok((user, fcps))
}

fn convert_proposal(raw: RawProposal) -> FcpProposal {
    FcpProposal {
        disposition: raw.fcp.disposition,
        issue: raw.issue,
        status_comment: raw.status_comment,
        reviews: raw
            .reviews
            .into_iter()
            .map(|(reviewer, approved)| Review {
                reviewer: reviewer.login,
                approved,
            })
            .collect(),
    }
}

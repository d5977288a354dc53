//! Assemble the FCP dashboard view-model.

use log::debug;

use crate::api::FcpDashboard;
use crate::core::domain::FcpProposal;
use crate::transformations::group_by_team;

/// Build the FCP dashboard: proposals grouped under their team labels.
pub fn fcp_dashboard(proposals: &[FcpProposal]) -> FcpDashboard {
    let fcps = group_by_team(proposals);
    debug!("grouped {} proposals into {} teams", proposals.len(), fcps.len());
    FcpDashboard { fcps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{Issue, Review};

    #[test]
    fn test_dashboard_wraps_team_groups() {
        let proposals = vec![FcpProposal {
            disposition: "merge".to_string(),
            issue: Issue {
                number: 3,
                title: "stabilize".to_string(),
                labels: vec!["T-core".to_string()],
            },
            status_comment: "".to_string(),
            reviews: vec![Review {
                reviewer: "bob".to_string(),
                approved: false,
            }],
        }];

        let dashboard = fcp_dashboard(&proposals);
        assert_eq!(dashboard.fcps.len(), 1);
        assert_eq!(dashboard.fcps[0].team, "T-core");
        assert_eq!(dashboard.fcps[0].fcps[0].pending_reviewers, vec!["bob"]);
    }
}

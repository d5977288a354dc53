//! Assemble the reviewer nag view-models.

use crate::api::{NagUserMetrics, NagUsers};
use crate::core::domain::{GitHubUser, IndividualFcp};

/// Build the team-member list of the nag index page.
pub fn nag_users(users: Vec<String>) -> NagUsers {
    NagUsers { users }
}

/// Build one reviewer's nag page: the user paired with the FCPs still
/// waiting on their review.
pub fn nag_user_metrics(user: GitHubUser, fcps: Vec<IndividualFcp>) -> NagUserMetrics {
    NagUserMetrics { user, fcps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::Issue;

    #[test]
    fn test_nag_user_pairing() {
        let user = GitHubUser {
            id: 1,
            login: "brson".to_string(),
            full_name: Some("Brian Anderson".to_string()),
        };
        let fcps = vec![IndividualFcp {
            issue: Issue {
                number: 9,
                title: "deprecate thing".to_string(),
                labels: vec![],
            },
            disposition: "merge".to_string(),
        }];

        let metrics = nag_user_metrics(user, fcps);
        assert_eq!(metrics.user.login, "brson");
        assert_eq!(metrics.fcps.len(), 1);
    }
}

//! Per-endpoint view-model assembly.
//!
//! Each service takes the parsed payload of one backend endpoint and
//! assembles the view-model its dashboard page binds against, applying the
//! pure transformations on the way. Services are the only place that reads
//! the clock or logs; the transformations underneath stay deterministic.

pub mod buildbots;
pub mod builds;
pub mod fcp;
pub mod hot_issues;
pub mod issues;
pub mod nag;
pub mod pull_requests;
pub mod releases;
pub mod summary;

pub use buildbots::buildbot_metrics;
pub use builds::build_metrics;
pub use fcp::fcp_dashboard;
pub use hot_issues::hot_issues_metrics;
pub use issues::issue_metrics;
pub use nag::{nag_user_metrics, nag_users};
pub use pull_requests::pull_request_metrics;
pub use releases::{current_stable_schedule, release_metrics, stable_schedule};
pub use summary::summary_metrics;

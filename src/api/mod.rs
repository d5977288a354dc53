//! View-model DTOs handed to the chart-rendering layer.

pub mod types;

pub use types::{
    BuildMetrics, BuildbotMetrics, FcpDashboard, HotIssuesMetrics, IssueMetrics, NagUserMetrics,
    NagUsers, PlatformSection, PullRequestMetrics, RecentFailureView, ReleaseMetrics,
    StableReleaseSchedule, SummaryMetrics, WordCount,
};

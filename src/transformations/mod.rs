//! Pure transformation functions over parsed dashboard metrics.
//!
//! Every function in this module is synchronous, stateless and free of I/O:
//! it maps its input to a freshly allocated output and can be invoked
//! concurrently without coordination.
//!
//! # Modules
//!
//! - [`timestamps`]: rescale epoch seconds to epoch milliseconds
//! - [`bucketing`]: partition builder series into OS buckets
//! - [`trend`]: ordinary-least-squares trend line over a series
//! - [`fcp`]: group FCP proposals by team label
//! - [`releases`]: project the stable-release train from an anchor

pub mod bucketing;
pub mod fcp;
pub mod releases;
pub mod timestamps;
pub mod trend;

pub use bucketing::{
    classify_builder_name, classify_os_field, partition_by_builder_name, partition_by_os,
};
pub use fcp::group_by_team;
pub use releases::{project_releases, RELEASE_CYCLE_DAYS};
pub use timestamps::to_epoch_millis;
pub use trend::trend_line;

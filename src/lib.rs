//! Dashboard Metrics - transformation layer for the project-metrics dashboard.
//!
//! This crate converts the raw JSON metrics served by the dashboard backend
//! (issue/PR counts, CI build timings, release cadence, final-comment-period
//! tracking) into display-ready view-models for the chart components.
//!
//! Fetching, routing and rendering are external collaborators: the input to
//! every function here is an already-fetched JSON payload, and the output is
//! a plain serializable structure handed straight to the charting layer.
//!
//! # Modules
//!
//! - [`core`]: domain records shared by all transformations
//! - [`parsing`]: serde parsers for the backend endpoint payloads
//! - [`transformations`]: the pure transformation functions
//! - [`services`]: per-endpoint view-model assembly
//! - [`api`]: serializable view-model DTOs with wire-stable field names

pub mod api;
pub mod core;
pub mod error;
pub mod parsing;
pub mod services;
pub mod transformations;

pub use error::{MetricsError, MetricsResult};

//! Parsers for the backend metrics endpoints.
//!
//! Each submodule declares the raw serde structure of one endpoint family
//! and converts it into the domain records the transformations operate on.
//! Deserialization failures carry the JSON path of the offending field.
//!
//! # Parsers
//!
//! - [`issues`]: `issues` and `pullrequests` payloads
//! - [`builds`]: `buildbots` and `builds` payloads
//! - [`releases`]: `releases` / `nightlies` payloads
//! - [`fcp`]: `fcp/all` and `nag/*` payloads
//! - [`hot_issues`]: `hot-issues` payload
//! - [`summary`]: the nested `summary` payload

pub mod builds;
pub mod fcp;
pub mod hot_issues;
pub mod issues;
pub mod releases;
pub mod summary;


use serde::de::DeserializeOwned;

use crate::error::{MetricsError, MetricsResult};

/// Deserialize a payload, reporting the JSON path on failure.
pub(crate) fn from_json<T: DeserializeOwned>(json: &str) -> MetricsResult<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        MetricsError::InvalidPayload {
            path,
            source: err.into_inner(),
        }
    })
}

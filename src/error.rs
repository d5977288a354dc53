//! Error types for payload parsing.

/// Result type for parsing and view-model assembly
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Error type for the transformation layer.
///
/// The transformations themselves never fail: unclassifiable records are
/// omitted from every bucket and reported back to the caller, and numeric
/// degeneracy in the trend-line fit propagates non-finite values instead of
/// raising. The only failure channel is a malformed JSON payload.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("invalid payload at `{path}`: {source}")]
    InvalidPayload {
        /// Path into the JSON document where deserialization failed
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

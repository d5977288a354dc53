//! Partition builder time series into OS buckets.
//!
//! Two classification schemes exist, matching the two CI endpoints:
//!
//! - the buildbots endpoint identifies builders only by name, classified by
//!   substring match against an ordered rule table (first match wins);
//! - the builds endpoint carries an explicit `os` field per builder, where
//!   an absent or unrecognized value leaves the record unclassified.
//!
//! Both partitions rescale timestamps to milliseconds on the way through,
//! so the output series can be handed to the charting layer directly.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::domain::{BuilderBuckets, NamedSeries, OsBucket, TimeSeriesPoint, Unclassified};
use crate::transformations::timestamps::to_epoch_millis;

/// Ordered substring rules for classifying a builder by name. Builder names
/// are not mutually exclusive by construction, so precedence is part of the
/// contract: the first matching pattern wins.
pub const BUILDER_NAME_RULES: &[(&str, OsBucket)] = &[
    ("auto-win", OsBucket::Windows),
    ("auto-linux", OsBucket::Linux),
    ("auto-mac", OsBucket::Mac),
];

/// Recognized values for the explicit `os` field of the builds endpoint.
static OS_FIELD_RULES: Lazy<HashMap<&'static str, OsBucket>> = Lazy::new(|| {
    HashMap::from([
        ("windows", OsBucket::Windows),
        ("linux", OsBucket::Linux),
        ("osx", OsBucket::Mac),
    ])
});

/// Classify a builder by substring match on its name, falling back to
/// [`OsBucket::Other`] when no rule matches.
pub fn classify_builder_name(name: &str) -> OsBucket {
    BUILDER_NAME_RULES
        .iter()
        .find(|(pattern, _)| name.contains(pattern))
        .map(|&(_, bucket)| bucket)
        .unwrap_or(OsBucket::Other)
}

/// Classify a builder by its explicit `os` field. Returns `None` for
/// unrecognized values; the record then lands in no bucket at all.
pub fn classify_os_field(os: &str) -> Option<OsBucket> {
    OS_FIELD_RULES.get(os).copied()
}

/// Partition `(builderName, series)` pairs into OS buckets by substring
/// match on the builder name. Every input record lands in exactly one
/// bucket; series timestamps are rescaled to milliseconds.
///
/// The buildbots endpoint applies this twice per payload, once for
/// build-time series and once for failure counts, so it takes the pairs
/// rather than the whole payload.
pub fn partition_by_builder_name(pairs: &[(String, Vec<TimeSeriesPoint>)]) -> BuilderBuckets {
    let mut buckets = BuilderBuckets::default();
    for (name, series) in pairs {
        let bucket = classify_builder_name(name);
        buckets.push(bucket, NamedSeries::new(name.clone(), to_epoch_millis(series)));
    }
    buckets
}

/// Partition `(displayName, os, series)` records into OS buckets keyed on
/// the explicit `os` field. Records with an absent or unrecognized `os` are
/// omitted from every bucket and returned as [`Unclassified`] so the caller
/// can log them.
pub fn partition_by_os(
    records: &[(String, Option<String>, Vec<TimeSeriesPoint>)],
) -> (BuilderBuckets, Vec<Unclassified>) {
    let mut buckets = BuilderBuckets::default();
    let mut skipped = Vec::new();

    for (name, os, series) in records {
        match os.as_deref().and_then(classify_os_field) {
            Some(bucket) => {
                buckets.push(bucket, NamedSeries::new(name.clone(), to_epoch_millis(series)));
            }
            None => skipped.push(Unclassified {
                builder_name: name.clone(),
                os: os.clone(),
            }),
        }
    }

    (buckets, skipped)
}

//! Core domain records for the dashboard metrics.
//!
//! This module defines the fundamental data structures shared by the parsers,
//! the transformations and the view-model assembly: time-series points,
//! named series, OS buckets, FCP records and the release schedule.

pub mod domain;

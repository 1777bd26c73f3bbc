//! # reco-observability
//!
//! Structured tracing for the recommender: subscriber setup driven by
//! `ObservabilityConfig`, span definitions per operation, and event
//! functions for dispatch decisions, fallbacks and evaluation results.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};

//! Client for the viral prediction endpoint.
//!
//! This crate provides:
//! - The `PredictionClient` capability used by the form controller
//! - A reqwest-backed implementation of the endpoint's JSON contract
//! - Environment-driven configuration
//! - Request metrics

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;

pub use client::{HttpPredictionClient, PredictionClient};
pub use config::{ConfigOverrides, PredictorConfig, DEFAULT_ENDPOINT};
pub use error::{PredictionError, PredictionResult};

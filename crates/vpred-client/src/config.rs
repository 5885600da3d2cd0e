//! Prediction client configuration.

use std::time::Duration;

use vpred_models::NumericPolicy;

use crate::error::{PredictionError, PredictionResult};

/// Endpoint used when `PREDICTOR_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://youtubeviralprediction-ml-xgboost.onrender.com/predict";

/// Prediction client configuration.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Prediction endpoint URL
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Handling of numeric input that does not coerce to a number
    pub numeric_policy: NumericPolicy,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            numeric_policy: NumericPolicy::Lenient,
        }
    }
}

/// Values that take precedence over the environment, typically from CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    /// Force the strict policy; `PREDICTOR_NUMERIC_POLICY` is then not parsed.
    pub strict: bool,
}

impl PredictorConfig {
    /// Create config for a specific endpoint with default settings.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Create config from environment variables.
    ///
    /// The endpoint is not validated here; call [`validate`](Self::validate)
    /// once all overrides are in place.
    pub fn from_env() -> PredictionResult<Self> {
        Self::from_env_with(&ConfigOverrides::default())
    }

    /// Create config from environment variables, with `overrides` winning.
    pub fn from_env_with(overrides: &ConfigOverrides) -> PredictionResult<Self> {
        let endpoint = match &overrides.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => std::env::var("PREDICTOR_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        };

        let timeout_secs: u64 = std::env::var("PREDICTOR_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let connect_timeout_secs: u64 = std::env::var("PREDICTOR_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let numeric_policy = match std::env::var("PREDICTOR_NUMERIC_POLICY") {
            _ if overrides.strict => NumericPolicy::Strict,
            Ok(s) if !s.trim().is_empty() => s
                .parse()
                .map_err(|e| PredictionError::config(format!("PREDICTOR_NUMERIC_POLICY: {}", e)))?,
            _ => NumericPolicy::Lenient,
        };

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            numeric_policy,
        })
    }

    /// Check that the endpoint is a usable URL.
    pub fn validate(&self) -> PredictionResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(PredictionError::config("prediction endpoint cannot be empty"));
        }

        reqwest::Url::parse(&self.endpoint).map_err(|e| {
            PredictionError::config(format!("invalid prediction endpoint {}: {}", self.endpoint, e))
        })?;

        Ok(())
    }
}

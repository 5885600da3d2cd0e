//! Prediction endpoint client.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info_span, Instrument};
use vpred_models::{PredictionRequest, PredictionResponse};

use crate::config::PredictorConfig;
use crate::error::{PredictionError, PredictionResult};
use crate::metrics::record_request;

/// Capability to ask the external model for a prediction.
///
/// The form controller depends on this trait rather than on a concrete HTTP
/// client, so tests can substitute a fake.
#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Submit one request and return the parsed response.
    async fn predict(&self, request: &PredictionRequest) -> PredictionResult<PredictionResponse>;
}

#[async_trait]
impl<T: PredictionClient + ?Sized> PredictionClient for Arc<T> {
    async fn predict(&self, request: &PredictionRequest) -> PredictionResult<PredictionResponse> {
        (**self).predict(request).await
    }
}

/// reqwest-backed client for the prediction endpoint.
#[derive(Clone)]
pub struct HttpPredictionClient {
    http: Client,
    endpoint: String,
}

impl HttpPredictionClient {
    /// Create a new client.
    pub fn new(config: &PredictorConfig) -> PredictionResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("vpred-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PredictionError::Network)?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &PredictionRequest) -> PredictionResult<PredictionResponse> {
        // `.json()` sets `Content-Type: application/json`.
        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictionError::from_http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        debug!(body_len = body.len(), "Prediction response received");

        serde_json::from_str(&body).map_err(|e| {
            PredictionError::invalid_response(format!("Failed to parse prediction response: {}", e))
        })
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, request: &PredictionRequest) -> PredictionResult<PredictionResponse> {
        let span = info_span!("predict", endpoint = %self.endpoint);
        let start = Instant::now();

        let result = self.send(request).instrument(span).await;

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        let outcome = match &result {
            Ok(response) if response.viral => "viral",
            Ok(_) => "not_viral",
            Err(e) => e.kind(),
        };
        record_request(outcome, latency_ms);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let config = PredictorConfig::with_endpoint("not a url");
        assert!(matches!(
            HttpPredictionClient::new(&config),
            Err(PredictionError::Config(_))
        ));
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let config = PredictorConfig::with_endpoint("http://127.0.0.1:9/predict");
        let client = HttpPredictionClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/predict");
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::types::{parse_response_body, PredictRequest, PredictionClient, RemotePrediction};
use super::PredictionError;
use crate::config::{ConfigError, EngineConfig};
use crate::models::SymptomSet;

/// Longest error body kept from a non-2xx response.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// HTTP client for the remote disease prediction service.
pub struct HttpPredictionClient {
    endpoint: String,
    client: reqwest::Client,
    timeout_ms: u64,
}

impl HttpPredictionClient {
    /// Build a client bounded by the configured timeout. The timeout covers
    /// connect, send and body read.
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.api_timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            endpoint: config.prediction_endpoint.clone(),
            client,
            timeout_ms: config.api_timeout_ms,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    fn map_transport_error(&self, e: reqwest::Error) -> PredictionError {
        if e.is_timeout() {
            PredictionError::Timeout(self.timeout_ms)
        } else if e.is_connect() {
            PredictionError::Connection(self.endpoint.clone())
        } else {
            PredictionError::HttpClient(e.to_string())
        }
    }
}

impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, symptoms: &SymptomSet) -> Result<RemotePrediction, PredictionError> {
        let joined = symptoms.joined();
        let started = Instant::now();
        tracing::debug!(
            endpoint = %self.endpoint,
            timeout_ms = self.timeout_ms,
            symptoms = %joined,
            "Calling prediction service"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { symptoms: &joined })
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictionError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let prediction = parse_response_body(&body)?;

        tracing::debug!(
            disease = %prediction.disease,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Prediction service responded"
        );
        Ok(prediction)
    }
}

/// Prediction client for local-only operation: every call fails immediately
/// with [`PredictionError::Disabled`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflinePredictionClient;

impl PredictionClient for OfflinePredictionClient {
    async fn predict(&self, _symptoms: &SymptomSet) -> Result<RemotePrediction, PredictionError> {
        Err(PredictionError::Disabled)
    }
}

/// Mock prediction client for tests. Returns a configurable outcome.
pub struct MockPredictionClient {
    outcome: Result<RemotePrediction, PredictionError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<String>>,
}

impl MockPredictionClient {
    pub fn returning(prediction: RemotePrediction) -> Self {
        Self::with_outcome(Ok(prediction))
    }

    pub fn failing(error: PredictionError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<RemotePrediction, PredictionError>) -> Self {
        Self {
            outcome,
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Wait this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Space-joined symptoms of the most recent call.
    pub fn last_request(&self) -> Option<String> {
        self.last_request.lock().ok()?.clone()
    }

    fn record(&self, symptoms: &SymptomSet) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(symptoms.joined());
        }
    }
}

impl PredictionClient for MockPredictionClient {
    async fn predict(&self, symptoms: &SymptomSet) -> Result<RemotePrediction, PredictionError> {
        self.record(symptoms);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}

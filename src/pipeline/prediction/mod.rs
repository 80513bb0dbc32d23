pub mod client;
pub mod types;

pub use client::*;
pub use types::*;

use thiserror::Error;

/// Why a remote prediction could not be used. Never escapes the
/// orchestrator; every variant degrades to the local classifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error("Prediction service is not reachable at {0}")]
    Connection(String),

    #[error("Prediction request timed out after {0}ms")]
    Timeout(u64),

    #[error("Prediction service returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Malformed prediction response: {0}")]
    MalformedResponse(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Remote prediction is disabled")]
    Disabled,
}

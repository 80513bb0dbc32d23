pub mod config;
pub mod models;
pub mod pipeline;

pub use models::{DiagnosisResult, Severity, SymptomError, SymptomInput, SymptomSet};
pub use pipeline::{
    compose_message, DiagnosisOrchestrator, HttpPredictionClient, OfflinePredictionClient,
    PredictionClient, PredictionError, RemotePrediction, RemoteVerdict,
};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

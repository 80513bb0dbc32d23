//! Command-line driver: resolve one diagnosis and print the result envelope.

use std::process::ExitCode;

use clap::Parser;

use diagnosis_engine::config::{ConfigError, EngineConfig};
use diagnosis_engine::{
    compose_message, init_tracing, DiagnosisOrchestrator, HttpPredictionClient,
    OfflinePredictionClient, PredictionClient, SymptomError, SymptomSet,
};

/// Resolve a diagnosis from free-text symptoms.
#[derive(Parser, Debug)]
#[command(name = "diagnose", version)]
struct Args {
    /// Symptom phrases, e.g. "chest pain" "shortness of breath"
    #[arg(required = true)]
    symptoms: Vec<String>,

    /// Prediction endpoint (overrides DISEASE_API)
    #[arg(long)]
    endpoint: Option<String>,

    /// Remote call timeout in milliseconds (overrides API_TIMEOUT)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Skip the remote service and use the local classifier only
    #[arg(long)]
    offline: bool,

    /// Also print the patient-facing summary message
    #[arg(long)]
    message: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Symptoms(#[from] SymptomError),

    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

fn load_config(args: &Args) -> Result<EngineConfig, ConfigError> {
    EngineConfig::from_env_with_overrides(args.endpoint.as_deref(), args.timeout_ms)
}

async fn run_with<P: PredictionClient>(
    client: P,
    symptoms: &SymptomSet,
    with_message: bool,
) -> Result<(), CliError> {
    let orchestrator = DiagnosisOrchestrator::new(client);
    let result = orchestrator.diagnose(symptoms).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    if with_message {
        println!();
        println!("{}", compose_message(&result));
        for (i, rec) in result.recommendations.iter().enumerate() {
            println!("  {}. {rec}", i + 1);
        }
    }
    Ok(())
}

async fn run(args: Args) -> Result<(), CliError> {
    let symptoms = SymptomSet::new(&args.symptoms)?;

    if args.offline {
        return run_with(OfflinePredictionClient, &symptoms, args.message).await;
    }

    let config = load_config(&args)?;
    let client = HttpPredictionClient::new(&config)?;
    run_with(client, &symptoms, args.message).await
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Diagnosis failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Diagnosis orchestration: remote prediction, plausibility gate, local
//! fallback, then severity and care lookup.
//!
//! ```text
//! Start ─▶ CallRemote ─┬─ Accepted ──────────────────────▶ Finalize
//!                      ├─ Rejected (suspicious) ─▶ Classify ─▶ Finalize
//!                      └─ Failed ────────────────▶ Classify ─▶ Finalize
//! ```
//!
//! Every path ends in a [`DiagnosisResult`]; there is no error return.

use tracing::Instrument;
use uuid::Uuid;

use super::classify::classify_symptoms;
use super::prediction::{PredictionClient, PredictionError, RemotePrediction};
use super::recommendations::{parse_precautions, resolve_care};
use super::severity::classify_severity;
use super::validation::is_suspicious;
use crate::models::{DiagnosisResult, SymptomSet};

/// What happened to the remote prediction for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteVerdict {
    /// Prediction returned and passed the plausibility check.
    Accepted(RemotePrediction),
    /// Prediction returned but contradicts the symptoms; discarded.
    Rejected { disease: String },
    /// No usable prediction.
    Failed(PredictionError),
}

impl RemoteVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// End-to-end diagnosis pipeline over a prediction client.
///
/// Holds no per-request state; share one instance behind an `Arc` across
/// concurrent requests.
pub struct DiagnosisOrchestrator<P: PredictionClient> {
    client: P,
}

impl<P: PredictionClient> DiagnosisOrchestrator<P> {
    pub fn new(client: P) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &P {
        &self.client
    }

    /// Resolve a diagnosis for a symptom set.
    ///
    /// Duplicated symptoms are collapsed first. Dropping the returned future
    /// cancels this request's remote call only.
    pub async fn diagnose(&self, symptoms: &SymptomSet) -> DiagnosisResult {
        let span = tracing::info_span!("diagnosis", diagnosis_id = %Uuid::new_v4());
        async move {
            let symptoms = symptoms.deduplicated();
            tracing::debug!(symptoms = %symptoms.joined(), "Diagnosis requested");

            let verdict = self.consult_remote(&symptoms).await;
            let result = resolve(verdict, &symptoms);

            tracing::info!(
                disease = %result.disease,
                severity = %result.severity,
                used_fallback = result.used_fallback,
                used_mapping = result.used_mapping,
                "Diagnosis resolved"
            );
            result
        }
        .instrument(span)
        .await
    }

    /// Call the remote service once and gate its answer.
    pub async fn consult_remote(&self, symptoms: &SymptomSet) -> RemoteVerdict {
        match self.client.predict(symptoms).await {
            Err(error) => {
                tracing::warn!(error = %error, "Remote prediction failed, using local classifier");
                RemoteVerdict::Failed(error)
            }
            Ok(prediction) if is_suspicious(&prediction.disease, symptoms) => {
                tracing::warn!(
                    disease = %prediction.disease,
                    "Remote prediction contradicts symptoms, using local classifier"
                );
                RemoteVerdict::Rejected {
                    disease: prediction.disease,
                }
            }
            Ok(prediction) => RemoteVerdict::Accepted(prediction),
        }
    }
}

/// Turn a remote verdict into the final result (Classify + Finalize).
pub fn resolve(verdict: RemoteVerdict, symptoms: &SymptomSet) -> DiagnosisResult {
    match verdict {
        RemoteVerdict::Accepted(prediction) => finalize_accepted(prediction, symptoms),
        RemoteVerdict::Rejected { .. } | RemoteVerdict::Failed(_) => finalize_local(symptoms),
    }
}

fn finalize_accepted(prediction: RemotePrediction, symptoms: &SymptomSet) -> DiagnosisResult {
    let care = resolve_care(&prediction.disease);

    let recommendations = prediction
        .precautions
        .as_deref()
        .map(parse_precautions)
        .filter(|parsed| !parsed.is_empty())
        .unwrap_or_else(|| care.recommendation_list());

    let description = prediction
        .description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| care.description.to_string());

    DiagnosisResult {
        severity: classify_severity(&prediction.disease, symptoms),
        disease: prediction.disease,
        recommendations,
        description,
        used_fallback: false,
        used_mapping: false,
    }
}

fn finalize_local(symptoms: &SymptomSet) -> DiagnosisResult {
    let local = classify_symptoms(symptoms);
    let care = resolve_care(local.disease);

    DiagnosisResult {
        disease: local.disease.to_string(),
        severity: classify_severity(local.disease, symptoms),
        recommendations: care.recommendation_list(),
        description: care.description.to_string(),
        used_fallback: true,
        used_mapping: local.is_match(),
    }
}

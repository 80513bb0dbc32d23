use std::future::Future;

use serde::{Deserialize, Serialize};

use super::PredictionError;
use crate::models::SymptomSet;

/// Normalized prediction from the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePrediction {
    pub disease: String,
    pub description: Option<String>,
    /// Raw comma-joined precautions text, not yet split.
    pub precautions: Option<String>,
}

impl RemotePrediction {
    pub fn new(disease: &str) -> Self {
        Self {
            disease: disease.to_string(),
            description: None,
            precautions: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_precautions(mut self, precautions: &str) -> Self {
        self.precautions = Some(precautions.to_string());
        self
    }
}

/// Remote prediction service abstraction (allows mocking).
pub trait PredictionClient: Send + Sync {
    /// One outbound call, no retry. Dropping the future cancels the call.
    fn predict(
        &self,
        symptoms: &SymptomSet,
    ) -> impl Future<Output = Result<RemotePrediction, PredictionError>> + Send;
}

/// Request body for the prediction endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct PredictRequest<'a> {
    pub symptoms: &'a str,
}

/// Text field that some deployments send as a list instead of a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextField {
    Text(String),
    List(Vec<String>),
}

fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let field = Option::<TextField>::deserialize(deserializer)?;
    Ok(field.map(|f| match f {
        TextField::Text(text) => text,
        TextField::List(items) => items.join(", "),
    }))
}

/// Response body accepting both the current and the legacy schema.
///
/// Current: `{"disease", "description"?, "precautions"?}`
/// Legacy: `{"Predicted Disease", "Description"?, "Precautions"?}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PredictResponse {
    #[serde(default, deserialize_with = "text_field")]
    disease: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    description: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    precautions: Option<String>,
    #[serde(rename = "Predicted Disease", default, deserialize_with = "text_field")]
    predicted_disease: Option<String>,
    #[serde(rename = "Description", default, deserialize_with = "text_field")]
    legacy_description: Option<String>,
    #[serde(rename = "Precautions", default, deserialize_with = "text_field")]
    legacy_precautions: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl PredictResponse {
    /// Normalize to a [`RemotePrediction`]; the current schema wins when both
    /// label keys are present. The label is kept exactly as received.
    pub(crate) fn normalize(self) -> Result<RemotePrediction, PredictionError> {
        if let Some(disease) = non_blank(self.disease) {
            return Ok(RemotePrediction {
                disease,
                description: non_blank(self.description),
                precautions: non_blank(self.precautions),
            });
        }

        if let Some(disease) = non_blank(self.predicted_disease) {
            return Ok(RemotePrediction {
                disease,
                description: non_blank(self.legacy_description),
                precautions: non_blank(self.legacy_precautions),
            });
        }

        Err(PredictionError::MalformedResponse(
            "response has neither `disease` nor `Predicted Disease`".into(),
        ))
    }
}

/// Parse a raw response body into a normalized prediction. Only a JSON
/// object is a valid body; derived structs would also take a positional array.
pub(crate) fn parse_response_body(body: &[u8]) -> Result<RemotePrediction, PredictionError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| PredictionError::MalformedResponse(e.to_string()))?;
    if !value.is_object() {
        return Err(PredictionError::MalformedResponse(
            "response body is not a JSON object".into(),
        ));
    }

    let parsed: PredictResponse = serde_json::from_value(value)
        .map_err(|e| PredictionError::MalformedResponse(e.to_string()))?;
    parsed.normalize()
}

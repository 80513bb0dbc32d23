use serde::{Deserialize, Serialize};

use super::enums::Severity;

/// Sentinel label used when no local keyword rule matches.
pub const UNKNOWN_CONDITION: &str = "Unknown Condition";

/// Final diagnosis envelope returned to the API layer.
///
/// Field names are part of the external contract and serialize as
/// `disease`, `severity`, `recommendations`, `description`, `usedFallback`,
/// `usedMapping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub disease: String,
    pub severity: Severity,
    /// Most urgent first.
    pub recommendations: Vec<String>,
    pub description: String,
    /// Remote prediction was unavailable or rejected.
    pub used_fallback: bool,
    /// Label came from a matching local keyword rule.
    pub used_mapping: bool,
}

impl DiagnosisResult {
    pub fn is_unknown(&self) -> bool {
        self.disease == UNKNOWN_CONDITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DiagnosisResult {
        DiagnosisResult {
            disease: "Flu".into(),
            severity: Severity::Medium,
            recommendations: vec!["Rest and stay hydrated".into()],
            description: "No description available".into(),
            used_fallback: false,
            used_mapping: false,
        }
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "description",
                "disease",
                "recommendations",
                "severity",
                "usedFallback",
                "usedMapping",
            ]
        );
        assert_eq!(json["severity"], "medium");
        assert_eq!(json["usedFallback"], false);
    }

    #[test]
    fn unknown_sentinel_detected() {
        let mut result = sample();
        assert!(!result.is_unknown());
        result.disease = UNKNOWN_CONDITION.into();
        assert!(result.is_unknown());
    }
}

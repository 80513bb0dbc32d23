use serde::{Deserialize, Serialize};

/// Caller-side symptom input errors. Surfaced by the transport layer, never
/// by the diagnosis pipeline itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymptomError {
    #[error("At least one non-empty symptom is required")]
    Empty,
}

/// Raw symptom input as received from a caller.
///
/// Accepts either a JSON array of strings or a bare string, which is treated
/// as a one-element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymptomInput {
    Many(Vec<String>),
    One(String),
}

impl SymptomInput {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Many(list) => list,
            Self::One(single) => vec![single],
        }
    }
}

impl From<&str> for SymptomInput {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<Vec<String>> for SymptomInput {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

/// Normalized, non-empty symptom list for one diagnosis request.
///
/// Entries are trimmed and lowercased; blank entries are dropped. Order is
/// preserved and duplicates are kept (see [`SymptomSet::deduplicated`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymptomSet(Vec<String>);

impl SymptomSet {
    pub fn new<I, S>(symptoms: I) -> Result<Self, SymptomError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized: Vec<String> = symptoms
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        if normalized.is_empty() {
            return Err(SymptomError::Empty);
        }
        Ok(Self(normalized))
    }

    pub fn from_input(input: SymptomInput) -> Result<Self, SymptomError> {
        Self::new(input.into_vec())
    }

    /// Same set with repeated entries removed, keeping first occurrences.
    pub fn deduplicated(&self) -> Self {
        let mut seen = std::collections::HashSet::new();
        let unique = self
            .iter()
            .filter(|s| seen.insert(*s))
            .map(str::to_string)
            .collect();
        Self(unique)
    }

    /// Space-joined form sent to the prediction service.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `needle` occurs as a substring of any symptom.
    pub fn mentions(&self, needle: &str) -> bool {
        self.iter().any(|s| s.contains(needle))
    }
}

impl<'de> Deserialize<'de> for SymptomSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let input = SymptomInput::deserialize(deserializer)?;
        Self::from_input(input).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let set = SymptomSet::new(["  High Fever ", "COUGH"]).unwrap();
        assert_eq!(set.as_slice(), &["high fever".to_string(), "cough".to_string()]);
    }

    #[test]
    fn drops_blank_entries() {
        let set = SymptomSet::new(["", "  ", "rash"]).unwrap();
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn rejects_empty_input() {
        let none: Vec<&str> = Vec::new();
        assert_eq!(SymptomSet::new(none).unwrap_err(), SymptomError::Empty);
        assert_eq!(SymptomSet::new([" ", ""]).unwrap_err(), SymptomError::Empty);
    }

    #[test]
    fn bare_string_becomes_single_symptom() {
        let input: SymptomInput = serde_json::from_str("\"headache\"").unwrap();
        let set = SymptomSet::from_input(input).unwrap();
        assert_eq!(set.as_slice(), &["headache".to_string()]);
    }

    #[test]
    fn array_input_deserializes() {
        let set: SymptomSet = serde_json::from_str(r#"["Fever", "Chills"]"#).unwrap();
        assert_eq!(set.joined(), "fever chills");
    }

    #[test]
    fn empty_array_fails_to_deserialize() {
        let result: Result<SymptomSet, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }

    #[test]
    fn deduplicated_keeps_first_occurrence_order() {
        let set = SymptomSet::new(["cough", "fever", "Cough", "rash", "fever"]).unwrap();
        let unique = set.deduplicated();
        assert_eq!(unique.joined(), "cough fever rash");
        // Original set is untouched
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn mentions_matches_substrings() {
        let set = SymptomSet::new(["whooping cough"]).unwrap();
        assert!(set.mentions("cough"));
        assert!(!set.mentions("fever"));
    }

    #[test]
    fn iter_yields_normalized_phrases_in_order() {
        let set = SymptomSet::new(["Sore Throat", " fever"]).unwrap();
        let phrases: Vec<&str> = set.iter().collect();
        assert_eq!(phrases, ["sore throat", "fever"]);
    }
}

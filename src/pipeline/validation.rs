use std::collections::HashMap;
use std::sync::LazyLock;

use super::rules::KeywordRule;
use crate::models::SymptomSet;

/// Characteristic symptoms for remote labels the validator understands.
/// Keyed by exact label; labels without a rule are never flagged.
const VALIDATION_RULES: &[KeywordRule] = &[
    KeywordRule::new(
        "Dimorphic hemmorhoids(piles)",
        &["rectal", "bleeding", "pain", "stool", "constipation", "bowel"],
    ),
    KeywordRule::new(
        "Common Cold",
        &["cough", "sneeze", "congestion", "sore throat", "runny nose"],
    ),
    KeywordRule::new(
        "Influenza",
        &["fever", "cough", "fatigue", "body ache", "chills"],
    ),
    KeywordRule::new(
        "Pneumonia",
        &["cough", "chest", "breath", "breathing", "phlegm"],
    ),
    KeywordRule::new(
        "Dengue",
        &["fever", "headache", "joint", "rash", "muscle", "eye"],
    ),
    KeywordRule::new(
        "Tuberculosis",
        &["cough", "blood", "weight loss", "fever", "night", "sweat"],
    ),
];

static VALIDATION_INDEX: LazyLock<HashMap<&'static str, &'static KeywordRule>> =
    LazyLock::new(|| VALIDATION_RULES.iter().map(|rule| (rule.disease, rule)).collect());

/// Whether a remotely predicted label contradicts the reported symptoms.
///
/// Suspicious only when a non-empty rule exists for exactly this label and
/// none of its keywords occur in any symptom.
pub fn is_suspicious(disease: &str, symptoms: &SymptomSet) -> bool {
    match VALIDATION_INDEX.get(disease) {
        Some(rule) if !rule.keywords.is_empty() => !rule.matches_any(symptoms),
        _ => false,
    }
}

/// Whether the validator holds a rule for this exact label.
pub fn has_validation_rule(disease: &str) -> bool {
    VALIDATION_INDEX.contains_key(disease)
}

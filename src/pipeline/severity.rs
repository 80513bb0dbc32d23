use std::sync::LazyLock;

use crate::models::{Severity, SymptomSet};

/// Symptom phrases that force `high` regardless of the condition.
pub const SEVERE_SYMPTOMS: &[&str] = &[
    "difficulty breathing",
    "shortness of breath",
    "chest pain",
    "high fever",
    "severe headache",
    "confusion",
    "seizure",
    "hemorrhage",
    "paralysis",
    "unconsciousness",
    "stroke",
];

/// Conditions requiring immediate attention (matched as substrings).
pub const HIGH_SEVERITY_DISEASES: &[&str] = &[
    "Tuberculosis",
    "Malaria",
    "Pneumonia",
    "Dengue",
    "Typhoid",
    "Paralysis",
    "brain hemorrhage",
    "stroke",
    "Heart attack",
    "heart failure",
    "Jaundice",
    "Hepatitis",
    "Fungal infection",
    "Drug Reaction",
    "AIDS",
    "Chicken pox",
    "Impetigo",
    "Diabetes",
];

/// Conditions needing attention but not immediately life-threatening.
pub const MEDIUM_SEVERITY_DISEASES: &[&str] = &[
    "Flu",
    "Allergy",
    "Bronchial Asthma",
    "Hypertension",
    "Migraine",
    "Cervical spondylosis",
    "Urinary tract infection",
    "Psoriasis",
    "GERD",
    "Chronic cholestasis",
    "Osteoarthritis",
];

static HIGH_LOWER: LazyLock<Vec<String>> = LazyLock::new(|| lowercase_all(HIGH_SEVERITY_DISEASES));
static MEDIUM_LOWER: LazyLock<Vec<String>> =
    LazyLock::new(|| lowercase_all(MEDIUM_SEVERITY_DISEASES));

fn lowercase_all(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|e| e.to_lowercase()).collect()
}

/// Assign a severity tier from the condition label and reported symptoms.
///
/// A severe symptom or a high-severity condition yields `High`; otherwise a
/// medium-severity condition yields `Medium`; `Low` is the default. Disease
/// matching is case-insensitive substring, so "Dengue Fever" matches "Dengue".
pub fn classify_severity(disease: &str, symptoms: &SymptomSet) -> Severity {
    let disease = disease.to_lowercase();

    let has_severe_symptom = SEVERE_SYMPTOMS.iter().any(|s| symptoms.mentions(s));
    let high_disease = HIGH_LOWER.iter().any(|d| disease.contains(d.as_str()));

    if has_severe_symptom || high_disease {
        return Severity::High;
    }

    if MEDIUM_LOWER.iter().any(|d| disease.contains(d.as_str())) {
        return Severity::Medium;
    }

    Severity::Low
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN_CONDITION;

    fn symptoms(list: &[&str]) -> SymptomSet {
        SymptomSet::new(list).unwrap()
    }

    #[test]
    fn shortness_of_breath_is_always_high() {
        let set = symptoms(&["mild rash", "shortness of breath"]);
        for disease in ["Common Cold", "Flu", UNKNOWN_CONDITION, "Computer Vision Syndrome"] {
            assert_eq!(classify_severity(disease, &set), Severity::High, "{disease}");
        }
    }

    #[test]
    fn every_severe_symptom_triggers_high() {
        for phrase in SEVERE_SYMPTOMS {
            assert_eq!(
                classify_severity("Common Cold", &symptoms(&[*phrase])),
                Severity::High,
                "{phrase}"
            );
        }
    }

    #[test]
    fn high_disease_matches_by_substring() {
        let set = symptoms(&["fever"]);
        assert_eq!(classify_severity("Dengue Fever", &set), Severity::High);
        assert_eq!(classify_severity("Pneumonia", &set), Severity::High);
        assert_eq!(classify_severity("Acute heart failure", &set), Severity::High);
    }

    #[test]
    fn disease_matching_is_case_insensitive() {
        let set = symptoms(&["fever"]);
        assert_eq!(classify_severity("TUBERCULOSIS", &set), Severity::High);
        assert_eq!(classify_severity("hypertension", &set), Severity::Medium);
    }

    #[test]
    fn flu_with_mild_symptoms_is_medium() {
        assert_eq!(
            classify_severity("Flu", &symptoms(&["fever", "chills"])),
            Severity::Medium
        );
    }

    #[test]
    fn severe_symptom_overrides_medium_disease() {
        assert_eq!(
            classify_severity("Migraine", &symptoms(&["severe headache"])),
            Severity::High
        );
    }

    #[test]
    fn unlisted_condition_defaults_low() {
        let set = symptoms(&["fever", "headache"]);
        assert_eq!(classify_severity("Common Cold", &set), Severity::Low);
        assert_eq!(classify_severity(UNKNOWN_CONDITION, &set), Severity::Low);
    }

    #[test]
    fn plain_fever_is_not_high_fever() {
        assert_eq!(
            classify_severity("Tonsillitis", &symptoms(&["fever"])),
            Severity::Low
        );
        assert_eq!(
            classify_severity("Tonsillitis", &symptoms(&["very high fever"])),
            Severity::High
        );
    }
}

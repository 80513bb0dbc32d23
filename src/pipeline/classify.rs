use super::rules::KeywordRule;
use crate::models::{SymptomSet, UNKNOWN_CONDITION};

/// Local fallback rules, one per supported condition.
///
/// Iteration order is the tie-break: on equal scores the rule declared first
/// wins. Keys are specific phrases; bare "fever" and "headache" are
/// deliberately absent because they occur in most conditions and carry no
/// discriminating signal on their own.
pub const CLASSIFIER_RULES: &[KeywordRule] = &[
    KeywordRule::new(
        "Common Cold",
        &["cough", "sore throat", "runny nose", "congestion", "sneeze"],
    ),
    KeywordRule::new(
        "Influenza",
        &["cough", "fatigue", "body ache", "muscle pain", "chills"],
    ),
    KeywordRule::new(
        "Pneumonia",
        &["cough", "chest pain", "shortness of breath", "difficulty breathing", "phlegm"],
    ),
    KeywordRule::new(
        "Dengue Fever",
        &["high fever", "joint pain", "rash", "muscle pain", "eye pain", "pain behind eyes"],
    ),
    KeywordRule::new(
        "Fungal infection",
        &["itchy", "itching", "rash", "rashes", "skin", "bumps", "irritation", "red patches"],
    ),
    KeywordRule::new(
        "Migraine",
        &["throbbing headache", "sensitivity to light", "nausea", "vomiting", "migraine", "aura"],
    ),
    KeywordRule::new(
        "Tonsillitis",
        &["sore throat", "difficulty swallowing", "swollen tonsils", "throat pain"],
    ),
    KeywordRule::new(
        "Gastroenteritis",
        &["abdominal pain", "diarrhea", "nausea", "vomiting", "stomach pain", "cramps"],
    ),
    KeywordRule::new(
        "Urinary tract infection",
        &["burning", "urination", "frequent urination", "painful urination", "bladder"],
    ),
    KeywordRule::new(
        "Arthritis",
        &["joint pain", "stiffness", "swelling", "arthritis", "joint"],
    ),
    KeywordRule::new(
        "Diabetes",
        &["fatigue", "weight loss", "increased thirst", "frequent urination", "hunger", "sugar"],
    ),
    KeywordRule::new(
        "Heart attack",
        &["chest pain", "pressure", "shortness of breath", "pain in arm", "jaw pain"],
    ),
    KeywordRule::new(
        "Malaria",
        &["chills", "sweats", "body aches", "malaise", "recurring fever"],
    ),
    KeywordRule::new(
        "Typhoid",
        &["prolonged fever", "abdominal pain", "constipation", "weakness", "rose spots"],
    ),
    KeywordRule::new(
        "Tuberculosis",
        &["persistent cough", "coughing up blood", "weight loss", "night sweats", "tb"],
    ),
    KeywordRule::new(
        "Allergy",
        &["itchiness", "redness", "swelling", "hives", "allergic", "allergy"],
    ),
    KeywordRule::new(
        "Asthma",
        &["wheezing", "shortness of breath", "chest tightness", "coughing", "asthma"],
    ),
    KeywordRule::new(
        "Hypertension",
        &["high blood pressure", "vision problems", "hypertension", "nosebleed"],
    ),
    KeywordRule::new(
        "Hepatitis",
        &["weakness", "jaundice", "abdominal pain", "yellow skin", "yellow eyes", "dark urine"],
    ),
    KeywordRule::new(
        "Meningitis",
        &["stiff neck", "confusion", "seizures", "sensitivity to light", "severe headache"],
    ),
    KeywordRule::new(
        "Stroke",
        &["sudden weakness", "numbness", "difficulty speaking", "severe headache", "paralysis"],
    ),
    KeywordRule::new(
        "Digital Eyestrain Syndrome",
        &["dizziness", "fatigue", "digital", "screen", "computer", "monitor"],
    ),
    KeywordRule::new(
        "Computer Vision Syndrome",
        &["fatigue", "strain", "eye", "vision", "blurry", "dry eyes"],
    ),
    KeywordRule::new(
        "Dimorphic hemmorhoids(piles)",
        &["hemorrhoid", "pile", "rectal", "bleeding", "itching anus", "pain during bowel movements"],
    ),
    KeywordRule::new(
        "Chronic respiratory disease",
        &["breathing difficulties", "wheezing", "fatigue", "confusion", "rapid heartbeat"],
    ),
    KeywordRule::new(
        "Anxiety Disorder",
        &["anxiety", "worry", "nervousness", "restlessness", "panic", "fear"],
    ),
    KeywordRule::new(
        "Depression",
        &["sadness", "loss of interest", "hopelessness", "sleep problems", "depression"],
    ),
];

/// Outcome of local keyword scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMatch {
    pub disease: &'static str,
    /// Keywords of the winning rule found in the symptoms; 0 for no match.
    pub score: usize,
}

impl LocalMatch {
    /// A rule matched, i.e. the label is not the unknown sentinel.
    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Best-guess condition for a symptom set using keyword scoring.
///
/// Highest score wins; a later rule only replaces the current best on a
/// strictly greater score. No rule scoring at least 1 yields
/// `"Unknown Condition"`.
pub fn classify_symptoms(symptoms: &SymptomSet) -> LocalMatch {
    classify_with(CLASSIFIER_RULES, symptoms)
}

fn classify_with(rules: &[KeywordRule], symptoms: &SymptomSet) -> LocalMatch {
    let mut best = LocalMatch {
        disease: UNKNOWN_CONDITION,
        score: 0,
    };

    for rule in rules {
        let score = rule.score(symptoms);
        if score > best.score {
            best = LocalMatch {
                disease: rule.disease,
                score,
            };
        }
    }

    tracing::debug!(
        disease = best.disease,
        score = best.score,
        "Local keyword classification"
    );
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(list: &[&str]) -> LocalMatch {
        classify_symptoms(&SymptomSet::new(list).unwrap())
    }

    #[test]
    fn pneumonia_from_respiratory_symptoms() {
        let result = classify(&["cough", "chest pain", "shortness of breath"]);
        assert_eq!(result.disease, "Pneumonia");
        assert_eq!(result.score, 3);
        assert!(result.is_match());
    }

    #[test]
    fn generic_fever_and_headache_match_nothing() {
        let result = classify(&["fever", "headache"]);
        assert_eq!(result.disease, UNKNOWN_CONDITION);
        assert_eq!(result.score, 0);
        assert!(!result.is_match());
    }

    #[test]
    fn tie_goes_to_first_declared_rule() {
        // "sore throat" scores 1 for both Common Cold and Tonsillitis.
        assert_eq!(classify(&["sore throat"]).disease, "Common Cold");
        // "nausea" + "vomiting" score 2 for Migraine and Gastroenteritis.
        assert_eq!(classify(&["nausea", "vomiting"]).disease, "Migraine");
    }

    #[test]
    fn strictly_greater_score_replaces_earlier_rule() {
        let result = classify(&["sore throat", "difficulty swallowing", "swollen tonsils"]);
        assert_eq!(result.disease, "Tonsillitis");
        assert_eq!(result.score, 3);
    }

    #[test]
    fn substring_matching_within_phrases() {
        let result = classify(&["I keep sneezing with a runny nose and nasal congestion"]);
        assert_eq!(result.disease, "Common Cold");
        assert_eq!(result.score, 2);
    }

    #[test]
    fn case_is_normalized() {
        assert_eq!(
            classify(&["ANXIETY", "Panic attacks"]).disease,
            "Anxiety Disorder"
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let symptoms = SymptomSet::new(["fatigue", "weight loss", "increased thirst"]).unwrap();
        let first = classify_symptoms(&symptoms);
        for _ in 0..10 {
            assert_eq!(classify_symptoms(&symptoms), first);
        }
        assert_eq!(first.disease, "Diabetes");
    }

    #[test]
    fn each_rule_has_keywords_and_unique_label() {
        let mut seen = std::collections::HashSet::new();
        for rule in CLASSIFIER_RULES {
            assert!(!rule.keywords.is_empty(), "{} has no keywords", rule.disease);
            assert!(seen.insert(rule.disease), "duplicate rule for {}", rule.disease);
            assert_ne!(rule.disease, UNKNOWN_CONDITION);
        }
    }

    #[test]
    fn custom_table_respects_declaration_order() {
        const RULES: &[KeywordRule] = &[
            KeywordRule::new("First", &["itch"]),
            KeywordRule::new("Second", &["itch"]),
        ];
        let symptoms = SymptomSet::new(["itch"]).unwrap();
        assert_eq!(classify_with(RULES, &symptoms).disease, "First");
    }
}

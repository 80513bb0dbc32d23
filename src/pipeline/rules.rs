use crate::models::SymptomSet;

/// Static mapping from symptom-keyword substrings to a disease label.
///
/// Keywords are lowercase; they are matched as substrings of the (already
/// lowercased) symptom phrases, so `"cough"` matches `"whooping cough"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub disease: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    pub const fn new(disease: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { disease, keywords }
    }

    /// Number of keywords found in at least one symptom.
    pub fn score(&self, symptoms: &SymptomSet) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| symptoms.mentions(keyword))
            .count()
    }

    /// True if any keyword is found in any symptom.
    pub fn matches_any(&self, symptoms: &SymptomSet) -> bool {
        self.keywords.iter().any(|keyword| symptoms.mentions(keyword))
    }
}

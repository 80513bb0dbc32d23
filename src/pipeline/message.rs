use super::recommendations::NO_DESCRIPTION;
use crate::models::{DiagnosisResult, Severity};

fn severity_sentence(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "This condition requires immediate medical attention. ",
        Severity::Medium => {
            "This condition requires attention but is not immediately life-threatening. "
        }
        Severity::Low => "This is a mild condition that can typically be managed at home. ",
    }
}

/// Patient-facing summary shown above the recommendation list.
pub fn compose_message(result: &DiagnosisResult) -> String {
    let mut message = format!(
        "Based on your symptoms, I've diagnosed that you may have {}. ",
        result.disease
    );

    let description = result.description.trim();
    if !description.is_empty() && description != NO_DESCRIPTION {
        message.push_str(description);
        message.push(' ');
    }

    message.push_str(severity_sentence(result.severity));
    message.push_str("Here are some recommendations to help manage your condition:");
    message
}

//! Care recommendations and condition descriptions.
//!
//! Lookup is by exact label. Labels without an entry resolve to
//! [`DEFAULT_CARE`], including the "Unknown Condition" sentinel.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const NO_DESCRIPTION: &str = "No description available";

/// Static guidance for one condition. Recommendations are ordered most
/// urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareGuidance {
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
}

impl CareGuidance {
    pub fn recommendation_list(&self) -> Vec<String> {
        self.recommendations.iter().map(|r| r.to_string()).collect()
    }
}

pub const DEFAULT_CARE: CareGuidance = CareGuidance {
    description: NO_DESCRIPTION,
    recommendations: &[
        "Consult with a healthcare provider for proper diagnosis",
        "Rest and stay hydrated",
        "Monitor your symptoms and seek medical attention if they worsen",
        "Maintain a healthy lifestyle",
    ],
};

const FLU_RECOMMENDATIONS: &[&str] = &[
    "Rest and stay hydrated",
    "Take over-the-counter fever reducers and pain relievers",
    "Wash your hands frequently to prevent spreading",
    "Consider annual flu vaccination for prevention",
];
const FLU_DESCRIPTION: &str =
    "A contagious respiratory illness caused by influenza viruses that infect the nose, throat, and lungs.";

const DENGUE_RECOMMENDATIONS: &[&str] = &[
    "Seek medical attention immediately",
    "Rest and stay hydrated",
    "Take acetaminophen for fever (avoid aspirin)",
    "Use mosquito repellent and eliminate breeding sites",
];
const DENGUE_DESCRIPTION: &str =
    "A mosquito-borne viral disease causing high fever, severe headache, and joint and muscle pain.";

const CARE_ENTRIES: &[(&str, CareGuidance)] = &[
    (
        "Common Cold",
        CareGuidance {
            description: "A viral infection of the nose and throat, causing runny nose, sneezing, and mild discomfort.",
            recommendations: &[
                "Get plenty of rest",
                "Stay hydrated with water, juice, or warm lemon water with honey",
                "Use saline nasal drops or spray",
                "Gargle with salt water to soothe a sore throat",
            ],
        },
    ),
    (
        "Flu",
        CareGuidance {
            description: FLU_DESCRIPTION,
            recommendations: FLU_RECOMMENDATIONS,
        },
    ),
    (
        "Influenza",
        CareGuidance {
            description: FLU_DESCRIPTION,
            recommendations: FLU_RECOMMENDATIONS,
        },
    ),
    (
        "Pneumonia",
        CareGuidance {
            description: "An infection that inflames the air sacs in one or both lungs, which may fill with fluid.",
            recommendations: &[
                "Seek medical attention immediately",
                "Take prescribed antibiotics as directed",
                "Get plenty of rest to help your body recover",
                "Stay hydrated and use a humidifier to ease breathing",
            ],
        },
    ),
    (
        "Dengue",
        CareGuidance {
            description: DENGUE_DESCRIPTION,
            recommendations: DENGUE_RECOMMENDATIONS,
        },
    ),
    (
        "Dengue Fever",
        CareGuidance {
            description: DENGUE_DESCRIPTION,
            recommendations: DENGUE_RECOMMENDATIONS,
        },
    ),
    (
        "Malaria",
        CareGuidance {
            description: "A serious disease caused by a parasite that commonly infects a certain type of mosquito.",
            recommendations: &[
                "Seek immediate medical attention",
                "Complete the full course of antimalarial medication",
                "Use mosquito nets and insect repellent",
                "Eliminate standing water around your home",
            ],
        },
    ),
    (
        "Tuberculosis",
        CareGuidance {
            description: "A potentially serious infectious bacterial disease that mainly affects the lungs.",
            recommendations: &[
                "Seek immediate medical attention",
                "Complete the full course of prescribed antibiotics",
                "Cover your mouth when coughing or sneezing",
                "Ensure good ventilation in living spaces",
            ],
        },
    ),
    (
        "Typhoid",
        CareGuidance {
            description: "A bacterial infection spread through contaminated food and water, causing prolonged fever and abdominal symptoms.",
            recommendations: &[
                "Seek medical attention for proper antibiotic treatment",
                "Drink purified water and avoid raw foods",
                "Wash hands thoroughly before eating",
                "Complete the full course of prescribed antibiotics",
            ],
        },
    ),
    (
        "Fungal infection",
        CareGuidance {
            description: "An infection caused by fungi, often affecting the skin, nails, or mucous membranes.",
            recommendations: &[
                "Keep the affected area clean and dry",
                "Apply an over-the-counter antifungal cream as directed",
                "Avoid sharing towels, clothing, or footwear",
                "Consult a healthcare provider if the rash spreads or persists",
            ],
        },
    ),
    (
        "Skin Allergy",
        CareGuidance {
            description: "An allergic reaction of the skin causing itching, redness, or rash after contact with a trigger.",
            recommendations: &[
                "Avoid known triggers and irritants",
                "Use cold compresses to reduce itching",
                "Apply hypoallergenic moisturizer",
                "Consider over-the-counter antihistamines",
            ],
        },
    ),
    (
        "Migraine",
        CareGuidance {
            description: "A headache disorder characterized by recurrent headaches that are moderate to severe, often with nausea and sensitivity to light and sound.",
            recommendations: &[
                "Rest in a quiet, dark room",
                "Apply cold compresses to forehead",
                "Take pain relievers as directed",
                "Stay hydrated and track triggers",
            ],
        },
    ),
    (
        "Tonsillitis",
        CareGuidance {
            description: "Inflammation of the tonsils, causing sore throat, difficulty swallowing, and swollen lymph nodes.",
            recommendations: &[
                "Gargle with warm salt water",
                "Take pain relievers as directed",
                "Drink plenty of fluids",
                "Rest your voice and get adequate sleep",
            ],
        },
    ),
    (
        "Gastroenteritis",
        CareGuidance {
            description: "Inflammation of the stomach and intestines, typically resulting from bacterial or viral infection.",
            recommendations: &[
                "Stay hydrated with clear fluids",
                "Eat bland, easy-to-digest foods",
                "Get plenty of rest",
                "Avoid dairy, caffeine, and spicy foods",
            ],
        },
    ),
    (
        "Urinary tract infection",
        CareGuidance {
            description: "An infection in any part of the urinary system, including kidneys, bladder, ureters, and urethra.",
            recommendations: &[
                "Consult a healthcare provider for antibiotic treatment",
                "Drink plenty of water to flush bacteria",
                "Avoid caffeine, alcohol, and spicy foods",
                "Do not delay urination when you feel the need",
            ],
        },
    ),
    (
        "Arthritis",
        CareGuidance {
            description: "Inflammation of one or more joints, causing pain and stiffness that can worsen with age.",
            recommendations: &[
                "Consult a healthcare provider about pain management",
                "Stay active with low-impact exercise",
                "Apply heat or cold packs to affected joints",
                "Maintain a healthy weight to reduce joint stress",
            ],
        },
    ),
    (
        "Diabetes",
        CareGuidance {
            description: "A metabolic disease that causes high blood sugar due to problems with insulin production or function.",
            recommendations: &[
                "Consult a healthcare provider for blood sugar testing",
                "Monitor your blood glucose regularly",
                "Follow a balanced, low-sugar diet",
                "Exercise regularly and maintain a healthy weight",
            ],
        },
    ),
    (
        "Heart attack",
        CareGuidance {
            description: "Occurs when blood flow to a part of the heart is blocked, often by a blood clot.",
            recommendations: &[
                "Call emergency services immediately",
                "Chew an aspirin if not allergic and advised by a professional",
                "Stop all activity and rest while waiting for help",
                "Follow up with a cardiologist after emergency care",
            ],
        },
    ),
    (
        "Allergy",
        CareGuidance {
            description: "An abnormal immune response to substances that are typically harmless.",
            recommendations: &[
                "Identify and avoid known allergens",
                "Consider over-the-counter antihistamines",
                "Keep windows closed during high pollen periods",
                "Seek care immediately if swelling affects breathing",
            ],
        },
    ),
    (
        "Asthma",
        CareGuidance {
            description: "A condition in which a person's airways become inflamed, narrow, and swell, producing extra mucus.",
            recommendations: &[
                "Use your rescue inhaler as prescribed",
                "Avoid known triggers such as smoke and allergens",
                "Follow your asthma action plan",
                "Seek medical attention if breathing does not improve",
            ],
        },
    ),
    (
        "Hypertension",
        CareGuidance {
            description: "A condition in which the force of the blood against the artery walls is too high.",
            recommendations: &[
                "Monitor your blood pressure regularly",
                "Reduce salt intake",
                "Exercise regularly and maintain a healthy weight",
                "Take prescribed medication as directed",
            ],
        },
    ),
    (
        "Hepatitis",
        CareGuidance {
            description: "Inflammation of the liver, commonly caused by viral infection.",
            recommendations: &[
                "Seek medical attention for liver function testing",
                "Avoid alcohol completely",
                "Get plenty of rest",
                "Eat a balanced diet and stay hydrated",
            ],
        },
    ),
    (
        "Meningitis",
        CareGuidance {
            description: "Inflammation of the protective membranes covering the brain and spinal cord.",
            recommendations: &[
                "Seek emergency medical attention immediately",
                "Do not wait for symptoms to worsen",
                "Inform close contacts so they can be evaluated",
                "Complete any prescribed treatment fully",
            ],
        },
    ),
    (
        "Stroke",
        CareGuidance {
            description: "A medical condition in which poor blood flow to the brain results in cell death.",
            recommendations: &[
                "Call emergency services immediately",
                "Note the time symptoms started",
                "Do not eat or drink until evaluated",
                "Follow rehabilitation guidance after treatment",
            ],
        },
    ),
    (
        "Digital Eyestrain Syndrome",
        CareGuidance {
            description: "Eye discomfort and vision problems caused by prolonged use of digital devices.",
            recommendations: &[
                "Take frequent breaks from digital screens",
                "Adjust screen brightness and contrast",
                "Ensure proper lighting in your workspace",
                "Consider blue light filtering glasses",
            ],
        },
    ),
    (
        "Computer Vision Syndrome",
        CareGuidance {
            description: "Eye strain and other symptoms caused by extended viewing of digital screens.",
            recommendations: &[
                "Follow the 20-20-20 rule: every 20 minutes, look at something 20 feet away for 20 seconds",
                "Adjust your screen position and text size",
                "Use proper lighting and reduce glare",
                "Consider using artificial tears to prevent dry eyes",
            ],
        },
    ),
    (
        "Dimorphic hemmorhoids(piles)",
        CareGuidance {
            description: "Swollen blood vessels in the anal area causing pain, discomfort, and sometimes bleeding.",
            recommendations: &[
                "Avoid fatty spicy food",
                "Use over-the-counter hemorrhoid treatments",
                "Take warm baths with epsom salt",
                "Increase fiber intake and stay hydrated",
            ],
        },
    ),
    (
        "Chronic respiratory disease",
        CareGuidance {
            description: "Long-term conditions affecting the airways and other structures of the lungs.",
            recommendations: &[
                "Consult a pulmonologist for a treatment plan",
                "Avoid smoke, dust, and air pollution",
                "Use prescribed inhalers or medication as directed",
                "Stay up to date with flu and pneumonia vaccinations",
            ],
        },
    ),
    (
        "Anxiety Disorder",
        CareGuidance {
            description: "A mental health condition characterized by feelings of worry, anxiety, or fear that are strong enough to interfere with daily activities.",
            recommendations: &[
                "Talk to a mental health professional",
                "Practice breathing exercises and relaxation techniques",
                "Limit caffeine and alcohol",
                "Maintain regular sleep and physical activity",
            ],
        },
    ),
    (
        "Depression",
        CareGuidance {
            description: "A mental health disorder characterized by persistently depressed mood or loss of interest in activities.",
            recommendations: &[
                "Reach out to a mental health professional",
                "Stay connected with friends and family",
                "Keep a regular daily routine and sleep schedule",
                "Contact a crisis line if you have thoughts of self-harm",
            ],
        },
    ),
];

static CARE_TABLE: LazyLock<HashMap<&'static str, CareGuidance>> =
    LazyLock::new(|| CARE_ENTRIES.iter().copied().collect());

/// Guidance for an exact condition label, or [`DEFAULT_CARE`].
pub fn resolve_care(disease: &str) -> CareGuidance {
    CARE_TABLE.get(disease).copied().unwrap_or(DEFAULT_CARE)
}

/// Whether the table holds an entry for this exact label.
pub fn has_care_entry(disease: &str) -> bool {
    CARE_TABLE.contains_key(disease)
}

/// Split a free-text precautions field into recommendations.
///
/// Splits on commas, trims, drops empty segments; order is preserved.
pub fn parse_precautions(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

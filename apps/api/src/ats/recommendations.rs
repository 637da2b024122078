use serde::{Deserialize, Serialize};

use crate::ats::keywords::extract_keywords;

const MAX_LISTED_KEYWORDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Keywords,
    Contact,
    Formatting,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Recommendation {
    fn new(kind: RecommendationType, title: &str, description: String, priority: Priority) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description,
            priority,
        }
    }
}

/// Job keywords absent from the resume, in vocabulary order.
pub fn missing_keywords(resume_text: &str, job_text: &str) -> Vec<&'static str> {
    let resume_keywords = extract_keywords(resume_text);
    extract_keywords(&job_text.to_lowercase())
        .into_iter()
        .filter(|kw| !resume_keywords.contains(kw))
        .collect()
}

/// Prioritized suggestions for flattened resume text. The emission order is
/// fixed and the last two entries are always present.
pub fn recommend(resume_text: &str, job_description: Option<&str>) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some(job_text) = job_description.filter(|j| !j.is_empty()) {
        let missing = missing_keywords(resume_text, job_text);
        if !missing.is_empty() {
            let listed: Vec<&str> = missing.into_iter().take(MAX_LISTED_KEYWORDS).collect();
            recommendations.push(Recommendation::new(
                RecommendationType::Keywords,
                "Add Missing Keywords",
                format!(
                    "Consider adding these relevant keywords: {}",
                    listed.join(", ")
                ),
                Priority::High,
            ));
        }
    }

    if !resume_text.contains("email") {
        recommendations.push(Recommendation::new(
            RecommendationType::Contact,
            "Add Contact Information",
            "Include your email address for better ATS parsing".to_string(),
            Priority::High,
        ));
    }

    recommendations.push(Recommendation::new(
        RecommendationType::Formatting,
        "Use Standard Section Headers",
        r#"Use headers like "Experience", "Education", "Skills" for better ATS recognition"#
            .to_string(),
        Priority::Medium,
    ));

    recommendations.push(Recommendation::new(
        RecommendationType::Content,
        "Include Quantifiable Achievements",
        r#"Add numbers and metrics to demonstrate impact (e.g., "Increased sales by 25%")"#
            .to_string(),
        Priority::Medium,
    ));

    recommendations
}

//! ATS Analyzer: combines the four sub-scores into one weighted composite
//! plus ordered strengths and improvements.
//!
//! Composite = 0.30·keyword + 0.25·formatting + 0.25·sections + 0.20·readability.
//! Messages are emitted in a fixed order: keyword, formatting, sections,
//! readability, overall. Clients index into these lists, so the order is part
//! of the output contract.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::flatten::flatten_resume;
use crate::ats::scorers::{formatting, keyword_match, readability, MAX_SCORE};
use crate::ats::sections::analyze_sections;
use crate::models::resume::ResumeContent;

const KEYWORD_WEIGHT: f64 = 0.30;
const FORMATTING_WEIGHT: f64 = 0.25;
const SECTIONS_WEIGHT: f64 = 0.25;
const READABILITY_WEIGHT: f64 = 0.20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u32,
    pub keyword_match: u32,
    pub formatting: u32,
    pub sections: u32,
    pub readability: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Scores a resume, optionally against a job description.
pub fn analyze(resume: &ResumeContent, job_description: Option<&str>) -> AnalysisResult {
    let resume_text = flatten_resume(resume);
    analyze_text(&resume_text, job_description.unwrap_or_default())
}

/// Scores already-flattened resume text. An empty `job_text` means no job context.
pub fn analyze_text(resume_text: &str, job_text: &str) -> AnalysisResult {
    let keyword_match = keyword_match(resume_text, job_text);
    let formatting = formatting(resume_text);
    let sections = analyze_sections(resume_text);
    let readability = readability(resume_text);
    let score = composite_score(keyword_match, formatting, sections, readability);

    debug!(
        score,
        keyword_match, formatting, sections, readability, "ATS analysis complete"
    );

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if keyword_match >= 70 {
        strengths.push("Strong keyword alignment with job description");
    } else if keyword_match < 40 {
        improvements.push("Include more relevant keywords from job description");
    }

    if formatting >= 80 {
        strengths.push("Clean, ATS-friendly formatting");
    } else {
        improvements.push("Improve formatting for better ATS compatibility");
    }

    if sections >= 80 {
        strengths.push("Contains all essential resume sections");
    } else {
        improvements.push("Add missing essential sections (Contact, Experience, Skills)");
    }

    if readability >= 75 {
        strengths.push("Good readability and structure");
    } else {
        improvements.push("Improve content clarity and structure");
    }

    if score >= 80 {
        strengths.push("Excellent overall ATS compatibility");
    } else if score >= 60 {
        improvements.push("Good foundation, minor improvements needed");
    } else {
        improvements.push("Significant improvements needed for ATS optimization");
    }

    AnalysisResult {
        score,
        keyword_match,
        formatting,
        sections,
        readability,
        strengths: strengths.into_iter().map(String::from).collect(),
        improvements: improvements.into_iter().map(String::from).collect(),
    }
}

/// Weighted composite of the four sub-scores, rounded and clamped to 0–100.
pub fn composite_score(keyword_match: u32, formatting: u32, sections: u32, readability: u32) -> u32 {
    let weighted = keyword_match as f64 * KEYWORD_WEIGHT
        + formatting as f64 * FORMATTING_WEIGHT
        + sections as f64 * SECTIONS_WEIGHT
        + readability as f64 * READABILITY_WEIGHT;
    (weighted.round() as u32).min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn full_resume() -> ResumeContent {
        ResumeContent {
            personal: Some(PersonalInfo {
                name: Some("Grace Hopper".to_string()),
                email: Some("email: grace@navy.mil".to_string()),
                phone: Some("phone: 555-0100".to_string()),
                address: Some("Arlington, VA".to_string()),
                linkedin: None,
                github: None,
            }),
            experience: Some(vec![ExperienceEntry {
                role: Some("Senior Engineer".to_string()),
                company: Some("Remington Rand".to_string()),
                duration: Some("1949-1967".to_string()),
                description: Some(
                    "Led development of the first compiler. Designed COBOL. \
                     Managed a team of programmers. Implemented testing practices. \
                     Improved debugging workflows. Created documentation. \
                     Developed python and sql tooling. Ran agile ceremonies. \
                     Drove project management. Mentored engineers. Wrote reports."
                        .to_string(),
                ),
            }]),
            education: Some(vec![EducationEntry {
                school: Some("Yale University".to_string()),
                degree: Some("PhD Mathematics".to_string()),
                duration: Some("1930-1934".to_string()),
            }]),
            skills: Some(vec![
                "Programming".to_string(),
                "Leadership".to_string(),
                "Communication".to_string(),
            ]),
        }
    }

    #[test]
    fn test_composite_all_hundred_is_hundred() {
        assert_eq!(composite_score(100, 100, 100, 100), 100);
    }

    #[test]
    fn test_composite_all_zero_is_zero() {
        assert_eq!(composite_score(0, 0, 0, 0), 0);
    }

    #[test]
    fn test_composite_weighting() {
        // 60*0.3 + 80*0.25 + 0*0.25 + 60*0.2 = 18 + 20 + 0 + 12 = 50
        assert_eq!(composite_score(60, 80, 0, 60), 50);
    }

    #[test]
    fn test_skills_only_scenario() {
        let resume = ResumeContent {
            skills: Some(vec!["javascript".to_string(), "react".to_string()]),
            ..Default::default()
        };
        let result = analyze(&resume, None);

        assert_eq!(result.keyword_match, 60);
        assert_eq!(result.formatting, 80);
        assert_eq!(result.sections, 0);
        assert_eq!(result.readability, 60);
        // 18 + 20 + 0 + 12
        assert_eq!(result.score, 50);
        assert_eq!(result.strengths, vec!["Clean, ATS-friendly formatting"]);
        assert_eq!(
            result.improvements,
            vec![
                "Add missing essential sections (Contact, Experience, Skills)",
                "Improve content clarity and structure",
                "Significant improvements needed for ATS optimization",
            ]
        );
    }

    #[test]
    fn test_contact_values_only_scenario() {
        let resume = ResumeContent {
            personal: Some(PersonalInfo {
                email: Some("a@b.com".to_string()),
                phone: Some("555".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = analyze(&resume, None);
        // The literal words "email"/"phone" are absent from "a@b.com 555 ".
        assert_eq!(result.formatting, 80);
        assert_eq!(result.sections, 0);
    }

    #[test]
    fn test_full_resume_with_matching_job() {
        let result = analyze(
            &full_resume(),
            Some("Seeking Python and SQL engineer with Agile Leadership"),
        );

        assert_eq!(result.keyword_match, 100);
        assert_eq!(result.sections, 100);
        assert_eq!(result.formatting, 100);
        // <100 words, >10 sentences, action verbs
        assert_eq!(result.readability, 80);
        // 30 + 25 + 25 + 16
        assert_eq!(result.score, 96);
        assert_eq!(
            result.strengths,
            vec![
                "Strong keyword alignment with job description",
                "Clean, ATS-friendly formatting",
                "Contains all essential resume sections",
                "Good readability and structure",
                "Excellent overall ATS compatibility",
            ]
        );
        assert!(result.improvements.is_empty());
    }

    #[test]
    fn test_low_keyword_match_adds_improvement_first() {
        let result = analyze(&full_resume(), Some("kubernetes docker aws"));
        assert_eq!(result.keyword_match, 0);
        assert_eq!(
            result.improvements.first().map(String::as_str),
            Some("Include more relevant keywords from job description")
        );
    }

    #[test]
    fn test_mid_keyword_match_emits_no_keyword_message() {
        // job: python, sql, kubernetes, aws; resume has python, sql -> 50
        let result = analyze(&full_resume(), Some("python sql kubernetes aws"));
        assert_eq!(result.keyword_match, 50);
        assert!(!result.strengths.iter().any(|s| s.contains("keyword")));
        assert!(!result.improvements.iter().any(|s| s.contains("keywords")));
    }

    #[test]
    fn test_empty_job_description_equals_none() {
        let resume = full_resume();
        assert_eq!(analyze(&resume, Some("")), analyze(&resume, None));
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let resume = full_resume();
        let a = serde_json::to_string(&analyze(&resume, Some("python"))).unwrap();
        let b = serde_json::to_string(&analyze(&resume, Some("python"))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let resumes = [ResumeContent::default(), full_resume()];
        let jobs = [None, Some(""), Some("x"), Some("python java docker")];
        for resume in &resumes {
            for job in jobs {
                let r = analyze(resume, job);
                for v in [r.score, r.keyword_match, r.formatting, r.sections, r.readability] {
                    assert!(v <= 100);
                }
                assert_eq!(r.sections % 25, 0);
            }
        }
    }

    #[test]
    fn test_wire_fields_are_camel_case() {
        let json = serde_json::to_value(analyze(&ResumeContent::default(), None)).unwrap();
        assert_eq!(json["keywordMatch"], 60);
        assert!(json.get("keyword_match").is_none());
    }
}

use serde::{Deserialize, Serialize};

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeContent};

const LANGUAGE_MARKERS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "sql",
    "mongodb",
    "aws",
];
const FRAMEWORK_MARKERS: &[&str] = &["react", "angular", "vue", "express", "django", "flask", "spring"];
const DATABASE_MARKERS: &[&str] = &["mongodb", "mysql", "postgresql", "redis", "sql"];
const TOOL_MARKERS: &[&str] = &["git", "docker", "kubernetes", "aws", "jenkins", "jira"];

/// Application form fields a client can populate from `ExtractedData`.
pub const COMMON_FIELDS: [&str; 11] = [
    "firstName",
    "lastName",
    "email",
    "phone",
    "address",
    "linkedin",
    "github",
    "summary",
    "experience",
    "education",
    "skills",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalFields {
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

/// Skills bucketed by category. A skill may land in several buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalFields {
    pub programming_languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub personal: PersonalFields,
    pub professional: ProfessionalFields,
    pub technical: TechnicalFields,
}

pub fn extract_resume_data(resume: &ResumeContent) -> ExtractedData {
    let personal = resume.personal.clone().unwrap_or_default();
    let skills = resume.skills();

    ExtractedData {
        personal: PersonalFields {
            name: personal.name.unwrap_or_default(),
            email: personal.email.unwrap_or_default(),
            phone: personal.phone.unwrap_or_default(),
            address: personal.address.unwrap_or_default(),
            linkedin: personal.linkedin.unwrap_or_default(),
            github: personal.github.unwrap_or_default(),
        },
        professional: ProfessionalFields {
            experience: resume.experience().to_vec(),
            education: resume.education().to_vec(),
            skills: skills.to_vec(),
        },
        technical: TechnicalFields {
            programming_languages: skills_matching(skills, LANGUAGE_MARKERS),
            frameworks: skills_matching(skills, FRAMEWORK_MARKERS),
            databases: skills_matching(skills, DATABASE_MARKERS),
            tools: skills_matching(skills, TOOL_MARKERS),
        },
    }
}

/// Skills whose lowercase form contains any marker, original casing and order kept.
fn skills_matching(skills: &[String], markers: &[&str]) -> Vec<String> {
    skills
        .iter()
        .filter(|skill| {
            let lower = skill.to_lowercase();
            markers.iter().any(|m| lower.contains(m))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::PersonalInfo;

    fn skills(list: &[&str]) -> ResumeContent {
        ResumeContent {
            skills: Some(list.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_resume_extracts_defaults() {
        let data = extract_resume_data(&ResumeContent::default());
        assert_eq!(data, ExtractedData::default());
    }

    #[test]
    fn test_personal_fields_copied() {
        let resume = ResumeContent {
            personal: Some(PersonalInfo {
                name: Some("Linus".to_string()),
                github: Some("github.com/torvalds".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let data = extract_resume_data(&resume);
        assert_eq!(data.personal.name, "Linus");
        assert_eq!(data.personal.github, "github.com/torvalds");
        assert_eq!(data.personal.email, "");
    }

    #[test]
    fn test_skill_buckets_keep_original_casing_and_overlap() {
        let data = extract_resume_data(&skills(&["React", "PostgreSQL", "Docker", "Figma", "AWS"]));
        assert_eq!(data.technical.programming_languages, vec!["React", "PostgreSQL", "AWS"]);
        assert_eq!(data.technical.frameworks, vec!["React"]);
        assert_eq!(data.technical.databases, vec!["PostgreSQL"]);
        assert_eq!(data.technical.tools, vec!["Docker", "AWS"]);
        assert_eq!(data.professional.skills.len(), 5);
    }

    #[test]
    fn test_technical_wire_fields_are_camel_case() {
        let json = serde_json::to_value(extract_resume_data(&skills(&["Python"]))).unwrap();
        assert_eq!(json["technical"]["programmingLanguages"][0], "Python");
    }
}

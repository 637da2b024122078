use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact block of a resume. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>, // free text, never parsed as dates
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub duration: Option<String>,
}

/// Structured resume as authored in the builder. `null` and missing keys are
/// both accepted for every field and read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeContent {
    #[serde(default)]
    pub personal: Option<PersonalInfo>,
    #[serde(default)]
    pub experience: Option<Vec<ExperienceEntry>>,
    #[serde(default)]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

impl ResumeContent {
    pub fn experience(&self) -> &[ExperienceEntry] {
        self.experience.as_deref().unwrap_or_default()
    }

    pub fn education(&self) -> &[EducationEntry] {
        self.education.as_deref().unwrap_or_default()
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }
}

pub const DEFAULT_TEMPLATE: &str = "modern";

/// One immutable snapshot of a resume. Versions are only ever appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeVersion {
    #[serde(flatten)]
    pub content: ResumeContent,
    pub template: String,
    pub created_at: DateTime<Utc>,
}

impl ResumeVersion {
    pub fn new(content: ResumeContent, template: Option<String>) -> Self {
        Self {
            content,
            template: template
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub versions: Vec<ResumeVersion>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRecord {
    pub fn new(user_id: Uuid, first: ResumeVersion) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            versions: vec![first],
            created_at: now,
            updated_at: now,
        }
    }

    /// The most recently appended version.
    pub fn latest(&self) -> Option<&ResumeVersion> {
        self.versions.last()
    }

    pub fn push_version(&mut self, version: ResumeVersion) {
        self.updated_at = version.created_at;
        self.versions.push(version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_fields_deserialize_as_empty() {
        let content: ResumeContent =
            serde_json::from_str(r#"{"personal": null, "skills": null}"#).unwrap();
        assert!(content.personal.is_none());
        assert!(content.skills().is_empty());
        assert!(content.experience().is_empty());
        assert!(content.education().is_empty());
    }

    #[test]
    fn test_version_defaults_to_modern_template() {
        let v = ResumeVersion::new(ResumeContent::default(), None);
        assert_eq!(v.template, "modern");
        let v = ResumeVersion::new(ResumeContent::default(), Some("  ".to_string()));
        assert_eq!(v.template, "modern");
        let v = ResumeVersion::new(ResumeContent::default(), Some("classic".to_string()));
        assert_eq!(v.template, "classic");
    }

    #[test]
    fn test_latest_is_last_pushed_version() {
        let user = Uuid::new_v4();
        let mut record = ResumeRecord::new(user, ResumeVersion::new(ResumeContent::default(), None));
        let second = ResumeContent {
            skills: Some(vec!["rust".to_string()]),
            ..Default::default()
        };
        record.push_version(ResumeVersion::new(second.clone(), Some("minimal".to_string())));

        assert_eq!(record.versions.len(), 2);
        let latest = record.latest().unwrap();
        assert_eq!(latest.content, second);
        assert_eq!(latest.template, "minimal");
    }

    #[test]
    fn test_version_serializes_content_inline() {
        let v = ResumeVersion::new(
            ResumeContent {
                skills: Some(vec!["git".to_string()]),
                ..Default::default()
            },
            None,
        );
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["skills"][0], "git");
        assert_eq!(json["template"], "modern");
    }
}

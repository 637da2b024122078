//! Auto-fill generation: turns a resume plus optional job details into
//! ready-to-paste answers for a job application form.
//!
//! Pure given `today`; the handler passes the current UTC date.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::application::JobData;
use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeContent};

/// Years credited per listed position when estimating total experience.
const YEARS_PER_POSITION: usize = 2;
const SUMMARY_SKILL_COUNT: usize = 5;
const START_DATE_LEAD_DAYS: i64 = 14;

const SUMMARY_CLOSING: &str =
    "Passionate about delivering high-quality solutions and contributing to team success.";
const ACHIEVEMENTS_FALLBACK: &str =
    "Consistently delivered high-quality work and exceeded performance expectations.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoFillData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,

    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,

    pub cover_letter: String,
    pub why_this_company: String,
    pub relevant_experience: String,
    pub achievements: String,

    pub expected_salary: String,
    pub available_start_date: String,
    pub relocate_willingness: String,
    pub work_authorization: String,
    pub references: String,
}

pub fn generate_auto_fill(
    resume: &ResumeContent,
    job: Option<&JobData>,
    today: NaiveDate,
) -> AutoFillData {
    let personal = resume.personal.clone().unwrap_or_default();
    let name = personal.name.as_deref();
    let (first_name, last_name) = split_name(name);

    AutoFillData {
        first_name,
        last_name,
        email: personal.email.clone().unwrap_or_default(),
        phone: personal.phone.clone().unwrap_or_default(),
        address: personal.address.clone().unwrap_or_default(),
        linkedin: personal.linkedin.clone().unwrap_or_default(),
        github: personal.github.clone().unwrap_or_default(),
        portfolio: String::new(),

        summary: professional_summary(resume, job),
        experience: format_experience(resume.experience()),
        education: format_education(resume.education()),
        skills: format_skills(resume.skills(), job),

        cover_letter: cover_letter(name, job),
        why_this_company: why_this_company(job),
        relevant_experience: relevant_experience(resume.experience()),
        achievements: achievements(resume.experience()),

        expected_salary: String::new(),
        available_start_date: (today + Duration::days(START_DATE_LEAD_DAYS))
            .format("%Y-%m-%d")
            .to_string(),
        relocate_willingness: "Open to discussion".to_string(),
        work_authorization: "Authorized to work".to_string(),
        references: "Available upon request".to_string(),
    }
}

/// First space-separated token, and the remainder rejoined.
fn split_name(full_name: Option<&str>) -> (String, String) {
    let Some(full_name) = full_name.filter(|n| !n.is_empty()) else {
        return (String::new(), String::new());
    };
    let mut parts = full_name.split(' ');
    let first = parts.next().unwrap_or_default().to_string();
    let rest: Vec<&str> = parts.collect();
    (first, rest.join(" "))
}

fn job_position(job: Option<&JobData>) -> Option<&str> {
    job.and_then(|j| j.position.as_deref()).filter(|p| !p.is_empty())
}

fn job_company(job: Option<&JobData>) -> Option<&str> {
    job.and_then(|j| j.company.as_deref()).filter(|c| !c.is_empty())
}

fn professional_summary(resume: &ResumeContent, job: Option<&JobData>) -> String {
    let total_years = resume.experience().len() * YEARS_PER_POSITION;
    let skills = resume.skills();

    let mut summary = if total_years > 0 {
        format!("Experienced professional with {total_years}+ years in ")
    } else {
        "Motivated professional specializing in ".to_string()
    };

    match job_position(job) {
        Some(position) => {
            summary.push_str(&format!("{} and related technologies. ", position.to_lowercase()))
        }
        None => summary.push_str("software development and technology solutions. "),
    }

    if !skills.is_empty() {
        let top: Vec<&str> = skills
            .iter()
            .take(SUMMARY_SKILL_COUNT)
            .map(String::as_str)
            .collect();
        summary.push_str(&format!("Proficient in {}. ", top.join(", ")));
    }

    summary.push_str(SUMMARY_CLOSING);
    summary
}

fn format_experience(experience: &[ExperienceEntry]) -> String {
    experience
        .iter()
        .map(|exp| {
            let mut formatted = format!(
                "{} at {}",
                non_empty(&exp.role).unwrap_or("Position"),
                non_empty(&exp.company).unwrap_or("Company")
            );
            if let Some(duration) = non_empty(&exp.duration) {
                formatted.push_str(&format!(" ({duration})"));
            }
            if let Some(description) = non_empty(&exp.description) {
                formatted.push('\n');
                formatted.push_str(description);
            }
            formatted
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_education(education: &[EducationEntry]) -> String {
    education
        .iter()
        .map(|edu| {
            let mut formatted = format!(
                "{} from {}",
                non_empty(&edu.degree).unwrap_or("Degree"),
                non_empty(&edu.school).unwrap_or("Institution")
            );
            if let Some(duration) = non_empty(&edu.duration) {
                formatted.push_str(&format!(" ({duration})"));
            }
            formatted
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Skills related to the position title move to the front; relative order is
/// otherwise preserved.
fn format_skills(skills: &[String], job: Option<&JobData>) -> String {
    let mut prioritized: Vec<&str> = skills.iter().map(String::as_str).collect();

    if let Some(position) = job_position(job) {
        let title = position.to_lowercase();
        prioritized.sort_by_key(|skill| {
            let skill = skill.to_lowercase();
            !(skill.contains(&title) || title.contains(&skill))
        });
    }

    prioritized.join(", ")
}

fn cover_letter(name: Option<&str>, job: Option<&JobData>) -> String {
    let company = job_company(job).unwrap_or("[Company Name]");
    let position = job_position(job).unwrap_or("[Position Title]");
    let name = name.filter(|n| !n.is_empty()).unwrap_or("[Your Name]");

    format!(
        "Dear Hiring Manager,

I am writing to express my strong interest in the {position} position at {company}. With my background in software development and proven track record of delivering high-quality solutions, I am excited about the opportunity to contribute to your team.

In my previous roles, I have developed expertise in various technologies and have consistently delivered projects that exceed expectations. My technical skills, combined with my passion for innovation and problem-solving, make me well-suited for this position.

I am particularly drawn to {company} because of its reputation for excellence and innovation in the industry. I believe my skills and enthusiasm would be valuable additions to your team.

Thank you for considering my application. I look forward to discussing how I can contribute to {company}'s continued success.

Best regards,
{name}"
    )
}

fn why_this_company(job: Option<&JobData>) -> String {
    let company = job_company(job).unwrap_or("[Company Name]");
    format!(
        "I am particularly interested in {company} because of its innovative approach to technology and its reputation as an industry leader. The company's commitment to excellence and growth opportunities align perfectly with my career goals and values."
    )
}

fn relevant_experience(experience: &[ExperienceEntry]) -> String {
    // Most recent position is listed first.
    let Some(recent) = experience.first() else {
        return String::new();
    };
    format!(
        "{} at {} - {}",
        recent.role.as_deref().unwrap_or_default(),
        recent.company.as_deref().unwrap_or_default(),
        non_empty(&recent.description).unwrap_or("Relevant experience in the field")
    )
}

fn achievements(experience: &[ExperienceEntry]) -> String {
    let found: Vec<&str> = experience
        .iter()
        .filter_map(|exp| non_empty(&exp.description))
        .filter(|d| d.contains('%') || d.contains("increased") || d.contains("improved"))
        .collect();

    if found.is_empty() {
        ACHIEVEMENTS_FALLBACK.to_string()
    } else {
        found.join("\n")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

//! Independent 0–100 sub-scores feeding the composite ATS score.
//!
//! Each scorer is a pure function over already-flattened lowercase text.
//! Rule sets are additive from a base value and clamped at 100.

use crate::ats::keywords::extract_keywords;
use crate::ats::vocabulary::ACTION_VERBS;

pub const MAX_SCORE: u32 = 100;

/// Score used when no job description was supplied.
pub const NEUTRAL_KEYWORD_SCORE: u32 = 60;

const FORMATTING_BASE: u32 = 70;
const READABILITY_BASE: u32 = 60;

/// Share of the job description's vocabulary keywords also present in the resume.
///
/// An empty job text is "unknown context" and yields 60. A non-empty job text
/// with no vocabulary keywords yields 0.
pub fn keyword_match(resume_text: &str, job_text: &str) -> u32 {
    if job_text.is_empty() {
        return NEUTRAL_KEYWORD_SCORE;
    }

    let job_keywords = extract_keywords(&job_text.to_lowercase());
    let resume_keywords = extract_keywords(resume_text);

    let matches = job_keywords
        .iter()
        .filter(|kw| resume_keywords.contains(kw))
        .count();

    let ratio = matches as f64 / job_keywords.len().max(1) as f64;
    ((ratio * 100.0).round() as u32).min(MAX_SCORE)
}

pub fn formatting(resume_text: &str) -> u32 {
    let length = resume_text.chars().count();
    let mut score = FORMATTING_BASE;

    if length > 200 {
        score += 10;
    }
    if length < 2000 {
        score += 10;
    }
    if resume_text.contains("email") {
        score += 5;
    }
    if resume_text.contains("phone") || resume_text.contains("mobile") {
        score += 5;
    }

    score.min(MAX_SCORE)
}

pub fn readability(resume_text: &str) -> u32 {
    let mut score = READABILITY_BASE;

    // Pieces between single spaces, empty pieces included.
    let word_count = resume_text.split(' ').count();
    if (100..=800).contains(&word_count) {
        score += 20;
    }

    let sentence_count = resume_text.split('.').count();
    if sentence_count > 10 {
        score += 10;
    }

    if ACTION_VERBS.iter().any(|verb| resume_text.contains(verb)) {
        score += 10;
    }

    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_defaults_without_job_text() {
        assert_eq!(keyword_match("anything at all", ""), 60);
        assert_eq!(keyword_match("", ""), 60);
    }

    #[test]
    fn test_keyword_match_zero_when_job_has_no_vocabulary() {
        assert_eq!(keyword_match("python docker", "we sell boats"), 0);
        // Whitespace is still job text.
        assert_eq!(keyword_match("python docker", "   "), 0);
    }

    #[test]
    fn test_keyword_match_lowercases_job_text() {
        assert_eq!(keyword_match("python docker", "PYTHON and DOCKER"), 100);
    }

    #[test]
    fn test_keyword_match_partial_rounds() {
        // job: python, docker, agile; resume has python only -> 33.3
        assert_eq!(keyword_match("python", "python docker agile"), 33);
        // job: python, docker, agile; resume has python, docker -> 66.7
        assert_eq!(keyword_match("python docker", "python docker agile"), 67);
    }

    #[test]
    fn test_formatting_ceiling() {
        let mut text = String::from("email phone ");
        while text.len() < 500 {
            text.push('x');
        }
        assert_eq!(text.chars().count(), 500);
        assert_eq!(formatting(&text), 100);
    }

    #[test]
    fn test_formatting_short_text_without_contact_words() {
        // <2000 only
        assert_eq!(formatting("a@b.com 555 "), 80);
    }

    #[test]
    fn test_formatting_mobile_counts_as_phone() {
        assert_eq!(formatting("mobile"), 85);
    }

    #[test]
    fn test_formatting_very_long_text() {
        let text = "y".repeat(2500);
        // >200 only
        assert_eq!(formatting(&text), 80);
    }

    #[test]
    fn test_readability_base() {
        assert_eq!(readability(""), 60);
    }

    #[test]
    fn test_readability_all_rules() {
        let mut text = String::from("led ");
        text.push_str(&"word. ".repeat(150));
        assert_eq!(readability(&text), 100);
    }

    #[test]
    fn test_readability_word_count_bounds() {
        let words = |n: usize| vec!["w"; n].join(" ");
        assert_eq!(readability(&words(99)), 60);
        assert_eq!(readability(&words(100)), 80);
        assert_eq!(readability(&words(800)), 80);
        assert_eq!(readability(&words(801)), 60);
    }

    #[test]
    fn test_readability_sentence_threshold() {
        // 10 periods -> 11 pieces
        assert_eq!(readability(&".".repeat(10)), 70);
        // 9 periods -> 10 pieces
        assert_eq!(readability(&".".repeat(9)), 60);
    }

    #[test]
    fn test_readability_action_verb_substring() {
        // "led" inside "skilled"
        assert_eq!(readability("skilled"), 70);
    }
}

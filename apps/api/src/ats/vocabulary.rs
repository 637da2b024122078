//! Fixed domain vocabularies shared by every analysis. Read-only for the life
//! of the process; order matters because extraction output follows it.

/// Technical and soft-skill terms recognised in resume and job-description text.
pub const KEYWORD_VOCABULARY: [&str; 24] = [
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "sql",
    "mongodb",
    "css",
    "html",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "management",
    "leadership",
    "communication",
    "teamwork",
    "project",
    "analysis",
    "development",
    "design",
    "testing",
    "debugging",
];

/// Canonical resume sections and the markers that signal each one.
pub const SECTION_MARKERS: [(&str, &[&str]); 4] = [
    ("contact", &["email", "phone", "mobile"]),
    (
        "experience",
        &["experience", "work", "employment", "position", "role"],
    ),
    (
        "education",
        &["education", "degree", "university", "college", "school"],
    ),
    ("skills", &["skills", "technologies", "tools", "programming"]),
];

pub const ACTION_VERBS: [&str; 7] = [
    "managed",
    "developed",
    "created",
    "implemented",
    "designed",
    "led",
    "improved",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_lowercase_and_unique() {
        for (i, kw) in KEYWORD_VOCABULARY.iter().enumerate() {
            assert_eq!(*kw, kw.to_lowercase());
            assert!(!KEYWORD_VOCABULARY[i + 1..].contains(kw), "duplicate {kw}");
        }
    }

    #[test]
    fn test_section_order_is_canonical() {
        let names: Vec<&str> = SECTION_MARKERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["contact", "experience", "education", "skills"]);
    }
}

use crate::ats::vocabulary::KEYWORD_VOCABULARY;

/// Returns the vocabulary terms contained anywhere in `text`, in vocabulary order.
///
/// `text` must already be lowercase. Matching is plain substring containment,
/// so "java" is found inside "javascript".
pub fn extract_keywords(text: &str) -> Vec<&'static str> {
    KEYWORD_VOCABULARY
        .iter()
        .copied()
        .filter(|kw| text.contains(kw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_follows_vocabulary_order() {
        let found = extract_keywords("docker then python then agile");
        assert_eq!(found, vec!["python", "docker", "agile"]);
    }

    #[test]
    fn test_substring_matching_is_not_word_bounded() {
        let found = extract_keywords("javascript");
        assert_eq!(found, vec!["javascript", "java"]);
    }

    #[test]
    fn test_uppercase_input_is_not_folded() {
        assert!(extract_keywords("PYTHON").is_empty());
    }

    #[test]
    fn test_no_keywords() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("basket weaving").is_empty());
    }
}

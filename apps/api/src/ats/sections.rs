use crate::ats::vocabulary::SECTION_MARKERS;

const POINTS_PER_SECTION: u32 = 25;

/// Names of the canonical sections with at least one marker present in `text`.
pub fn detect_sections(text: &str) -> Vec<&'static str> {
    SECTION_MARKERS
        .iter()
        .filter(|(_, markers)| markers.iter().any(|m| text.contains(m)))
        .map(|(name, _)| *name)
        .collect()
}

/// 25 points per detected section; always one of 0, 25, 50, 75, 100.
pub fn analyze_sections(text: &str) -> u32 {
    detect_sections(text).len() as u32 * POINTS_PER_SECTION
}

//! Resume skill extraction.
//!
//! A skill matches when its lowercase name occurs anywhere in the lowercased
//! text. There is no word-boundary check, so short names hit inside longer
//! words ("R" in "Research", "Go" in "Google"). Callers get vocabulary order.

use crate::skills::vocabulary::SkillVocabulary;

/// Returns every vocabulary skill found in `text`, in vocabulary order.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    let lower = text.to_lowercase();
    vocabulary
        .entries()
        .filter(|(_, skill_lower)| lower.contains(skill_lower))
        .map(|(name, _)| name.to_string())
        .collect()
}

//! Emphasis detection. Intensity language in the requirement text nudges its weight.

use serde::{Deserialize, Serialize};

const HIGH_EMPHASIS: &[&str] = &[
    "expert",
    "extensive",
    "strong",
    "proven",
    "deep",
    "comprehensive",
    "advanced",
    "thorough",
    "significant",
    "considerable",
    "demonstrated",
    "extensively",
    "expertise",
    "mastery",
    "proficiency",
    "fluent",
];

const LOW_EMPHASIS: &[&str] = &[
    "basic",
    "familiarity",
    "familiar",
    "awareness",
    "aware",
    "some",
    "knowledge of",
    "understanding of",
    "exposure to",
    "introduction",
    "fundamental",
    "beginner",
    "novice",
    "entry-level",
    "basic understanding",
];

/// Keyword sets and the modifiers they produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmphasisConfig {
    pub high_keywords: Vec<String>,
    pub low_keywords: Vec<String>,
    pub high_modifier: f64,
    pub low_modifier: f64,
}

impl Default for EmphasisConfig {
    fn default() -> Self {
        Self {
            high_keywords: HIGH_EMPHASIS.iter().map(|s| s.to_string()).collect(),
            low_keywords: LOW_EMPHASIS.iter().map(|s| s.to_string()).collect(),
            high_modifier: 0.5,
            low_modifier: -0.5,
        }
    }
}

/// Returns the emphasis modifier for `text`.
///
/// Case-insensitive substring match, so "expertly" hits "expert". High emphasis
/// is checked first and wins when both sets match.
pub fn emphasis_of(text: &str, config: &EmphasisConfig) -> f64 {
    let t = text.to_lowercase();

    if contains_any(&t, &config.high_keywords) {
        return config.high_modifier;
    }
    if contains_any(&t, &config.low_keywords) {
        return config.low_modifier;
    }
    0.0
}

/// Case-insensitive substring test; an empty keyword never matches.
pub(crate) fn matches_keyword(haystack_lower: &str, keyword: &str) -> bool {
    !keyword.is_empty() && haystack_lower.contains(&keyword.to_lowercase())
}

pub(crate) fn contains_any(haystack_lower: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| matches_keyword(haystack_lower, k))
}

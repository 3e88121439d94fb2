//! Cross-functional complexity of requirements that span teams and disciplines.

use serde::{Deserialize, Serialize};

use crate::scoring::emphasis::contains_any;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    High,
    Medium,
    Low,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::High => "high",
            Complexity::Medium => "medium",
            Complexity::Low => "low",
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossFunctionalConfig {
    pub collaboration_indicators: Vec<String>,
    pub domain_bridging_indicators: Vec<String>,
    pub translation_indicators: Vec<String>,
    pub integration_indicators: Vec<String>,
    /// Matched categories needed for each level.
    pub high_complexity_threshold: usize,
    pub medium_complexity_threshold: usize,
    pub high_complexity_multiplier: f64,
    pub medium_complexity_multiplier: f64,
    pub low_complexity_multiplier: f64,
    pub proven_strength_bonus: f64,
    pub executive_role_bonus: f64,
}

impl Default for CrossFunctionalConfig {
    fn default() -> Self {
        Self {
            collaboration_indicators: words(&[
                "collaborat",
                "cross-functional",
                "coordinat",
                "partner",
                "work with",
                "working with",
                "liaise",
                "cooperat",
            ]),
            domain_bridging_indicators: words(&[
                "chemistry",
                "biology",
                "clinical",
                "regulatory",
                "commercial",
                "multidisciplinary",
                "interdisciplinary",
                "across",
                "between",
            ]),
            translation_indicators: words(&[
                "translat",
                "bridge",
                "explain",
                "convey",
                "interpret",
                "communicate",
            ]),
            integration_indicators: words(&[
                "integrat",
                "unify",
                "consolidat",
                "align",
                "synthesi",
                "combine",
                "harmoniz",
            ]),
            high_complexity_threshold: 3,
            medium_complexity_threshold: 1,
            high_complexity_multiplier: 1.3,
            medium_complexity_multiplier: 1.15,
            low_complexity_multiplier: 1.0,
            proven_strength_bonus: 0.1,
            executive_role_bonus: 0.05,
        }
    }
}

/// Returns the complexity level and how many indicator categories matched.
pub fn assess_complexity(text: &str, config: &CrossFunctionalConfig) -> (Complexity, usize) {
    let t = text.to_lowercase();
    let matched = [
        &config.collaboration_indicators,
        &config.domain_bridging_indicators,
        &config.translation_indicators,
        &config.integration_indicators,
    ]
    .into_iter()
    .filter(|set| contains_any(&t, set))
    .count();

    let complexity = if matched >= config.high_complexity_threshold {
        Complexity::High
    } else if matched >= config.medium_complexity_threshold {
        Complexity::Medium
    } else {
        Complexity::Low
    };
    (complexity, matched)
}

/// True when any proven-strength keyword appears in the requirement text.
pub fn matches_proven_strength(text: &str, proven_strengths: &[String]) -> bool {
    contains_any(&text.to_lowercase(), proven_strengths)
}

pub fn cross_functional_modifier(
    complexity: Complexity,
    matches_proven_strength: bool,
    is_executive_role: bool,
    config: &CrossFunctionalConfig,
) -> f64 {
    let mut modifier = match complexity {
        Complexity::High => config.high_complexity_multiplier,
        Complexity::Medium => config.medium_complexity_multiplier,
        Complexity::Low => config.low_complexity_multiplier,
    };
    if matches_proven_strength {
        modifier += config.proven_strength_bonus;
    }
    if is_executive_role {
        modifier += config.executive_role_bonus;
    }
    modifier
}

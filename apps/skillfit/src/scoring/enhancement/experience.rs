//! Experience-level calibration.
//!
//! Senior profiles (15+ years by default) are held to a per-category baseline:
//! scoring below it costs a flat penalty, each point above it earns a bonus.
//! Junior profiles and uncategorized requirements are never calibrated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::emphasis::contains_any;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    BasicTechnical,
    Leadership,
    StrategicThinking,
    Communication,
    DomainExpertise,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::BasicTechnical => "basic_technical",
            SkillCategory::Leadership => "leadership",
            SkillCategory::StrategicThinking => "strategic_thinking",
            SkillCategory::Communication => "communication",
            SkillCategory::DomainExpertise => "domain_expertise",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords for one category. Categories are tried in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryKeywords {
    pub category: SkillCategory,
    pub keywords: Vec<String>,
}

fn keywords(category: SkillCategory, words: &[&str]) -> CategoryKeywords {
    CategoryKeywords {
        category,
        keywords: words.iter().map(|s| s.to_string()).collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillBaselines {
    pub basic_technical: u8,
    pub leadership: u8,
    pub strategic_thinking: u8,
    pub communication: u8,
    pub domain_expertise: u8,
}

impl Default for SkillBaselines {
    fn default() -> Self {
        Self {
            basic_technical: 3,
            leadership: 4,
            strategic_thinking: 4,
            communication: 4,
            domain_expertise: 4,
        }
    }
}

impl SkillBaselines {
    pub fn baseline_of(&self, category: SkillCategory) -> u8 {
        match category {
            SkillCategory::BasicTechnical => self.basic_technical,
            SkillCategory::Leadership => self.leadership,
            SkillCategory::StrategicThinking => self.strategic_thinking,
            SkillCategory::Communication => self.communication,
            SkillCategory::DomainExpertise => self.domain_expertise,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceLevelConfig {
    pub skill_categories: Vec<CategoryKeywords>,
    pub senior_threshold_years: u32,
    pub senior_executive_baselines: SkillBaselines,
    pub below_baseline_penalty: f64,
    pub above_baseline_bonus_rate: f64,
}

impl Default for ExperienceLevelConfig {
    fn default() -> Self {
        Self {
            skill_categories: vec![
                keywords(
                    SkillCategory::BasicTechnical,
                    &[
                        "programming",
                        "coding",
                        "software",
                        "technical",
                        "algorithm",
                        "data analysis",
                        "statistical",
                        "sql",
                        "python",
                        "modeling",
                        "computational",
                        "engineering",
                        "database",
                    ],
                ),
                keywords(
                    SkillCategory::Leadership,
                    &[
                        "lead", "manage", "mentor", "team", "supervis", "coach", "hiring",
                    ],
                ),
                keywords(
                    SkillCategory::StrategicThinking,
                    &[
                        "strategic",
                        "strategy",
                        "vision",
                        "roadmap",
                        "planning",
                        "long-term",
                        "business model",
                        "prioritiz",
                    ],
                ),
                keywords(
                    SkillCategory::Communication,
                    &[
                        "communicat",
                        "present",
                        "stakeholder",
                        "writing",
                        "negotiat",
                        "influenc",
                        "public speaking",
                        "storytelling",
                    ],
                ),
                keywords(
                    SkillCategory::DomainExpertise,
                    &[
                        "domain",
                        "industry",
                        "regulatory",
                        "clinical",
                        "biology",
                        "chemistry",
                        "bioinformatics",
                        "therapeutic",
                        "scientific",
                        "drug",
                        "genomic",
                    ],
                ),
            ],
            senior_threshold_years: 15,
            senior_executive_baselines: SkillBaselines::default(),
            below_baseline_penalty: 0.7,
            above_baseline_bonus_rate: 0.1,
        }
    }
}

/// First category whose keywords appear in `text`, if any.
pub fn categorize_skill(text: &str, config: &ExperienceLevelConfig) -> Option<SkillCategory> {
    let t = text.to_lowercase();
    config
        .skill_categories
        .iter()
        .find(|c| contains_any(&t, &c.keywords))
        .map(|c| c.category)
}

pub fn experience_level_modifier(
    category: Option<SkillCategory>,
    self_score: u8,
    years_experience: u32,
    config: &ExperienceLevelConfig,
) -> f64 {
    let Some(category) = category else {
        return 1.0;
    };
    if years_experience < config.senior_threshold_years {
        return 1.0;
    }

    let baseline = config.senior_executive_baselines.baseline_of(category);
    if self_score < baseline {
        config.below_baseline_penalty
    } else if self_score > baseline {
        1.0 + f64::from(self_score - baseline) * config.above_baseline_bonus_rate
    } else {
        1.0
    }
}

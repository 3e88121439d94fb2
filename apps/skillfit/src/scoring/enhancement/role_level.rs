use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scoring::enhancement::experience::SkillCategory;

/// Seniority of the role being targeted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum RoleLevel {
    CSuite,
    #[default]
    SeniorExecutive,
    DirectorVp,
    SeniorIc,
}

impl RoleLevel {
    pub const ALL: [RoleLevel; 4] = [
        RoleLevel::CSuite,
        RoleLevel::SeniorExecutive,
        RoleLevel::DirectorVp,
        RoleLevel::SeniorIc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleLevel::CSuite => "c_suite",
            RoleLevel::SeniorExecutive => "senior_executive",
            RoleLevel::DirectorVp => "director_vp",
            RoleLevel::SeniorIc => "senior_ic",
        }
    }

    /// Parses `label`, falling back to `senior_executive` for anything unknown.
    pub fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            tracing::warn!(
                label,
                "Unknown role level; falling back to senior_executive weights"
            );
            RoleLevel::SeniorExecutive
        })
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        RoleLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "Unknown role level '{s}'. Valid values are: c_suite, senior_executive, director_vp, senior_ic"
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleWeights {
    pub strategic_thinking: f64,
    pub business_acumen: f64,
    pub cross_functional: f64,
    pub technical_literacy: f64,
    pub hands_on_skills: f64,
    pub domain_expertise: f64,
}

impl Default for RoleWeights {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0)
    }
}

impl RoleWeights {
    pub const fn new(
        strategic_thinking: f64,
        business_acumen: f64,
        cross_functional: f64,
        technical_literacy: f64,
        hands_on_skills: f64,
        domain_expertise: f64,
    ) -> Self {
        Self {
            strategic_thinking,
            business_acumen,
            cross_functional,
            technical_literacy,
            hands_on_skills,
            domain_expertise,
        }
    }

    /// Only categories with a same-named component select a weight; the rest get 1.0.
    pub fn weight_for(&self, category: Option<SkillCategory>) -> f64 {
        match category {
            Some(SkillCategory::StrategicThinking) => self.strategic_thinking,
            Some(SkillCategory::DomainExpertise) => self.domain_expertise,
            Some(SkillCategory::BasicTechnical)
            | Some(SkillCategory::Leadership)
            | Some(SkillCategory::Communication)
            | None => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleLevelConfig {
    pub c_suite: RoleWeights,
    pub senior_executive: RoleWeights,
    pub director_vp: RoleWeights,
    pub senior_ic: RoleWeights,
}

impl Default for RoleLevelConfig {
    fn default() -> Self {
        Self {
            c_suite: RoleWeights::new(1.4, 1.3, 1.2, 0.8, 0.6, 1.0),
            senior_executive: RoleWeights::new(1.3, 1.2, 1.3, 0.9, 0.8, 1.1),
            director_vp: RoleWeights::new(1.0, 1.0, 1.1, 1.2, 1.0, 1.2),
            senior_ic: RoleWeights::new(0.8, 0.7, 0.9, 1.3, 1.3, 1.4),
        }
    }
}

impl RoleLevelConfig {
    pub fn weights_for(&self, level: RoleLevel) -> &RoleWeights {
        match level {
            RoleLevel::CSuite => &self.c_suite,
            RoleLevel::SeniorExecutive => &self.senior_executive,
            RoleLevel::DirectorVp => &self.director_vp,
            RoleLevel::SeniorIc => &self.senior_ic,
        }
    }

    pub fn role_level_modifier(&self, level: RoleLevel, category: Option<SkillCategory>) -> f64 {
        self.weights_for(level).weight_for(category)
    }
}

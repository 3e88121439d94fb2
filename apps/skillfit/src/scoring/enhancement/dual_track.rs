//! Dual-track alignment of executive and individual-contributor requirements.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scoring::emphasis::matches_keyword;

/// Track of a requirement, or of the role being targeted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum RoleTrack {
    #[default]
    Executive,
    Ic,
    Hybrid,
}

impl RoleTrack {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleTrack::Executive => "executive",
            RoleTrack::Ic => "ic",
            RoleTrack::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for RoleTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleTrack {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "executive" => Ok(RoleTrack::Executive),
            "ic" => Ok(RoleTrack::Ic),
            "hybrid" => Ok(RoleTrack::Hybrid),
            other => Err(AppError::InvalidInput(format!(
                "Unknown role type '{other}'. Valid values are: executive, ic, hybrid"
            ))),
        }
    }
}

const EXECUTIVE_INDICATORS: &[&str] = &[
    "lead",
    "strategic",
    "strategy",
    "manage",
    "direct",
    "oversee",
    "vision",
    "executive",
    "stakeholder",
    "board",
    "budget",
    "p&l",
    "organizational",
    "cross-functional",
    "partnership",
    "govern",
    "transform",
    "portfolio",
    "drive",
];

const IC_INDICATORS: &[&str] = &[
    "develop",
    "implement",
    "algorithm",
    "novel",
    "code",
    "coding",
    "programming",
    "hands-on",
    "build",
    "design",
    "analyze",
    "analysis",
    "experiment",
    "research",
    "optimiz",
    "debug",
    "prototype",
    "statistical",
    "model",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualTrackConfig {
    pub executive_indicators: Vec<String>,
    pub ic_indicators: Vec<String>,
    /// One side must out-count the other by more than this factor to win.
    pub dominance_ratio: f64,
    pub aligned_multiplier: f64,
    pub ic_for_executive_multiplier: f64,
    pub executive_for_ic_multiplier: f64,
}

impl Default for DualTrackConfig {
    fn default() -> Self {
        Self {
            executive_indicators: EXECUTIVE_INDICATORS.iter().map(|s| s.to_string()).collect(),
            ic_indicators: IC_INDICATORS.iter().map(|s| s.to_string()).collect(),
            dominance_ratio: 1.5,
            aligned_multiplier: 1.0,
            ic_for_executive_multiplier: 0.9,
            executive_for_ic_multiplier: 0.8,
        }
    }
}

fn count_matches(text_lower: &str, indicators: &[String]) -> usize {
    indicators
        .iter()
        .filter(|ind| matches_keyword(text_lower, ind.as_str()))
        .count()
}

/// Classifies requirement text by which indicator set dominates.
pub fn classify_requirement_type(text: &str, config: &DualTrackConfig) -> RoleTrack {
    let t = text.to_lowercase();
    let exec = count_matches(&t, &config.executive_indicators) as f64;
    let ic = count_matches(&t, &config.ic_indicators) as f64;

    if exec > ic * config.dominance_ratio {
        RoleTrack::Executive
    } else if ic > exec * config.dominance_ratio {
        RoleTrack::Ic
    } else {
        RoleTrack::Hybrid
    }
}

/// Multiplier for a requirement of `requirement_type` scored against `target`.
pub fn dual_track_modifier(
    requirement_type: RoleTrack,
    target: RoleTrack,
    config: &DualTrackConfig,
) -> f64 {
    match (requirement_type, target) {
        (RoleTrack::Ic, RoleTrack::Executive) => config.ic_for_executive_multiplier,
        (RoleTrack::Executive, RoleTrack::Ic) => config.executive_for_ic_multiplier,
        _ => config.aligned_multiplier,
    }
}

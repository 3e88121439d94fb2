//! Enhancement pipeline.
//!
//! Four independent per-row modifiers are multiplied into the base raw score:
//! dual-track alignment, experience-level calibration, cross-functional
//! complexity, and role-level weighting. Capping, normalization and gap
//! detection are shared with the base scorer, so enhancements only ever move
//! the fit percentage, never the gap verdict.

pub mod cross_functional;
pub mod dual_track;
pub mod experience;
pub mod role_level;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::matrix::RequirementRow;
use crate::scoring::base::{self, finalize, raw_score, ScoreResult};
use crate::scoring::config::{EnhancementConfig, ScoringConfig};

use cross_functional::{
    assess_complexity, cross_functional_modifier, matches_proven_strength, Complexity,
};
use dual_track::{classify_requirement_type, dual_track_modifier, RoleTrack};
use experience::{categorize_skill, experience_level_modifier, SkillCategory};
use role_level::RoleLevel;

/// Caller-supplied profile parameters for an enhanced run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementOptions {
    pub target_role_type: RoleTrack,
    pub years_experience: u32,
    pub target_role_level: RoleLevel,
    pub proven_strengths: Vec<String>,
}

impl Default for EnhancementOptions {
    fn default() -> Self {
        Self {
            target_role_type: RoleTrack::Executive,
            years_experience: 20,
            target_role_level: RoleLevel::SeniorExecutive,
            proven_strengths: Vec::new(),
        }
    }
}

/// Everything the pipeline derived for one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowEnhancement {
    pub requirement_type: RoleTrack,
    pub dual_track_modifier: f64,
    pub skill_category: Option<SkillCategory>,
    pub experience_modifier: f64,
    pub complexity: Complexity,
    pub indicator_count: usize,
    pub matches_proven_strength: bool,
    pub cross_functional_modifier: f64,
    pub role_level_modifier: f64,
}

impl RowEnhancement {
    /// Product of the four modifiers.
    pub fn combined_modifier(&self) -> f64 {
        self.dual_track_modifier
            * self.experience_modifier
            * self.cross_functional_modifier
            * self.role_level_modifier
    }
}

pub fn enhance_row(
    row: &RequirementRow,
    options: &EnhancementOptions,
    config: &EnhancementConfig,
) -> RowEnhancement {
    let text = row.requirement.as_str();

    let requirement_type = classify_requirement_type(text, &config.dual_track);
    let dual_track =
        dual_track_modifier(requirement_type, options.target_role_type, &config.dual_track);

    let skill_category = categorize_skill(text, &config.experience);
    let experience = experience_level_modifier(
        skill_category,
        row.self_score,
        options.years_experience,
        &config.experience,
    );

    let (complexity, indicator_count) = assess_complexity(text, &config.cross_functional);
    let proven = matches_proven_strength(text, &options.proven_strengths);
    let cross_functional = cross_functional_modifier(
        complexity,
        proven,
        options.target_role_type == RoleTrack::Executive,
        &config.cross_functional,
    );

    let role_level = config
        .role_level
        .role_level_modifier(options.target_role_level, skill_category);

    RowEnhancement {
        requirement_type,
        dual_track_modifier: dual_track,
        skill_category,
        experience_modifier: experience,
        complexity,
        indicator_count,
        matches_proven_strength: proven,
        cross_functional_modifier: cross_functional,
        role_level_modifier: role_level,
    }
}

/// Scores `rows` with the enhancement modifiers, or with the base model when
/// `enable` is false.
pub fn score_enhanced(
    rows: &[RequirementRow],
    enable: bool,
    options: &EnhancementOptions,
    scoring: &ScoringConfig,
    enhancement: &EnhancementConfig,
) -> Result<ScoreResult, AppError> {
    if !enable {
        return base::score(rows, scoring);
    }

    tracing::debug!(
        rows = rows.len(),
        target_role_type = %options.target_role_type,
        target_role_level = %options.target_role_level,
        years_experience = options.years_experience,
        proven_strengths = options.proven_strengths.len(),
        "Scoring matrix (enhanced)"
    );

    let enhancements: Vec<RowEnhancement> = rows
        .iter()
        .map(|row| enhance_row(row, options, enhancement))
        .collect();
    let raw_scores = rows
        .iter()
        .zip(&enhancements)
        .map(|(row, e)| raw_score(row) * e.combined_modifier())
        .collect();

    finalize(rows, raw_scores, Some(enhancements), "enhanced", scoring)
}

//! Fit Scoring: pluggable scorer over a loaded skill matrix.
//!
//! `BaseFitScorer` runs the plain weighted model; `EnhancedFitScorer` layers
//! the four profile modifiers on top. `AppState` holds a `Box<dyn FitScorer>`
//! chosen at startup from the CLI flags.

use crate::errors::AppError;
use crate::models::matrix::RequirementRow;
use crate::scoring::base::{self, ScoreResult};
use crate::scoring::config::{EnhancementConfig, ScoringConfig};
use crate::scoring::enhancement::{score_enhanced, EnhancementOptions};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring models without touching the loader or the
/// report renderer.
pub trait FitScorer {
    fn score(&self, rows: &[RequirementRow]) -> Result<ScoreResult, AppError>;

    /// Label carried into `ScoreResult::scorer_backend`.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// BaseFitScorer
// ────────────────────────────────────────────────────────────────────────────

pub struct BaseFitScorer {
    pub scoring: ScoringConfig,
}

impl FitScorer for BaseFitScorer {
    fn score(&self, rows: &[RequirementRow]) -> Result<ScoreResult, AppError> {
        base::score(rows, &self.scoring)
    }

    fn backend(&self) -> &'static str {
        "base"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// EnhancedFitScorer
// ────────────────────────────────────────────────────────────────────────────

pub struct EnhancedFitScorer {
    pub scoring: ScoringConfig,
    pub enhancement: EnhancementConfig,
    pub options: EnhancementOptions,
}

impl FitScorer for EnhancedFitScorer {
    fn score(&self, rows: &[RequirementRow]) -> Result<ScoreResult, AppError> {
        score_enhanced(
            rows,
            true,
            &self.options,
            &self.scoring,
            &self.enhancement,
        )
    }

    fn backend(&self) -> &'static str {
        "enhanced"
    }
}

/// Picks the backend for a run.
pub fn build_fit_scorer(
    enable_enhancements: bool,
    scoring: ScoringConfig,
    options: EnhancementOptions,
) -> Box<dyn FitScorer> {
    if enable_enhancements {
        Box::new(EnhancedFitScorer {
            scoring,
            enhancement: EnhancementConfig::default(),
            options,
        })
    } else {
        Box::new(BaseFitScorer { scoring })
    }
}

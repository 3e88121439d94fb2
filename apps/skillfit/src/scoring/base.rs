//! Base scorer: per-row raw score, bonus capping, normalization to a fit ratio.
//!
//! Raw score = class_weight × (1 + emphasis_modifier) × self_score.
//! Bonus rows (Desirable/Implicit) are shrunk proportionally when their sum
//! exceeds core_weight × bonus_cap_fraction × max_self_score. Every row is then
//! divided by the theoretical per-row maximum, so each contributes at most 1.0.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::matrix::{Classification, RequirementRow};
use crate::scoring::config::ScoringConfig;
use crate::scoring::core_gap::{find_gaps, CoreGapFinding};
use crate::scoring::enhancement::RowEnhancement;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-row breakdown reported alongside the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowScore {
    pub requirement: String,
    pub classification: Classification,
    pub self_score: u8,
    pub class_weight: f64,
    pub emphasis_modifier: f64,
    /// After bonus capping.
    pub raw_score: f64,
    pub normalized_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhancement: Option<RowEnhancement>,
}

/// Result of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub core_gap_present: bool,
    pub core_gap_findings: Vec<CoreGapFinding>,
    /// Rounded to 2 decimals.
    pub actual_points: f64,
    /// Rounded to 2 decimals.
    pub max_points: f64,
    /// actual_points / max_points, unrounded. 0 when max_points is 0.
    pub pct_fit: f64,
    /// Scale factor applied to bonus rows, if the cap was hit.
    pub bonus_scale: Option<f64>,
    pub rows: Vec<RowScore>,
    pub scorer_backend: String, // "base" | "enhanced"
}

impl ScoreResult {
    /// pct_fit rounded to 2 decimals for display.
    pub fn pct_fit_display(&self) -> f64 {
        round2(self.pct_fit)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Primitives shared with the enhancement pipeline
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn raw_score(row: &RequirementRow) -> f64 {
    row.class_weight * (1.0 + row.emphasis_modifier) * f64::from(row.self_score)
}

/// Shrinks bonus-row scores in place when they exceed the cap.
///
/// Returns the scale factor when scaling happened, `None` otherwise. A zero
/// bonus sum is never scaled; a zero core weight caps bonus rows at zero.
pub fn apply_bonus_cap(
    rows: &[RequirementRow],
    raw_scores: &mut [f64],
    config: &ScoringConfig,
) -> Option<f64> {
    let core_weight: f64 = rows
        .iter()
        .filter(|r| r.classification.is_core())
        .map(|r| r.class_weight)
        .sum();
    let max_bonus = core_weight * config.bonus_cap_fraction * f64::from(config.max_self_score);

    let actual_bonus: f64 = rows
        .iter()
        .zip(raw_scores.iter())
        .filter(|(r, _)| !r.classification.is_core())
        .map(|(_, s)| *s)
        .sum();

    if actual_bonus <= max_bonus || actual_bonus <= 0.0 {
        return None;
    }

    let scale = max_bonus / actual_bonus;
    tracing::debug!(
        actual_bonus,
        max_bonus,
        scale,
        "Bonus rows exceed cap; scaling proportionally"
    );
    for (row, score) in rows.iter().zip(raw_scores.iter_mut()) {
        if !row.classification.is_core() {
            *score *= scale;
        }
    }
    Some(scale)
}

/// Assembles a `ScoreResult` from already-computed raw scores.
///
/// Capping, normalization and gap detection live here so the base and enhanced
/// paths cannot drift apart.
pub(crate) fn finalize(
    rows: &[RequirementRow],
    mut raw_scores: Vec<f64>,
    enhancements: Option<Vec<RowEnhancement>>,
    backend: &str,
    config: &ScoringConfig,
) -> Result<ScoreResult, AppError> {
    let theoretical_max = config.theoretical_max_per_row();
    if !theoretical_max.is_finite() || theoretical_max <= 0.0 {
        return Err(AppError::Computation(format!(
            "theoretical row maximum must be positive, got {theoretical_max}"
        )));
    }
    if let Some(pos) = raw_scores.iter().position(|s| !s.is_finite()) {
        return Err(AppError::Computation(format!(
            "non-finite raw score for requirement '{}'",
            rows[pos].requirement
        )));
    }

    let bonus_scale = apply_bonus_cap(rows, &mut raw_scores, config);

    let normalized: Vec<f64> = raw_scores.iter().map(|s| s / theoretical_max).collect();
    let actual_points = round2(normalized.iter().sum());
    let max_points = round2(rows.len() as f64);
    let pct_fit = if max_points > 0.0 {
        actual_points / max_points
    } else {
        0.0
    };

    let core_gap_findings = find_gaps(rows, config);

    let mut enhancements = enhancements.map(Vec::into_iter);
    let row_scores = rows
        .iter()
        .zip(raw_scores)
        .zip(normalized)
        .map(|((row, raw_score), normalized_score)| RowScore {
            requirement: row.requirement.clone(),
            classification: row.classification,
            self_score: row.self_score,
            class_weight: row.class_weight,
            emphasis_modifier: row.emphasis_modifier,
            raw_score,
            normalized_score,
            enhancement: enhancements.as_mut().and_then(|it| it.next()),
        })
        .collect();

    Ok(ScoreResult {
        core_gap_present: !core_gap_findings.is_empty(),
        core_gap_findings,
        actual_points,
        max_points,
        pct_fit,
        bonus_scale,
        rows: row_scores,
        scorer_backend: backend.to_string(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Scores `rows` with the base model.
pub fn score(rows: &[RequirementRow], config: &ScoringConfig) -> Result<ScoreResult, AppError> {
    tracing::debug!(rows = rows.len(), "Scoring matrix (base)");
    let raw_scores = rows.iter().map(raw_score).collect();
    finalize(rows, raw_scores, None, "base", config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::core_gap::Severity;

    /// Row with explicit derived columns, independent of keyword detection.
    fn row(
        requirement: &str,
        classification: Classification,
        class_weight: f64,
        emphasis_modifier: f64,
        self_score: u8,
    ) -> RequirementRow {
        RequirementRow {
            requirement: requirement.to_string(),
            classification,
            self_score,
            class_weight,
            emphasis_modifier,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_basic_scoring_no_gaps() {
        let rows = vec![
            row("Python programming", Classification::Essential, 3.0, 0.0, 4),
            row("SQL databases", Classification::Important, 2.0, 0.0, 3),
        ];
        let result = score(&rows, &ScoringConfig::default()).unwrap();
        assert!(!result.core_gap_present);
        assert!(result.core_gap_findings.is_empty());
        // 12/22.5 + 6/22.5 = 0.8
        assert!(approx(result.actual_points, 0.8));
        assert!(approx(result.max_points, 2.0));
        assert!(approx(result.pct_fit, 0.4));
        assert_eq!(result.scorer_backend, "base");
    }

    #[test]
    fn test_emphasis_scenario_from_loaded_rows() {
        let config = ScoringConfig::default();
        let rows = vec![
            RequirementRow::new("Python expert", Classification::Essential, 4, &config),
            RequirementRow::new("SQL basics", Classification::Important, 3, &config),
        ];
        assert!(approx(rows[0].emphasis_modifier, 0.5));
        assert!(approx(rows[1].emphasis_modifier, -0.5));

        let result = score(&rows, &config).unwrap();
        assert!(approx(result.rows[0].raw_score, 18.0));
        assert!(approx(result.rows[1].raw_score, 3.0));
        assert!(approx(result.actual_points, 0.93));
        assert!(!result.core_gap_present);
    }

    #[test]
    fn test_empty_table() {
        let result = score(&[], &ScoringConfig::default()).unwrap();
        assert_eq!(result.actual_points, 0.0);
        assert_eq!(result.max_points, 0.0);
        assert_eq!(result.pct_fit, 0.0);
        assert!(!result.core_gap_present);
        assert!(result.core_gap_findings.is_empty());
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_bonus_capping_scales_bonus_rows() {
        let rows = vec![
            row("Python", Classification::Essential, 3.0, 0.0, 5),
            row("SQL", Classification::Important, 2.0, 0.0, 5),
            row("Bonus1", Classification::Desirable, 1.0, 0.0, 5),
            row("Bonus2", Classification::Desirable, 1.0, 0.0, 5),
            row("Bonus3", Classification::Implicit, 0.5, 0.0, 5),
        ];
        let result = score(&rows, &ScoringConfig::default()).unwrap();
        // core weight 5.0 → cap 6.25; bonus sum 12.5 → scale 0.5
        assert!(approx(result.bonus_scale.unwrap(), 0.5));
        assert!(approx(result.rows[2].raw_score, 2.5));
        assert!(approx(result.rows[4].raw_score, 1.25));
        // core rows untouched
        assert!(approx(result.rows[0].raw_score, 15.0));
        // (15 + 10 + 6.25) / 22.5 = 1.388…
        assert!(approx(result.actual_points, 1.39));
        assert!(result.actual_points < 2.0);
    }

    #[test]
    fn test_no_bonus_capping_when_under_limit() {
        let rows = vec![
            row("Python", Classification::Essential, 3.0, 0.0, 3),
            row("SQL", Classification::Important, 2.0, 0.0, 3),
            row("Small bonus", Classification::Desirable, 1.0, 0.0, 1),
        ];
        let result = score(&rows, &ScoringConfig::default()).unwrap();
        assert!(result.bonus_scale.is_none());
        assert!(approx(result.actual_points, round2(16.0 / 22.5)));
    }

    #[test]
    fn test_bonus_cap_never_increases_fit() {
        let config = ScoringConfig::default();
        let rows = vec![
            row("Python", Classification::Essential, 3.0, 0.0, 2),
            row("Kafka", Classification::Desirable, 1.0, 0.5, 5),
            row("Flink", Classification::Desirable, 1.0, 0.5, 5),
            row("Git", Classification::Implicit, 0.5, 0.0, 5),
        ];
        let capped = score(&rows, &config).unwrap();
        let uncapped_points: f64 = rows.iter().map(raw_score).sum::<f64>() / 22.5;
        let uncapped_pct = round2(uncapped_points) / rows.len() as f64;
        assert!(capped.bonus_scale.is_some());
        assert!(capped.pct_fit <= uncapped_pct);
    }

    #[test]
    fn test_bonus_cap_exactly_at_limit_is_untouched() {
        // core 3.0 → cap 3.75; bonus 0.5 × 1.5 × 5 = 3.75
        let rows = vec![
            row("Python", Classification::Essential, 3.0, 0.0, 4),
            row("Docs", Classification::Implicit, 0.5, 0.5, 5),
        ];
        let mut raw: Vec<f64> = rows.iter().map(raw_score).collect();
        let before = raw.clone();
        assert!(apply_bonus_cap(&rows, &mut raw, &ScoringConfig::default()).is_none());
        assert_eq!(raw, before);
    }

    #[test]
    fn test_zero_bonus_is_not_scaled() {
        let rows = vec![
            row("Python", Classification::Essential, 3.0, 0.0, 5),
            row("Bonus", Classification::Desirable, 1.0, 0.0, 0),
        ];
        let result = score(&rows, &ScoringConfig::default()).unwrap();
        assert!(result.bonus_scale.is_none());
        assert!(result.actual_points > 0.0);
        assert!(!result.core_gap_present);
    }

    #[test]
    fn test_zero_core_weight_caps_bonus_to_zero() {
        let rows = vec![row("Bonus", Classification::Desirable, 1.0, 0.0, 4)];
        let result = score(&rows, &ScoringConfig::default()).unwrap();
        assert_eq!(result.bonus_scale, Some(0.0));
        assert_eq!(result.actual_points, 0.0);
        assert_eq!(result.pct_fit, 0.0);
    }

    #[test]
    fn test_zero_scores_flag_gaps_and_score_nothing() {
        let rows = vec![
            row("Python", Classification::Essential, 3.0, 0.0, 0),
            row("SQL", Classification::Important, 2.0, 0.0, 0),
        ];
        let result = score(&rows, &ScoringConfig::default()).unwrap();
        assert!(result.core_gap_present);
        assert_eq!(result.core_gap_findings.len(), 2);
        assert_eq!(result.actual_points, 0.0);
        assert_eq!(result.pct_fit, 0.0);
    }

    #[test]
    fn test_perfect_single_row_is_full_fit() {
        let rows = vec![row("Python", Classification::Essential, 3.0, 0.5, 5)];
        let result = score(&rows, &ScoringConfig::default()).unwrap();
        assert!(approx(result.actual_points, 1.0));
        assert!(approx(result.max_points, 1.0));
        assert!(approx(result.pct_fit, 1.0));
    }

    #[test]
    fn test_mixed_classification_gaps() {
        let rows = vec![
            row("Docker", Classification::Important, 2.0, 0.0, 0),
            row("Rust", Classification::Essential, 3.0, 0.0, 1),
            row("Kafka", Classification::Desirable, 1.0, 0.0, 0),
        ];
        let result = score(&rows, &ScoringConfig::default()).unwrap();
        assert_eq!(result.core_gap_findings.len(), 2);
        assert_eq!(result.core_gap_findings[0].classification, Classification::Essential);
        assert_eq!(result.core_gap_findings[0].severity, Severity::High);
        assert_eq!(result.core_gap_findings[1].classification, Classification::Important);
    }

    #[test]
    fn test_pct_fit_display_rounds() {
        let rows = vec![
            row("A", Classification::Essential, 3.0, 0.0, 4),
            row("B", Classification::Essential, 3.0, 0.0, 4),
            row("C", Classification::Essential, 3.0, 0.0, 3),
        ];
        let result = score(&rows, &ScoringConfig::default()).unwrap();
        // (12 + 12 + 9) / 22.5 = 1.4666… → 1.47; 1.47 / 3 = 0.49
        assert!(approx(result.actual_points, 1.47));
        assert!(approx(result.pct_fit_display(), 0.49));
    }

    #[test]
    fn test_non_finite_weight_is_computation_error() {
        let rows = vec![row("Broken", Classification::Essential, f64::NAN, 0.0, 3)];
        let err = score(&rows, &ScoringConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::Computation(_)));
    }

    #[test]
    fn test_degenerate_config_is_computation_error() {
        let mut config = ScoringConfig::default();
        config.max_self_score = 0;
        let rows = vec![row("Python", Classification::Essential, 3.0, 0.0, 0)];
        let err = score(&rows, &config).unwrap_err();
        assert!(matches!(err, AppError::Computation(_)));
    }

    #[test]
    fn test_input_rows_are_not_mutated() {
        let rows = vec![
            row("Python", Classification::Essential, 3.0, 0.0, 5),
            row("Bonus", Classification::Desirable, 1.0, 0.0, 5),
            row("Bonus2", Classification::Desirable, 1.0, 0.0, 5),
        ];
        let before = rows.clone();
        let _ = score(&rows, &ScoringConfig::default()).unwrap();
        assert_eq!(rows, before);
    }
}

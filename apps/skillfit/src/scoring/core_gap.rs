use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::matrix::{Classification, RequirementRow};
use crate::scoring::config::ScoringConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// A must-have or important requirement scored at or below its gap threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreGapFinding {
    pub name: String,
    pub classification: Classification,
    pub self_score: u8,
    pub threshold: u8,
    pub severity: Severity,
}

impl CoreGapFinding {
    /// Validates the finding's fields and derives its severity.
    pub fn new(
        name: &str,
        classification: Classification,
        self_score: u8,
        threshold: u8,
        max_self_score: u8,
    ) -> Result<Self, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput(
                "Skill name must be a non-empty string".to_string(),
            ));
        }
        if self_score > max_self_score {
            return Err(AppError::InvalidInput(format!(
                "Self score must be an integer between 0 and {max_self_score}"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            classification,
            self_score,
            threshold,
            severity: severity_of(classification, self_score),
        })
    }
}

/// Essential ≤1 → High, Essential 2 → Medium, Important 0 → Medium, everything else Low.
pub fn severity_of(classification: Classification, self_score: u8) -> Severity {
    match (classification, self_score) {
        (Classification::Essential, 0 | 1) => Severity::High,
        (Classification::Essential, 2) => Severity::Medium,
        (Classification::Important, 0) => Severity::Medium,
        _ => Severity::Low,
    }
}

/// Finds every core gap in `rows`.
///
/// Only Essential and Important rows qualify. Output is sorted by
/// (classification label, self_score, name); the label compares as a string,
/// which happens to put Essential before Important.
pub fn find_gaps(rows: &[RequirementRow], config: &ScoringConfig) -> Vec<CoreGapFinding> {
    let mut findings: Vec<CoreGapFinding> = rows
        .iter()
        .filter(|row| row.classification.is_core())
        .filter_map(|row| {
            let threshold = config.gap_threshold_of(row.classification);
            if row.self_score > threshold {
                return None;
            }
            match CoreGapFinding::new(
                &row.requirement,
                row.classification,
                row.self_score,
                threshold,
                config.max_self_score,
            ) {
                Ok(finding) => Some(finding),
                Err(e) => {
                    tracing::warn!(
                        requirement = %row.requirement,
                        classification = %row.classification,
                        "Skipping core gap row with invalid data: {e}"
                    );
                    None
                }
            }
        })
        .collect();

    findings.sort_by(|a, b| {
        a.classification
            .as_str()
            .cmp(b.classification.as_str())
            .then(a.self_score.cmp(&b.self_score))
            .then_with(|| a.name.cmp(&b.name))
    });
    findings
}

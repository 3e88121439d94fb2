use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scoring::config::ScoringConfig;

/// Priority tier of a requirement. Drives weight and gap threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Essential,
    Important,
    Desirable,
    Implicit,
}

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::Essential,
        Classification::Important,
        Classification::Desirable,
        Classification::Implicit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Essential => "Essential",
            Classification::Important => "Important",
            Classification::Desirable => "Desirable",
            Classification::Implicit => "Implicit",
        }
    }

    /// Essential and Important rows are core; the other two tiers are bonus rows.
    pub fn is_core(&self) -> bool {
        matches!(self, Classification::Essential | Classification::Important)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = AppError;

    /// Exact label match after trimming. Unknown labels are rejected, never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Classification::ALL
            .into_iter()
            .find(|c| c.as_str() == label)
            .ok_or_else(|| AppError::InvalidClassification {
                values: vec![label.to_string()],
            })
    }
}

/// One row of the requirement matrix, with its derived columns filled in.
///
/// Read-only to the engine: scoring never mutates a row, it reports derived
/// values in `ScoreResult::rows` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRow {
    pub requirement: String,
    pub classification: Classification,
    /// 0..=max_self_score
    pub self_score: u8,
    pub class_weight: f64,
    /// +0.5, 0.0 or -0.5 with the default config
    pub emphasis_modifier: f64,
}

impl RequirementRow {
    /// Builds a row and derives `class_weight` and `emphasis_modifier` from `config`.
    pub fn new(
        requirement: impl Into<String>,
        classification: Classification,
        self_score: u8,
        config: &ScoringConfig,
    ) -> Self {
        let requirement = requirement.into();
        let emphasis_modifier = config.emphasis_of(&requirement);
        Self {
            class_weight: config.weight_of(classification),
            emphasis_modifier,
            self_score: self_score.min(config.max_self_score),
            classification,
            requirement,
        }
    }
}

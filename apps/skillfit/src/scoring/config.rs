use serde::{Deserialize, Serialize};

use crate::models::matrix::Classification;
use crate::scoring::classification::ClassificationTable;
use crate::scoring::emphasis::{emphasis_of, EmphasisConfig};
use crate::scoring::enhancement::cross_functional::CrossFunctionalConfig;
use crate::scoring::enhancement::dual_track::DualTrackConfig;
use crate::scoring::enhancement::experience::ExperienceLevelConfig;
use crate::scoring::enhancement::role_level::RoleLevelConfig;

/// Base scoring configuration. Passed by reference into every entry point;
/// nothing in the engine reads a process-wide table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub classification: ClassificationTable,
    pub emphasis: EmphasisConfig,
    pub max_self_score: u8,
    /// Bonus rows may contribute at most this fraction of core weight × max self-score.
    pub bonus_cap_fraction: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            classification: ClassificationTable::default(),
            emphasis: EmphasisConfig::default(),
            max_self_score: 5,
            bonus_cap_fraction: 0.25,
        }
    }
}

impl ScoringConfig {
    pub fn weight_of(&self, classification: Classification) -> f64 {
        self.classification.weight_of(classification)
    }

    pub fn gap_threshold_of(&self, classification: Classification) -> u8 {
        self.classification.gap_threshold_of(classification)
    }

    pub fn emphasis_of(&self, text: &str) -> f64 {
        emphasis_of(text, &self.emphasis)
    }

    /// Essential weight × (1 + high emphasis) × max self-score. 22.5 by default.
    pub fn theoretical_max_per_row(&self) -> f64 {
        self.classification.essential.weight
            * (1.0 + self.emphasis.high_modifier)
            * f64::from(self.max_self_score)
    }
}

/// Tables for the four enhancement modifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancementConfig {
    pub dual_track: DualTrackConfig,
    pub experience: ExperienceLevelConfig,
    pub cross_functional: CrossFunctionalConfig,
    pub role_level: RoleLevelConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theoretical_max_is_22_5() {
        let c = ScoringConfig::default();
        assert!((c.theoretical_max_per_row() - 22.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defaults() {
        let c = ScoringConfig::default();
        assert_eq!(c.max_self_score, 5);
        assert!((c.bonus_cap_fraction - 0.25).abs() < f64::EPSILON);
        assert_eq!(c.weight_of(Classification::Implicit), 0.5);
        assert_eq!(c.gap_threshold_of(Classification::Important), 1);
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let c = EnhancementConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let back: EnhancementConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dual_track.executive_indicators, c.dual_track.executive_indicators);
        assert_eq!(back.experience.skill_categories, c.experience.skill_categories);
        assert_eq!(back.experience.senior_threshold_years, 15);
        assert!((back.role_level.c_suite.strategic_thinking - 1.4).abs() < 1e-12);
        assert!((back.cross_functional.medium_complexity_multiplier - 1.15).abs() < 1e-12);
    }
}

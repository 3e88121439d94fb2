use serde::{Deserialize, Serialize};

use crate::models::matrix::Classification;

/// Weight and gap threshold for one classification tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierSpec {
    pub weight: f64,
    /// A core row scoring at or below this is a gap. Desirable/Implicit rows never
    /// produce gaps regardless of threshold.
    pub gap_threshold: u8,
}

/// Fixed classification table: Essential 3.0/2, Important 2.0/1, Desirable 1.0/0, Implicit 0.5/0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationTable {
    pub essential: TierSpec,
    pub important: TierSpec,
    pub desirable: TierSpec,
    pub implicit: TierSpec,
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self {
            essential: TierSpec {
                weight: 3.0,
                gap_threshold: 2,
            },
            important: TierSpec {
                weight: 2.0,
                gap_threshold: 1,
            },
            desirable: TierSpec {
                weight: 1.0,
                gap_threshold: 0,
            },
            implicit: TierSpec {
                weight: 0.5,
                gap_threshold: 0,
            },
        }
    }
}

impl ClassificationTable {
    pub fn spec_of(&self, classification: Classification) -> TierSpec {
        match classification {
            Classification::Essential => self.essential,
            Classification::Important => self.important,
            Classification::Desirable => self.desirable,
            Classification::Implicit => self.implicit,
        }
    }

    pub fn weight_of(&self, classification: Classification) -> f64 {
        self.spec_of(classification).weight
    }

    pub fn gap_threshold_of(&self, classification: Classification) -> u8 {
        self.spec_of(classification).gap_threshold
    }
}

use super::domain::{PackageRecord, PredictionResult};
use super::policy::{predicts_pass, ACCURACY_TARGET};
use serde::{Deserialize, Serialize};

/// Agreement between predicted pass/fail and the recorded verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub matches: usize,
    pub total: usize,
    pub accuracy: f32,
}

impl AccuracyReport {
    pub(crate) fn from_pairs(pairs: &[(PackageRecord, PredictionResult)]) -> Self {
        let matches = pairs
            .iter()
            .filter(|(record, prediction)| record.is_pass() == predicts_pass(prediction.quality_score))
            .count();
        let total = pairs.len();
        let accuracy = if total == 0 {
            0.0
        } else {
            matches as f32 / total as f32
        };

        Self {
            matches,
            total,
            accuracy,
        }
    }

    pub fn meets_target(&self) -> bool {
        self.accuracy > ACCURACY_TARGET
    }

    pub fn percent(&self) -> u32 {
        (self.accuracy * 100.0) as u32
    }
}

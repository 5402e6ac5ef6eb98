use super::domain::{PackageRecord, PredictionResult, PredictionSource};
use super::policy::recommend;
use tracing::debug;

pub(crate) const RULE_CONFIDENCE: f32 = 0.75;

const BONUS_EMPLOYEES: [&str; 3] = ["EMP008", "EMP001", "EMP018"];

/// Score components before clamping, kept apart for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RuleSignals {
    pub base_score: f32,
    pub comment_adjustment: f32,
    pub employee_bonus: f32,
}

impl RuleSignals {
    pub(crate) fn from_record(record: &PackageRecord) -> Self {
        let base_score = if record.result_label.contains("Pass") {
            70.0
        } else if record.result_label.contains("Error") {
            30.0
        } else {
            50.0
        };

        // "Improved" is checked first; a comment mentioning both only earns the bonus.
        let comment_adjustment = if record.comments.contains("Improved") {
            15.0
        } else if record.comments.contains("missing") {
            -20.0
        } else {
            0.0
        };

        let employee_bonus = if BONUS_EMPLOYEES.contains(&record.employee_id.as_str()) {
            5.0
        } else {
            0.0
        };

        Self {
            base_score,
            comment_adjustment,
            employee_bonus,
        }
    }

    pub(crate) fn quality_score(&self) -> f32 {
        (self.base_score + self.comment_adjustment + self.employee_bonus).clamp(0.0, 100.0)
    }
}

pub(crate) fn predict(record: &PackageRecord) -> PredictionResult {
    let signals = RuleSignals::from_record(record);
    let quality_score = signals.quality_score();

    debug!(
        package_id = %record.package_id,
        base = signals.base_score,
        adjustment = signals.comment_adjustment,
        bonus = signals.employee_bonus,
        quality_score,
        "rule-based prediction"
    );

    PredictionResult {
        quality_score,
        predicted_error_count: if quality_score < 50.0 { 1 } else { 0 },
        confidence: RULE_CONFIDENCE,
        recommendation: recommend(quality_score),
        source: PredictionSource::Rules,
    }
}

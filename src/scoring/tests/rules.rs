use super::common::*;
use crate::scoring::rules::{RuleSignals, RULE_CONFIDENCE};
use crate::scoring::{PredictionSource, Recommendation, ScoringEngine};

#[test]
fn minor_error_with_bonus_employee_is_low_quality() {
    let engine = ScoringEngine::new();
    let record = package("minor", "EMP008", "40 Minor Error", "");

    let result = engine.predict_quality(&record);

    assert_eq!(result.quality_score, 35.0);
    assert_eq!(result.predicted_error_count, 1);
    assert_eq!(result.recommendation, Recommendation::Low);
    assert_eq!(
        result.recommendation_text(),
        "low quality, requires immediate attention"
    );
    assert_eq!(result.source, PredictionSource::Rules);
}

#[test]
fn improved_pass_from_bonus_employee_is_excellent() {
    let engine = ScoringEngine::new();
    let record = package("improved", "EMP018", "85 Pass", "Improved speed");

    let result = engine.predict_quality(&record);

    assert_eq!(result.quality_score, 90.0);
    assert_eq!(result.predicted_error_count, 0);
    assert_eq!(
        result.recommendation_text(),
        "excellent quality, continue process"
    );
}

#[test]
fn improved_wins_over_missing() {
    let record = package("both", "EMP010", "63 Pass", "Improved packing but missing label");

    let signals = RuleSignals::from_record(&record);

    assert_eq!(signals.comment_adjustment, 15.0);
    assert_eq!(signals.quality_score(), 85.0);
}

#[test]
fn missing_item_penalises_score() {
    let record = package("missing", "EMP012", "20 Minor Error", "missing one snack item");

    let result = ScoringEngine::new().predict_quality(&record);

    assert_eq!(result.quality_score, 10.0);
    assert_eq!(result.predicted_error_count, 1);
}

#[test]
fn unknown_verdict_starts_from_neutral_base() {
    let record = package("unknown", "EMP010", "55 Pending", "");

    let result = ScoringEngine::new().predict_quality(&record);

    assert_eq!(result.quality_score, 50.0);
    assert_eq!(result.predicted_error_count, 0);
    assert_eq!(result.recommendation, Recommendation::Acceptable);
}

#[test]
fn pass_takes_precedence_over_error_in_label() {
    let record = package("mixed", "EMP010", "50 Pass after Error", "");

    let signals = RuleSignals::from_record(&record);

    assert_eq!(signals.base_score, 70.0);
}

#[test]
fn bonus_requires_exact_employee_match() {
    for employee in ["EMP0080", "emp008", "EMP08", " EMP008"] {
        let signals = RuleSignals::from_record(&package("bonus", employee, "70 Pass", ""));
        assert_eq!(signals.employee_bonus, 0.0, "{employee} should not earn a bonus");
    }
    for employee in ["EMP008", "EMP001", "EMP018"] {
        let signals = RuleSignals::from_record(&package("bonus", employee, "70 Pass", ""));
        assert_eq!(signals.employee_bonus, 5.0, "{employee} should earn a bonus");
    }
}

#[test]
fn matching_is_case_sensitive() {
    let record = package("case", "EMP010", "70 pass", "improved");

    let signals = RuleSignals::from_record(&record);

    assert_eq!(signals.base_score, 50.0);
    assert_eq!(signals.comment_adjustment, 0.0);
}

#[test]
fn rule_scores_stay_within_bounds() {
    let engine = ScoringEngine::new();
    let labels = ["85 Pass", "40 Minor Error", "", "Error Pass", "??"];
    let comments = ["", "Improved", "missing", "Improved missing"];
    let employees = ["EMP001", "EMP999", ""];

    for label in labels {
        for comment in comments {
            for employee in employees {
                let result = engine.predict_quality(&package("bounds", employee, label, comment));
                assert!((0.0..=100.0).contains(&result.quality_score));
                assert!((0.0..=1.0).contains(&result.confidence));
                assert_eq!(result.confidence, RULE_CONFIDENCE);
            }
        }
    }
}

#[test]
fn rule_predictions_are_deterministic() {
    let engine = ScoringEngine::new();
    let record = package("repeat", "EMP001", "58 Pass", "");

    let first = engine.predict_quality(&record);
    let second = engine.predict_quality(&record);

    assert_eq!(first, second);
    assert_eq!(first.quality_score.to_bits(), second.quality_score.to_bits());
}

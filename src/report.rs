use crate::scoring::{AccuracyReport, EngineInfo, PackageRecord, PredictionResult};
use serde::Serialize;
use std::fmt::Write;

/// Serializable view of a scored batch for `--json` output.
#[derive(Debug, Serialize)]
pub struct BatchReport<'a> {
    pub predictions: Vec<ScoredPackage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<AccuracyReport>,
}

#[derive(Debug, Serialize)]
pub struct ScoredPackage<'a> {
    pub record: &'a PackageRecord,
    pub prediction: &'a PredictionResult,
    pub recommendation_text: &'static str,
}

impl<'a> BatchReport<'a> {
    pub fn new(pairs: &'a [(PackageRecord, PredictionResult)], accuracy: Option<AccuracyReport>) -> Self {
        let predictions = pairs
            .iter()
            .map(|(record, prediction)| ScoredPackage {
                record,
                prediction,
                recommendation_text: prediction.recommendation_text(),
            })
            .collect();
        Self {
            predictions,
            accuracy,
        }
    }
}

pub fn render_prediction(record: &PackageRecord, prediction: &PredictionResult) -> String {
    let mut out = String::new();
    let verdict = if prediction.quality_score >= 50.0 { "PASS" } else { "FAIL" };
    let _ = writeln!(
        out,
        "{}  {:>3}% {}  [{}]",
        record.package_id,
        prediction.quality_score as i32,
        verdict,
        prediction.source.label()
    );
    let _ = writeln!(
        out,
        "  employee {} | model {} | route {}",
        record.employee_id, record.model_code, record.route_code
    );
    let duration = record
        .handling_duration()
        .map(|elapsed| format!(" ({}s)", elapsed.num_seconds()))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "  handled {} - {}{}",
        record.start_time, record.end_time, duration
    );
    let _ = writeln!(
        out,
        "  predicted errors {} | confidence {}% | recorded result {}",
        prediction.predicted_error_count,
        (prediction.confidence * 100.0) as i32,
        record.result_label
    );
    let _ = writeln!(out, "  {}", prediction.recommendation_text());
    if !record.comments.is_empty() {
        let _ = writeln!(out, "  comments: {}", record.comments);
    }
    out
}

pub fn render_batch(pairs: &[(PackageRecord, PredictionResult)], accuracy: Option<&AccuracyReport>) -> String {
    let mut out = String::new();
    for (record, prediction) in pairs {
        out.push_str(&render_prediction(record, prediction));
        out.push('\n');
    }
    if let Some(report) = accuracy {
        let marker = if report.meets_target() { "on target" } else { "below target" };
        let _ = writeln!(
            out,
            "Accuracy: {}% ({}/{} correct, {})",
            report.percent(),
            report.matches,
            report.total,
            marker
        );
    }
    out
}

pub fn render_info(info: &EngineInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Package quality scoring engine");
    let _ = writeln!(out, "  mode: {}", info.mode.label());
    let _ = writeln!(out, "  reference records: {}", info.reference_records);
    let _ = writeln!(out, "  features:");
    for name in &info.features {
        let _ = writeln!(out, "    - {name}");
    }
    out
}

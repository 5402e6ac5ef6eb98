use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Single package-handling record as captured on the packing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub package_id: String,
    pub employee_id: String,
    pub model_code: String,
    pub route_code: String,
    pub start_time: String,
    pub end_time: String,
    pub result_label: String,
    pub count_field: String,
    pub status_flag: String,
    #[serde(default)]
    pub comments: String,
}

impl PackageRecord {
    /// Ground-truth class used by accuracy evaluation.
    pub fn is_pass(&self) -> bool {
        self.result_label.contains("Pass")
    }

    /// Elapsed handling time, when both timestamps parse.
    pub fn handling_duration(&self) -> Option<Duration> {
        let start = NaiveDateTime::parse_from_str(self.start_time.trim(), TIMESTAMP_FORMAT).ok()?;
        let end = NaiveDateTime::parse_from_str(self.end_time.trim(), TIMESTAMP_FORMAT).ok()?;
        Some(end - start)
    }
}

/// Which path produced a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    Model,
    Rules,
}

impl PredictionSource {
    pub fn label(&self) -> &'static str {
        match self {
            PredictionSource::Model => "model",
            PredictionSource::Rules => "rules",
        }
    }
}

/// Tiered advice attached to every prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Excellent,
    Good,
    Acceptable,
    Low,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Excellent => "excellent quality, continue process",
            Recommendation::Good => "good quality, monitor",
            Recommendation::Acceptable => "acceptable quality, review process",
            Recommendation::Low => "low quality, requires immediate attention",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Quality prediction for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub quality_score: f32,
    pub predicted_error_count: u32,
    pub confidence: f32,
    pub recommendation: Recommendation,
    pub source: PredictionSource,
}

impl PredictionResult {
    pub fn recommendation_text(&self) -> &'static str {
        self.recommendation.message()
    }
}

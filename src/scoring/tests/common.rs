use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::scoring::{FeatureVector, InferenceError, PackageRecord, QualityModel};

pub(super) fn package(suffix: &str, employee_id: &str, result_label: &str, comments: &str) -> PackageRecord {
    PackageRecord {
        package_id: format!("PKG-{suffix}"),
        employee_id: employee_id.to_string(),
        model_code: "LX755".to_string(),
        route_code: "SPEC_A01".to_string(),
        start_time: "2025-10-13 09:03:15".to_string(),
        end_time: "2025-10-13 09:03:55".to_string(),
        result_label: result_label.to_string(),
        count_field: "15".to_string(),
        status_flag: "No".to_string(),
        comments: comments.to_string(),
    }
}

/// Returns the same output for every call.
pub(super) struct ScriptedModel {
    pub(super) output: Vec<f32>,
}

impl QualityModel for ScriptedModel {
    fn forward(&self, _features: &FeatureVector) -> Result<Vec<f32>, InferenceError> {
        Ok(self.output.clone())
    }
}

/// Fails every call and counts attempts.
#[derive(Default)]
pub(super) struct FailingModel {
    pub(super) calls: Arc<AtomicUsize>,
}

impl QualityModel for FailingModel {
    fn forward(&self, _features: &FeatureVector) -> Result<Vec<f32>, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(InferenceError::NonFinite(0))
    }
}

/// Linear artifact whose score output echoes the numeric result token.
pub(super) fn echo_result_artifact() -> String {
    serde_json::json!({
        "weights": [
            [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        ],
        "bias": [0.0, 2.0, 0.9]
    })
    .to_string()
}

pub(super) fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

//! Package quality prediction: an optional learned model backed by a
//! deterministic rule-based predictor, plus self-evaluation against the
//! embedded reference dataset.

mod dataset;
mod domain;
mod evaluation;
mod features;
mod import;
mod model;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use dataset::reference_dataset;
pub use domain::{PackageRecord, PredictionResult, PredictionSource, Recommendation};
pub use evaluation::AccuracyReport;
pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use import::{ImportError, PackageCsvImporter};
pub use model::{
    BundledAssets, InferenceError, LinearQualityModel, ModelLoadError, QualityModel,
    DEFAULT_MODEL_FILE, OUTPUT_WIDTH,
};
pub use policy::{recommend, ACCURACY_TARGET, PASS_THRESHOLD};

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Snapshot of the engine's configuration for status displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineInfo {
    pub mode: PredictionSource,
    pub reference_records: usize,
    pub features: Vec<&'static str>,
}

/// Owns the optional model handle and answers quality predictions.
///
/// Prediction never fails: without a model, or when the model errors on a
/// call, the rule-based predictor answers instead.
pub struct ScoringEngine {
    model: Option<Box<dyn QualityModel>>,
    assets: Option<BundledAssets>,
}

impl ScoringEngine {
    /// Rule-only engine with no bundled assets to fall back on.
    pub fn new() -> Self {
        Self {
            model: None,
            assets: None,
        }
    }

    pub fn with_assets(assets: BundledAssets) -> Self {
        Self {
            model: None,
            assets: Some(assets),
        }
    }

    pub fn with_model(model: Box<dyn QualityModel>) -> Self {
        Self {
            model: Some(model),
            assets: None,
        }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn mode(&self) -> PredictionSource {
        if self.has_model() {
            PredictionSource::Model
        } else {
            PredictionSource::Rules
        }
    }

    /// Loads the model artifact at `path`, materialising it from the bundled
    /// assets first if needed. Any failure leaves the engine in rule-only mode.
    pub fn load_model(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_load_model(path) {
            Ok(()) => true,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "model unavailable, using rule-based predictions");
                false
            }
        }
    }

    pub fn try_load_model(&mut self, path: impl AsRef<Path>) -> Result<(), ModelLoadError> {
        let path = path.as_ref();
        self.model = None;

        let model = model::load_from_path(path, self.assets.as_ref())?;
        info!(path = %path.display(), outputs = model.outputs(), "quality model loaded");
        self.model = Some(Box::new(model));
        Ok(())
    }

    pub fn predict_quality(&self, record: &PackageRecord) -> PredictionResult {
        if let Some(model) = &self.model {
            match predict_with_model(model.as_ref(), record) {
                Ok(result) => return result,
                Err(err) => {
                    warn!(package_id = %record.package_id, error = %err, "model inference failed, using rules");
                }
            }
        }

        rules::predict(record)
    }

    /// Predicts every reference record in declared order.
    pub fn run_all_tests(&self) -> Vec<(PackageRecord, PredictionResult)> {
        self.score_batch(reference_dataset())
    }

    pub fn model_accuracy(&self) -> f32 {
        let report = self.evaluate_accuracy(reference_dataset());
        report.accuracy
    }

    pub fn score_batch(&self, records: &[PackageRecord]) -> Vec<(PackageRecord, PredictionResult)> {
        debug!(records = records.len(), mode = self.mode().label(), "scoring batch");
        records
            .iter()
            .map(|record| (record.clone(), self.predict_quality(record)))
            .collect()
    }

    pub fn evaluate_accuracy(&self, records: &[PackageRecord]) -> AccuracyReport {
        let report = AccuracyReport::from_pairs(&self.score_batch(records));
        info!(
            matches = report.matches,
            total = report.total,
            accuracy = report.accuracy,
            "accuracy evaluated"
        );
        report
    }

    pub fn describe(&self) -> EngineInfo {
        EngineInfo {
            mode: self.mode(),
            reference_records: reference_dataset().len(),
            features: FEATURE_NAMES.to_vec(),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn predict_with_model(
    model: &dyn QualityModel,
    record: &PackageRecord,
) -> Result<PredictionResult, InferenceError> {
    let features = FeatureVector::from_record(record);
    let output = model.forward(&features)?;
    let &[quality_score, error_count, confidence, ..] = output.as_slice() else {
        return Err(InferenceError::ShortOutput(output.len()));
    };

    // Model output is trusted as-is; only the rule path clamps.
    Ok(PredictionResult {
        quality_score,
        predicted_error_count: error_count as u32,
        confidence,
        recommendation: recommend(quality_score),
        source: PredictionSource::Model,
    })
}

//! Learned-model path: the `QualityModel` seam, artifact materialisation, and
//! the linear head the bundled artifact describes.

use super::features::{FeatureVector, FEATURE_COUNT};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL_FILE: &str = "packaging_quality_model.json";

/// Number of leading outputs read positionally: score, error count, confidence.
pub const OUTPUT_WIDTH: usize = 3;

/// A loaded predictive model. Implementations must be safe to share across threads.
pub trait QualityModel: Send + Sync {
    fn forward(&self, features: &FeatureVector) -> Result<Vec<f32>, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("model artifact not found at {}", .0.display())]
    Missing(PathBuf),
    #[error("no bundled model asset at {}", .0.display())]
    AssetMissing(PathBuf),
    #[error("failed to materialise model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed model artifact: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("model artifact has invalid shape: {0}")]
    Shape(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("expected {expected} features, got {actual}")]
    FeatureWidth { expected: usize, actual: usize },
    #[error("model produced a non-finite output at position {0}")]
    NonFinite(usize),
    #[error("model produced {0} outputs, need at least {}", OUTPUT_WIDTH)]
    ShortOutput(usize),
}

/// Read-only directory of assets shipped with the application.
#[derive(Debug, Clone)]
pub struct BundledAssets {
    root: PathBuf,
}

impl BundledAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

/// Ensures the artifact exists at `path`, copying the same-named bundled asset
/// byte for byte when it does not.
pub(crate) fn materialise(path: &Path, assets: Option<&BundledAssets>) -> Result<(), ModelLoadError> {
    if path.exists() {
        return Ok(());
    }

    let (Some(assets), Some(file_name)) = (assets, path.file_name().and_then(|name| name.to_str()))
    else {
        return Err(ModelLoadError::Missing(path.to_path_buf()));
    };

    let source = assets.path_for(file_name);
    if !source.is_file() {
        return Err(ModelLoadError::AssetMissing(source));
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ModelLoadError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::copy(&source, path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

pub(crate) fn load_from_path(
    path: &Path,
    assets: Option<&BundledAssets>,
) -> Result<LinearQualityModel, ModelLoadError> {
    materialise(path, assets)?;
    let bytes = fs::read(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    LinearQualityModel::from_slice(&bytes)
}

#[derive(Debug, Deserialize)]
struct LinearArtifact {
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

/// Dense linear head: `output[i] = bias[i] + weights[i] · features`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearQualityModel {
    weights: Vec<[f32; FEATURE_COUNT]>,
    bias: Vec<f32>,
}

impl LinearQualityModel {
    pub fn new(weights: Vec<[f32; FEATURE_COUNT]>, bias: Vec<f32>) -> Result<Self, ModelLoadError> {
        if weights.len() != bias.len() {
            return Err(ModelLoadError::Shape(format!(
                "{} weight rows but {} bias terms",
                weights.len(),
                bias.len()
            )));
        }
        if weights.len() < OUTPUT_WIDTH {
            return Err(ModelLoadError::Shape(format!(
                "{} outputs, need at least {OUTPUT_WIDTH}",
                weights.len()
            )));
        }
        Ok(Self { weights, bias })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelLoadError> {
        let artifact: LinearArtifact = serde_json::from_slice(bytes)?;

        let mut weights = Vec::with_capacity(artifact.weights.len());
        for (index, row) in artifact.weights.into_iter().enumerate() {
            let row: [f32; FEATURE_COUNT] = row.try_into().map_err(|row: Vec<f32>| {
                ModelLoadError::Shape(format!(
                    "weight row {index} has {} columns, expected {FEATURE_COUNT}",
                    row.len()
                ))
            })?;
            weights.push(row);
        }

        Self::new(weights, artifact.bias)
    }

    pub fn outputs(&self) -> usize {
        self.bias.len()
    }
}

impl QualityModel for LinearQualityModel {
    fn forward(&self, features: &FeatureVector) -> Result<Vec<f32>, InferenceError> {
        let inputs = features.values();
        if inputs.len() != FEATURE_COUNT {
            return Err(InferenceError::FeatureWidth {
                expected: FEATURE_COUNT,
                actual: inputs.len(),
            });
        }

        self.weights
            .iter()
            .zip(&self.bias)
            .enumerate()
            .map(|(position, (row, bias))| {
                let value = row
                    .iter()
                    .zip(inputs)
                    .fold(*bias, |acc, (weight, input)| acc + weight * input);
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(InferenceError::NonFinite(position))
                }
            })
            .collect()
    }
}

use crate::scoring::{BundledAssets, DEFAULT_MODEL_FILE};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let model_path = env::var("QUALITY_MODEL_PATH")
            .unwrap_or_else(|_| format!("./data/{DEFAULT_MODEL_FILE}"));
        if model_path.trim().is_empty() {
            return Err(ConfigError::EmptyModelPath);
        }
        let asset_dir = env::var("QUALITY_ASSET_DIR").unwrap_or_else(|_| "./assets".to_string());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringConfig {
                model_path: PathBuf::from(model_path.trim()),
                asset_dir: PathBuf::from(asset_dir),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the model artifact lives and where its bundled copy ships.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub model_path: PathBuf,
    pub asset_dir: PathBuf,
}

impl ScoringConfig {
    pub fn assets(&self) -> BundledAssets {
        BundledAssets::new(&self.asset_dir)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyModelPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyModelPath => write!(f, "QUALITY_MODEL_PATH must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("QUALITY_MODEL_PATH");
        env::remove_var("QUALITY_ASSET_DIR");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(
            config.scoring.model_path,
            PathBuf::from("./data/packaging_quality_model.json")
        );
        assert_eq!(config.scoring.asset_dir, PathBuf::from("./assets"));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "Production");
        env::set_var("QUALITY_MODEL_PATH", "/var/lib/pack/model.json");
        env::set_var("QUALITY_ASSET_DIR", "/usr/share/pack");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.scoring.model_path, PathBuf::from("/var/lib/pack/model.json"));
        assert_eq!(
            config.scoring.assets().path_for("model.json"),
            PathBuf::from("/usr/share/pack/model.json")
        );
    }

    #[test]
    fn rejects_blank_model_path() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("QUALITY_MODEL_PATH", "   ");
        let result = AppConfig::load();
        reset_env();

        assert!(matches!(result, Err(ConfigError::EmptyModelPath)));
    }
}

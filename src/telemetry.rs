use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// `RUST_LOG` wins; otherwise the configured level, raised to `debug` when
/// verbose output was requested.
pub fn build_filter(config: &TelemetryConfig, verbose: bool) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = if verbose { "debug" } else { config.log_level.as_str() };
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::EnvFilter {
        value: directive.to_string(),
        source,
    })
}

/// Installs the global subscriber, writing to stderr so stdout only carries reports.
pub fn init(config: &TelemetryConfig, verbose: bool) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config, verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: level.to_string(),
        }
    }

    #[test]
    fn rejects_unparseable_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let error = build_filter(&config("pack_quality=loud"), false).expect_err("invalid");

        match error {
            TelemetryError::EnvFilter { value, .. } => assert_eq!(value, "pack_quality=loud"),
            other => panic!("expected filter error, got {other:?}"),
        }
    }

    #[test]
    fn verbose_overrides_configured_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let filter = build_filter(&config("pack_quality=loud"), true).expect("debug filter");

        assert_eq!(filter.to_string(), "debug");
    }
}

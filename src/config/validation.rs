use crate::config::types::{AnalyzerConfig, Config, HttpServerConfig, LoggerConfig};
use crate::ConfigError;
use tracing::Level;

/// Smallest accepted value for any timeout, in milliseconds
const MIN_TIMEOUT_MS: u64 = 100;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_logger_config(&config.logger)?;
    validate_http_server_config(&config.http_server)?;
    validate_analyzer_config(&config.analyzer)?;
    Ok(())
}

/// Validates logger configuration
fn validate_logger_config(config: &LoggerConfig) -> Result<(), ConfigError> {
    config.level.parse::<Level>().map_err(|_| {
        ConfigError::Validation(format!(
            "logger level must be one of trace, debug, info, warn, error, got '{}'",
            config.level
        ))
    })?;

    Ok(())
}

/// Validates HTTP server configuration
fn validate_http_server_config(config: &HttpServerConfig) -> Result<(), ConfigError> {
    if config.host.trim().is_empty() {
        return Err(ConfigError::Validation(
            "http-server host cannot be empty".to_string(),
        ));
    }

    if config.port == 0 {
        return Err(ConfigError::Validation(
            "http-server port must be between 1 and 65535, got 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates analyzer configuration
fn validate_analyzer_config(config: &AnalyzerConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("probe-timeout-ms", config.probe_timeout_ms),
        ("download-timeout-ms", config.download_timeout_ms),
        ("analysis-timeout-ms", config.analysis_timeout_ms),
    ] {
        if value < MIN_TIMEOUT_MS {
            return Err(ConfigError::Validation(format!(
                "{} must be >= {}ms, got {}ms",
                name, MIN_TIMEOUT_MS, value
            )));
        }
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

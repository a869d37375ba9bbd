use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Web-Analyzer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logger: LoggerConfig,
    #[serde(rename = "http-server")]
    pub http_server: HttpServerConfig,
    pub analyzer: AnalyzerConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level to emit (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl HttpServerConfig {
    /// Formats the listen address as `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Analysis engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Time budget for a single link probe (milliseconds)
    #[serde(rename = "probe-timeout-ms")]
    pub probe_timeout_ms: u64,

    /// Time budget for downloading the analyzed page (milliseconds)
    #[serde(rename = "download-timeout-ms")]
    pub download_timeout_ms: u64,

    /// Deadline for a whole analysis; pending probes are cancelled when it fires
    #[serde(rename = "analysis-timeout-ms")]
    pub analysis_timeout_ms: u64,

    /// User-Agent header sent by the downloader and the prober
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            probe_timeout_ms: 10_000,
            download_timeout_ms: 10_000,
            analysis_timeout_ms: 10_000,
            user_agent: format!("web-analyzer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AnalyzerConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_millis(self.download_timeout_ms)
    }

    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_millis(self.analysis_timeout_ms)
    }
}

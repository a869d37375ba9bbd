//! Web-Analyzer: structural analysis of a single web page
//!
//! This crate downloads a page, extracts structural facts from its HTML
//! (document version, title, headings, login form, links), classifies the
//! links as internal or external and probes every one of them to count how
//! many are unreachable.

pub mod analyzer;
pub mod config;
pub mod download;
pub mod extract;
pub mod links;
pub mod output;
pub mod probe;
pub mod server;

use thiserror::Error;

/// Main error type for Web-Analyzer operations
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while turning raw bytes into an HTML document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// Link resolution errors
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Cannot resolve link '{link}': {source}")]
    Resolution {
        link: String,
        source: ::url::ParseError,
    },
}

/// Hard failures of a page analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to parse page HTML: {0}")]
    Parse(#[from] ParseError),
}

/// Page download errors
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Page not found: {url}")]
    NotFound { url: String },

    #[error("Request for {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },
}

// Re-export commonly used types
pub use analyzer::{AnalysisResult, Analyzer};
pub use config::Config;
pub use download::PageDownloader;
pub use extract::{extract, HtmlVersion, PageFacts};
pub use links::{resolve_and_classify, ClassifiedLink};
pub use probe::Prober;

//! Configuration module for Web-Analyzer
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so a missing file is not fatal.
//!
//! # Example
//!
//! ```no_run
//! use web_analyzer::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Server will listen on port: {}", config.http_server.port);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalyzerConfig, Config, HttpServerConfig, LoggerConfig};

// Re-export parser functions
pub use parser::{
    compute_config_hash, load_config, load_config_or_default, load_config_with_hash, parse_config,
    ConfigSource,
};

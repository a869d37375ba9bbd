use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use web_analyzer::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Probe timeout: {}ms", config.analyzer.probe_timeout_ms);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so a running process can be matched to the file it read.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from the file, with the file's hash
    File { hash: String },
    /// The file does not exist; defaults are in use
    Defaults,
}

/// Loads the configuration at `path`, falling back to defaults
///
/// A missing file yields the default configuration and
/// [`ConfigSource::Defaults`]. Nothing is logged; the caller reports the
/// source once its subscriber is installed. Any other failure, including a file that
/// exists but does not parse or validate, is returned to the caller.
pub fn load_config_or_default(path: &Path) -> Result<(Config, ConfigSource), ConfigError> {
    match load_config_with_hash(path) {
        Ok((config, hash)) => Ok((config, ConfigSource::File { hash })),
        Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            Ok((Config::default(), ConfigSource::Defaults))
        }
        Err(e) => Err(e),
    }
}

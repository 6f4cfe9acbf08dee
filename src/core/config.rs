//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.eulerpad/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EulerpadConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Web page opened by the "open in browser" action; `{id}` is
    /// substituted with the current problem id.
    pub problem_web_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RelayConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub mode: Option<SourceMode>,
    pub listing_url: Option<String>,
    pub problem_url: Option<String>,
}

/// How problem text is retrieved: one bulk listing holding every problem,
/// or one request per problem id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    #[default]
    Batch,
    Single,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_RELAY_BASE_URL: &str = "https://api.allorigins.win/get";
pub const DEFAULT_LISTING_URL: &str = "https://projecteuler.net/minimal=problems;csv";
pub const DEFAULT_PROBLEM_URL: &str = "https://projecteuler.net/minimal={id}";
pub const DEFAULT_PROBLEM_WEB_URL: &str = "https://projecteuler.net/problem={id}";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub mode: SourceMode,
    pub relay_base_url: String,
    pub timeout_secs: u64,
    pub listing_url: String,
    pub problem_url: String,
    pub problem_web_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.eulerpad/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".eulerpad").join("config.toml"))
}

/// Load config from `~/.eulerpad/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EulerpadConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<EulerpadConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(EulerpadConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(EulerpadConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: EulerpadConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Eulerpad Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# problem_web_url = "https://projecteuler.net/problem={id}"

# [relay]
# base_url = "https://api.allorigins.win/get"   # Or set EULERPAD_RELAY_URL env var
# timeout_secs = 30

# [source]
# mode = "batch"                                # "batch" or "single"
# listing_url = "https://projecteuler.net/minimal=problems;csv"
# problem_url = "https://projecteuler.net/minimal={id}"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_mode` is from the CLI flag (None = not specified).
pub fn resolve(config: &EulerpadConfig, cli_mode: Option<SourceMode>) -> ResolvedConfig {
    // Mode: CLI → env → config → default
    let mode = cli_mode
        .or_else(|| {
            std::env::var("EULERPAD_SOURCE_MODE")
                .ok()
                .and_then(|s| SourceMode::from_str(&s, true).ok())
        })
        .or(config.source.mode)
        .unwrap_or_default();

    // Relay base URL: env → config → default
    let relay_base_url = std::env::var("EULERPAD_RELAY_URL")
        .ok()
        .or_else(|| config.relay.base_url.clone())
        .unwrap_or_else(|| DEFAULT_RELAY_BASE_URL.to_string());

    ResolvedConfig {
        mode,
        relay_base_url,
        timeout_secs: config.relay.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        listing_url: config
            .source
            .listing_url
            .clone()
            .unwrap_or_else(|| DEFAULT_LISTING_URL.to_string()),
        problem_url: config
            .source
            .problem_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PROBLEM_URL.to_string()),
        problem_web_url: config
            .general
            .problem_web_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PROBLEM_WEB_URL.to_string()),
    }
}

// crates/deploy-gate-config/src/config.rs
// ============================================================================
// Module: Deploy Gate Configuration
// Description: Configuration loading and validation for the harness.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: deploy-gate-core, serde, toml, url
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits and
//! unknown fields rejected. Missing or invalid configuration fails closed;
//! a harness with a bad target or contract name must not start deploying.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use deploy_gate_core::ContractName;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "deploy-gate.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "DEPLOY_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a contract name.
pub(crate) const MAX_CONTRACT_NAME_LENGTH: usize = 128;
/// Maximum length of a target endpoint.
pub(crate) const MAX_ENDPOINT_LENGTH: usize = 2048;
/// Endpoint schemes accepted for deployment targets.
const ALLOWED_ENDPOINT_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];
/// Minimum allowed lifecycle step timeout in milliseconds.
pub(crate) const MIN_STEP_TIMEOUT_MS: u64 = 100;
/// Maximum allowed lifecycle step timeout in milliseconds.
pub(crate) const MAX_STEP_TIMEOUT_MS: u64 = 300_000;
/// Default deploy timeout in milliseconds.
pub(crate) const DEFAULT_DEPLOY_TIMEOUT_MS: u64 = 30_000;
/// Default resolve timeout in milliseconds.
pub(crate) const DEFAULT_RESOLVE_TIMEOUT_MS: u64 = 5_000;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Contract selection for the harness run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractConfig {
    /// Name of the contract artifact to deploy and verify.
    pub name: String,
}

impl ContractConfig {
    /// Validates the contract selection.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("contract name must not be empty".to_string()));
        }
        if self.name.len() > MAX_CONTRACT_NAME_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "contract name exceeds {MAX_CONTRACT_NAME_LENGTH} characters"
            )));
        }
        Ok(())
    }

    /// Returns the configured name as a typed contract name.
    #[must_use]
    pub fn contract_name(&self) -> ContractName {
        ContractName::new(self.name.clone())
    }
}

/// Deployment target selection for the harness run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Endpoint of the target runtime the contract is deployed against.
    pub endpoint: String,
}

impl TargetConfig {
    /// Validates the target endpoint.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.len() > MAX_ENDPOINT_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "target endpoint exceeds {MAX_ENDPOINT_LENGTH} characters"
            )));
        }
        let url = Url::parse(&self.endpoint)
            .map_err(|err| ConfigError::Invalid(format!("target endpoint: {err}")))?;
        if !ALLOWED_ENDPOINT_SCHEMES.contains(&url.scheme()) {
            return Err(ConfigError::Invalid(format!(
                "target endpoint scheme must be one of http, https, ws, wss; found {}",
                url.scheme()
            )));
        }
        Ok(())
    }
}

/// Lifecycle step timeouts in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeoutConfig {
    /// Timeout for the run-level fresh deployment.
    #[serde(default = "default_deploy_timeout_ms")]
    pub deploy_ms: u64,
    /// Timeout for each group-level resolution.
    #[serde(default = "default_resolve_timeout_ms")]
    pub resolve_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            deploy_ms: DEFAULT_DEPLOY_TIMEOUT_MS,
            resolve_ms: DEFAULT_RESOLVE_TIMEOUT_MS,
        }
    }
}

impl TimeoutConfig {
    /// Validates both step timeouts against the allowed bounds.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_timeout("timeouts.deploy_ms", self.deploy_ms)?;
        validate_timeout("timeouts.resolve_ms", self.resolve_ms)?;
        Ok(())
    }
}

/// Default deploy timeout used when the field is absent.
const fn default_deploy_timeout_ms() -> u64 {
    DEFAULT_DEPLOY_TIMEOUT_MS
}

/// Default resolve timeout used when the field is absent.
const fn default_resolve_timeout_ms() -> u64 {
    DEFAULT_RESOLVE_TIMEOUT_MS
}

/// Harness configuration for a deployment-verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Contract selection.
    pub contract: ContractConfig,
    /// Deployment target selection.
    pub target: TargetConfig,
    /// Lifecycle step timeouts.
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

impl HarnessConfig {
    /// Loads configuration from the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when reading, parsing, or validation fails.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from the default resolution rules: the
    /// `DEPLOY_GATE_CONFIG` environment variable when set, otherwise
    /// `deploy-gate.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when reading, parsing, or validation fails.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&resolve_path())
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.contract.validate()?;
        self.target.validate()?;
        self.timeouts.validate()?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the environment default.
fn resolve_path() -> PathBuf {
    env::var_os(CONFIG_ENV_VAR).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), PathBuf::from)
}

/// Validates a single step timeout against the allowed bounds.
fn validate_timeout(field: &str, value_ms: u64) -> Result<(), ConfigError> {
    if !(MIN_STEP_TIMEOUT_MS ..= MAX_STEP_TIMEOUT_MS).contains(&value_ms) {
        return Err(ConfigError::Invalid(format!(
            "{field} must be between {MIN_STEP_TIMEOUT_MS} and {MAX_STEP_TIMEOUT_MS} milliseconds"
        )));
    }
    Ok(())
}

// crates/todo-harness-config/src/settings.rs
// ============================================================================
// Module: Harness Settings
// Description: Harness configuration model, sources, and validation.
// Purpose: Centralize base address, timeouts, and cleanup prefix handling.
// Dependencies: serde, toml, thiserror, url
// ============================================================================

//! ## Overview
//! [`HarnessConfig`] merges three sources in a fixed order: compiled
//! defaults, then an optional TOML document, then environment overrides.
//! Each constructor validates before returning, so a held config is always
//! usable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Default base address of the todo service.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default interval between readiness probes.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default maximum wait for the service to become ready.
const DEFAULT_READY_WAIT: Duration = Duration::from_secs(60);

/// Default prefix for generated cleanup descriptions.
const DEFAULT_CLEANUP_PREFIX: &str = "test";

// ============================================================================
// SECTION: Config Errors
// ============================================================================

/// Errors emitted while building or validating a harness config.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config value failed validation.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// An environment variable was malformed.
    #[error("invalid environment: {0}")]
    Env(String),
    /// A config file could not be read.
    #[error("failed to read config file {path}: {detail}")]
    Io {
        /// Path of the file that failed to read.
        path: String,
        /// Underlying I/O failure detail.
        detail: String,
    },
    /// A config document could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(String),
}

// ============================================================================
// SECTION: Environment Keys
// ============================================================================

/// Environment variables recognized by [`HarnessConfig::from_env`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessEnv {
    /// Base address of the todo service.
    BaseUrl,
    /// Per-request timeout in seconds (positive integer).
    TimeoutSeconds,
    /// Readiness poll interval in seconds (positive integer).
    PollIntervalSeconds,
    /// Maximum readiness wait in seconds (positive integer).
    ReadyWaitSeconds,
    /// Prefix for generated cleanup descriptions.
    CleanupPrefix,
}

impl HarnessEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "TODO_HARNESS_BASE_URL",
            Self::TimeoutSeconds => "TODO_HARNESS_TIMEOUT_SEC",
            Self::PollIntervalSeconds => "TODO_HARNESS_POLL_INTERVAL_SEC",
            Self::ReadyWaitSeconds => "TODO_HARNESS_READY_WAIT_SEC",
            Self::CleanupPrefix => "TODO_HARNESS_CLEANUP_PREFIX",
        }
    }
}

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Typed harness configuration passed into client and tracker constructors.
///
/// # Invariants
/// - Values held by a constructed instance have passed [`Self::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Base address of the todo service.
    pub base_url: String,
    /// Shared per-request timeout.
    pub timeout: Duration,
    /// Interval between readiness probes.
    pub poll_interval: Duration,
    /// Maximum wait for the service to become ready.
    pub max_ready_wait: Duration,
    /// Prefix for generated cleanup descriptions.
    pub cleanup_prefix: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_ready_wait: DEFAULT_READY_WAIT,
            cleanup_prefix: DEFAULT_CLEANUP_PREFIX.to_string(),
        }
    }
}

/// Raw TOML schema merged over the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    /// Base address override.
    base_url: Option<String>,
    /// Per-request timeout override in seconds.
    timeout_sec: Option<u64>,
    /// Readiness poll interval override in seconds.
    poll_interval_sec: Option<u64>,
    /// Maximum readiness wait override in seconds.
    ready_wait_sec: Option<u64>,
    /// Cleanup prefix override.
    cleanup_prefix: Option<String>,
}

impl HarnessConfig {
    /// Builds a config from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is not valid UTF-8, is set
    /// but empty, carries a non-positive number of seconds, or the merged
    /// result fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env()
    }

    /// Merges environment overrides over this config's values.
    ///
    /// Fields whose variable is unset keep their current value, so callers
    /// may seed non-default bases (a spawned test service, a CI profile)
    /// and still honor the documented override keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is not valid UTF-8, is set
    /// but empty, carries a non-positive number of seconds, or the merged
    /// result fails validation.
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Some(value) = read_env_nonempty(HarnessEnv::BaseUrl.as_str())? {
            self.base_url = value;
        }
        if let Some(value) = read_env_nonempty(HarnessEnv::TimeoutSeconds.as_str())? {
            self.timeout = parse_seconds(HarnessEnv::TimeoutSeconds.as_str(), &value)?;
        }
        if let Some(value) = read_env_nonempty(HarnessEnv::PollIntervalSeconds.as_str())? {
            self.poll_interval = parse_seconds(HarnessEnv::PollIntervalSeconds.as_str(), &value)?;
        }
        if let Some(value) = read_env_nonempty(HarnessEnv::ReadyWaitSeconds.as_str())? {
            self.max_ready_wait = parse_seconds(HarnessEnv::ReadyWaitSeconds.as_str(), &value)?;
        }
        if let Some(value) = read_env_nonempty(HarnessEnv::CleanupPrefix.as_str())? {
            self.cleanup_prefix = value;
        }
        self.validate()?;
        Ok(self)
    }

    /// Builds a config from a TOML document merged over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document does not parse, contains
    /// unknown keys, or the merged result fails validation.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let mut config = Self::default();
        if let Some(base_url) = file.base_url {
            config.base_url = base_url;
        }
        if let Some(secs) = file.timeout_sec {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = file.poll_interval_sec {
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = file.ready_wait_sec {
            config.max_ready_wait = Duration::from_secs(secs);
        }
        if let Some(prefix) = file.cleanup_prefix {
            config.cleanup_prefix = prefix;
        }
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from a TOML file merged over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, does not parse,
    /// or the merged result fails validation.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            detail: err.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Validates the held values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the base URL is not an
    /// `http`/`https` address, any duration is zero, or the cleanup prefix
    /// is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|err| ConfigError::Invalid(format!("base_url: {err}")))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::Invalid(format!(
                    "base_url must be http or https, got {scheme}"
                )));
            }
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::Invalid("timeout must be greater than zero".to_string()));
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "poll_interval must be greater than zero".to_string(),
            ));
        }
        if self.max_ready_wait.is_zero() {
            return Err(ConfigError::Invalid(
                "max_ready_wait must be greater than zero".to_string(),
            ));
        }
        if self.cleanup_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("cleanup_prefix must not be empty".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Environment Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
fn read_env_strict(name: &str) -> Result<Option<String>, ConfigError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| {
            ConfigError::Env(format!("{name} must be valid UTF-8"))
        })
    })
}

/// Reads an environment variable and rejects empty values.
fn read_env_nonempty(name: &str) -> Result<Option<String>, ConfigError> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => {
            Err(ConfigError::Env(format!("{name} must not be empty")))
        }
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive number of seconds from an environment value.
fn parse_seconds(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    let trimmed = raw.trim();
    let secs: u64 = trimmed.parse().map_err(|_| {
        ConfigError::Env(format!("{name} must be a positive integer number of seconds"))
    })?;
    if secs == 0 {
        return Err(ConfigError::Env(format!("{name} must be greater than zero")));
    }
    Ok(Duration::from_secs(secs))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

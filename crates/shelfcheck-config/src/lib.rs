//! Centralized configuration management for shelfcheck
//!
//! Configuration follows a simple hierarchy:
//! 1. Safe defaults (defined as constants)
//! 2. `.env` file values (loaded once per process)
//! 3. Environment variable overrides
//! 4. Runtime validation
//!
//! The suite needs very little: where the system under test lives and how
//! long to wait for it. Everything else is intentionally left to the
//! transport's defaults.

pub mod error;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use validation::{Validate, validate_range, validate_url};

use shelfcheck_common::initialize_environment;

// =============================================================================
// SAFE DEFAULTS
// =============================================================================

/// Public demo deployment of the Books/Authors API
const DEFAULT_BASE_URL: &str = "https://fakerestapi.azurewebsites.net/api/v1";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Primary environment variable for the base URL
const ENV_BASE_URL: &str = "SHELFCHECK_BASE_URL";
/// Legacy variable name, still honored
const ENV_BASE_URL_FALLBACK: &str = "BASE_URL";
const ENV_TIMEOUT_SECONDS: &str = "SHELFCHECK_TIMEOUT_SECONDS";

/// Configuration for a suite run
///
/// All settings have safe defaults and can be overridden via environment
/// variables.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SuiteConfig {
    /// Base URL of the system under test, without a trailing slash
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl SuiteConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults above
    ///
    /// Loads `.env` first (once per process). `SHELFCHECK_BASE_URL` wins
    /// over the legacy `BASE_URL`.
    pub fn from_env() -> Self {
        initialize_environment();

        let base_url = std::env::var(ENV_BASE_URL)
            .or_else(|_| std::env::var(ENV_BASE_URL_FALLBACK))
            .map_or_else(
                |_| DEFAULT_BASE_URL.to_string(),
                |url| url.trim_end_matches('/').to_string(),
            );

        let timeout_seconds = std::env::var(ENV_TIMEOUT_SECONDS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Self {
            base_url,
            timeout_seconds,
        }
    }

    /// Load from environment and validate in one step
    ///
    /// # Errors
    /// Returns the first validation failure
    pub fn from_env_validated() -> ConfigResult<Self> {
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }
}

impl Validate for SuiteConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "base_url".to_string(),
            });
        }
        validate_url(&self.base_url)?;
        validate_range(self.timeout_seconds, 1, 600, "timeout_seconds")?;
        Ok(())
    }
}

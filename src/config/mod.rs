//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `UX_SYNTH` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ux_synthesizer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.port);
//! ```

mod ai;
mod error;
mod extraction;
mod server;

pub use ai::{AiConfig, PLACEHOLDER_OPENAI_API_KEY};
pub use error::{ConfigError, ValidationError};
pub use extraction::ExtractionConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Unprefixed variable accepted for the OpenAI key.
pub const LEGACY_OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// service on demonstration data. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, limits)
    #[serde(default)]
    pub server: ServerConfig,

    /// Language model configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Document extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `UX_SYNTH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to a bare `OPENAI_API_KEY` when the prefixed key is
    ///    missing, blank or the placeholder
    ///
    /// # Environment Variable Format
    ///
    /// - `UX_SYNTH__SERVER__PORT=3000` -> `server.port = 3000`
    /// - `UX_SYNTH__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("UX_SYNTH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if config.ai.credential().is_none() {
            if let Ok(legacy) = std::env::var(LEGACY_OPENAI_KEY_VAR) {
                config.ai.openai_api_key = Some(legacy);
            }
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.extraction.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

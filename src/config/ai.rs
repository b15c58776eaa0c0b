//! AI provider configuration

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::ValidationError;

/// Value shipped in the sample `.env`; treated as "no credential".
pub const PLACEHOLDER_OPENAI_API_KEY: &str = "your_openai_api_key_here";

/// AI provider configuration
#[derive(Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key. Absent, empty or placeholder selects the mock provider.
    pub openai_api_key: Option<String>,

    /// Chat model used for analysis
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL (overridable for proxies and local stubs)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens in the model reply
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum simultaneous upstream calls
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Longest wait in seconds for a free upstream slot
    #[serde(default = "default_queue_timeout")]
    pub queue_timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the upstream slot wait as Duration
    pub fn queue_timeout(&self) -> Duration {
        Duration::from_secs(self.queue_timeout_secs)
    }

    /// The configured key, if it is a real credential.
    pub fn credential(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_OPENAI_API_KEY)
    }

    /// Check if a usable OpenAI key is configured
    pub fn has_credential(&self) -> bool {
        self.credential().is_some()
    }

    /// Validate AI configuration
    ///
    /// A missing key is valid: the service then runs on demonstration data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidAiBaseUrl);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if self.max_concurrent_requests == 0 {
            return Err(ValidationError::InvalidConcurrencyLimit);
        }
        if self.queue_timeout_secs == 0 || self.queue_timeout_secs > 600 {
            return Err(ValidationError::InvalidQueueTimeout);
        }
        Ok(())
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("openai_api_key", &self.credential().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .field("queue_timeout_secs", &self.queue_timeout_secs)
            .finish()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
            max_concurrent_requests: default_max_concurrent_requests(),
            queue_timeout_secs: default_queue_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    3000
}

fn default_timeout() -> u64 {
    90
}

fn default_max_concurrent_requests() -> usize {
    8
}

fn default_queue_timeout() -> u64 {
    20
}

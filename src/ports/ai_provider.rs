//! AI Provider Port - Interface for hosted chat-completion APIs.
//!
//! This port abstracts the single upstream call the analysis endpoint makes,
//! so the analysis client can be exercised without a network connection.
//!
//! # Design
//!
//! - One-shot (non-streaming) completions only
//! - Provider-agnostic message format
//! - Optional strict JSON reply mode
//! - Error variants carry the upstream error code where one exists
//!
//! # Example
//!
//! ```ignore
//! let request = CompletionRequest::new(RequestMetadata::generate())
//!     .with_system_prompt("You are a UX researcher")
//!     .with_message(MessageRole::User, "Analyze this...")
//!     .with_response_format(ResponseFormat::JsonObject);
//!
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for chat-completion provider interactions.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate a single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for AI completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// System prompt to guide model behavior.
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Temperature for response randomness (0.0 = deterministic).
    pub temperature: Option<f32>,
    /// Required shape of the reply.
    pub response_format: ResponseFormat,
    /// Request metadata for tracing.
    pub metadata: RequestMetadata,
}

impl CompletionRequest {
    /// Creates a new completion request with required metadata.
    pub fn new(metadata: RequestMetadata) -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
            max_tokens: None,
            temperature: None,
            response_format: ResponseFormat::Text,
            metadata,
        }
    }

    /// Adds a message to the conversation.
    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message::new(role, content));
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Sets the required reply format.
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent this message.
    pub role: MessageRole,
    /// Message content.
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Role of the message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions (guides model behavior).
    System,
    /// User input.
    User,
    /// Assistant (model) response.
    Assistant,
}

/// Shape the provider must use for its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Free-form text.
    #[default]
    Text,
    /// Exactly one JSON object.
    JsonObject,
}

/// Request metadata for tracing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMetadata {
    /// Correlates log lines for one analysis request.
    pub request_id: String,
}

impl RequestMetadata {
    /// Creates new request metadata.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Creates metadata with a fresh random request id.
    pub fn generate() -> Self {
        Self::new(format!("analysis-{}", uuid::Uuid::new_v4()))
    }
}

/// Response from AI completion.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated content.
    pub content: String,
    /// Token usage.
    pub usage: TokenUsage,
    /// Model that generated the response.
    pub model: String,
    /// Why the model stopped generating.
    pub finish_reason: FinishReason,
}

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt.
    pub prompt_tokens: u32,
    /// Tokens in the completion.
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion).
    pub total_tokens: u32,
}

impl TokenUsage {
    /// Creates new token usage.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop (end of response).
    Stop,
    /// Hit max_tokens limit.
    Length,
    /// Content was filtered for safety.
    ContentFilter,
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "openai").
    pub name: String,
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// AI provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AIError {
    /// Rate limited or out of quota.
    #[error("rate limited: {message}")]
    RateLimited {
        /// Provider error code, e.g. `insufficient_quota`.
        code: Option<String>,
        /// Provider message.
        message: String,
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// API key was rejected.
    #[error("authentication failed: {message}")]
    AuthenticationFailed {
        /// Provider message.
        message: String,
    },

    /// Provider rejected the request.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// Provider error code, if reported.
        code: Option<String>,
        /// Provider message.
        message: String,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Provider error code, if reported.
        code: Option<String>,
        /// Error details.
        message: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl AIError {
    /// Creates a rate limited error.
    pub fn rate_limited(
        code: Option<String>,
        message: impl Into<String>,
        retry_after_secs: u32,
    ) -> Self {
        Self::RateLimited {
            code,
            message: message.into(),
            retry_after_secs,
        }
    }

    /// Creates an authentication error.
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::AuthenticationFailed {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(code: Option<String>, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            code,
            message: message.into(),
        }
    }

    /// Creates an unavailable error.
    pub fn unavailable(code: Option<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            code,
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Machine-readable error code surfaced to API callers. The provider's
    /// own code wins over the generic one.
    pub fn code(&self) -> Option<String> {
        match self {
            AIError::RateLimited { code, .. } => code
                .clone()
                .or_else(|| Some("rate_limit_exceeded".to_string())),
            AIError::AuthenticationFailed { .. } => Some("invalid_api_key".to_string()),
            AIError::InvalidRequest { code, .. } => code.clone(),
            AIError::Unavailable { code, .. } => code
                .clone()
                .or_else(|| Some("provider_unavailable".to_string())),
            AIError::Network(_) => Some("network_error".to_string()),
            AIError::Parse(_) => Some("invalid_provider_response".to_string()),
            AIError::Timeout { .. } => Some("timeout".to_string()),
        }
    }

    /// True when the configured credential was rejected.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, AIError::AuthenticationFailed { .. })
    }
}

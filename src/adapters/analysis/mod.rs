//! Analysis provider adapters and startup strategy selection.
//!
//! - `MockAnalysisProvider` - fixed demonstration payload
//! - `LlmAnalysisProvider` - rubric-driven call to a chat-completion provider

mod llm_analysis_provider;
mod mock_analysis_provider;
mod prompt;

pub use llm_analysis_provider::{LlmAnalysisProvider, LlmAnalysisSettings};
pub use mock_analysis_provider::MockAnalysisProvider;
pub use prompt::{user_message, ANALYSIS_SYSTEM_PROMPT};

use std::sync::Arc;

use crate::adapters::ai::{OpenAIConfig, OpenAIProvider};
use crate::config::AiConfig;
use crate::ports::{AIError, AIProvider, AnalysisProvider};

/// Chooses the analysis provider once, from configuration.
///
/// Without a usable credential the demonstration provider is installed;
/// otherwise the live OpenAI-backed client.
///
/// # Errors
///
/// Returns `AIError::Network` if the HTTP client cannot be built.
pub fn build_analysis_provider(config: &AiConfig) -> Result<Arc<dyn AnalysisProvider>, AIError> {
    let Some(api_key) = config.credential() else {
        tracing::warn!("No OpenAI API key configured, analysis will return demonstration data");
        return Ok(Arc::new(MockAnalysisProvider::new()));
    };

    let openai = OpenAIProvider::new(
        OpenAIConfig::new(api_key)
            .with_model(&config.model)
            .with_base_url(&config.base_url)
            .with_timeout(config.timeout()),
    )?;

    let info = openai.provider_info();
    tracing::info!(
        provider = %info.name,
        model = %info.model,
        timeout_secs = config.timeout_secs,
        max_concurrent_requests = config.max_concurrent_requests,
        "OpenAI API key configured, analysis will call the language model"
    );

    Ok(Arc::new(LlmAnalysisProvider::new(
        Arc::new(openai),
        LlmAnalysisSettings {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            max_concurrent_requests: config.max_concurrent_requests,
            queue_timeout: config.queue_timeout(),
        },
    )))
}

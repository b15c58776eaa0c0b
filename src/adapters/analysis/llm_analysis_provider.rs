//! Live analysis client.
//!
//! Sends the research text with the fixed rubric to a chat-completion
//! provider in strict JSON mode and reads the reply as an `AnalysisResult`.
//! Failures are returned as errors; this client never falls back to the
//! demonstration payload.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

use crate::domain::analysis::AnalysisResult;
use crate::domain::research::ResearchText;
use crate::ports::{
    AIError, AIProvider, AnalysisProvider, CompletionRequest, FinishReason, MessageRole,
    RequestMetadata, ResponseFormat, UpstreamAnalysisError,
};

use super::prompt::{user_message, ANALYSIS_SYSTEM_PROMPT};

/// Sampling settings for the analysis call.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmAnalysisSettings {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Upper bound on simultaneous upstream calls.
    pub max_concurrent_requests: usize,
    /// How long a request may wait for a free upstream slot.
    pub queue_timeout: Duration,
}

impl Default for LlmAnalysisSettings {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_tokens: 3000,
            max_concurrent_requests: 8,
            queue_timeout: Duration::from_secs(20),
        }
    }
}

/// Analysis provider backed by a hosted language model.
pub struct LlmAnalysisProvider {
    ai_provider: Arc<dyn AIProvider>,
    settings: LlmAnalysisSettings,
    permits: Semaphore,
}

impl LlmAnalysisProvider {
    pub fn new(ai_provider: Arc<dyn AIProvider>, settings: LlmAnalysisSettings) -> Self {
        let permits = Semaphore::new(settings.max_concurrent_requests.max(1));
        Self {
            ai_provider,
            settings,
            permits,
        }
    }

    fn build_request(&self, text: &ResearchText) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::generate())
            .with_system_prompt(ANALYSIS_SYSTEM_PROMPT)
            .with_message(MessageRole::User, user_message(text.as_str()))
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens)
            .with_response_format(ResponseFormat::JsonObject)
    }
}

#[async_trait]
impl AnalysisProvider for LlmAnalysisProvider {
    async fn analyze(&self, text: &ResearchText) -> Result<AnalysisResult, UpstreamAnalysisError> {
        let request = self.build_request(text);
        let request_id = request.metadata.request_id.clone();

        let _permit = match tokio::time::timeout(self.settings.queue_timeout, self.permits.acquire())
            .await
        {
            Ok(Ok(permit)) => permit,
            Ok(Err(_)) => {
                return Err(AIError::unavailable(None, "analysis client is shutting down").into())
            }
            Err(_) => {
                tracing::warn!(
                    request_id = %request_id,
                    queue_timeout_secs = self.settings.queue_timeout.as_secs(),
                    "No free upstream slot before the queue timeout"
                );
                return Err(AIError::Timeout {
                    timeout_secs: self.settings.queue_timeout.as_secs() as u32,
                }
                .into());
            }
        };

        tracing::info!(
            request_id = %request_id,
            chars = text.char_count(),
            "Requesting analysis from language model"
        );

        let response = self.ai_provider.complete(request).await.map_err(|err| {
            tracing::error!(request_id = %request_id, error = %err, "Analysis request failed");
            err
        })?;

        match response.finish_reason {
            FinishReason::Length => tracing::warn!(
                request_id = %request_id,
                max_tokens = self.settings.max_tokens,
                "Model reply hit the token limit and may be truncated"
            ),
            FinishReason::ContentFilter => {
                tracing::error!(request_id = %request_id, "Model reply was withheld by the content filter");
                return Err(AIError::invalid_request(
                    Some("content_filter".to_string()),
                    "the model reply was withheld by the provider's content filter",
                )
                .into());
            }
            FinishReason::Stop => {}
        }

        let mut result: AnalysisResult = serde_json::from_str(&response.content).map_err(|err| {
            tracing::error!(request_id = %request_id, error = %err, "Model reply is not a valid analysis");
            UpstreamAnalysisError::MalformedReply(err.to_string())
        })?;

        let dropped = result.retain_recurring_codes();
        if !dropped.is_empty() {
            tracing::warn!(
                request_id = %request_id,
                codes = ?dropped,
                "Dropped codebook entries observed fewer than twice"
            );
        }

        tracing::info!(
            request_id = %request_id,
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            total_tokens = response.usage.total_tokens,
            "Analysis completed"
        );

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::analysis::MockAnalysisProvider;
    use serde_json::json;
    use std::time::Duration;

    fn research() -> ResearchText {
        ResearchText::parse(
            "P1: I could not find the export button. P2: The export button is hidden in settings.",
        )
        .unwrap()
    }

    fn reply() -> serde_json::Value {
        json!({
            "painPoints": [{
                "description": "Export is hard to find",
                "severity": "High",
                "violatedHeuristic": "Recognition rather than recall",
                "impact": "Users abandon the export task"
            }],
            "motivations": [{"description": "Share results with stakeholders", "category": "Collaboration"}],
            "themes": [{
                "theme": "Hidden Export",
                "quotes": ["I could not find the export button", "It is hidden in settings"],
                "principle": "Visibility"
            }],
            "affinityGroups": [{"category": "Export Discoverability", "items": ["Hidden button", "Buried in settings", "No shortcut"]}],
            "codebook": [
                {"code": "Export Friction", "definition": "Trouble exporting", "frequency": 2, "examples": ["a", "b"], "category": "Usability"},
                {"code": "One-off", "definition": "Seen once", "frequency": 1, "examples": ["c"]}
            ],
            "personas": [{
                "name": "Dana the Analyst",
                "role": "Researcher",
                "age": "30-40",
                "goals": ["Share findings"],
                "frustrations": ["Hidden export"],
                "behaviors": ["Exports weekly"],
                "quote": "Where is export?"
            }],
            "recommendations": [{
                "priority": "High",
                "issue": "Export is hidden",
                "recommendation": "Move export to the toolbar",
                "principle": "Visibility"
            }]
        })
    }

    fn client(mock: MockAIProvider) -> LlmAnalysisProvider {
        LlmAnalysisProvider::new(Arc::new(mock), LlmAnalysisSettings::default())
    }

    #[tokio::test]
    async fn sends_rubric_and_research_in_json_mode() {
        let mock = MockAIProvider::new().with_response(reply().to_string());
        let provider = client(mock.clone());

        provider.analyze(&research()).await.unwrap();

        let calls = mock.get_calls();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.system_prompt.as_deref(), Some(ANALYSIS_SYSTEM_PROMPT));
        assert_eq!(call.messages.len(), 1);
        assert_eq!(call.messages[0].role, MessageRole::User);
        assert!(call.messages[0]
            .content
            .starts_with("Analyze this UX research data:\n\n"));
        assert!(call.messages[0].content.ends_with(research().as_str()));
        assert_eq!(call.temperature, Some(0.3));
        assert_eq!(call.max_tokens, Some(3000));
        assert_eq!(call.response_format, ResponseFormat::JsonObject);
    }

    #[tokio::test]
    async fn parses_reply_and_drops_singleton_codes() {
        let provider = client(MockAIProvider::new().with_response(reply().to_string()));

        let result = provider.analyze(&research()).await.unwrap();

        assert_eq!(result.pain_points[0].description(), "Export is hard to find");
        assert_eq!(result.codebook.len(), 1);
        assert_eq!(result.codebook[0].code, "Export Friction");
        assert_eq!(result.personas[0].name, "Dana the Analyst");
    }

    #[tokio::test]
    async fn non_json_reply_is_malformed_not_mock() {
        let provider = client(MockAIProvider::new().with_response("Sure! Here is your analysis."));

        let err = provider.analyze(&research()).await.unwrap_err();

        assert!(matches!(err, UpstreamAnalysisError::MalformedReply(_)));
        assert_eq!(err.code().as_deref(), Some("invalid_json_reply"));
    }

    #[tokio::test]
    async fn truncated_reply_surfaces_as_malformed() {
        let provider = client(MockAIProvider::new().with_truncated_response("{\"painPoints\": ["));
        let err = provider.analyze(&research()).await.unwrap_err();
        assert!(matches!(err, UpstreamAnalysisError::MalformedReply(_)));
    }

    #[tokio::test]
    async fn provider_failure_is_never_replaced_by_demo_data() {
        let mock = MockAIProvider::new().with_error(AIError::authentication_failed("Incorrect API key"));
        let provider = client(mock);

        let result = provider.analyze(&research()).await;

        assert_ne!(result.as_ref().ok(), Some(&MockAnalysisProvider::payload()));
        let err = result.unwrap_err();
        assert!(err.is_authentication_failure());
        assert_eq!(err.code().as_deref(), Some("invalid_api_key"));
    }

    #[tokio::test]
    async fn concurrent_calls_respect_the_cap() {
        let mock = MockAIProvider::new()
            .with_delay(Duration::from_millis(40))
            .with_response(reply().to_string())
            .with_response(reply().to_string())
            .with_response(reply().to_string());
        let provider = LlmAnalysisProvider::new(
            Arc::new(mock.clone()),
            LlmAnalysisSettings {
                max_concurrent_requests: 1,
                ..LlmAnalysisSettings::default()
            },
        );
        let text = research();

        let (a, b, c) = tokio::join!(
            provider.analyze(&text),
            provider.analyze(&text),
            provider.analyze(&text)
        );

        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.peak_concurrency(), 1);
    }

    #[tokio::test]
    async fn filtered_reply_is_an_error() {
        let provider = client(MockAIProvider::new().with_filtered_response(reply().to_string()));

        let err = provider.analyze(&research()).await.unwrap_err();

        assert_eq!(err.code().as_deref(), Some("content_filter"));
        assert!(err.to_string().contains("content filter"));
    }

    #[tokio::test]
    async fn waiting_too_long_for_a_slot_times_out() {
        let mock = MockAIProvider::new()
            .with_delay(Duration::from_millis(300))
            .with_response(reply().to_string())
            .with_response(reply().to_string());
        let provider = LlmAnalysisProvider::new(
            Arc::new(mock.clone()),
            LlmAnalysisSettings {
                max_concurrent_requests: 1,
                queue_timeout: Duration::from_millis(20),
                ..LlmAnalysisSettings::default()
            },
        );
        let text = research();

        let (a, b) = tokio::join!(provider.analyze(&text), provider.analyze(&text));

        let (ok, err) = match (a, b) {
            (Ok(ok), Err(err)) | (Err(err), Ok(ok)) => (ok, err),
            other => panic!("expected one success and one timeout, got {other:?}"),
        };
        assert_eq!(ok.codebook.len(), 1);
        assert_eq!(err.code().as_deref(), Some("timeout"));
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn name_is_openai() {
        let provider = client(MockAIProvider::new());
        assert_eq!(provider.name(), "openai");
    }
}

//! AnalyzeResearchHandler - Command handler for synthesizing research text.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::analysis::AnalysisResult;
use crate::domain::foundation::ValidationError;
use crate::domain::research::ResearchText;
use crate::ports::{AnalysisProvider, UpstreamAnalysisError};

/// Command to analyze raw research text.
#[derive(Debug, Clone)]
pub struct AnalyzeResearchCommand {
    pub text: String,
}

/// Errors from analyzing research text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeResearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamAnalysisError),
}

/// Handler for analysis requests.
///
/// Validates the text before the provider is consulted, so short input never
/// reaches the model.
pub struct AnalyzeResearchHandler {
    provider: Arc<dyn AnalysisProvider>,
}

impl AnalyzeResearchHandler {
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self { provider }
    }

    /// Name of the installed provider ("mock" or "openai").
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeResearchCommand,
    ) -> Result<AnalysisResult, AnalyzeResearchError> {
        let text = ResearchText::parse(cmd.text).map_err(|err| {
            tracing::debug!(error = %err, "Rejected research text");
            err
        })?;

        let result = self.provider.analyze(&text).await?;
        Ok(result)
    }
}

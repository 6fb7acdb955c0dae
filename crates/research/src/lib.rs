//! Deep research orchestration for the Kakuro market analysis pipeline.
//!
//! One invocation builds the market research prompt, issues a single call
//! to the remote research model, times it, estimates token usage and cost,
//! and returns the packaged result. Persisting the raw report is the
//! caller's job.

pub mod orchestrator;
pub mod prompt;
pub mod usage;

pub use orchestrator::ResearchOrchestrator;

use providers::GeminiClient;
use shared::research::{ResearchError, ResearchResult};
use shared::settings::ResearchSettings;
use std::sync::Arc;

/// Execute one deep research run against the configured Gemini model.
///
/// `api_key` must be an already-resolved secret; nothing here reads the
/// environment. An empty key is passed through and surfaces as an
/// authentication failure from the provider.
pub async fn execute_deep_research(
    requirements: &str,
    api_key: &str,
    settings: &ResearchSettings,
) -> Result<ResearchResult, ResearchError> {
    let client = GeminiClient::new(settings, api_key).map_err(ResearchError::Provider)?;
    let orchestrator = ResearchOrchestrator::new(Arc::new(client), settings.rates.clone());
    orchestrator.execute(requirements).await
}

//! Research result types and the remote model seam.
//!
//! This module defines the value objects produced by one deep research
//! invocation and the trait a provider client implements to serve it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome status of a research invocation.
///
/// Failure never produces a status; a failed invocation surfaces as a
/// [`ResearchError`] instead of a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchStatus {
    Completed,
}

/// Estimated token usage and cost for a single research exchange.
///
/// Counts are derived from character lengths, not the provider's tokenizer,
/// so every field is an approximation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input tokens (prompt), estimated
    pub prompt_tokens: u32,
    /// Output tokens (report), estimated
    pub response_tokens: u32,
    /// Sum of prompt and response tokens
    pub total_tokens: u32,
    /// Estimated cost in USD, rounded to 4 decimal places
    pub estimated_cost_usd: f64,
}

/// Result of one deep research invocation, owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResult {
    pub status: ResearchStatus,
    /// Unprocessed report text from the provider (may be empty)
    pub raw_report: String,
    /// Wall-clock duration of the invocation, in seconds
    pub research_duration_seconds: f64,
    pub token_usage: Option<TokenUsage>,
}

/// Research error types
#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    #[error("research not configured: {message}")]
    Configuration { message: String },

    #[error("deep research call failed: {0}")]
    Provider(#[from] anyhow::Error),
}

/// A remote model capable of serving one deep research request.
///
/// Implementations issue a single request/response exchange: no streaming,
/// no partial delivery. The call may take minutes while the provider runs
/// its own multi-step research process.
#[async_trait]
pub trait ResearchModel: Send + Sync {
    /// Identifier of the underlying model, for diagnostics.
    fn model_id(&self) -> &str;

    /// Run one prompt through the model and return the full response text.
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

//! Drives one end-to-end deep research invocation.

use crate::prompt::build_research_prompt;
use crate::usage::estimate_token_usage;
use shared::research::{ResearchError, ResearchModel, ResearchResult, ResearchStatus};
use shared::settings::CostRates;
use std::sync::Arc;
use std::time::Instant;

/// Owns the lifecycle of a research call: prompt construction, the single
/// remote invocation, timing, and cost estimation. Holds no mutable state,
/// so concurrent invocations are independent.
pub struct ResearchOrchestrator {
    model: Arc<dyn ResearchModel>,
    rates: CostRates,
}

impl ResearchOrchestrator {
    pub fn new(model: Arc<dyn ResearchModel>, rates: CostRates) -> Self {
        Self { model, rates }
    }

    /// Run one research invocation and package the timed, cost-estimated
    /// result.
    ///
    /// Exactly one outbound call is made. A provider failure is logged and
    /// re-signaled unchanged; no partial result is ever returned and no
    /// retry is attempted.
    pub async fn execute(&self, requirements: &str) -> Result<ResearchResult, ResearchError> {
        let started = Instant::now();
        let prompt = build_research_prompt(requirements);

        let raw_report = match self.model.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(model = self.model.model_id(), "research failed: {:#}", e);
                return Err(ResearchError::Provider(e));
            }
        };

        let research_duration_seconds = started.elapsed().as_secs_f64();
        let token_usage = estimate_token_usage(&prompt, &raw_report, &self.rates);

        Ok(ResearchResult {
            status: ResearchStatus::Completed,
            raw_report,
            research_duration_seconds,
            token_usage: Some(token_usage),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    /// Test double that sleeps, then returns a canned reply or error.
    struct FakeModel {
        reply: Result<String, String>,
        delay: Duration,
    }

    impl FakeModel {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                delay: Duration::ZERO,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                delay: Duration::ZERO,
            }
        }
    }

    #[async_trait]
    impl ResearchModel for FakeModel {
        fn model_id(&self) -> &str {
            "fake-research-model"
        }

        async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
            tokio::time::sleep(self.delay).await;
            self.reply.clone().map_err(|m| anyhow::anyhow!(m))
        }
    }

    /// Returns the prompt it was given, so tests can observe what was sent.
    struct EchoModel;

    #[async_trait]
    impl ResearchModel for EchoModel {
        fn model_id(&self) -> &str {
            "echo"
        }

        async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
            Ok(prompt.to_string())
        }
    }

    fn orchestrator(model: impl ResearchModel + 'static) -> ResearchOrchestrator {
        ResearchOrchestrator::new(Arc::new(model), CostRates::default())
    }

    #[tokio::test]
    async fn test_successful_run_packages_report_and_usage() {
        let result = orchestrator(FakeModel::replying("## Competitors\n..."))
            .execute("top 10 sellers")
            .await
            .unwrap();

        assert_eq!(result.status, ResearchStatus::Completed);
        assert_eq!(result.raw_report, "## Competitors\n...");
        assert!(result.research_duration_seconds >= 0.0);

        let usage = result.token_usage.unwrap();
        assert!(usage.prompt_tokens > 0);
        assert_eq!(usage.total_tokens, usage.prompt_tokens + usage.response_tokens);
    }

    #[tokio::test]
    async fn test_usage_reflects_prompt_and_response_lengths() {
        use crate::usage::approx_token_count;

        let requirements = "r".repeat(400);
        let result = orchestrator(FakeModel::replying(&"x".repeat(800)))
            .execute(&requirements)
            .await
            .unwrap();

        let usage = result.token_usage.unwrap();
        assert_eq!(
            usage.prompt_tokens,
            approx_token_count(&build_research_prompt(&requirements))
        );
        assert_eq!(usage.response_tokens, 200);
    }

    #[tokio::test]
    async fn test_requirements_reach_the_model_verbatim() {
        let requirements = "compare against the 2025 bestseller list";
        let result = orchestrator(EchoModel).execute(requirements).await.unwrap();
        assert!(result.raw_report.contains(requirements));
    }

    #[tokio::test]
    async fn test_empty_provider_text_completes_with_empty_report() {
        let result = orchestrator(FakeModel::replying(""))
            .execute("anything")
            .await
            .unwrap();

        assert_eq!(result.status, ResearchStatus::Completed);
        assert_eq!(result.raw_report, "");
        assert_eq!(result.token_usage.unwrap().response_tokens, 0);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates_cause() {
        let err = orchestrator(FakeModel::failing("401 invalid api key"))
            .execute("anything")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("401 invalid api key"));
    }

    #[tokio::test]
    async fn test_duration_tracks_the_remote_call() {
        let model = FakeModel {
            reply: Ok("report".to_string()),
            delay: Duration::from_millis(50),
        };
        let result = orchestrator(model).execute("anything").await.unwrap();

        assert!(result.research_duration_seconds >= 0.05);
        // Generous upper bound to absorb scheduler jitter.
        assert!(result.research_duration_seconds < 5.0);
    }

    #[tokio::test]
    async fn test_concurrent_runs_do_not_interfere() {
        let left = orchestrator(FakeModel::replying("report for puzzles"));
        let right = orchestrator(FakeModel::replying("report for keywords"));

        let (a, b) = tokio::join!(left.execute("puzzles"), right.execute("keywords"));

        assert_eq!(a.unwrap().raw_report, "report for puzzles");
        assert_eq!(b.unwrap().raw_report, "report for keywords");
    }
}

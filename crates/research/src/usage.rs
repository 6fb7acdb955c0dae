//! Token and cost estimation for a research exchange.
//!
//! Token counts are approximated as ceil(chars / 4). This is a coarse
//! heuristic, not the provider's tokenizer, so everything derived from it
//! is an estimate.

use shared::research::TokenUsage;
use shared::settings::CostRates;

/// Approximate the token count of `text` as ceil(chars / 4).
pub fn approx_token_count(text: &str) -> u32 {
    text.chars().count().div_ceil(4) as u32
}

/// Estimate token usage and USD cost for one prompt/response exchange.
///
/// Accepts any text, including empty strings; estimation itself cannot
/// fail.
pub fn estimate_token_usage(prompt: &str, response: &str, rates: &CostRates) -> TokenUsage {
    let prompt_tokens = approx_token_count(prompt);
    let response_tokens = approx_token_count(response);
    let total_tokens = prompt_tokens + response_tokens;

    let estimated_cost_usd = (prompt_tokens as f64 / 1_000_000.0)
        * rates.input_cost_per_million_usd
        + (response_tokens as f64 / 1_000_000.0) * rates.output_cost_per_million_usd;

    TokenUsage {
        prompt_tokens,
        response_tokens,
        total_tokens,
        estimated_cost_usd: round_to_4dp(estimated_cost_usd),
    }
}

/// Round half-up to 4 decimal places.
fn round_to_4dp(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

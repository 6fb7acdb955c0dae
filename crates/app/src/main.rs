use anyhow::{Context, Result};
use shared::research::ResearchError;
use shared::settings::ResearchSettings;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_REQUIREMENTS_PATH: &str = "research/external_tool_requirements.md";
const DEFAULT_OUTPUT_PATH: &str = "research/deep_research_raw_report.md";

/// Resolve requirements and output paths from positional arguments,
/// falling back to the pipeline defaults.
fn resolve_paths(args: &[String]) -> (PathBuf, PathBuf) {
    let requirements = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REQUIREMENTS_PATH));
    let output = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
    (requirements, output)
}

/// Write the raw report, creating the output directory if needed.
fn write_report(output_path: &Path, report: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(output_path, report)
        .with_context(|| format!("failed to write report to {}", output_path.display()))
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (requirements_path, output_path) = resolve_paths(&args);

    let api_key = env::var("GEMINI_API_KEY").map_err(|_| ResearchError::Configuration {
        message: "GEMINI_API_KEY environment variable is not set".into(),
    })?;

    let requirements = fs::read_to_string(&requirements_path).with_context(|| {
        format!(
            "failed to read requirements from {}",
            requirements_path.display()
        )
    })?;

    println!("Starting Deep Research for Kakuro market...");
    println!("This may take several minutes as the agent searches external resources...");

    let settings = ResearchSettings::default();
    let result = research::execute_deep_research(&requirements, &api_key, &settings).await?;

    println!();
    println!("Research Completed Successfully!");
    println!("Duration: {:.1}s", result.research_duration_seconds);
    if let Some(usage) = &result.token_usage {
        println!(
            "Tokens: {} (Est. Cost: ${})",
            usage.total_tokens, usage.estimated_cost_usd
        );
    }

    write_report(&output_path, &result.raw_report)?;

    println!();
    println!("Raw research report saved to: {}", output_path.display());
    println!("Next step: parse this report into the respective research/ directories.");

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter("info").init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("An error occurred during research execution:");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

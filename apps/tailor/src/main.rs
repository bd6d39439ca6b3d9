mod cli;
mod config;
mod errors;
mod llm_client;
mod tailoring;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::tailoring::pipeline::{run_tailoring, TailorRequest};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging; stdout is reserved for status lines
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting tailor v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.llm.clone())?;
    info!("LLM client initialized (model: {})", llm.model());

    let request = TailorRequest {
        job: cli.job,
        resume: cli.resume,
        achievements: cli.achievements,
        instructions: cli.instructions.or(config.instructions_file),
        output_name: cli.output,
        changes_output_name: cli.changes_output,
        // Relative root keeps the printed paths as `generated/<name>`
        root: PathBuf::new(),
    };

    let report = run_tailoring(&llm, &request).await?;
    info!(
        "Outputs written to {} (delimiter found: {})",
        report.paths.dir.display(),
        report.delimiter_found
    );

    println!("Done.");
    Ok(())
}

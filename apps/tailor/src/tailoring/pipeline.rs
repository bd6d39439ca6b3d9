//! Tailoring pipeline — runs one posting against one resume.
//!
//! Flow: resolve output paths → load inputs → load instructions →
//!       build prompt → one completion call → split → write both files.
//!
//! Inputs are read before anything is created on disk, so a missing input
//! leaves the output directory untouched.

use std::path::PathBuf;

use tracing::info;

use crate::errors::TailorError;
use crate::llm_client::prompts::TAILOR_SYSTEM;
use crate::llm_client::Completer;
use crate::tailoring::loader::{load_inputs, read_text};
use crate::tailoring::output::{write_outputs, OutputPaths};
use crate::tailoring::prompt_builder::build_prompt;
use crate::tailoring::splitter::split_completion;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Everything one run needs besides the completion backend.
#[derive(Debug, Clone)]
pub struct TailorRequest {
    pub job: PathBuf,
    pub resume: PathBuf,
    pub achievements: Option<PathBuf>,
    /// Replacement instruction text; the built-in prompt is used when `None`.
    pub instructions: Option<PathBuf>,
    pub output_name: String,
    pub changes_output_name: String,
    /// Directory the `generated/` folder is created in.
    pub root: PathBuf,
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct TailorReport {
    pub paths: OutputPaths,
    pub delimiter_found: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub async fn run_tailoring(
    completer: &dyn Completer,
    request: &TailorRequest,
) -> Result<TailorReport, TailorError> {
    // Step 1: Validate output names before doing any work
    let paths = OutputPaths::resolve(
        &request.root,
        &request.output_name,
        &request.changes_output_name,
    )?;

    // Step 2: Load inputs
    let inputs = load_inputs(
        &request.job,
        &request.resume,
        request.achievements.as_deref(),
    )?;
    info!(
        "Loaded posting ({} chars), resume ({} chars), achievements: {}",
        inputs.job_posting.len(),
        inputs.base_resume.len(),
        inputs.achievements.is_some()
    );

    // Step 3: Instructions
    let instructions = match &request.instructions {
        Some(path) => {
            info!("Using instructions from {}", path.display());
            read_text(path)?
        }
        None => TAILOR_SYSTEM.to_string(),
    };

    // Step 4: Single completion call
    let prompt = build_prompt(&instructions, &inputs);
    println!("Processing... This may take a moment.");
    let completion = completer.complete(&prompt.system, &prompt.user).await?;

    // Step 5: Split and write
    let split = split_completion(&completion);
    write_outputs(&paths, &split)?;

    if split.delimiter_found {
        println!("Tailored resume saved to {}", paths.result.display());
    } else {
        println!("Output saved to {}", paths.result.display());
    }
    println!("Changes and reasoning saved to {}", paths.reasoning.display());

    Ok(TailorReport {
        paths,
        delimiter_found: split.delimiter_found,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

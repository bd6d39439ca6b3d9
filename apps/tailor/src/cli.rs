use std::path::PathBuf;

use clap::Parser;

use crate::tailoring::output::{DEFAULT_REASONING_NAME, DEFAULT_RESULT_NAME};

#[derive(Debug, Parser)]
#[command(name = "tailor")]
#[command(
    about = "Customize a LaTeX resume for a job posting using an LLM",
    long_about = None
)]
pub struct Cli {
    /// Path to the job posting (txt or pdf)
    #[arg(long)]
    pub job: PathBuf,

    /// Path to the base LaTeX resume (.tex)
    #[arg(long)]
    pub resume: PathBuf,

    /// Path to an achievement bank with extra verified experience
    #[arg(long)]
    pub achievements: Option<PathBuf>,

    /// File name for the tailored resume, written under generated/
    #[arg(long, default_value = DEFAULT_RESULT_NAME)]
    pub output: String,

    /// File name for the changes and reasoning markdown, written under generated/
    #[arg(long = "changes_output", alias = "changes-output", default_value = DEFAULT_REASONING_NAME)]
    pub changes_output: String,

    /// Replace the built-in editing instructions with the contents of this file
    #[arg(long)]
    pub instructions: Option<PathBuf>,
}

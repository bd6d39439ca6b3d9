use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::LlmConfig;

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Low sampling temperature keeps edits close to the base resume.
pub const TEMPERATURE: f32 = 0.3;

/// Application configuration loaded from environment variables.
/// Fails at startup if the API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    /// Replacement for the built-in editing instructions, if any.
    pub instructions_file: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("OPENAI_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Config {
            llm: LlmConfig {
                api_key: require_env(&lookup, "OPENAI_API_KEY")?,
                model: lookup("OPENAI_MODEL")
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: base_url.trim_end_matches('/').to_string(),
                temperature: TEMPERATURE,
            },
            instructions_file: lookup("TAILOR_INSTRUCTIONS_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "warn".to_string()),
        })
    }
}

fn require_env<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

//! Prompt assembly — instruction text as the system message, labeled input
//! sections as the user message. Plain concatenation, no escaping.

use crate::tailoring::loader::TailorInputs;

/// The request payload for one completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct TailorPrompt {
    pub system: String,
    pub user: String,
}

pub fn build_prompt(instructions: &str, inputs: &TailorInputs) -> TailorPrompt {
    let mut user = format!(
        "JOB POSTING:\n{}\n\nBASE RESUME (LaTeX):\n{}\n\n",
        inputs.job_posting, inputs.base_resume
    );
    if let Some(achievements) = &inputs.achievements {
        user.push_str(&format!("ACHIEVEMENT BANK:\n{achievements}\n\n"));
    }

    TailorPrompt {
        system: instructions.to_string(),
        user,
    }
}

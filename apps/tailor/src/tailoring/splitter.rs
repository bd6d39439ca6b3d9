//! Splits a completion into the change log and the tailored document.

use tracing::warn;

use crate::llm_client::prompts::SECTION_DELIMITER;

/// Prefix written to the reasoning file when the response has no delimiter.
pub const MISSING_REASONING_NOTE: &str = "Could not extract changes and reasoning section.\n\n";

/// The two halves of a completion.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutput {
    /// Markdown change log.
    pub reasoning: String,
    /// Tailored LaTeX document.
    pub result: String,
    pub delimiter_found: bool,
}

/// Splits on the first `---`.
///
/// Both halves are trimmed. Without a delimiter the whole response becomes the
/// result, untouched, and the reasoning is the placeholder note followed by the
/// response.
pub fn split_completion(output: &str) -> SplitOutput {
    match output.split_once(SECTION_DELIMITER) {
        Some((reasoning, result)) => {
            if result.contains(SECTION_DELIMITER) {
                // LaTeX uses `---` for em dashes, so a later marker may be document text.
                warn!(
                    "Delimiter '{}' appears more than once; split at the first occurrence. Check the output.",
                    SECTION_DELIMITER
                );
            }
            SplitOutput {
                reasoning: reasoning.trim().to_string(),
                result: result.trim().to_string(),
                delimiter_found: true,
            }
        }
        None => {
            warn!("Response has no '{}' delimiter; writing it whole", SECTION_DELIMITER);
            SplitOutput {
                reasoning: format!("{MISSING_REASONING_NOTE}{output}"),
                result: output.to_string(),
                delimiter_found: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_delimiter() {
        let response = "## Skills\n- changed X (Reason: Y)\n---\n\\documentclass{article}...";
        let split = split_completion(response);

        assert!(split.delimiter_found);
        assert_eq!(split.reasoning, "## Skills\n- changed X (Reason: Y)");
        assert_eq!(split.result, "\\documentclass{article}...");
    }

    #[test]
    fn test_split_halves_reconstruct_trimmed_response() {
        let response = "  ## Experience\n    - kept---\\documentclass{article}\n\n";
        let split = split_completion(response);

        let rebuilt = format!("{}{}{}", split.reasoning, SECTION_DELIMITER, split.result);
        assert_eq!(rebuilt, response.trim());
    }

    #[test]
    fn test_no_delimiter_keeps_response_verbatim() {
        let response = "\\documentclass{article}...no delimiter here\n";
        let split = split_completion(response);

        assert!(!split.delimiter_found);
        assert_eq!(split.result, response);
        assert_eq!(
            split.reasoning,
            format!("Could not extract changes and reasoning section.\n\n{response}")
        );
    }

    #[test]
    fn test_splits_at_first_of_many_delimiters() {
        let response = "## Skills\n---\nPages 1---2 of the doc";
        let split = split_completion(response);

        assert_eq!(split.reasoning, "## Skills");
        assert_eq!(split.result, "Pages 1---2 of the doc");
    }

    #[test]
    fn test_empty_halves_are_allowed() {
        let split = split_completion("---");
        assert!(split.delimiter_found);
        assert_eq!(split.reasoning, "");
        assert_eq!(split.result, "");
    }

    #[test]
    fn test_two_hyphens_are_not_a_delimiter() {
        let split = split_completion("en--dash only");
        assert!(!split.delimiter_found);
    }

    mod properties {
        use crate::llm_client::prompts::SECTION_DELIMITER;
        use crate::tailoring::splitter::{split_completion, MISSING_REASONING_NOTE};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn single_delimiter_yields_trimmed_halves(
                a in "[^-]{0,60}",
                b in "[^-]{0,60}",
            ) {
                let response = format!("{a}{SECTION_DELIMITER}{b}");
                let split = split_completion(&response);

                prop_assert!(split.delimiter_found);
                prop_assert_eq!(split.reasoning, a.trim());
                prop_assert_eq!(split.result, b.trim());
            }

            #[test]
            fn single_delimiter_rebuilds_trimmed_response(
                a in "[^-]{0,60}",
                b in "[^-]{0,60}",
                lead in "[ \t\n]{0,4}",
                trail in "[ \t\n]{0,4}",
            ) {
                let response = format!("{lead}{}{SECTION_DELIMITER}{}{trail}", a.trim(), b.trim());
                let split = split_completion(&response);

                let rebuilt = format!("{}{SECTION_DELIMITER}{}", split.reasoning, split.result);
                prop_assert_eq!(rebuilt, response.trim());
            }

            #[test]
            fn no_delimiter_keeps_response_and_adds_note(
                response in "(-{0,2}[^-]){0,40}-{0,2}",
            ) {
                prop_assume!(!response.contains(SECTION_DELIMITER));
                let split = split_completion(&response);

                prop_assert!(!split.delimiter_found);
                prop_assert_eq!(&split.result, &response);
                prop_assert_eq!(split.reasoning, format!("{MISSING_REASONING_NOTE}{response}"));
            }
        }
    }
}

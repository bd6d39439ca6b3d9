//! Input loading — reads postings, templates and notes from disk.
//!
//! Plain files are read as UTF-8. A `.pdf` posting is run through `pdf-extract`.

use std::path::Path;

use tracing::debug;

use crate::errors::TailorError;

/// The texts one tailoring run works from. Immutable once read.
#[derive(Debug, Clone)]
pub struct TailorInputs {
    pub job_posting: String,
    pub base_resume: String,
    /// `None` when no notes file was given or the file is blank.
    pub achievements: Option<String>,
}

/// Reads the full content of `path` as text.
pub fn read_text(path: &Path) -> Result<String, TailorError> {
    if is_pdf(path) {
        return read_pdf(path);
    }

    let text = std::fs::read_to_string(path).map_err(|source| TailorError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

/// Loads every input for a run. Fails on the first unreadable path.
pub fn load_inputs(
    job: &Path,
    resume: &Path,
    achievements: Option<&Path>,
) -> Result<TailorInputs, TailorError> {
    let job_posting = read_text(job)?;
    let base_resume = read_text(resume)?;
    let achievements = match achievements {
        Some(path) => Some(read_text(path)?).filter(|text| !text.trim().is_empty()),
        None => None,
    };

    Ok(TailorInputs {
        job_posting,
        base_resume,
        achievements,
    })
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

fn read_pdf(path: &Path) -> Result<String, TailorError> {
    let bytes = std::fs::read(path).map_err(|source| TailorError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let text =
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| TailorError::PdfExtract {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!("Extracted {} chars from PDF {}", text.len(), path.display());
    Ok(text)
}

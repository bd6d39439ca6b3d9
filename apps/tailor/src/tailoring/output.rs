//! Output placement and writing.
//!
//! Caller-supplied names are reduced to their final path component and placed
//! under the output directory, so `../../etc/x` lands at `generated/x`.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::TailorError;
use crate::tailoring::splitter::SplitOutput;

/// Directory (relative to the working root) that receives both outputs.
pub const GENERATED_DIR: &str = "generated";
pub const DEFAULT_RESULT_NAME: &str = "tailored_resume.tex";
pub const DEFAULT_REASONING_NAME: &str = "changes_and_reasoning.md";

/// Resolved destinations for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub dir: PathBuf,
    pub result: PathBuf,
    pub reasoning: PathBuf,
}

impl OutputPaths {
    /// Places both names under `root/generated`. Nothing is touched on disk.
    pub fn resolve(
        root: &Path,
        result_name: &str,
        reasoning_name: &str,
    ) -> Result<Self, TailorError> {
        let dir = root.join(GENERATED_DIR);
        Ok(Self {
            result: dir.join(basename(result_name)?),
            reasoning: dir.join(basename(reasoning_name)?),
            dir,
        })
    }
}

fn basename(name: &str) -> Result<&Path, TailorError> {
    Path::new(name)
        .file_name()
        .map(Path::new)
        .ok_or_else(|| TailorError::InvalidOutputName(name.to_string()))
}

/// Creates the output directory if needed and writes both halves.
pub fn write_outputs(paths: &OutputPaths, split: &SplitOutput) -> Result<(), TailorError> {
    std::fs::create_dir_all(&paths.dir).map_err(|source| TailorError::Write {
        path: paths.dir.clone(),
        source,
    })?;

    write_file(&paths.result, &split.result)?;
    write_file(&paths.reasoning, &split.reasoning)?;

    info!(
        "Wrote {} and {}",
        paths.result.display(),
        paths.reasoning.display()
    );
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), TailorError> {
    std::fs::write(path, contents).map_err(|source| TailorError::Write {
        path: path.to_path_buf(),
        source,
    })
}

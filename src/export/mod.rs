pub mod csv;
pub mod markdown;
pub mod titles;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::PipelineError;

pub const SESSIONS_TABLE_FILE: &str = "gtc_sessions_table.md";
pub const SESSIONS_CSV_FILE: &str = "gtc_sessions_extracted.csv";
pub const TITLES_FILE: &str = "gtc_sessions_titles.txt";

/// Whole-file overwrite of `dir/name`, creating `dir` if needed.
pub fn write_output(dir: &Path, name: &str, contents: &[u8]) -> Result<PathBuf, PipelineError> {
    fs::create_dir_all(dir).map_err(|e| PipelineError::io(dir, e))?;
    let path = dir.join(name);
    fs::write(&path, contents).map_err(|e| PipelineError::io(&path, e))?;
    info!(path = %path.display(), bytes = contents.len(), "Wrote output");
    Ok(path)
}

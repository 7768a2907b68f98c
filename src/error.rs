use std::path::PathBuf;

/// Fatal pipeline conditions. Everything else degrades to empty fields.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("HTML file not found at {0:?}")]
    HtmlNotFound(PathBuf),
    #[error("no session containers found; extraction failed")]
    NoSessions,
    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("chart encoding failed: {0}")]
    Chart(#[from] image::ImageError),
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }
}

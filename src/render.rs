use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{info, warn};
use url::Url;

use crate::error::PipelineError;
use crate::settings::RenderSettings;

/// Produce "DOM ready" HTML for `path`.
///
/// With a browser configured, its `--dump-dom` output is used. A timeout,
/// spawn failure, bad exit or empty output falls back to the file as-is.
/// Only a missing or unreadable file is an error.
pub async fn rendered_html(path: &Path, settings: &RenderSettings) -> Result<String, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::HtmlNotFound(path.to_path_buf()));
    }
    let abs = std::fs::canonicalize(path).map_err(|e| PipelineError::io(path, e))?;
    // Saved pages are not always UTF-8; undecodable bytes become U+FFFD.
    let bytes = tokio::fs::read(&abs)
        .await
        .map_err(|e| PipelineError::io(&abs, e))?;
    let raw = String::from_utf8_lossy(&bytes).into_owned();

    let Some(browser) = settings.browser.as_deref() else {
        info!(path = %abs.display(), "No browser configured, parsing file as-is");
        return Ok(raw);
    };

    let limit = Duration::from_secs(settings.timeout_secs);
    Ok(dump_dom(browser, &abs, limit).await.unwrap_or(raw))
}

async fn dump_dom(browser: &str, file: &Path, limit: Duration) -> Option<String> {
    let Ok(url) = Url::from_file_path(file) else {
        warn!(path = %file.display(), "Path cannot be expressed as a file URL, parsing file as-is");
        return None;
    };
    info!(browser, %url, "Rendering page in headless browser");

    let run = Command::new(browser)
        .args(["--headless", "--disable-gpu", "--dump-dom"])
        .arg(url.as_str())
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .output();

    match tokio::time::timeout(limit, run).await {
        Err(_) => {
            warn!(
                timeout_secs = limit.as_secs(),
                "Page took too long to render, proceeding with current state"
            );
            None
        }
        Ok(Err(e)) => {
            warn!(browser, error = %e, "Browser could not be started, parsing file as-is");
            None
        }
        Ok(Ok(out)) if !out.status.success() => {
            warn!(browser, status = %out.status, "Browser exited with failure, parsing file as-is");
            None
        }
        Ok(Ok(out)) => {
            let html = String::from_utf8_lossy(&out.stdout).into_owned();
            if html.trim().is_empty() {
                warn!(browser, "Browser returned an empty DOM, parsing file as-is");
                None
            } else {
                Some(html)
            }
        }
    }
}

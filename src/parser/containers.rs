use tracing::{info, warn};

use super::dom::{class_contains, class_is, find_all, is_tag, DomNode};
use crate::error::PipelineError;

const TITLE_CLASS: &str = "catalog-result-title session-title";
const TITLE_CLASS_TOKEN: &str = "session-title";

/// Locate every session title container under `root`.
///
/// Exact class match first; if that finds nothing, any div whose class
/// attribute contains `session-title`. Zero matches is fatal.
pub fn find_title_containers<N: DomNode>(root: N) -> Result<Vec<N>, PipelineError> {
    let exact = find_all(root, |n| is_tag(n, "div") && class_is(n, TITLE_CLASS));
    if !exact.is_empty() {
        info!(count = exact.len(), "Found session containers");
        return Ok(exact);
    }

    warn!("No sessions found using exact class selector, trying class substring match");
    let loose = find_all(root, |n| is_tag(n, "div") && class_contains(n, TITLE_CLASS_TOKEN));
    if loose.is_empty() {
        return Err(PipelineError::NoSessions);
    }
    info!(count = loose.len(), "Found session containers (substring match)");
    Ok(loose)
}

/// The structural element holding one session entry.
pub fn session_block<N: DomNode>(container: N) -> N {
    container.parent_element().unwrap_or(container)
}

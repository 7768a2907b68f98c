pub mod containers;
pub mod dom;
pub mod extract;

use indicatif::ProgressBar;
use scraper::Html;
use tracing::info;

use crate::error::PipelineError;
use crate::model::SessionRecord;

/// Rendered HTML → one record per title container, in document order.
/// Entries are not consolidated here.
pub fn process_html(html: &str, pb: &ProgressBar) -> Result<Vec<SessionRecord>, PipelineError> {
    let doc = Html::parse_document(html);
    let containers = containers::find_title_containers(doc.root_element())?;

    pb.set_length(containers.len() as u64);
    let mut sessions = Vec::with_capacity(containers.len());
    for container in containers {
        if let Some(session) = extract::extract_session(container) {
            sessions.push(session);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        extracted = sessions.len(),
        with_replay = sessions.iter().filter(|s| s.replay_url.is_some()).count(),
        "Session extraction finished"
    );
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_end_to_end() {
        let html = std::fs::read_to_string("tests/fixtures/catalog.html").unwrap();
        let sessions = process_html(&html, &ProgressBar::hidden()).unwrap();
        assert_eq!(sessions.len(), 4);
        assert_eq!(sessions.iter().filter(|s| s.replay_url.is_some()).count(), 3);
    }

    #[test]
    fn empty_page_fails() {
        let err = process_html("<html><body></body></html>", &ProgressBar::hidden()).unwrap_err();
        assert!(matches!(err, PipelineError::NoSessions));
    }
}

pub mod links;
pub mod schedule;
pub mod speakers;

use tracing::debug;

use super::containers::session_block;
use super::dom::{class_contains, find_first, has_class, is_tag, DomNode};
use crate::model::SessionRecord;

/// Build one record from a title container. Every lookup is scoped to the
/// container's session block; missing pieces become `None`/empty.
///
/// Returns `None` when the container has no title link.
pub fn extract_session<N: DomNode>(container: N) -> Option<SessionRecord> {
    let block = session_block(container);

    let Some(title_link) = find_first(container, |n| is_tag(n, "a")) else {
        debug!("Title container without a link, skipping");
        return None;
    };
    let title = title_link.full_text().trim().to_string();
    if title.is_empty() {
        debug!("Title link without text, skipping");
        return None;
    }
    let url = title_link.attribute("href").map(str::to_string);

    let session_code = session_code(block);
    let replay_url = links::replay_url(block, url.as_deref(), session_code.as_deref());

    Some(SessionRecord {
        title,
        abstract_text: abstract_text(block),
        speakers: speakers::extract(block),
        date_time: schedule::date_time(block),
        location: schedule::location(block),
        files: links::files(block),
        replay_url,
        session_code,
        url,
    })
}

/// A div whose own text is a bracketed identifier, e.g. `[S72345]`.
fn session_code<N: DomNode>(block: N) -> Option<String> {
    find_first(block, |n| {
        is_tag(n, "div")
            && n.sole_text().is_some_and(|t| {
                let t = t.trim();
                t.starts_with('[') && t.contains(']')
            })
    })
    .map(|n| n.full_text().trim().to_string())
}

fn abstract_text<N: DomNode>(block: N) -> Option<String> {
    find_first(block, |n| is_tag(n, "div") && has_class(n, "description"))
        .or_else(|| find_first(block, |n| is_tag(n, "div") && class_contains(n, "description")))
        .map(|n| n.full_text().trim().to_string())
        .filter(|t| !t.is_empty())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::containers::find_title_containers;
    use scraper::Html;

    fn fixture() -> Html {
        let html = std::fs::read_to_string("tests/fixtures/catalog.html").unwrap();
        Html::parse_document(&html)
    }

    fn sessions(doc: &Html) -> Vec<SessionRecord> {
        find_title_containers(doc.root_element())
            .unwrap()
            .into_iter()
            .filter_map(extract_session)
            .collect()
    }

    #[test]
    fn fixture_session_count() {
        let doc = fixture();
        // Four entries, one of which repeats the first session.
        assert_eq!(sessions(&doc).len(), 4);
    }

    #[test]
    fn structured_session_fields() {
        let doc = fixture();
        let s = &sessions(&doc)[0];
        assert_eq!(s.session_code.as_deref(), Some("[S72345]"));
        assert_eq!(s.title, "Accelerating LLM Inference at Scale");
        assert_eq!(
            s.url.as_deref(),
            Some("https://www.nvidia.com/gtc/session-catalog/?sid=S72345")
        );
        assert!(s.abstract_text.as_deref().unwrap().starts_with("Learn how to serve"));
        assert_eq!(s.speakers.len(), 2);
        assert_eq!(s.speakers[0].name, "Ada Lovelace");
        assert_eq!(
            s.speakers[0].title_organization.as_deref(),
            Some("Chief Scientist, Analytical Engines")
        );
        assert_eq!(
            s.date_time.as_deref(),
            Some("Tuesday, Mar 18 | 10:00 AM - 10:40 AM PDT")
        );
        assert_eq!(s.location.as_deref(), Some("San Jose Convention Center, Room 210C"));
        assert_eq!(s.files.len(), 2);
        assert_eq!(s.files[0].file_name, "Slides");
        assert_eq!(
            s.replay_url.as_deref(),
            Some("https://www.nvidia.com/en-us/on-demand/session/gtc25-s72345/")
        );
    }

    #[test]
    fn text_speakers_and_lam_exclusion() {
        let doc = fixture();
        let s = &sessions(&doc)[1];
        assert_eq!(s.session_code.as_deref(), Some("[P1234]"));
        let names: Vec<&str> = s.speakers.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe", "John Roe"]);
        assert_eq!(s.date_time.as_deref(), Some("Wednesday, Mar 19 | 2:00 PM - 2:50 PM PDT"));
        assert_eq!(s.location.as_deref(), Some("Room 112"));
        // No replay link: falls back to the detail page for a P code.
        assert_eq!(s.replay_url, s.url);
    }

    #[test]
    fn sparse_session_stays_in_its_block() {
        let doc = fixture();
        let s = &sessions(&doc)[2];
        assert_eq!(s.session_code.as_deref(), Some("[T5555]"));
        assert!(s.speakers.is_empty());
        assert!(s.date_time.is_none());
        assert!(s.location.is_none());
        assert!(s.abstract_text.is_none());
        assert!(s.files.is_empty());
        assert!(s.replay_url.is_none());
    }

    #[test]
    fn container_without_link_skipped() {
        let doc = Html::parse_document(
            r#"<div><div class="catalog-result-title session-title">No link</div></div>"#,
        );
        assert!(sessions(&doc).is_empty());
    }

    #[test]
    fn abstract_substring_fallback() {
        let doc = Html::parse_document(
            r#"<div><div class="catalog-result-title session-title"><a href="/x">X</a></div>
               <div class="session-description-body"> Body text </div></div>"#,
        );
        let s = &sessions(&doc)[0];
        assert_eq!(s.abstract_text.as_deref(), Some("Body text"));
        assert!(s.session_code.is_none());
    }
}

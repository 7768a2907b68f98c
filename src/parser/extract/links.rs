use crate::model::{strip_brackets, SessionFile};
use crate::parser::dom::{class_contains, find_all, find_first, is_tag, DomNode};

const REPLAY_INDICATORS: &[&str] = &["replay", "watch", "video", "stream", "recording"];
/// Session codes whose detail page doubles as the replay page.
const REPLAY_CODE_PREFIXES: &[char] = &['D', 'P', 'S'];

fn is_link<N: DomNode>(n: &N) -> bool {
    is_tag(n, "a") && n.attribute("href").is_some()
}

pub fn files<N: DomNode>(block: N) -> Vec<SessionFile> {
    let Some(component) = find_first(block, |n| {
        is_tag(n, "div") && class_contains(n, "session-files")
    }) else {
        return Vec::new();
    };

    find_all(component, is_link)
        .into_iter()
        .filter_map(|a| {
            Some(SessionFile {
                file_name: a.full_text().trim().to_string(),
                file_url: a.attribute("href")?.to_string(),
            })
        })
        .collect()
}

pub fn has_replay_indicator(text: &str) -> bool {
    let lower = text.to_lowercase();
    REPLAY_INDICATORS.iter().any(|kw| lower.contains(kw))
}

/// Code prefix check used by the replay fallback. Brackets are ignored.
pub fn has_replay_prefix(code: &str) -> bool {
    strip_brackets(code)
        .chars()
        .next()
        .is_some_and(|c| REPLAY_CODE_PREFIXES.contains(&c))
}

/// First link in the block whose text or href names a replay. Otherwise the
/// session's own URL when its code carries a replay prefix.
///
/// The fallback is a heuristic: a `D`/`P`/`S` session without any replay
/// link still gets its detail page reported as the replay.
pub fn replay_url<N: DomNode>(
    block: N,
    session_url: Option<&str>,
    session_code: Option<&str>,
) -> Option<String> {
    let explicit = find_all(block, is_link).into_iter().find_map(|a| {
        let href = a.attribute("href")?;
        if has_replay_indicator(&a.full_text()) || has_replay_indicator(href) {
            Some(href.to_string())
        } else {
            None
        }
    });

    explicit.or_else(|| {
        session_url
            .filter(|_| session_code.is_some_and(has_replay_prefix))
            .map(str::to_string)
    })
}

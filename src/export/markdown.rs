use itertools::Itertools;

use crate::model::SessionRecord;

const ABSTRACT_LIMIT: usize = 100;
const CELL_BREAK: &str = "<br>";

/// Collapse whitespace (newlines included) and escape the column delimiter,
/// so no input can break a table row.
pub fn clean_cell(text: &str) -> String {
    text.replace('|', "\\|").split_whitespace().join(" ")
}

/// Export-time check, stricter than extraction: needs a spaced `AM`/`PM`.
pub fn is_valid_time(text: &str) -> bool {
    (text.contains(" AM") || text.contains(" PM")) && !text.contains("LAM")
}

pub fn truncate_abstract(text: &str) -> String {
    let cleaned = clean_cell(text);
    if cleaned.chars().count() > ABSTRACT_LIMIT {
        let head: String = cleaned.chars().take(ABSTRACT_LIMIT).collect();
        format!("{}...", head)
    } else {
        cleaned
    }
}

fn speakers_cell(session: &SessionRecord) -> String {
    session
        .speakers
        .iter()
        .map(|s| match &s.title_organization {
            Some(org) if !org.is_empty() => format!("{} ({})", s.name, org),
            _ => s.name.clone(),
        })
        .map(|s| clean_cell(&s))
        .filter(|s| !s.is_empty())
        .join(CELL_BREAK)
}

fn files_cell(session: &SessionRecord) -> String {
    session
        .files
        .iter()
        .filter_map(|f| {
            let name = clean_cell(&f.file_name);
            let url = clean_cell(&f.file_url);
            if name.is_empty() || url.is_empty() {
                None
            } else {
                Some(format!("[{}]({})", name, url))
            }
        })
        .join(CELL_BREAK)
}

fn row(session: &SessionRecord) -> String {
    let opt = |v: &Option<String>| v.as_deref().map(clean_cell).unwrap_or_default();

    let date_time = opt(&session.date_time);
    let date_time = if is_valid_time(&date_time) {
        date_time
    } else {
        String::new()
    };
    let replay = session
        .replay_url
        .as_deref()
        .map(clean_cell)
        .filter(|u| !u.is_empty())
        .map(|u| format!("[Replay]({})", u))
        .unwrap_or_default();
    let abstract_cell = session
        .abstract_text
        .as_deref()
        .map(truncate_abstract)
        .unwrap_or_default();

    format!(
        "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
        opt(&session.session_code),
        clean_cell(&session.title),
        speakers_cell(session),
        date_time,
        opt(&session.location),
        files_cell(session),
        replay,
        abstract_cell,
    )
}

/// One table row per (already consolidated) session.
pub fn render_sessions_table(catalog_title: &str, sessions: &[SessionRecord]) -> String {
    let mut md = format!("# {} Sessions\n\n", catalog_title);
    md.push_str("| Session Code | Title | Speakers | Date/Time | Location | Files | Replay | Abstract |\n");
    md.push_str("|-------------|-------|----------|-----------|----------|-------|--------|----------|\n");
    for session in sessions {
        md.push_str(&row(session));
    }
    md
}

use itertools::Itertools;

use crate::model::SessionRecord;

/// Header, blank line, then `Title [CODE]` per session. This is the input
/// format the analyzer reads.
pub fn render_title_list(catalog_title: &str, sessions: &[SessionRecord]) -> String {
    let mut out = format!("# {} Session Titles\n\n", catalog_title);
    for s in sessions {
        let title = s.title.split_whitespace().join(" ");
        match s.bare_code() {
            Some(code) => out.push_str(&format!("{} [{}]\n", title, code)),
            None => out.push_str(&format!("{}\n", title)),
        }
    }
    out
}

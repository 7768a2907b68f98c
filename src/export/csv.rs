use std::io::{self, Write};
use std::mem::take;

use itertools::Itertools;

use crate::model::SessionRecord;

/// Stable output schema; every row has every column.
pub const COLUMNS: [&str; 10] = [
    "session_code",
    "title",
    "url",
    "abstract",
    "date_time",
    "location",
    "files",
    "replay_url",
    "speaker_name",
    "speaker_title_org",
];

/// One CSV line: session fields repeated per speaker. `None` is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    pub cells: [Option<String>; 10],
}

fn files_field(session: &SessionRecord) -> Option<String> {
    if session.files.is_empty() {
        return None;
    }
    Some(
        session
            .files
            .iter()
            .map(|f| format!("{}: {}", f.file_name, f.file_url))
            .join("; "),
    )
}

/// A session with no speakers still yields exactly one row.
pub fn flatten(sessions: &[SessionRecord]) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    for s in sessions {
        let base = |name: Option<String>, org: Option<String>| FlatRow {
            cells: [
                s.session_code.clone(),
                Some(s.title.clone()),
                s.url.clone(),
                s.abstract_text.clone(),
                s.date_time.clone(),
                s.location.clone(),
                files_field(s),
                s.replay_url.clone(),
                name,
                org,
            ],
        };
        if s.speakers.is_empty() {
            rows.push(base(None, None));
        } else {
            for speaker in &s.speakers {
                rows.push(base(
                    Some(speaker.name.clone()),
                    speaker.title_organization.clone(),
                ));
            }
        }
    }
    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn render_csv(sessions: &[SessionRecord]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    write_row(&mut out, &COLUMNS)?;
    for row in flatten(sessions) {
        let cells: Vec<&str> = row.cells.iter().map(|c| c.as_deref().unwrap_or("")).collect();
        write_row(&mut out, &cells)?;
    }
    Ok(out)
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SessionFile, Speaker};

    fn cell<'a>(row: &'a FlatRow, column: &str) -> Option<&'a str> {
        let i = COLUMNS.iter().position(|c| *c == column)?;
        row.cells[i].as_deref()
    }

    fn speaker(name: &str, org: Option<&str>) -> Speaker {
        Speaker {
            name: name.into(),
            title_organization: org.map(str::to_string),
        }
    }

    fn session(speakers: Vec<Speaker>) -> SessionRecord {
        SessionRecord {
            session_code: Some("[S1]".into()),
            title: "Intro, Part \"One\"".into(),
            url: Some("/s1".into()),
            replay_url: Some("/s1".into()),
            speakers,
            ..Default::default()
        }
    }

    #[test]
    fn no_speakers_one_row_with_null_speaker() {
        let rows = flatten(&[session(vec![])]);
        assert_eq!(rows.len(), 1);
        assert_eq!(cell(&rows[0], "speaker_name"), None);
        assert_eq!(cell(&rows[0], "speaker_title_org"), None);
        assert_eq!(cell(&rows[0], "title"), Some("Intro, Part \"One\""));
    }

    #[test]
    fn one_row_per_speaker() {
        let rows = flatten(&[session(vec![
            speaker("Ada", Some("Chief")),
            speaker("Grace", None),
            speaker("Alan", None),
        ])]);
        assert_eq!(rows.len(), 3);
        let names: Vec<_> = rows.iter().map(|r| cell(r, "speaker_name").unwrap()).collect();
        assert_eq!(names, vec!["Ada", "Grace", "Alan"]);
        assert!(rows.iter().all(|r| cell(r, "replay_url") == Some("/s1")));
        assert!(rows.iter().all(|r| cell(r, "session_code") == Some("[S1]")));
    }

    #[test]
    fn files_joined_with_semicolons() {
        let mut s = session(vec![]);
        s.files = vec![
            SessionFile {
                file_name: "Slides".into(),
                file_url: "/a.pdf".into(),
            },
            SessionFile {
                file_name: "Code".into(),
                file_url: "/b.zip".into(),
            },
        ];
        let rows = flatten(&[s]);
        assert_eq!(cell(&rows[0], "files"), Some("Slides: /a.pdf; Code: /b.zip"));
        assert_eq!(cell(&flatten(&[session(vec![])])[0], "files"), None);
    }

    #[test]
    fn header_always_complete_and_quoting_survives_parse() {
        let bytes = render_csv(&[session(vec![speaker("Ada", Some("Chief, Engines"))])]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let rows = parse_rows(&text);
        assert_eq!(rows[0], COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>());
        assert_eq!(rows[1].len(), COLUMNS.len());
        assert_eq!(rows[1][1], "Intro, Part \"One\"");
        assert_eq!(rows[1][3], "");
        assert_eq!(rows[1][9], "Chief, Engines");
    }

    #[test]
    fn header_only_when_empty() {
        let text = String::from_utf8(render_csv(&[]).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn parse_multiline_quoted_field() {
        let rows = parse_rows("a,b\r\n\"x\ny\",z");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["x\ny", "z"]]);
    }
}

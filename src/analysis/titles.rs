use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::PipelineError;
use crate::export::csv::parse_rows;
use crate::model::strip_brackets;

pub const UNKNOWN_CODE: &str = "UNKNOWN";

static TRAILING_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TitleEntry {
    pub title: String,
    pub code: String,
}

/// `Title text [CODE]`; without a trailing bracket group the code is `UNKNOWN`.
pub fn parse_line(line: &str) -> TitleEntry {
    let line = line.trim();
    match TRAILING_CODE_RE.captures(line) {
        Some(caps) => {
            let start = caps.get(0).map_or(line.len(), |m| m.start());
            TitleEntry {
                title: line[..start].trim().to_string(),
                code: caps[1].to_string(),
            }
        }
        None => TitleEntry {
            title: line.to_string(),
            code: UNKNOWN_CODE.to_string(),
        },
    }
}

/// The first two lines are a header and a blank line.
pub fn parse_title_list(text: &str) -> Vec<TitleEntry> {
    text.lines()
        .skip(2)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(parse_line)
        .collect()
}

/// Unique `(title, code)` pairs from the extractor CSV, in file order.
pub fn titles_from_csv(text: &str) -> Vec<TitleEntry> {
    let rows = parse_rows(text);
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };
    let col = |name: &str| header.iter().position(|h| h.trim() == name);
    let Some(title_col) = col("title") else {
        return Vec::new();
    };
    let code_col = col("session_code");

    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for row in body {
        let title = row.get(title_col).map(|t| t.trim()).unwrap_or_default();
        if title.is_empty() {
            continue;
        }
        let code = code_col
            .and_then(|i| row.get(i))
            .map(|c| strip_brackets(c))
            .filter(|c| !c.is_empty())
            .unwrap_or(UNKNOWN_CODE);
        let entry = TitleEntry {
            title: title.to_string(),
            code: code.to_string(),
        };
        if seen.insert(entry.clone()) {
            entries.push(entry);
        }
    }
    entries
}

/// Prefer the title list; fall back to the extractor CSV.
pub fn load_titles(titles_path: &Path, csv_path: &Path) -> Result<Vec<TitleEntry>, PipelineError> {
    if titles_path.exists() {
        let text = std::fs::read_to_string(titles_path).map_err(|e| PipelineError::io(titles_path, e))?;
        let entries = parse_title_list(&text);
        info!(path = %titles_path.display(), count = entries.len(), "Loaded session titles");
        return Ok(entries);
    }
    if csv_path.exists() {
        let text = std::fs::read_to_string(csv_path).map_err(|e| PipelineError::io(csv_path, e))?;
        let entries = titles_from_csv(&text);
        info!(path = %csv_path.display(), count = entries.len(), "Loaded session titles from CSV");
        return Ok(entries);
    }
    Err(PipelineError::io(
        titles_path,
        io::Error::new(io::ErrorKind::NotFound, "neither title list nor CSV found"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_split_from_title() {
        let e = parse_line("Accelerating LLM Inference at Scale [S72345]");
        assert_eq!(e.title, "Accelerating LLM Inference at Scale");
        assert_eq!(e.code, "S72345");
    }

    #[test]
    fn missing_code_is_unknown() {
        let e = parse_line("Keynote");
        assert_eq!(e.title, "Keynote");
        assert_eq!(e.code, UNKNOWN_CODE);

        // Bracket group not at the end is part of the title.
        let e = parse_line("[Live] Ask the Experts");
        assert_eq!(e.title, "[Live] Ask the Experts");
        assert_eq!(e.code, UNKNOWN_CODE);
    }

    #[test]
    fn only_last_bracket_group_is_the_code() {
        let e = parse_line("CUDA [Beginner] Lab [DLIT1234]");
        assert_eq!(e.title, "CUDA [Beginner] Lab");
        assert_eq!(e.code, "DLIT1234");
    }

    #[test]
    fn fixture_list_skips_header() {
        let text = std::fs::read_to_string("tests/fixtures/titles.txt").unwrap();
        let entries = parse_title_list(&text);
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].code, "S72345");
        assert!(entries.iter().any(|e| e.code == UNKNOWN_CODE));
    }

    #[test]
    fn csv_titles_deduplicated() {
        let csv = "session_code,title,url,speaker_name\n\
                   [S1],Intro,/a,Ada\n\
                   [S1],Intro,/a,Grace\n\
                   ,Keynote,/k,\n\
                   [S2],,/b,\n";
        let entries = titles_from_csv(csv);
        assert_eq!(
            entries,
            vec![
                TitleEntry { title: "Intro".into(), code: "S1".into() },
                TitleEntry { title: "Keynote".into(), code: UNKNOWN_CODE.into() },
            ]
        );
    }

    #[test]
    fn load_prefers_list_then_csv() {
        let tmp = tempfile::tempdir().unwrap();
        let list = tmp.path().join("titles.txt");
        let csv = tmp.path().join("sessions.csv");

        assert!(load_titles(&list, &csv).is_err());

        std::fs::write(&csv, "session_code,title\n[S9],From CSV\n").unwrap();
        assert_eq!(load_titles(&list, &csv).unwrap()[0].title, "From CSV");

        std::fs::write(&list, "# Titles\n\nFrom List [S8]\n").unwrap();
        assert_eq!(load_titles(&list, &csv).unwrap()[0].code, "S8");
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub title_organization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFile {
    pub file_name: String,
    pub file_url: String,
}

/// One catalog entry as found in the rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Bracketed as it appears on the page, e.g. `[S72345]`.
    pub session_code: Option<String>,
    pub title: String,
    pub url: Option<String>,
    pub abstract_text: Option<String>,
    pub speakers: Vec<Speaker>,
    pub date_time: Option<String>,
    pub location: Option<String>,
    pub files: Vec<SessionFile>,
    pub replay_url: Option<String>,
}

impl SessionRecord {
    /// Code with the surrounding brackets removed.
    pub fn bare_code(&self) -> Option<&str> {
        self.session_code
            .as_deref()
            .map(strip_brackets)
            .filter(|c| !c.is_empty())
    }

    /// Adds a speaker unless one with the same name is already listed.
    pub fn add_speaker(&mut self, speaker: Speaker) -> bool {
        push_speaker(&mut self.speakers, speaker)
    }
}

/// Appends `speaker` if it has a name not already in `speakers`.
pub fn push_speaker(speakers: &mut Vec<Speaker>, speaker: Speaker) -> bool {
    if speaker.name.is_empty() || speakers.iter().any(|s| s.name == speaker.name) {
        return false;
    }
    speakers.push(speaker);
    true
}

pub fn strip_brackets(code: &str) -> &str {
    code.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker(name: &str) -> Speaker {
        Speaker {
            name: name.to_string(),
            title_organization: None,
        }
    }

    #[test]
    fn bare_code_strips_brackets() {
        let s = SessionRecord {
            session_code: Some(" [S72345] ".into()),
            ..Default::default()
        };
        assert_eq!(s.bare_code(), Some("S72345"));

        let empty = SessionRecord {
            session_code: Some("[]".into()),
            ..Default::default()
        };
        assert_eq!(empty.bare_code(), None);
    }

    #[test]
    fn add_speaker_dedups_by_name() {
        let mut s = SessionRecord::default();
        assert!(s.add_speaker(speaker("Ada")));
        assert!(!s.add_speaker(speaker("Ada")));
        assert!(!s.add_speaker(speaker("")));
        assert!(s.add_speaker(speaker("Grace")));
        assert_eq!(s.speakers.len(), 2);
    }
}

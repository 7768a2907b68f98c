use std::collections::HashMap;

use crate::model::SessionRecord;

/// Merge entries sharing `(session_code, title)`. The first occurrence keeps
/// its position and fields; speakers from later duplicates are appended
/// unless a speaker with the same name is already present.
pub fn consolidate(sessions: Vec<SessionRecord>) -> Vec<SessionRecord> {
    let mut index: HashMap<(Option<String>, String), usize> = HashMap::new();
    let mut merged: Vec<SessionRecord> = Vec::new();

    for mut session in sessions {
        let key = (session.session_code.clone(), session.title.clone());
        if let Some(&i) = index.get(&key) {
            for speaker in session.speakers {
                merged[i].add_speaker(speaker);
            }
            continue;
        }

        index.insert(key, merged.len());
        for speaker in std::mem::take(&mut session.speakers) {
            session.add_speaker(speaker);
        }
        merged.push(session);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Speaker;

    fn session(code: Option<&str>, title: &str, speakers: &[&str]) -> SessionRecord {
        SessionRecord {
            session_code: code.map(str::to_string),
            title: title.to_string(),
            speakers: speakers
                .iter()
                .map(|n| Speaker {
                    name: n.to_string(),
                    title_organization: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    fn names(s: &SessionRecord) -> Vec<&str> {
        s.speakers.iter().map(|x| x.name.as_str()).collect()
    }

    #[test]
    fn disjoint_speakers_are_unioned_in_order() {
        let merged = consolidate(vec![
            session(Some("[S1]"), "Intro", &["Ada", "Grace"]),
            session(Some("[S1]"), "Intro", &["Alan", "Barbara"]),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(names(&merged[0]), vec!["Ada", "Grace", "Alan", "Barbara"]);
    }

    #[test]
    fn overlapping_speakers_not_duplicated() {
        let merged = consolidate(vec![
            session(Some("[S1]"), "Intro", &["Ada", "Ada"]),
            session(Some("[S1]"), "Intro", &["Grace", "Ada"]),
        ]);
        assert_eq!(names(&merged[0]), vec!["Ada", "Grace"]);
    }

    #[test]
    fn key_is_code_and_title() {
        let merged = consolidate(vec![
            session(Some("[S1]"), "Intro", &[]),
            session(Some("[S2]"), "Intro", &[]),
            session(Some("[S1]"), "Outro", &[]),
            session(None, "Intro", &[]),
            session(None, "Intro", &["Ada"]),
        ]);
        assert_eq!(merged.len(), 4);
        assert_eq!(names(&merged[3]), vec!["Ada"]);
    }

    #[test]
    fn first_seen_order_kept() {
        let merged = consolidate(vec![
            session(Some("[B]"), "Second", &[]),
            session(Some("[A]"), "First", &[]),
            session(Some("[B]"), "Second", &[]),
        ]);
        let titles: Vec<&str> = merged.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }
}

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::categories::STOP_WORDS;
use super::categorize::Categorization;

/// Categories smaller than this get no keyword breakdown.
pub const MIN_SESSIONS: usize = 5;
pub const TOP_KEYWORDS: usize = 10;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTrend {
    /// `[word, count]`, most frequent first; equal counts keep first-seen order.
    pub top_keywords: Vec<(String, usize)>,
    pub session_count: usize,
}

pub type Trends = BTreeMap<String, CategoryTrend>;

/// Word frequencies across `titles`, stop words removed.
pub fn top_words<'a>(titles: impl IntoIterator<Item = &'a str>, limit: usize) -> Vec<(String, usize)> {
    let text = titles.into_iter().map(str::to_lowercase).join(" ");

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for m in WORD_RE.find_iter(&text) {
        let word = m.as_str();
        if STOP_WORDS.contains(&word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word.to_string(), 1));
            }
        }
    }
    // Stable, so ties stay in first-occurrence order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

pub fn category_trends(categorization: &Categorization) -> Trends {
    categorization
        .groups()
        .iter()
        .filter(|(_, titles)| titles.len() >= MIN_SESSIONS)
        .map(|(category, titles)| {
            let trend = CategoryTrend {
                top_keywords: top_words(titles.iter().map(|t| t.title.as_str()), TOP_KEYWORDS),
                session_count: titles.len(),
            };
            (category.clone(), trend)
        })
        .collect()
}

/// The `limit` largest categories in `trends`, ties by name.
pub fn largest(trends: &Trends, limit: usize) -> Vec<(&str, &CategoryTrend)> {
    trends
        .iter()
        .map(|(name, trend)| (name.as_str(), trend))
        .sorted_by(|a, b| b.1.session_count.cmp(&a.1.session_count).then_with(|| a.0.cmp(b.0)))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::categories::CategoryTable;
    use crate::analysis::categorize::Categorizer;
    use crate::analysis::titles::parse_title_list;

    #[test]
    fn stop_words_dropped_and_counts_desc() {
        let words = top_words(["GPU Kernels for the GPU", "Kernels and GPU Memory"], 10);
        assert_eq!(
            words,
            vec![
                ("gpu".to_string(), 3),
                ("kernels".to_string(), 2),
                ("memory".to_string(), 1),
            ]
        );
    }

    #[test]
    fn limit_applied_after_sort() {
        let words = top_words(["a b c d e f g h i j k l b"], 3);
        assert_eq!(words[0], ("b".to_string(), 2));
        assert_eq!(words.len(), 3);
        // "a" is a stop word, so "c" is the first single.
        assert_eq!(words[1].0, "c");
    }

    #[test]
    fn only_categories_with_enough_sessions() {
        let text = std::fs::read_to_string("tests/fixtures/titles.txt").unwrap();
        let table = CategoryTable::builtin();
        let result = Categorizer::new(&table).categorize(&parse_title_list(&text));
        let trends = category_trends(&result);

        assert_eq!(trends.keys().collect::<Vec<_>>(), vec!["AI & Machine Learning"]);
        let ai = &trends["AI & Machine Learning"];
        assert_eq!(ai.session_count, 5);
        let words: Vec<&str> = ai.top_keywords.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(
            words,
            vec!["accelerating", "llm", "inference", "at", "scale", "deep", "learning", "drug", "discovery", "scaling"]
        );
    }

    #[test]
    fn json_pairs_are_arrays() {
        let trend = CategoryTrend {
            top_keywords: vec![("gpu".into(), 4)],
            session_count: 7,
        };
        let json = serde_json::to_value(&trend).unwrap();
        assert_eq!(json, serde_json::json!({"top_keywords": [["gpu", 4]], "session_count": 7}));
    }
}

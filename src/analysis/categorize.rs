use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::debug;

use super::categories::{CategoryTable, MISC_CATEGORY};
use super::titles::TitleEntry;

/// Assigns each title to the single best-scoring category of a table.
pub struct Categorizer<'a> {
    table: &'a CategoryTable,
}

impl<'a> Categorizer<'a> {
    pub fn new(table: &'a CategoryTable) -> Self {
        Categorizer { table }
    }

    /// Best category and its score. A score is the number of the category's
    /// keywords found as substrings of the lowercased title; only a strictly
    /// higher score displaces an earlier category.
    pub fn best_match(&self, title: &str) -> (&'a str, usize) {
        let lower = title.to_lowercase();
        let mut best: Option<&'a str> = None;
        let mut best_score = 0;
        for category in self.table.iter() {
            let score = category
                .keywords
                .iter()
                .filter(|k| lower.contains(k.as_str()))
                .count();
            if score > best_score {
                best_score = score;
                best = Some(category.name.as_str());
            }
        }
        (best.unwrap_or(MISC_CATEGORY), best_score)
    }

    pub fn categorize(&self, entries: &[TitleEntry]) -> Categorization {
        let mut groups: BTreeMap<String, Vec<TitleEntry>> = BTreeMap::new();
        for entry in entries {
            let (category, score) = self.best_match(&entry.title);
            debug!(title = %entry.title, category, score, "Categorized");
            groups
                .entry(category.to_string())
                .or_default()
                .push(entry.clone());
        }
        Categorization { groups }
    }
}

/// Category name → titles, in input order within each category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categorization {
    groups: BTreeMap<String, Vec<TitleEntry>>,
}

impl Categorization {
    pub fn groups(&self) -> &BTreeMap<String, Vec<TitleEntry>> {
        &self.groups
    }

    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Descending by session count, ties by name.
    pub fn by_count_desc(&self) -> Vec<(&str, usize)> {
        self.groups
            .iter()
            .map(|(name, titles)| (name.as_str(), titles.len()))
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
            .collect()
    }

    /// Summary, then one section per category. Categories are alphabetical,
    /// titles sorted within each section.
    pub fn render_markdown(&self, catalog_title: &str) -> String {
        let mut md = format!("# {} Session Titles - Enhanced Categorization\n\n", catalog_title);
        md.push_str("## Summary\n\n");
        md.push_str(&format!("- Total sessions: {}\n", self.total()));
        for (category, titles) in &self.groups {
            md.push_str(&format!("- {}: {} sessions\n", category, titles.len()));
        }
        md.push('\n');

        for (category, titles) in &self.groups {
            md.push_str(&format!("## {} ({} sessions)\n\n", category, titles.len()));
            for entry in titles.iter().sorted() {
                md.push_str(&format!("- {} [{}]\n", entry.title, entry.code));
            }
            md.push('\n');
        }
        md
    }

    /// `{category: [{title, code}, ...]}`
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.groups)
    }
}

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::categorize::Categorization;
use crate::error::PipelineError;
use crate::settings::Editorial;

pub const TOP_CATEGORIES: usize = 5;

/// Headline numbers plus the editorial lines shown in the narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub top_categories: Vec<(String, usize)>,
    pub emerging_trends: Vec<String>,
    pub industry_focus: Vec<String>,
    #[serde(default)]
    pub technology_evolution: Vec<String>,
    #[serde(default)]
    pub potential_opportunities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl Insights {
    pub fn from_categorization(categorization: &Categorization, editorial: &Editorial) -> Self {
        let top_categories = categorization
            .by_count_desc()
            .into_iter()
            .take(TOP_CATEGORIES)
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        Insights {
            top_categories,
            emerging_trends: editorial.emerging_trends.clone(),
            industry_focus: editorial.industry_focus.clone(),
            technology_evolution: Vec::new(),
            potential_opportunities: Vec::new(),
            generated_at: Some(Utc::now()),
        }
    }

    /// Figures from the published GTC 2025 analysis, used when no insights
    /// file is available.
    pub fn fallback() -> Self {
        let editorial = Editorial::default();
        let top_categories = [
            ("AI & Machine Learning", 624),
            ("Hardware & Infrastructure", 155),
            ("Software & Development", 100),
            ("Computer Vision & Graphics", 56),
            ("Miscellaneous & Other Topics", 56),
        ]
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
        Insights {
            top_categories,
            emerging_trends: editorial.emerging_trends,
            industry_focus: editorial.industry_focus,
            technology_evolution: Vec::new(),
            potential_opportunities: Vec::new(),
            generated_at: None,
        }
    }

    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let text = std::fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Never fails: a missing or unreadable file yields [`Insights::fallback`].
    pub fn load_or_fallback(path: &Path) -> Self {
        match Self::load(path) {
            Ok(insights) => {
                info!(path = %path.display(), "Loaded insights");
                insights
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Using built-in insights");
                Self::fallback()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

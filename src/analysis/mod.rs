pub mod categories;
pub mod categorize;
pub mod charts;
pub mod insights;
pub mod narrative;
pub mod titles;
pub mod trends;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::PipelineError;
use crate::export::write_output;
use crate::settings::Editorial;
use categories::CategoryTable;
use categorize::Categorizer;
use insights::Insights;
use titles::TitleEntry;

pub const CATEGORIZED_MD_FILE: &str = "gtc_sessions_categorized_enhanced.md";
pub const CATEGORIZED_JSON_FILE: &str = "gtc_sessions_categorized.json";
pub const TRENDS_FILE: &str = "category_trends.json";
pub const INSIGHTS_FILE: &str = "gtc_insights.json";
pub const NARRATIVE_FILE: &str = "gtc_narrative_summary.md";

/// How many of the largest trend categories get a keyword chart.
const KEYWORD_CHARTS: usize = 5;

pub struct AnalysisSummary {
    pub titles: usize,
    pub categories: Vec<(String, usize)>,
    pub files: Vec<PathBuf>,
}

/// Categorize `entries` and write every analysis output into `out_dir`.
pub fn run_analysis(
    entries: &[TitleEntry],
    table: &CategoryTable,
    out_dir: &Path,
    catalog_title: &str,
    editorial: &Editorial,
) -> Result<AnalysisSummary, PipelineError> {
    let categorization = Categorizer::new(table).categorize(entries);
    info!(
        titles = categorization.total(),
        categories = categorization.groups().len(),
        "Categorized sessions"
    );

    let mut files = vec![
        write_output(
            out_dir,
            CATEGORIZED_MD_FILE,
            categorization.render_markdown(catalog_title).as_bytes(),
        )?,
        write_output(out_dir, CATEGORIZED_JSON_FILE, categorization.to_json()?.as_bytes())?,
    ];

    let counts: Vec<usize> = categorization.by_count_desc().iter().map(|(_, n)| *n).collect();
    files.push(write_output(out_dir, charts::DISTRIBUTION_FILE, &charts::bar_chart_png(&counts)?)?);

    let trends = trends::category_trends(&categorization);
    files.push(write_output(
        out_dir,
        TRENDS_FILE,
        serde_json::to_string_pretty(&trends)?.as_bytes(),
    )?);
    for (category, trend) in trends::largest(&trends, KEYWORD_CHARTS) {
        let values: Vec<usize> = trend.top_keywords.iter().map(|(_, n)| *n).collect();
        files.push(write_output(
            out_dir,
            &charts::keywords_file(category),
            &charts::bar_chart_png(&values)?,
        )?);
    }

    let insights = Insights::from_categorization(&categorization, editorial);
    files.push(write_output(out_dir, INSIGHTS_FILE, insights.to_json()?.as_bytes())?);
    files.push(write_output(
        out_dir,
        NARRATIVE_FILE,
        narrative::render_narrative(&insights).as_bytes(),
    )?);

    Ok(AnalysisSummary {
        titles: categorization.total(),
        categories: categorization
            .by_count_desc()
            .into_iter()
            .map(|(name, n)| (name.to_string(), n))
            .collect(),
        files,
    })
}

/// Narrative from a saved insights file, or from the built-in figures when
/// that file cannot be read.
pub fn write_report(insights_path: &Path, out: &Path) -> Result<PathBuf, PipelineError> {
    let insights = Insights::load_or_fallback(insights_path);
    let dir = out.parent().unwrap_or_else(|| Path::new("."));
    let name = out
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(NARRATIVE_FILE);
    write_output(dir, name, narrative::render_narrative(&insights).as_bytes())
}

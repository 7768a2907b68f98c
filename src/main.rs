mod analysis;
mod consolidate;
mod error;
mod export;
mod model;
mod parser;
mod render;
mod settings;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use analysis::categories::CategoryTable;
use export::{csv, markdown, titles, write_output};
use settings::{RenderSettings, Settings};

#[derive(Parser)]
#[command(name = "gtc_catalog", about = "GTC session catalog extractor and analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract sessions from the saved catalog page
    Extract {
        /// Catalog HTML file (default: configured html_path)
        #[arg(long)]
        html: Option<PathBuf>,
        /// Directory for the table, CSV and title list
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Parse the file as saved, without a headless browser pass
        #[arg(long)]
        no_render: bool,
    },
    /// Categorize session titles and write the analysis outputs
    Analyze {
        /// Title list (default: configured titles_path)
        #[arg(long)]
        titles: Option<PathBuf>,
        /// Extractor CSV, read when the title list is missing
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Re-render the narrative summary from an insights file
    Report {
        #[arg(long)]
        insights: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Extract, then analyze the freshly written title list
    Run {
        #[arg(long)]
        html: Option<PathBuf>,
        #[arg(long)]
        no_render: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load();

    let result = match cli.command {
        Commands::Extract {
            html,
            out_dir,
            no_render,
        } => {
            let html = html.unwrap_or_else(|| settings.html_path.clone());
            let out_dir = out_dir.unwrap_or_else(|| settings.extract_dir.clone());
            let stats = extract(&settings, &html, &out_dir, no_render).await?;
            stats.print();
            Ok(())
        }
        Commands::Analyze {
            titles,
            csv,
            out_dir,
        } => {
            let titles = titles.unwrap_or_else(|| settings.titles_path.clone());
            let csv = csv.unwrap_or_else(|| settings.csv_path.clone());
            let out_dir = out_dir.unwrap_or_else(|| settings.analysis_dir.clone());
            analyze(&settings, &titles, &csv, &out_dir)
        }
        Commands::Report { insights, out } => {
            let insights =
                insights.unwrap_or_else(|| settings.analysis_dir.join(analysis::INSIGHTS_FILE));
            let out = out.unwrap_or_else(|| settings.analysis_dir.join(analysis::NARRATIVE_FILE));
            let path = analysis::write_report(&insights, &out)
                .with_context(|| format!("writing narrative to {}", out.display()))?;
            println!("Narrative summary saved to {}", path.display());
            Ok(())
        }
        Commands::Run { html, no_render } => {
            let html = html.unwrap_or_else(|| settings.html_path.clone());
            let out_dir = settings.extract_dir.clone();

            // Phase 1: Extract
            let t_extract = Instant::now();
            let stats = extract(&settings, &html, &out_dir, no_render).await?;
            stats.print();
            println!("Extracted in {:.1}s", t_extract.elapsed().as_secs_f64());

            // Phase 2: Analyze
            let t_analyze = Instant::now();
            analyze(
                &settings,
                &out_dir.join(export::TITLES_FILE),
                &out_dir.join(export::SESSIONS_CSV_FILE),
                &settings.analysis_dir,
            )?;
            println!("Analyzed in {:.1}s", t_analyze.elapsed().as_secs_f64());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

struct ExtractStats {
    raw: usize,
    sessions: usize,
    with_replay: usize,
    files: Vec<PathBuf>,
}

impl ExtractStats {
    fn print(&self) {
        println!(
            "Extracted {} sessions ({} entries before merging), {} with replay URLs.",
            self.sessions, self.raw, self.with_replay,
        );
        for f in &self.files {
            println!("  {}", f.display());
        }
    }
}

async fn extract(
    settings: &Settings,
    html_path: &Path,
    out_dir: &Path,
    no_render: bool,
) -> anyhow::Result<ExtractStats> {
    let render_settings = if no_render {
        RenderSettings {
            browser: None,
            ..settings.render.clone()
        }
    } else {
        settings.render.clone()
    };
    let html = render::rendered_html(html_path, &render_settings).await?;

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );
    let raw = parser::process_html(&html, &pb)?;
    let raw_count = raw.len();
    let sessions = consolidate::consolidate(raw);

    let csv_bytes = csv::render_csv(&sessions).context("serializing sessions CSV")?;
    let files = vec![
        write_output(
            out_dir,
            export::SESSIONS_TABLE_FILE,
            markdown::render_sessions_table(&settings.catalog_title, &sessions).as_bytes(),
        )?,
        write_output(out_dir, export::SESSIONS_CSV_FILE, &csv_bytes)?,
        write_output(
            out_dir,
            export::TITLES_FILE,
            titles::render_title_list(&settings.catalog_title, &sessions).as_bytes(),
        )?,
    ];

    Ok(ExtractStats {
        raw: raw_count,
        sessions: sessions.len(),
        with_replay: sessions.iter().filter(|s| s.replay_url.is_some()).count(),
        files,
    })
}

fn analyze(settings: &Settings, titles: &Path, csv: &Path, out_dir: &Path) -> anyhow::Result<()> {
    let entries = analysis::titles::load_titles(titles, csv)?;
    let table = CategoryTable::builtin();
    let summary = analysis::run_analysis(
        &entries,
        &table,
        out_dir,
        &settings.catalog_title,
        &settings.editorial,
    )
    .with_context(|| format!("writing analysis to {}", out_dir.display()))?;

    println!(
        "Categorized {} titles into {} categories:",
        summary.titles,
        summary.categories.len()
    );
    for (name, count) in &summary.categories {
        println!("  {:>5}  {}", count, name);
    }
    println!("\nAnalysis complete! {} files saved to {}", summary.files.len(), out_dir.display());
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

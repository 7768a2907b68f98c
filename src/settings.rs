use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::warn;

const CONFIG_FILE: &str = "gtc";
const ENV_PREFIX: &str = "GTC";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub html_path: PathBuf,
    pub extract_dir: PathBuf,
    pub analysis_dir: PathBuf,
    pub titles_path: PathBuf,
    pub csv_path: PathBuf,
    pub catalog_title: String,
    pub render: RenderSettings,
    pub editorial: Editorial,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Headless browser binary; `None` parses the file as-is.
    pub browser: Option<String>,
    pub timeout_secs: u64,
}

/// Hand-written narrative lines. Not derived from the session data.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Editorial {
    pub emerging_trends: Vec<String>,
    pub industry_focus: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            html_path: PathBuf::from("Attendee Portal - Session Catalog.html"),
            extract_dir: PathBuf::from("."),
            analysis_dir: PathBuf::from("outputs/analysis_output"),
            titles_path: PathBuf::from("data/gtc_sessions_titles.txt"),
            csv_path: PathBuf::from("data/gtc_sessions_extracted.csv"),
            catalog_title: "NVIDIA GTC 2025".to_string(),
            render: RenderSettings::default(),
            editorial: Editorial::default(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            browser: None,
            timeout_secs: 30,
        }
    }
}

impl Default for Editorial {
    fn default() -> Self {
        Editorial {
            emerging_trends: to_strings(&[
                "Large Language Models continue to dominate AI discussions",
                "Digital Twins are becoming central to industry transformation",
                "AI Agents are emerging as the next frontier in automation",
                "Multimodal AI is expanding beyond text-only applications",
            ]),
            industry_focus: to_strings(&[
                "Healthcare and life sciences see strong representation in AI applications",
                "Manufacturing transformation through digital twins is a key theme",
                "Financial services focus on AI for risk management and customer experience",
                "Retail industry embracing computer vision and generative AI",
            ]),
        }
    }
}

impl Settings {
    /// Defaults, then `gtc.toml` if present, then `GTC_*` env vars
    /// (`GTC_RENDER__BROWSER=chromium`).
    pub fn load() -> Self {
        let built = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .and_then(|c| c.try_deserialize::<Settings>());

        match built {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Config could not be loaded, using defaults");
                Settings::default()
            }
        }
    }
}

fn to_strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

//! Runtime settings, loaded once in `main` and handed down explicitly.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::pdf::PdfBackend;

/// Environment variable holding the API bearer token.
pub const API_TOKEN_VAR: &str = "SALLING_API_TOKEN";
/// Environment variable naming an extra settings file.
pub const CONFIG_PATH_VAR: &str = "FOODWASTE_CONFIG";

const ENV_PREFIX: &str = "FOODWASTE";
const DEFAULT_CONFIG_FILE: &str = "config/default";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub report: ReportConfig,
    pub pdf: PdfConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Where and how the report files are written.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub markdown_dir: PathBuf,
    /// HTML page containing a `{{ content }}` placeholder.
    pub template_path: PathBuf,
    pub markdown_timestamp: MarkdownTimestamp,
}

/// Which clock reading the Markdown export is stamped with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownTimestamp {
    /// Reuse the timestamp of the HTML/PDF pair.
    Shared,
    /// Take a fresh reading when the Markdown file is written.
    #[default]
    Independent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    pub backend: PdfBackend,
    pub binary: PathBuf,
}

impl Settings {
    /// Loads defaults, `config/default.yaml`, the file named by
    /// `FOODWASTE_CONFIG` and `FOODWASTE_*` environment overrides, in that
    /// order.
    pub fn load() -> Result<Self, ConfigError> {
        let extra = std::env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from);
        Self::load_from(extra.as_deref())
    }

    pub fn load_from(extra_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("api.base_url", crate::client::DEFAULT_BASE_URL)?
            .set_default("api.timeout_secs", 30_i64)?
            .set_default("report.output_dir", "output")?
            .set_default("report.markdown_dir", ".")?
            .set_default("report.template_path", "templates/report.html")?
            .set_default("report.markdown_timestamp", "independent")?
            .set_default("pdf.backend", "chrome")?
            .set_default("pdf.binary", "chromium")?
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(path) = extra_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

/// Reads the API token, treating an empty value as absent.
pub fn api_token_from_env() -> Option<String> {
    std::env::var(API_TOKEN_VAR)
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

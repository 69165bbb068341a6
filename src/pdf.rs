//! HTML to PDF conversion through an external rendering engine.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use thiserror::Error;

use crate::models::config::PdfConfig;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to start {binary}: {source}")]
    Spawn {
        binary: String,
        source: std::io::Error,
    },
    #[error("{binary} exited with {status}: {stderr}")]
    Failed {
        binary: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("no PDF was written to {0}")]
    MissingOutput(PathBuf),
    #[error("cannot resolve {path}: {source}")]
    InvalidInput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Converts an HTML page already written to disk into a PDF document.
pub trait PdfEngine {
    fn convert(&self, html_path: &Path, pdf_path: &Path) -> Result<(), PdfError>;
}

/// External program used to print HTML pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PdfBackend {
    /// Chrome or Chromium in headless mode.
    #[default]
    Chrome,
    Wkhtmltopdf,
}

/// [`PdfEngine`] driving a browser or `wkhtmltopdf` as a child process.
#[derive(Debug, Clone)]
pub struct CommandPdfEngine {
    backend: PdfBackend,
    binary: PathBuf,
}

impl CommandPdfEngine {
    pub fn new(backend: PdfBackend, binary: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            binary: binary.into(),
        }
    }

    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new(config.backend, config.binary.clone())
    }

    fn arguments(&self, html_path: &Path, pdf_path: &Path) -> Result<Vec<String>, PdfError> {
        let args = match self.backend {
            PdfBackend::Chrome => {
                let absolute =
                    std::fs::canonicalize(html_path).map_err(|source| PdfError::InvalidInput {
                        path: html_path.to_path_buf(),
                        source,
                    })?;
                vec![
                    "--headless".to_string(),
                    "--disable-gpu".to_string(),
                    "--no-sandbox".to_string(),
                    "--no-pdf-header-footer".to_string(),
                    format!("--print-to-pdf={}", pdf_path.display()),
                    format!("file://{}", absolute.display()),
                ]
            }
            PdfBackend::Wkhtmltopdf => vec![
                "--quiet".to_string(),
                "--encoding".to_string(),
                "utf-8".to_string(),
                "--enable-local-file-access".to_string(),
                html_path.display().to_string(),
                pdf_path.display().to_string(),
            ],
        };
        Ok(args)
    }
}

impl PdfEngine for CommandPdfEngine {
    fn convert(&self, html_path: &Path, pdf_path: &Path) -> Result<(), PdfError> {
        let binary = self.binary.display().to_string();
        let args = self.arguments(html_path, pdf_path)?;
        log::debug!("Running {binary} {}", args.join(" "));

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|source| PdfError::Spawn {
                binary: binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PdfError::Failed {
                binary,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if !pdf_path.exists() {
            return Err(PdfError::MissingOutput(pdf_path.to_path_buf()));
        }

        Ok(())
    }
}

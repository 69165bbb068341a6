//! Report generation: console text, HTML + PDF and Markdown from one batch.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::client::ClearanceBatch;
use crate::dto::report::{ReportDto, StoreDto};
use crate::models::config::{MarkdownTimestamp, ReportConfig};
use crate::pdf::PdfEngine;
use crate::services::formatting::{REPORT_TIMEZONE, format_local};
use crate::services::{ServiceError, ServiceResult};

pub mod html;
pub mod markdown;
pub mod text;

const FILE_PREFIX: &str = "tilbud";
const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M";
const IMAGES_DIR: &str = "images";

/// Source of the "now" used in file names and "updated at" lines.
pub trait Clock {
    fn now(&self) -> DateTime<Tz>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&REPORT_TIMEZONE)
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub DateTime<Tz>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.0
    }
}

/// Paths and console text produced by one [`Renderer::render`] call.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub text_summary: String,
    pub html_path: PathBuf,
    pub pdf_path: PathBuf,
    pub markdown_path: PathBuf,
    pub clearance_count: usize,
}

/// `tilbud_<YYYYMMDD_HHMM>`, shared by every file of one report.
pub fn file_stem(stamp: &DateTime<Tz>) -> String {
    format!("{FILE_PREFIX}_{}", stamp.format(FILE_STAMP_FORMAT))
}

pub struct Renderer<E, C = SystemClock> {
    config: ReportConfig,
    engine: E,
    clock: C,
}

impl<E: PdfEngine> Renderer<E> {
    pub fn new(config: ReportConfig, engine: E) -> Self {
        Self::with_clock(config, engine, SystemClock)
    }
}

impl<E: PdfEngine, C: Clock> Renderer<E, C> {
    pub fn with_clock(config: ReportConfig, engine: E, clock: C) -> Self {
        Self {
            config,
            engine,
            clock,
        }
    }

    /// Validates `batch` and writes the HTML, PDF and Markdown reports.
    ///
    /// Validation runs before anything touches the disk. A failed PDF
    /// conversion leaves the HTML file in place.
    pub fn render(&self, batch: ClearanceBatch) -> ServiceResult<RenderedReport> {
        let stores = prepare_stores(batch)?;
        let stamp = self.clock.now();
        let report = ReportDto::new(format_local(&stamp), stores);

        let text_summary = text::render_text(&report);
        let (html_path, pdf_path) = self.write_html_and_pdf(&report, &stamp)?;

        let markdown_path = match self.config.markdown_timestamp {
            MarkdownTimestamp::Shared => self.write_markdown(&report, &stamp)?,
            MarkdownTimestamp::Independent => {
                let own_stamp = self.clock.now();
                let report = ReportDto {
                    updated_at: format_local(&own_stamp),
                    ..report.clone()
                };
                self.write_markdown(&report, &own_stamp)?
            }
        };

        log::info!(
            "Generated report with {} clearance(s): {}, {}, {}",
            report.clearance_count(),
            html_path.display(),
            pdf_path.display(),
            markdown_path.display()
        );

        Ok(RenderedReport {
            text_summary,
            html_path,
            pdf_path,
            markdown_path,
            clearance_count: report.clearance_count(),
        })
    }

    /// Writes only the Markdown document.
    pub fn export_markdown(&self, batch: ClearanceBatch) -> ServiceResult<PathBuf> {
        let stores = prepare_stores(batch)?;
        let stamp = self.clock.now();
        let report = ReportDto::new(format_local(&stamp), stores);
        self.write_markdown(&report, &stamp)
    }

    fn write_html_and_pdf(
        &self,
        report: &ReportDto,
        stamp: &DateTime<Tz>,
    ) -> ServiceResult<(PathBuf, PathBuf)> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir.join(IMAGES_DIR))?;

        let page_template = load_template(&self.config.template_path)?;
        let page = html::render_page(&page_template, report)?;

        let stem = file_stem(stamp);
        let html_path = output_dir.join(format!("{stem}.html"));
        fs::write(&html_path, page)?;
        log::debug!("Wrote {}", html_path.display());

        let pdf_path = output_dir.join(format!("{stem}.pdf"));
        self.engine.convert(&html_path, &pdf_path)?;
        log::debug!("Wrote {}", pdf_path.display());

        Ok((html_path, pdf_path))
    }

    fn write_markdown(&self, report: &ReportDto, stamp: &DateTime<Tz>) -> ServiceResult<PathBuf> {
        fs::create_dir_all(&self.config.markdown_dir)?;
        let path = self
            .config
            .markdown_dir
            .join(format!("{}.md", file_stem(stamp)));
        fs::write(&path, markdown::render_markdown(report))?;
        log::debug!("Wrote {}", path.display());
        Ok(path)
    }
}

/// Converts the raw batch into ranked, display-ready stores.
fn prepare_stores(batch: ClearanceBatch) -> ServiceResult<Vec<StoreDto>> {
    batch
        .into_stores()?
        .into_iter()
        .map(|store| StoreDto::try_from(store).map_err(ServiceError::from))
        .collect()
}

fn load_template(path: &Path) -> ServiceResult<String> {
    fs::read_to_string(path)
        .map_err(|e| ServiceError::Template(format!("cannot read {}: {e}", path.display())))
}

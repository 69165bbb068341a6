//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::TimeZone;
use foodwaste_tilbud::client::ClearanceBatch;
use foodwaste_tilbud::models::config::{MarkdownTimestamp, ReportConfig};
use foodwaste_tilbud::pdf::{PdfEngine, PdfError};
use foodwaste_tilbud::services::formatting::REPORT_TIMEZONE;
use foodwaste_tilbud::services::report::{FixedClock, Renderer};
use serde_json::{Value, json};
use tempfile::TempDir;

pub const PAGE_TEMPLATE: &str =
    "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body>{{ content }}</body></html>";

/// Writes a minimal PDF header instead of rendering.
pub struct FakePdfEngine;

impl PdfEngine for FakePdfEngine {
    fn convert(&self, html_path: &Path, pdf_path: &Path) -> Result<(), PdfError> {
        assert!(html_path.exists(), "HTML must be written before conversion");
        std::fs::write(pdf_path, b"%PDF-1.4\n%%EOF\n").map_err(|source| PdfError::Spawn {
            binary: "fake".to_string(),
            source,
        })
    }
}

/// Fails like an engine that exited with an error.
pub struct BrokenPdfEngine;

impl PdfEngine for BrokenPdfEngine {
    fn convert(&self, _html_path: &Path, pdf_path: &Path) -> Result<(), PdfError> {
        Err(PdfError::MissingOutput(pdf_path.to_path_buf()))
    }
}

/// Scratch workspace holding a page template and the output directories.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("report.html"), PAGE_TEMPLATE)
            .expect("Failed to write template");
        Workspace { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    pub fn markdown_dir(&self) -> PathBuf {
        self.dir.path().join("markdown")
    }

    pub fn config(&self, markdown_timestamp: MarkdownTimestamp) -> ReportConfig {
        ReportConfig {
            output_dir: self.output_dir(),
            markdown_dir: self.markdown_dir(),
            template_path: self.dir.path().join("report.html"),
            markdown_timestamp,
        }
    }

    pub fn renderer<E: PdfEngine>(&self, engine: E) -> Renderer<E, FixedClock> {
        Renderer::with_clock(self.config(MarkdownTimestamp::Shared), engine, fixed_clock())
    }

    /// Names of the files directly inside `dir`, sorted.
    pub fn files_in(&self, dir: &Path) -> Vec<String> {
        let mut names = match std::fs::read_dir(dir) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .filter(|e| e.path().is_file())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect::<Vec<_>>(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }
}

/// 1 June 2024, 12:30 Copenhagen time.
pub fn fixed_clock() -> FixedClock {
    FixedClock(
        REPORT_TIMEZONE
            .with_ymd_and_hms(2024, 6, 1, 12, 30, 0)
            .unwrap(),
    )
}

pub fn clearance_json(description: &str, stock: f64, unit: &str, image: Option<&str>) -> Value {
    let mut product = json!({ "description": description, "ean": "5701234567890" });
    if let Some(image) = image {
        product["image"] = json!(image);
    }
    json!({
        "offer": {
            "currency": "DKK",
            "discount": 12.5,
            "ean": "5701234567890",
            "endTime": "2024-06-01T20:00:00.000000Z",
            "lastUpdate": "2024-06-01T06:12:00.000000Z",
            "newPrice": 12.5,
            "originalPrice": 25.0,
            "percentDiscount": 50.0,
            "startTime": "2024-06-01T06:00:00.000000Z",
            "stock": stock,
            "stockUnit": unit
        },
        "product": product
    })
}

pub fn store_json(name: &str, clearances: Vec<Value>) -> Value {
    json!({
        "store": {
            "id": "efba0457-090e-4132-81ba-c5b1fe2e8a3c",
            "brand": "netto",
            "name": name,
            "address": { "street": "Vestergade 1", "zip": "8000", "city": "Aarhus C" }
        },
        "clearances": clearances
    })
}

pub fn batch(value: Value) -> ClearanceBatch {
    serde_json::from_value(value).expect("valid clearance batch")
}

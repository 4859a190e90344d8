use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::extract::{Extraction, PageText};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Page texts joined with newlines.
    #[default]
    Text,
    /// Pretty-printed JSON with one record per page.
    Json,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    source: String,
    page_count: usize,
    pages: &'a [PageText],
}

pub fn render(extraction: &Extraction, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(extraction.text()),
        OutputFormat::Json => {
            let document = JsonDocument {
                source: extraction.source.display().to_string(),
                page_count: extraction.page_count(),
                pages: &extraction.pages,
            };
            Ok(serde_json::to_string_pretty(&document)?)
        }
    }
}

/// Create or truncate `path` and write `contents` as UTF-8. Returns the
/// number of bytes written.
pub fn write_output(path: &Path, contents: &str) -> std::io::Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    Ok(contents.len())
}

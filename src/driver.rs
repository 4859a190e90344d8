//! One extract-then-write cycle.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::error::ExtractError;
use crate::extract::{self, Backend};
use crate::output::{self, OutputFormat};

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub backend: Backend,
    pub format: OutputFormat,
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Config {
            input_path: input_path.into(),
            output_path: output_path.into(),
            backend: Backend::default(),
            format: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output_path: PathBuf,
    pub page_count: usize,
    pub bytes_written: usize,
}

#[derive(Debug)]
pub enum Outcome {
    Written(Report),
    /// Extraction failed; the output path was left untouched.
    Failed(ExtractError),
}

/// Extract `config.input_path` and, if that succeeds, write the result to
/// `config.output_path`.
///
/// Extraction failures are reported through [`Outcome::Failed`]. Only a
/// failure to render or write the output is returned as `Err`.
pub fn run(config: &Config) -> Result<Outcome> {
    let extraction = match extract::extract(&config.input_path, config.backend) {
        Ok(extraction) => extraction,
        Err(e) => return Ok(Outcome::Failed(e)),
    };

    let contents = output::render(&extraction, config.format)?;
    let bytes_written = write(&config.output_path, &contents)?;
    info!(
        "wrote {} bytes to {}",
        bytes_written,
        config.output_path.display()
    );

    Ok(Outcome::Written(Report {
        output_path: config.output_path.clone(),
        page_count: extraction.page_count(),
        bytes_written,
    }))
}

fn write(path: &Path, contents: &str) -> Result<usize> {
    output::write_output(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))
}

//! Page-by-page text extraction.
//!
//! Two decoding backends are available. `lopdf` walks the page tree and
//! extracts each page on its own. `pdf-extract` lays out glyphs by position,
//! which gives different whitespace for the same page.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::{debug, info, warn};
use lopdf::Document;
use serde::Serialize;

use crate::error::{ExtractError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    #[default]
    Lopdf,
    PdfExtract,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageText {
    /// 1-based page number in document order.
    pub number: u32,
    pub text: String,
}

/// Text of every page of one document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub source: PathBuf,
    pub pages: Vec<PageText>,
}

impl Extraction {
    /// Each page's text followed by a single newline.
    pub fn text(&self) -> String {
        let capacity = self.pages.iter().map(|p| p.text.len() + 1).sum();
        let mut text = String::with_capacity(capacity);
        for page in &self.pages {
            text.push_str(&page.text);
            text.push('\n');
        }
        text
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn char_count(&self) -> usize {
        self.pages.iter().map(|p| p.text.chars().count()).sum()
    }
}

/// Extract the text of every page of `pdf_path`.
///
/// The input file is opened read-only and closed again before this returns,
/// whether extraction succeeds or not.
pub fn extract(pdf_path: &Path, backend: Backend) -> Result<Extraction> {
    debug!("extracting {} with {:?}", pdf_path.display(), backend);

    let pages = match backend {
        Backend::Lopdf => extract_with_lopdf(pdf_path),
        Backend::PdfExtract => extract_with_pdf_extract(pdf_path),
    };

    match pages {
        Ok(pages) => {
            let extraction = Extraction {
                source: pdf_path.to_path_buf(),
                pages,
            };
            info!(
                "extracted {} pages ({} chars) from {}",
                extraction.page_count(),
                extraction.char_count(),
                pdf_path.display()
            );
            Ok(extraction)
        }
        Err(e) => {
            warn!("extraction from {} failed: {}", pdf_path.display(), e);
            Err(e)
        }
    }
}

/// Concatenated text of `pdf_path` using the default backend.
pub fn extract_text(pdf_path: &Path) -> Result<String> {
    extract(pdf_path, Backend::default()).map(|extraction| extraction.text())
}

fn open_input(pdf_path: &Path) -> Result<File> {
    File::open(pdf_path).map_err(|e| ExtractError::from_io(pdf_path, e))
}

fn extract_with_lopdf(pdf_path: &Path) -> Result<Vec<PageText>> {
    let doc = {
        let file = open_input(pdf_path)?;
        Document::load_from(BufReader::new(file))
            .map_err(|e| ExtractError::Decode(e.to_string()))?
    };

    if doc.is_encrypted() {
        return Err(ExtractError::UnsupportedFeature(
            "encrypted document".to_string(),
        ));
    }

    let page_numbers: Vec<u32> = doc.get_pages().into_keys().collect();
    debug!("{} has {} pages", pdf_path.display(), page_numbers.len());

    let mut pages = Vec::with_capacity(page_numbers.len());
    for number in page_numbers {
        let text = doc
            .extract_text(&[number])
            .map_err(|e| ExtractError::PageExtraction {
                page: number,
                reason: e.to_string(),
            })?;

        let text = strip_text_object_break(&text).to_string();
        debug!("page {}: {} chars", number, text.chars().count());
        pages.push(PageText { number, text });
    }

    Ok(pages)
}

fn extract_with_pdf_extract(pdf_path: &Path) -> Result<Vec<PageText>> {
    let mut bytes = Vec::new();
    open_input(pdf_path)?
        .read_to_end(&mut bytes)
        .map_err(|e| ExtractError::from_io(pdf_path, e))?;

    let page_texts = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| ExtractError::Decode(e.to_string()))?;

    Ok(page_texts
        .into_iter()
        .zip(1u32..)
        .map(|(text, number)| PageText {
            number,
            text: text.trim_matches(is_line_break).to_string(),
        })
        .collect())
}

/// lopdf ends each text object with a line break unless the text already
/// ends with one. Only that final break goes; the page separator is added by
/// `Extraction::text`.
fn strip_text_object_break(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

// ============================================================
// Layer 4 — PDF Loader
// ============================================================
// Extracts raw per-page text from PDF bytes using lopdf.
//
// lopdf parses the object tree in memory; we walk the page
// tree in page-number order and ask lopdf to decode the text
// operators of each page.
//
// Failure policy:
//   - unparsable bytes, encryption or a page-less file fail
//     the whole document with StudyError::Extraction
//   - a single page whose text cannot be decoded is logged
//     and contributes an empty page
//
// Reference: lopdf crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use lopdf::Document as PdfDocument;
use std::{fs, path::Path};

use crate::domain::error::StudyError;
use crate::domain::traits::PdfTextSource;

/// Loads page text from PDF bytes.
/// Implements the PdfTextSource trait from Layer 3.
#[derive(Debug, Default)]
pub struct PdfLoader;

impl PdfLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read a PDF from disk and extract its pages.
    pub fn load_file(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;
        let pages = self.extract_pages(&bytes)
            .with_context(|| format!("Cannot extract text from '{}'", path.display()))?;
        Ok(pages)
    }
}

impl PdfTextSource for PdfLoader {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, StudyError> {
        let pdf = PdfDocument::load_mem(bytes)
            .map_err(|e| StudyError::extraction(format!("unreadable PDF: {e}")))?;

        if pdf.is_encrypted() {
            return Err(StudyError::extraction("PDF is encrypted"));
        }

        // get_pages() is a BTreeMap keyed by 1-based page number,
        // so iteration order is page order.
        let page_numbers: Vec<u32> = pdf.get_pages().keys().copied().collect();
        if page_numbers.is_empty() {
            return Err(StudyError::extraction("PDF has no pages"));
        }

        let pages = page_numbers
            .iter()
            .map(|&number| match pdf.extract_text(&[number]) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Skipping text of page {}: {}", number, e);
                    String::new()
                }
            })
            .collect::<Vec<_>>();

        tracing::info!("Extracted text from {} pages", pages.len());
        Ok(pages)
    }
}

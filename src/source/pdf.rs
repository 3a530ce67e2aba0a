// src/source/pdf.rs
use crate::utils::error::SourceError;
use lopdf::Document;
use std::path::Path;

/// Reads the first page of the statement PDF and returns its text, one entry per line.
///
/// Only the first page is considered; later pages are never decoded.
pub fn read_first_page_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    tracing::info!("Loading statement PDF: {}", path.display());

    let doc = Document::load(path).map_err(|e| SourceError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let pages = doc.get_pages();
    tracing::debug!("PDF has {} page(s)", pages.len());

    // get_pages() is keyed by 1-based page number, so the first key is the first page
    let first_page = pages
        .keys()
        .next()
        .copied()
        .ok_or_else(|| SourceError::NoPages(path.to_path_buf()))?;

    let text = doc
        .extract_text(&[first_page])
        .map_err(|e| SourceError::Extraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(SourceError::NoTextLayer(path.to_path_buf()));
    }

    let lines = split_page_text(&text);
    tracing::info!("Extracted {} line(s) from page {}", lines.len(), first_page);
    Ok(lines)
}

/// Splits extracted page text on newlines, keeping empty segments so line
/// indices match the page layout.
pub fn split_page_text(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

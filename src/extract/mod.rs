//! Text extraction from uploaded documents.
//!
//! Structural-to-flat-text transform only: page and paragraph order are
//! preserved and no whitespace cleanup is performed.

use std::io::Read;

use lopdf::Document as PdfDocument;
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::debug;

use crate::document::{MediaType, UploadedDocument};

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("Failed to parse DOCX: {0}")]
    Docx(String),

    #[error("Document is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract the plain-text content of a document per its declared media type.
pub fn extract(document: &UploadedDocument) -> Result<String, ExtractionError> {
    let text = match document.media_type {
        MediaType::Pdf => extract_pdf(&document.bytes)?,
        MediaType::Docx => extract_docx(&document.bytes)?,
        MediaType::PlainText => String::from_utf8(document.bytes.clone())?,
    };
    debug!(
        "Extracted {} chars from {} ({})",
        text.chars().count(),
        document.filename,
        document.media_type
    );
    Ok(text)
}

/// Extract PDF text page by page, joining pages with newlines.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = PdfDocument::load_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    // get_pages() is keyed by page number, so iteration is in page order.
    let mut pages = Vec::new();
    for (page_num, _object_id) in doc.get_pages() {
        let text = doc
            .extract_text(&[page_num])
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
        pages.push(text);
    }
    Ok(pages.join("\n"))
}

/// Extract DOCX text paragraph by paragraph, joining paragraphs with newlines.
///
/// A DOCX file is a ZIP archive; the document body lives in
/// `word/document.xml` with text runs inside `<w:t>` elements grouped into
/// `<w:p>` paragraphs.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractionError::Docx(e.to_string()))?
        .read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader
            .read_event()
            .map_err(|e| ExtractionError::Docx(e.to_string()))?
        {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            // Self-closing <w:p/> is an empty paragraph.
            Event::Empty(e) if e.name().as_ref() == b"w:p" => paragraphs.push(String::new()),
            Event::Text(t) if in_text => {
                let decoded = t
                    .decode()
                    .map_err(|e| ExtractionError::Docx(e.to_string()))?;
                current.push_str(&decoded);
            }
            Event::GeneralRef(r) if in_text => {
                if let Some(ch) = r
                    .resolve_char_ref()
                    .map_err(|e| ExtractionError::Docx(e.to_string()))?
                {
                    current.push(ch);
                } else {
                    let name = r
                        .decode()
                        .map_err(|e| ExtractionError::Docx(e.to_string()))?;
                    let escaped = format!("&{name};");
                    let resolved = quick_xml::escape::unescape(&escaped)
                        .map_err(|e| ExtractionError::Docx(e.to_string()))?;
                    current.push_str(&resolved);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

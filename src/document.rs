//! Uploaded document representation and media type classification.

use std::fmt;
use std::path::Path;

use crate::extract::ExtractionError;

/// Supported media types for uploaded documents.
///
/// Anything that is not a PDF or a Word document is treated as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Paged PDF document.
    Pdf,
    /// Word document (Office Open XML).
    Docx,
    /// Raw UTF-8 text.
    PlainText,
}

impl MediaType {
    /// Classify a file by its extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => MediaType::Pdf,
            Some("docx") => MediaType::Docx,
            _ => MediaType::PlainText,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Pdf => "pdf",
            MediaType::Docx => "docx",
            MediaType::PlainText => "plain-text",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A document handed in for analysis.
///
/// Held in memory for the duration of one action; never persisted.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// Declared media type.
    pub media_type: MediaType,
    /// Original filename, for display.
    pub filename: String,
}

impl UploadedDocument {
    /// Create a document from raw bytes with a declared media type.
    pub fn new(bytes: Vec<u8>, media_type: MediaType, filename: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type,
            filename: filename.into(),
        }
    }

    /// Read a document from disk, classifying it by file extension.
    pub fn from_path(path: &Path) -> Result<Self, ExtractionError> {
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();
        Ok(Self {
            bytes,
            media_type: MediaType::from_path(path),
            filename,
        })
    }
}

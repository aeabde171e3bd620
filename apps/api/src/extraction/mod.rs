//! Document text extraction for uploaded resumes.
//!
//! Extraction never fails outward: a document that cannot be read yields
//! whatever text was recovered followed by a bracketed error marker.
//! Parsing is CPU-bound and must run inside `tokio::task::spawn_blocking`.

pub mod docx;
pub mod pdf;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Classifies a filename by the text after its last `.`, ignoring case.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Pdf(String),

    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("{0}")]
    Xml(String),

    #[error("parser panicked: {0}")]
    Panicked(String),
}

/// Extracts all text from the document at `path`.
pub fn extract_text(path: &Path, kind: DocumentKind) -> String {
    match kind {
        DocumentKind::Pdf => pdf::extract_pdf_text(path),
        DocumentKind::Docx => docx::extract_docx_text(path),
    }
}

/// Appends the inline marker that stands in for content that failed to parse.
pub(crate) fn push_error_marker(text: &mut String, kind: DocumentKind, err: &ExtractionError) {
    tracing::warn!(kind = %kind, error = %err, "Document extraction failed");
    text.push_str(&format!("\n[Error extracting {kind}: {err}]\n"));
}

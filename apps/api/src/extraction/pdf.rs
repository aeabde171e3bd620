//! PDF text extraction via `pdf-extract`.
//!
//! `pdf-extract` panics on some malformed inputs instead of returning an
//! error, so the call is wrapped in `catch_unwind` and a panic is reported
//! through the same error marker as an ordinary parse failure.

use std::panic;
use std::path::Path;

use crate::extraction::{push_error_marker, DocumentKind, ExtractionError};

/// Reads the PDF at `path` and returns its page texts, one per line.
/// Blank pages are skipped.
pub fn extract_pdf_text(path: &Path) -> String {
    match read_pages(path) {
        Ok(pages) => join_pages(&pages),
        Err(e) => {
            let mut text = String::new();
            push_error_marker(&mut text, DocumentKind::Pdf, &e);
            text
        }
    }
}

/// pdf-extract pads pages with newlines, so a page with no text can come
/// back as whitespace rather than empty.
fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for page in pages.iter().filter(|p| !p.trim().is_empty()) {
        text.push_str(page);
        text.push('\n');
    }
    text
}

fn read_pages(path: &Path) -> Result<Vec<String>, ExtractionError> {
    let bytes = std::fs::read(path)?;
    parse_pages(&bytes)
}

fn parse_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes)) {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
        Err(payload) => Err(ExtractionError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a minimal PDF with one Helvetica text line per entry; `None`
    /// gives a page whose content draws a line and no text.
    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let n = pages.len();
        let font_id = 3 + 2 * n;
        let mut objects: Vec<String> = Vec::new();

        objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
        let kids: Vec<String> = (0..n).map(|i| format!("{} 0 R", 3 + 2 * i)).collect();
        objects.push(format!(
            "<< /Type /Pages /Kids [{}] /Count {n} >>",
            kids.join(" ")
        ));
        for (i, page) in pages.iter().enumerate() {
            let content = match page {
                Some(line) => format!("BT /F1 12 Tf 72 720 Td ({line}) Tj ET"),
                None => "72 720 m 300 720 l S".to_string(),
            };
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 {font_id} 0 R >> >> /Contents {} 0 R >>",
                4 + 2 * i
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ));
        }
        objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }
        let xref_at = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }

    #[test]
    fn test_pages_in_order_and_blank_page_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let bytes = build_pdf(&[Some("Python Developer"), None, Some("Docker Kubernetes")]);
        std::fs::write(&path, bytes).unwrap();

        let text = extract_pdf_text(&path);
        assert!(!text.contains("[Error extracting"), "got {text:?}");
        let first = text.find("Python Developer").expect("first page text");
        let last = text.find("Docker Kubernetes").expect("last page text");
        assert!(first < last);
        assert!(text.trim_end().ends_with("Docker Kubernetes"), "got {text:?}");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_join_pages_one_newline_per_page() {
        let pages = vec![
            "Python Developer".to_string(),
            String::new(),
            "\n\n".to_string(),
            "Docker Kubernetes".to_string(),
        ];
        assert_eq!(join_pages(&pages), "Python Developer\nDocker Kubernetes\n");
    }

    #[test]
    fn test_join_pages_of_nothing_is_empty() {
        assert_eq!(join_pages(&[]), "");
        assert_eq!(join_pages(&[" \n".to_string()]), "");
    }

    #[test]
    fn test_corrupted_pdf_yields_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"this is definitely not a pdf").unwrap();

        let text = extract_pdf_text(&path);
        assert!(!text.is_empty());
        assert!(text.contains("[Error extracting PDF:"), "got {text:?}");
    }

    #[test]
    fn test_truncated_pdf_header_yields_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.pdf");
        std::fs::write(&path, b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog").unwrap();

        let text = extract_pdf_text(&path);
        assert!(text.contains("[Error extracting PDF:"), "got {text:?}");
    }

    #[test]
    fn test_missing_pdf_yields_marker() {
        let dir = tempfile::tempdir().unwrap();
        let text = extract_pdf_text(&dir.path().join("nope.pdf"));
        assert!(text.starts_with("\n[Error extracting PDF:"));
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn test_panic_message_from_str_and_string() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("static msg");
        assert_eq!(panic_message(boxed.as_ref()), "static msg");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("owned msg"));
        assert_eq!(panic_message(boxed.as_ref()), "owned msg");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(boxed.as_ref()), "unknown panic");
    }
}

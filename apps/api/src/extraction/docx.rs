//! DOCX text extraction: unzip `word/document.xml` and stream it with quick-xml.
//!
//! Paragraph text is the concatenation of its `w:t` runs, with `w:tab` as a
//! tab and `w:br` / `w:cr` as line breaks. Paragraphs inside tables and text
//! boxes are included; empty paragraphs are dropped. Inside
//! `mc:AlternateContent` only `mc:Choice` is read, since `mc:Fallback`
//! repeats the same text box for older readers.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::extraction::{push_error_marker, DocumentKind, ExtractionError};

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads the DOCX at `path` and returns its non-empty paragraphs, one per line.
pub fn extract_docx_text(path: &Path) -> String {
    let mut text = String::new();
    match read_paragraphs(path) {
        Ok(paragraphs) => {
            for para in paragraphs.iter().filter(|p| !p.is_empty()) {
                text.push_str(para);
                text.push('\n');
            }
        }
        Err(e) => push_error_marker(&mut text, DocumentKind::Docx, &e),
    }
    text
}

fn read_paragraphs(path: &Path) -> Result<Vec<String>, ExtractionError> {
    let bytes = std::fs::read(path)?;
    let xml = read_document_part(&bytes)?;
    parse_paragraphs(&xml)
}

fn read_document_part(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut part = archive.by_name(DOCUMENT_PART)?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Splits WordprocessingML into paragraph strings, in document order.
///
/// A paragraph nested inside another (text boxes) is emitted when it closes,
/// so it lands before the paragraph that contains it.
fn parse_paragraphs(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text_run = false;
    let mut fallback_depth = 0usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractionError::Xml(e.to_string()))?;
        if fallback_depth > 0 {
            match event {
                Event::Start(e) if e.local_name().as_ref() == b"Fallback" => fallback_depth += 1,
                Event::End(e) if e.local_name().as_ref() == b"Fallback" => fallback_depth -= 1,
                Event::Eof => break,
                _ => {}
            }
            continue;
        }
        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"t" => in_text_run = true,
                b"Fallback" => fallback_depth = 1,
                _ => {}
            },
            Event::Empty(e) => {
                if let Some(current) = open.last_mut() {
                    match e.local_name().as_ref() {
                        b"tab" => current.push('\t'),
                        b"br" | b"cr" => current.push('\n'),
                        _ => {}
                    }
                }
            }
            Event::Text(t) if in_text_run => {
                if let Some(current) = open.last_mut() {
                    let chunk = t
                        .unescape()
                        .map_err(|e| ExtractionError::Xml(e.to_string()))?;
                    current.push_str(&chunk);
                }
            }
            Event::CData(c) if in_text_run => {
                if let Some(current) = open.last_mut() {
                    current.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"p" => {
                    if let Some(done) = open.pop() {
                        paragraphs.push(done);
                    }
                }
                b"t" => in_text_run = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

//! Plain-text extraction from uploaded documents and the heuristic split
//! into a title line and a description body.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

use crate::errors::AppError;

/// Remote field-size limits for the fill targets.
pub const TITLE_LIMIT: usize = 140;
pub const DESCRIPTION_LIMIT: usize = 1500;

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSummary {
    pub title: String,
    pub description: String,
}

/// Extract visible text from a document by declared extension. Only `.pdf`
/// and `.docx` are supported; a blank extraction is an error.
pub fn extract_text(bytes: &[u8], extension: &str) -> Result<String, AppError> {
    let ext = extension.trim_start_matches('.').to_ascii_lowercase();
    let text = match ext.as_str() {
        "pdf" => pdf_text(bytes)?,
        "docx" => docx_text(bytes)?,
        _ => return Err(AppError::UnsupportedFormat(extension.to_string())),
    };
    if text.trim().is_empty() {
        return Err(AppError::EmptyExtraction);
    }
    Ok(text)
}

fn pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::BadRequest(format!("Could not read PDF: {e}")))
}

/// Word paragraphs come from `word/document.xml`: one line per `w:p`, text
/// gathered from `w:t` runs, empty paragraphs skipped.
fn docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::BadRequest(format!("Could not open DOCX archive: {e}")))?;
    let mut document = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| AppError::BadRequest(format!("DOCX has no document part: {e}")))?
        .read_to_string(&mut document)
        .map_err(|e| AppError::BadRequest(format!("Could not read DOCX document part: {e}")))?;

    let mut reader = Reader::from_str(&document);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if local_name(e.name().as_ref()) == b"t" => {
                in_text_run = true;
            }
            Ok(Event::End(ref e)) if local_name(e.name().as_ref()) == b"t" => {
                in_text_run = false;
            }
            Ok(Event::Text(ref t)) if in_text_run => {
                current.push_str(&t.unescape().unwrap_or_default());
            }
            Ok(Event::End(ref e)) if local_name(e.name().as_ref()) == b"p" => {
                if !current.trim().is_empty() {
                    paragraphs.push(current.trim().to_string());
                }
                current.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AppError::BadRequest(format!("Could not parse DOCX XML: {e}")));
            }
            _ => {}
        }
    }
    Ok(paragraphs.join("\n"))
}

/// Local name of a possibly namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().position(|&b| b == b':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

fn truncate_chars(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        s.to_string()
    } else {
        s.chars().take(limit).collect()
    }
}

/// Split extracted text into a title and a description: first non-blank line
/// becomes the title, the remaining non-blank lines joined by spaces become
/// the description. A single-line document serves as both. Both fields are
/// truncated to the remote field-size limits.
pub fn split_title_description(text: &str) -> DocumentSummary {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let first = lines.next().unwrap_or("");
    let rest: Vec<&str> = lines.collect();

    let description_source =
        if rest.is_empty() { first.to_string() } else { rest.join(" ") };

    DocumentSummary {
        title: truncate_chars(first, TITLE_LIMIT),
        description: truncate_chars(&description_source, DESCRIPTION_LIMIT),
    }
}

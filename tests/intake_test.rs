//! Document intake tests: DOCX extraction against an in-memory archive and
//! the end-to-end split used by upload-and-fill.

use std::io::Write;

use deckhand::errors::AppError;
use deckhand::intake::{extract_text, split_title_description, TITLE_LIMIT};

/// Build a minimal DOCX (a ZIP with a `word/document.xml` part) from
/// paragraph strings.
fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut buffer = std::io::Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options = zip::write::FileOptions::default();
        zip.start_file("word/document.xml", options).expect("start file");
        zip.write_all(document.as_bytes()).expect("write document");
        zip.finish().expect("finish archive");
    }
    buffer.into_inner()
}

#[test]
fn docx_extraction_joins_paragraphs_with_newlines() {
    let bytes = docx_with_paragraphs(&["Quarterly Report", "Revenue grew 10%.", "Costs stable."]);
    let text = extract_text(&bytes, ".docx").expect("extract");
    assert_eq!(text, "Quarterly Report\nRevenue grew 10%.\nCosts stable.");
}

#[test]
fn docx_extraction_skips_empty_paragraphs_and_concatenates_runs() {
    let body = "<w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:t>world</w:t></w:r></w:p>\
                <w:p></w:p>\
                <w:p><w:r><w:t>   </w:t></w:r></w:p>\
                <w:p><w:r><w:t>Second</w:t></w:r></w:p>";
    let document = format!(
        "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );
    let mut buffer = std::io::Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options = zip::write::FileOptions::default();
        zip.start_file("word/document.xml", options).expect("start file");
        zip.write_all(document.as_bytes()).expect("write document");
        zip.finish().expect("finish archive");
    }
    let text = extract_text(&buffer.into_inner(), "docx").expect("extract");
    assert_eq!(text, "Hello world\nSecond");
}

#[test]
fn docx_with_only_blank_paragraphs_is_an_empty_extraction() {
    let bytes = docx_with_paragraphs(&["", "   "]);
    assert!(matches!(extract_text(&bytes, ".docx"), Err(AppError::EmptyExtraction)));
}

#[test]
fn garbage_docx_bytes_are_a_bad_request() {
    assert!(matches!(
        extract_text(b"not a zip archive", ".docx"),
        Err(AppError::BadRequest(_))
    ));
}

#[test]
fn unsupported_extension_is_rejected_before_parsing() {
    assert!(matches!(
        extract_text(b"irrelevant", ".odp"),
        Err(AppError::UnsupportedFormat(_))
    ));
}

#[test]
fn extracted_docx_splits_like_the_upload_flow() {
    let bytes = docx_with_paragraphs(&["Quarterly Report", "Revenue grew 10%.", "Costs stable."]);
    let text = extract_text(&bytes, ".docx").expect("extract");
    let summary = split_title_description(&text);
    assert_eq!(summary.title, "Quarterly Report");
    assert_eq!(summary.description, "Revenue grew 10%. Costs stable.");
}

#[test]
fn oversized_first_line_truncates_the_title_exactly() {
    let long_line = "An extremely long heading ".repeat(10);
    let bytes = docx_with_paragraphs(&[long_line.as_str(), "Body."]);
    let text = extract_text(&bytes, ".docx").expect("extract");
    let summary = split_title_description(&text);
    assert_eq!(summary.title.chars().count(), TITLE_LIMIT);
    assert!(long_line.trim().starts_with(&summary.title));
    assert_eq!(summary.description, "Body.");
}

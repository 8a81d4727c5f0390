//! Serde models for the slice of the Slides/Drive wire format this service
//! touches. Every field the remote side may omit is optional or defaulted —
//! partial trees must deserialize, not fail.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Presentation document tree (presentations.get)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub presentation_id: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub object_id: String,
    #[serde(default)]
    pub page_elements: Vec<PageElement>,
}

/// A page element is a shape or a table; anything else carries no text we
/// care about. Both variants can be absent on malformed or foreign elements,
/// in which case the element yields no text runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageElement {
    pub object_id: Option<String>,
    pub shape: Option<Shape>,
    pub table: Option<Table>,
}

impl PageElement {
    /// All text run content reachable from this element, in document order.
    pub fn text_runs(&self) -> Vec<&str> {
        let mut runs = Vec::new();
        if let Some(shape) = &self.shape {
            if let Some(text) = &shape.text {
                text.collect_runs(&mut runs);
            }
        }
        if let Some(table) = &self.table {
            for row in &table.table_rows {
                for cell in &row.table_cells {
                    if let Some(text) = &cell.text {
                        text.collect_runs(&mut runs);
                    }
                }
            }
        }
        runs
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub text: Option<TextContent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub table_rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub text: Option<TextContent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    #[serde(default)]
    pub text_elements: Vec<TextElement>,
}

impl TextContent {
    fn collect_runs<'a>(&'a self, out: &mut Vec<&'a str>) {
        for element in &self.text_elements {
            if let Some(run) = &element.text_run {
                if let Some(content) = &run.content {
                    out.push(content);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub text_run: Option<TextRun>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// Batch mutation bodies (presentations.batchUpdate)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateBody {
    pub requests: Vec<Request>,
}

/// Externally tagged so each variant serializes as the wire shape the service
/// expects, e.g. `{"replaceAllText": {...}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    ReplaceAllText(ReplaceAllText),
    DuplicateObject(DuplicateObject),
    DeleteObject(DeleteObject),
    UpdateSlidesPosition(UpdateSlidesPosition),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceAllText {
    pub contains_text: SubstringMatch,
    pub replace_text: String,
    pub page_object_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstringMatch {
    pub text: String,
    pub match_case: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateObject {
    pub object_id: String,
    /// Maps source object ids to caller-chosen ids for the duplicates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_ids: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteObject {
    pub object_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlidesPosition {
    pub slide_object_ids: Vec<String>,
    pub insertion_index: u32,
}

// ---------------------------------------------------------------------------
// Drive file metadata (files.get / files.copy)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveCopyBody {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<String>>,
}

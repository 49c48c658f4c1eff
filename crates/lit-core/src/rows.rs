//! Flattening into the row-level records the import step inserts.

use crate::document::Document;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRow {
    pub work_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    /// 1-based position across the whole work.
    pub position: usize,
    pub title: String,
    pub content: String,
}

pub fn flatten(doc: &Document) -> Vec<SectionRow> {
    doc.sections()
        .enumerate()
        .map(|(i, r)| SectionRow {
            work_title: doc.title.clone(),
            book_title: r.book.map(str::to_string),
            position: i + 1,
            title: r.section.title.clone(),
            content: r.section.content.clone(),
        })
        .collect()
}

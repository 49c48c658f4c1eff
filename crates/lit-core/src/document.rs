//! The structured document tree written for the import step.
//!
//! Works without an explicit top-level division serialise as
//! `{title, author?, year?, chapters: [...]}`; multi-volume works as
//! `{title, author?, year?, books: [{title, chapters: [...]}]}`.

use serde::{Deserialize, Serialize};

/// A titled run of body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Outer grouping for multi-volume works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub chapters: Vec<Section>,
}

impl Book {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            chapters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Chapters(Vec<Section>),
    Books(Vec<Book>),
}

impl Default for Body {
    fn default() -> Self {
        Body::Chapters(Vec::new())
    }
}

/// Root output of one segmentation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(flatten)]
    pub body: Body,
}

/// A section together with the title of the book that holds it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRef<'a> {
    pub book: Option<&'a str>,
    pub section: &'a Section,
}

impl Document {
    pub fn new(title: impl Into<String>, body: Body) -> Self {
        Self {
            title: title.into(),
            author: None,
            year: None,
            body,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Number of sections, summed across books.
    pub fn section_count(&self) -> usize {
        match &self.body {
            Body::Chapters(chapters) => chapters.len(),
            Body::Books(books) => books.iter().map(|b| b.chapters.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.section_count() == 0
    }

    /// Every section in document order.
    pub fn sections(&self) -> Box<dyn Iterator<Item = SectionRef<'_>> + '_> {
        match &self.body {
            Body::Chapters(chapters) => Box::new(
                chapters
                    .iter()
                    .map(|section| SectionRef { book: None, section }),
            ),
            Body::Books(books) => Box::new(books.iter().flat_map(|book| {
                book.chapters.iter().map(move |section| SectionRef {
                    book: Some(book.title.as_str()),
                    section,
                })
            })),
        }
    }
}

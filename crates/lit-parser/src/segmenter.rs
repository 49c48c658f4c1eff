//! The generic segmenter: one forward walk over the body, a post-filter,
//! and a looser all-caps retry when the first walk finds too few sections.

use crate::rules::{is_noise, Heading, HeadingKind, RuleSet};
use crate::source::{BodySlice, SourceText};
use crate::traits::TextSegmenter;
use lit_core::{Body, Book, Result, Section, SegmenterConfig};

/// Which walk produced the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Primary,
    Fallback,
}

/// Plausibility of the final section count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldStatus {
    Plausible,
    /// Fewer sections than `min_sections` even after the fallback.
    LowYield,
    /// No sections at all: the heading style of the source was not recognised.
    Empty,
}

#[derive(Debug, Clone)]
pub struct SegmentReport {
    pub pass: Pass,
    pub status: YieldStatus,
    pub primary_sections: usize,
    pub fallback_sections: Option<usize>,
    pub front_matter_lines: usize,
    pub footer_lines: usize,
    /// Non-blank lines seen before any section was open.
    pub dropped_lines: usize,
    pub noise_lines: usize,
    /// Sections removed by the length/title post-filter.
    pub discarded_sections: usize,
    /// Headings of the chosen pass, in source order.
    pub headings: Vec<Heading>,
}

#[derive(Debug, Clone)]
pub struct Segmentation {
    pub body: Body,
    pub report: SegmentReport,
}

impl Segmentation {
    pub fn section_count(&self) -> usize {
        count_sections(&self.body)
    }
}

/// Heading-driven segmenter configured by a [`RuleSet`].
pub struct Segmenter {
    rules: RuleSet,
    fallback: RuleSet,
    config: SegmenterConfig,
}

impl Segmenter {
    pub fn new(rules: RuleSet, config: SegmenterConfig) -> Self {
        let fallback = rules.fallback(&config);
        Self {
            rules,
            fallback,
            config,
        }
    }

    /// Replace the derived all-caps fallback with a custom rule set.
    pub fn with_fallback(mut self, fallback: RuleSet) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    pub fn segment(&self, source: &SourceText) -> Result<Segmentation> {
        let body = source.body(&self.rules.start, self.rules.footer.as_ref())?;
        let primary = walk(&self.rules, body, &self.config);
        let primary_sections = primary.sections;
        tracing::debug!(rules = %self.rules.name, sections = primary_sections, "primary pass");

        let mut chosen = primary;
        let mut pass = Pass::Primary;
        let mut fallback_sections = None;

        if primary_sections < self.config.min_sections {
            tracing::info!(
                rules = %self.rules.name,
                sections = primary_sections,
                min = self.config.min_sections,
                "low yield, retrying with fallback rules"
            );
            let body = source.body(&self.fallback.start, self.fallback.footer.as_ref())?;
            let fallback = walk(&self.fallback, body, &self.config);
            fallback_sections = Some(fallback.sections);
            if fallback.sections > primary_sections {
                chosen = fallback;
                pass = Pass::Fallback;
            }
        }

        let status = match chosen.sections {
            0 => YieldStatus::Empty,
            n if n < self.config.min_sections => YieldStatus::LowYield,
            _ => YieldStatus::Plausible,
        };

        Ok(Segmentation {
            report: SegmentReport {
                pass,
                status,
                primary_sections,
                fallback_sections,
                front_matter_lines: body.front_matter_lines,
                footer_lines: body.footer_lines,
                dropped_lines: chosen.dropped_lines,
                noise_lines: chosen.noise_lines,
                discarded_sections: chosen.discarded,
                headings: chosen.headings,
            },
            body: chosen.body,
        })
    }
}

impl TextSegmenter for Segmenter {
    fn name(&self) -> &str {
        &self.rules.name
    }

    fn segment_text(&self, text: &str) -> Result<Segmentation> {
        self.segment(&SourceText::from_text(text))
    }
}

/// Result of a single walk, already post-filtered.
struct PassResult {
    body: Body,
    sections: usize,
    discarded: usize,
    dropped_lines: usize,
    noise_lines: usize,
    headings: Vec<Heading>,
}

struct OpenSection {
    title: String,
    buf: Vec<String>,
}

/// Mutable state of one walk.
struct Walker<'r> {
    rules: &'r RuleSet,
    drop_noise: bool,
    books: Vec<Book>,
    flat: Vec<Section>,
    book: Option<Book>,
    outer: Option<String>,
    inner: Option<String>,
    open: Option<OpenSection>,
    headings: Vec<Heading>,
    dropped_lines: usize,
    noise_lines: usize,
}

impl<'r> Walker<'r> {
    fn new(rules: &'r RuleSet, config: &SegmenterConfig) -> Self {
        Self {
            rules,
            drop_noise: config.drop_noise_lines,
            books: Vec::new(),
            flat: Vec::new(),
            book: None,
            outer: None,
            inner: None,
            open: None,
            headings: Vec::new(),
            dropped_lines: 0,
            noise_lines: 0,
        }
    }

    fn line(&mut self, number: usize, line: &str) {
        // Folio markers such as `XVIII.` would otherwise pass as all-caps headings.
        if self.drop_noise && is_noise(line) {
            self.noise_lines += 1;
            return;
        }

        if let Some(kind) = self.rules.classify(line) {
            let title = line.trim().to_string();
            tracing::debug!(line = number, ?kind, %title, "heading");
            self.heading(kind, &title);
            self.headings.push(Heading {
                kind,
                title,
                line: number,
            });
            return;
        }

        match self.open.as_mut() {
            Some(open) => {
                if open.buf.is_empty() && line.trim().is_empty() {
                    return;
                }
                open.buf.push(line.to_string());
            }
            None => {
                if !line.trim().is_empty() {
                    self.dropped_lines += 1;
                }
            }
        }
    }

    fn heading(&mut self, kind: HeadingKind, title: &str) {
        self.close_section();
        match kind {
            HeadingKind::Book if self.rules.group_books => {
                self.close_book();
                self.book = Some(Book::new(title));
                self.outer = None;
                self.inner = None;
            }
            HeadingKind::Book | HeadingKind::Part => {
                self.outer = Some(title.to_string());
                self.inner = None;
                self.open_section(title.to_string());
            }
            HeadingKind::Section => {
                let composed = match &self.outer {
                    Some(outer) => format!("{outer}: {title}"),
                    None => title.to_string(),
                };
                self.inner = Some(title.to_string());
                self.open_section(composed);
            }
            HeadingKind::Chapter | HeadingKind::TitledSection => {
                let composed = self.compose(title);
                self.open_section(composed);
            }
        }
    }

    fn compose(&self, title: &str) -> String {
        match (&self.outer, &self.inner) {
            (None, None) => title.to_string(),
            (Some(ctx), None) | (None, Some(ctx)) => format!("{ctx}: {title}"),
            (Some(outer), Some(inner)) => format!("{outer} - {inner}: {title}"),
        }
    }

    fn open_section(&mut self, title: String) {
        self.open = Some(OpenSection {
            title,
            buf: Vec::new(),
        });
    }

    fn close_section(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };
        let section = Section::new(open.title, open.buf.join("\n").trim());
        match self.book.as_mut() {
            Some(book) => book.chapters.push(section),
            None => self.flat.push(section),
        }
    }

    fn close_book(&mut self) {
        if let Some(book) = self.book.take() {
            self.books.push(book);
        }
    }

    fn finish(mut self, min_chars: usize) -> PassResult {
        self.close_section();
        self.close_book();

        let mut discarded = 0;
        let mut keep = |sections: Vec<Section>| -> Vec<Section> {
            let before = sections.len();
            let kept: Vec<Section> = sections
                .into_iter()
                .filter(|s| is_substantive(s, min_chars))
                .collect();
            discarded += before - kept.len();
            kept
        };

        let body = if self.books.is_empty() {
            Body::Chapters(keep(self.flat))
        } else {
            let mut books = Vec::with_capacity(self.books.len() + 1);
            let leading = keep(self.flat);
            if !leading.is_empty() {
                tracing::warn!(
                    rules = %self.rules.name,
                    sections = leading.len(),
                    "sections before the first book heading grouped as an introduction"
                );
                books.push(Book {
                    title: INTRODUCTION_TITLE.to_string(),
                    chapters: leading,
                });
            }
            for book in self.books {
                let chapters = keep(book.chapters);
                if !chapters.is_empty() {
                    books.push(Book {
                        title: book.title,
                        chapters,
                    });
                }
            }
            Body::Books(books)
        };

        let sections = count_sections(&body);

        PassResult {
            body,
            sections,
            discarded,
            dropped_lines: self.dropped_lines,
            noise_lines: self.noise_lines,
            headings: self.headings,
        }
    }
}

/// Title of the synthetic book holding sections that precede the first book heading.
pub const INTRODUCTION_TITLE: &str = "Introduction";

fn count_sections(body: &Body) -> usize {
    match body {
        Body::Chapters(c) => c.len(),
        Body::Books(b) => b.iter().map(|b| b.chapters.len()).sum(),
    }
}

fn is_substantive(section: &Section, min_chars: usize) -> bool {
    section.content.chars().count() >= min_chars && section.title.chars().any(char::is_alphanumeric)
}

fn walk(rules: &RuleSet, body: BodySlice<'_>, config: &SegmenterConfig) -> PassResult {
    let mut walker = Walker::new(rules, config);
    for (number, line) in body.numbered() {
        walker.line(number, line);
    }
    walker.finish(config.min_content_chars)
}

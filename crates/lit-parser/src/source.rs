//! Source text loading and front/footer boundary detection.

use lit_core::{LitError, Result};
use regex::Regex;
use std::path::Path;

/// Raw text split into logical lines.
#[derive(Debug, Clone, Default)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    /// Normalise line endings (`\r\n`, lone `\r`) and strip a UTF-8 BOM.
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut lines: Vec<String> = normalized.split('\n').map(str::to_string).collect();
        if normalized.ends_with('\n') {
            lines.pop();
        }
        Self { lines }
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LitError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&raw))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Cut away front matter and footer.
    ///
    /// The start line itself belongs to the body. The footer is only searched
    /// after the start line; when it is absent the body runs to end of input.
    pub fn body(&self, start: &Boundary, footer: Option<&Boundary>) -> Result<BodySlice<'_>> {
        let first = start
            .find(&self.lines, 0)
            .ok_or_else(|| LitError::BoundaryNotFound {
                marker: start.describe(),
                scanned_lines: self.lines.len(),
            })?;

        let end = match footer {
            Some(footer) => match footer.find(&self.lines, first + 1) {
                Some(idx) => idx,
                None => {
                    tracing::warn!(marker = %footer.describe(), "footer not found, using end of input");
                    self.lines.len()
                }
            },
            None => self.lines.len(),
        };

        tracing::debug!(start = first + 1, end, "body located");
        Ok(BodySlice {
            lines: &self.lines[first..end],
            offset: first,
            front_matter_lines: first,
            footer_lines: self.lines.len() - end,
        })
    }
}

/// The substantive body of a source, keeping absolute line numbers.
#[derive(Debug, Clone, Copy)]
pub struct BodySlice<'a> {
    pub lines: &'a [String],
    /// Index of `lines[0]` in the full source.
    pub offset: usize,
    pub front_matter_lines: usize,
    pub footer_lines: usize,
}

impl<'a> BodySlice<'a> {
    /// Iterate `(1-based line number, line)`.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        let offset = self.offset;
        self.lines
            .iter()
            .enumerate()
            .map(move |(i, l)| (offset + i + 1, l.as_str()))
    }
}

/// A predicate over a trimmed line marking where the body starts or stops.
#[derive(Debug, Clone)]
pub enum Boundary {
    Exact(String),
    StartsWith(String),
    Contains(String),
    Pattern(Regex),
}

impl Boundary {
    pub fn exact(s: &str) -> Self {
        Boundary::Exact(s.to_string())
    }

    pub fn starts_with(s: &str) -> Self {
        Boundary::StartsWith(s.to_string())
    }

    pub fn contains(s: &str) -> Self {
        Boundary::Contains(s.to_string())
    }

    pub fn pattern(p: &str) -> Result<Self> {
        Regex::new(p)
            .map(Boundary::Pattern)
            .map_err(|source| LitError::InvalidRule {
                pattern: p.to_string(),
                source,
            })
    }

    pub fn matches(&self, line: &str) -> bool {
        let line = line.trim();
        match self {
            Boundary::Exact(s) => line == s,
            Boundary::StartsWith(s) => line.starts_with(s.as_str()),
            Boundary::Contains(s) => line.contains(s.as_str()),
            Boundary::Pattern(re) => re.is_match(line),
        }
    }

    /// First line at or after `from` that matches.
    pub fn find(&self, lines: &[String], from: usize) -> Option<usize> {
        lines
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, l)| self.matches(l))
            .map(|(i, _)| i)
    }

    pub fn describe(&self) -> String {
        match self {
            Boundary::Exact(s) | Boundary::StartsWith(s) | Boundary::Contains(s) => s.clone(),
            Boundary::Pattern(re) => re.as_str().to_string(),
        }
    }
}

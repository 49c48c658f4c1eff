//! Heading classification rules.
//!
//! A [`RuleSet`] is an ordered list of [`HeadingRule`]s plus the front and
//! footer boundaries of one work. The first rule that matches a trimmed line
//! decides its [`HeadingKind`].

use crate::source::Boundary;
use lit_core::{LitError, Result, SegmenterConfig};
use regex::Regex;
use std::sync::LazyLock;

/// Structural role of a heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingKind {
    /// Top-level volume; opens a [`lit_core::Book`] when grouping is on.
    Book,
    /// Outer context prefixed onto the titles that follow.
    Part,
    /// Inner context, e.g. a numbered section inside a part.
    Section,
    Chapter,
    /// A free-form title, usually detected by the all-caps heuristic.
    TitledSection,
}

/// A classified heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub kind: HeadingKind,
    pub title: String,
    /// 1-based line number in the source.
    pub line: usize,
}

/// Punctuation allowed inside an all-caps heading.
const HEADING_PUNCT: &[char] = &['\'', '\u{2019}', '.', ',', ';', ':', '-', '\u{2014}', '&', '!', '?'];

#[derive(Debug, Clone)]
pub enum LineMatcher {
    Pattern(Regex),
    AllCaps {
        min_len: usize,
        max_len: usize,
        exclude: Vec<String>,
    },
}

impl LineMatcher {
    pub fn is_match(&self, trimmed: &str) -> bool {
        match self {
            LineMatcher::Pattern(re) => re.is_match(trimmed),
            LineMatcher::AllCaps {
                min_len,
                max_len,
                exclude,
            } => {
                is_all_caps(trimmed, *min_len, *max_len)
                    && !exclude.iter().any(|e| exclusion_key(e) == exclusion_key(trimmed))
            }
        }
    }
}

fn is_all_caps(line: &str, min_len: usize, max_len: usize) -> bool {
    let len = line.chars().count();
    if len < min_len || len > max_len {
        return false;
    }
    let mut letters = 0;
    for c in line.chars() {
        if c.is_alphabetic() {
            if c.is_lowercase() {
                return false;
            }
            letters += 1;
        } else if c != ' ' && !HEADING_PUNCT.contains(&c) {
            return false;
        }
    }
    letters > 0
}

fn exclusion_key(s: &str) -> String {
    s.trim()
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_uppercase()
}

/// One entry in a priority-ordered rule list.
#[derive(Debug, Clone)]
pub struct HeadingRule {
    pub kind: HeadingKind,
    pub matcher: LineMatcher,
}

impl HeadingRule {
    pub fn pattern(kind: HeadingKind, pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|source| LitError::InvalidRule {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            kind,
            matcher: LineMatcher::Pattern(re),
        })
    }

    /// Uppercase-only line within `min_len..=max_len` chars, not in `exclude`.
    pub fn all_caps(kind: HeadingKind, min_len: usize, max_len: usize, exclude: &[&str]) -> Self {
        Self {
            kind,
            matcher: LineMatcher::AllCaps {
                min_len,
                max_len,
                exclude: exclude.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    pub fn matches(&self, trimmed: &str) -> bool {
        self.matcher.is_match(trimmed)
    }
}

/// Declarative description of how one work is segmented.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub name: String,
    pub start: Boundary,
    pub footer: Option<Boundary>,
    pub rules: Vec<HeadingRule>,
    /// Collect sections under `Book` headings instead of a flat list.
    pub group_books: bool,
}

impl RuleSet {
    pub fn new(name: impl Into<String>, start: Boundary) -> Self {
        Self {
            name: name.into(),
            start,
            footer: None,
            rules: Vec::new(),
            group_books: false,
        }
    }

    pub fn with_footer(mut self, footer: Boundary) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn with_rule(mut self, rule: HeadingRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn grouping_books(mut self, on: bool) -> Self {
        self.group_books = on;
        self
    }

    pub fn classify(&self, line: &str) -> Option<HeadingKind> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.rules.iter().find(|r| r.matches(trimmed)).map(|r| r.kind)
    }

    /// Looser all-caps-only rule set used when the primary pass yields too little.
    ///
    /// Keeps the boundaries and the exclusion lists of this set, drops book grouping.
    pub fn fallback(&self, config: &SegmenterConfig) -> RuleSet {
        let exclude: Vec<String> = self
            .rules
            .iter()
            .filter_map(|r| match &r.matcher {
                LineMatcher::AllCaps { exclude, .. } => Some(exclude.clone()),
                LineMatcher::Pattern(_) => None,
            })
            .flatten()
            .collect();
        RuleSet {
            name: format!("{} (fallback)", self.name),
            start: self.start.clone(),
            footer: self.footer.clone(),
            rules: vec![HeadingRule {
                kind: HeadingKind::TitledSection,
                matcher: LineMatcher::AllCaps {
                    min_len: config.fallback_min_len,
                    max_len: config.fallback_max_len,
                    exclude,
                },
            }],
            group_books: false,
        }
    }
}

static FOLIO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(\[?(?i:m{0,3}(c[md]|d?c{0,3})(x[cl]|l?x{0,3})(i[xv]|v?i{0,3}))\]?\.?",
        r"|\[?\d+\]?",
        r"|\[?(?i:p\.|page)\s*\d+\]?)$",
    ))
    .unwrap()
});

/// Page numbers, folio markers and symbol-only lines left over from digitization.
pub fn is_noise(line: &str) -> bool {
    let t = line.trim();
    if t.is_empty() {
        return false;
    }
    if !t.chars().any(char::is_alphanumeric) {
        return true;
    }
    // The pronoun, not a folio.
    if t == "I" {
        return false;
    }
    FOLIO_RE.is_match(t)
}

//! Rule profiles for the bundled public-domain works.

use crate::rules::{HeadingKind, HeadingRule, RuleSet};
use crate::source::Boundary;
use lit_core::{Body, Document, LitError, Result};
use std::path::PathBuf;

/// Directory holding the `<slug>.txt` sources and `<slug>.json` outputs.
pub const LITERATURE_DIR: &str = "literature";

const GUTENBERG_END: &str = "*** END OF";

/// A work together with the rules that segment it.
#[derive(Debug, Clone)]
pub struct WorkProfile {
    pub slug: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub year: i32,
    pub rules: RuleSet,
}

impl WorkProfile {
    pub fn default_input(&self) -> PathBuf {
        PathBuf::from(LITERATURE_DIR).join(format!("{}.txt", self.slug))
    }

    pub fn default_output(&self) -> PathBuf {
        PathBuf::from(LITERATURE_DIR).join(format!("{}.json", self.slug))
    }

    /// Wrap a segmented body with this work's metadata.
    pub fn document(&self, body: Body) -> Document {
        Document::new(self.title, body)
            .with_author(self.author)
            .with_year(self.year)
    }
}

/// Slugs of every registered work, in listing order.
pub const WORK_SLUGS: &[&str] = &[
    "bondage-of-the-will",
    "imitation-of-christ",
    "institutes",
    "pilgrims-progress",
];

/// Look up a work by slug.
pub fn profile(slug: &str) -> Result<WorkProfile> {
    match slug {
        "bondage-of-the-will" => bondage_of_the_will(),
        "imitation-of-christ" => imitation_of_christ(),
        "institutes" => institutes(),
        "pilgrims-progress" => pilgrims_progress(),
        other => Err(LitError::UnknownWork(other.to_string())),
    }
}

pub fn all_profiles() -> Result<Vec<WorkProfile>> {
    WORK_SLUGS.iter().map(|slug| profile(slug)).collect()
}

/// Luther, 1525. Parts with all-caps titled sections inside them.
pub fn bondage_of_the_will() -> Result<WorkProfile> {
    let rules = RuleSet::new("bondage-of-the-will", Boundary::exact("PART I."))
        .with_footer(Boundary::contains(GUTENBERG_END))
        .with_rule(HeadingRule::pattern(HeadingKind::Part, r"^PART [IVXLC]+\.?$")?)
        .with_rule(HeadingRule::pattern(HeadingKind::Section, r"^SECT(ION)?\.? [IVXLC]+\.?$")?)
        .with_rule(HeadingRule::all_caps(
            HeadingKind::TitledSection,
            10,
            50,
            &[
                "MARTIN LUTHER",
                "BY MARTIN LUTHER",
                "THE BONDAGE OF THE WILL",
                "TRANSLATED BY HENRY COLE",
            ],
        ));
    Ok(WorkProfile {
        slug: "bondage-of-the-will",
        title: "The Bondage of the Will",
        author: "Martin Luther",
        year: 1525,
        rules,
    })
}

/// Thomas à Kempis, c. 1418. Four books of numbered chapters.
pub fn imitation_of_christ() -> Result<WorkProfile> {
    let rules = RuleSet::new(
        "imitation-of-christ",
        Boundary::pattern(r"^(THE FIRST BOOK|BOOK I)\.?$")?,
    )
    .with_footer(Boundary::contains(GUTENBERG_END))
    .with_rule(HeadingRule::pattern(
        HeadingKind::Book,
        r"^(THE (FIRST|SECOND|THIRD|FOURTH) BOOK|BOOK [IVX]+)\.?$",
    )?)
    .with_rule(HeadingRule::pattern(HeadingKind::Chapter, r"^CHAPTER [IVXLC\d]+\b\.?")?)
    .grouping_books(true);
    Ok(WorkProfile {
        slug: "imitation-of-christ",
        title: "The Imitation of Christ",
        author: "Thomas à Kempis",
        year: 1418,
        rules,
    })
}

/// Calvin, 1559 edition. Books of chapters.
pub fn institutes() -> Result<WorkProfile> {
    let rules = RuleSet::new("institutes", Boundary::pattern(r"^BOOK (FIRST|I)\b\.?")?)
        .with_footer(Boundary::contains(GUTENBERG_END))
        .with_rule(HeadingRule::pattern(
            HeadingKind::Book,
            r"^BOOK (FIRST|SECOND|THIRD|FOURTH|[IVX]+)\b\.?",
        )?)
        .with_rule(HeadingRule::pattern(HeadingKind::Chapter, r"^CHAPTER [IVXLC\d]+\b\.?")?)
        .grouping_books(true);
    Ok(WorkProfile {
        slug: "institutes",
        title: "Institutes of the Christian Religion",
        author: "John Calvin",
        year: 1559,
        rules,
    })
}

/// Bunyan, 1678. Two parts, all-caps episode titles, no book grouping.
pub fn pilgrims_progress() -> Result<WorkProfile> {
    let rules = RuleSet::new(
        "pilgrims-progress",
        Boundary::starts_with("THE AUTHOR'S APOLOGY"),
    )
    .with_footer(Boundary::contains(GUTENBERG_END))
    .with_rule(HeadingRule::pattern(
        HeadingKind::Part,
        r"^((THE )?(FIRST|SECOND) PART|PART [IVX]+)\.?$",
    )?)
    .with_rule(HeadingRule::all_caps(
        HeadingKind::TitledSection,
        10,
        50,
        &[
            "JOHN BUNYAN",
            "BY JOHN BUNYAN",
            "THE PILGRIM'S PROGRESS",
            "FROM THIS WORLD TO THAT WHICH IS TO COME",
        ],
    ));
    Ok(WorkProfile {
        slug: "pilgrims-progress",
        title: "The Pilgrim's Progress",
        author: "John Bunyan",
        year: 1678,
        rules,
    })
}

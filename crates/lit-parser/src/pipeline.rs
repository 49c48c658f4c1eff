//! End-to-end run for one work: read, segment, stamp metadata, write.

use crate::segmenter::{Pass, SegmentReport, Segmenter, YieldStatus};
use crate::source::SourceText;
use crate::works::WorkProfile;
use lit_core::{write_json_atomic, Body, Document, Result, SegmenterConfig};
use std::path::{Path, PathBuf};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub work: String,
    pub output: PathBuf,
    pub sections: usize,
    pub books: Option<usize>,
    pub report: SegmentReport,
}

impl RunSummary {
    /// True when both passes stayed under the plausibility threshold.
    pub fn needs_review(&self) -> bool {
        self.report.status != YieldStatus::Plausible
    }
}

pub struct Pipeline {
    profile: WorkProfile,
    segmenter: Segmenter,
}

impl Pipeline {
    pub fn new(profile: WorkProfile, config: SegmenterConfig) -> Self {
        let segmenter = Segmenter::new(profile.rules.clone(), config);
        Self { profile, segmenter }
    }

    pub fn profile(&self) -> &WorkProfile {
        &self.profile
    }

    /// Segment a loaded source into this work's document.
    pub fn segment(&self, source: &SourceText) -> Result<(Document, SegmentReport)> {
        let seg = self.segmenter.segment(source)?;
        Ok((self.profile.document(seg.body), seg.report))
    }

    /// Read `input`, segment it and atomically write the JSON document to `output`.
    ///
    /// Nothing is written when the source is missing or its start boundary
    /// cannot be found.
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunSummary> {
        tracing::info!(work = self.profile.slug, input = %input.display(), "segmenting");
        let source = SourceText::read(input)?;
        let (doc, report) = self.segment(&source)?;

        match report.status {
            YieldStatus::Plausible => {}
            YieldStatus::LowYield => tracing::warn!(
                work = self.profile.slug,
                primary = report.primary_sections,
                fallback = ?report.fallback_sections,
                "both passes below the section threshold; review the heading rules"
            ),
            YieldStatus::Empty => tracing::warn!(
                work = self.profile.slug,
                "no sections detected; heading style not recognised"
            ),
        }
        if report.pass == Pass::Fallback {
            tracing::info!(work = self.profile.slug, "using fallback segmentation");
        }

        write_json_atomic(output, &doc)?;

        let books = match &doc.body {
            Body::Books(b) => Some(b.len()),
            Body::Chapters(_) => None,
        };
        let summary = RunSummary {
            work: self.profile.slug.to_string(),
            output: output.to_path_buf(),
            sections: doc.section_count(),
            books,
            report,
        };
        tracing::info!(
            work = %summary.work,
            sections = summary.sections,
            books = ?summary.books,
            discarded = summary.report.discarded_sections,
            output = %output.display(),
            "document written"
        );
        Ok(summary)
    }
}

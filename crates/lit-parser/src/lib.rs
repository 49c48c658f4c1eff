//! Heading-driven segmentation of plain-text literature into structured documents.

pub mod pipeline;
pub mod rules;
pub mod segmenter;
pub mod source;
pub mod traits;
pub mod works;

pub use pipeline::{Pipeline, RunSummary};
pub use rules::{is_noise, Heading, HeadingKind, HeadingRule, LineMatcher, RuleSet};
pub use segmenter::{Pass, SegmentReport, Segmentation, Segmenter, YieldStatus};
pub use source::{BodySlice, Boundary, SourceText};
pub use traits::TextSegmenter;
pub use works::{all_profiles, profile, WorkProfile, WORK_SLUGS};

//! Core types for the literature segmenter: the output document tree,
//! the error taxonomy, tunable thresholds and the JSON writer.

pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod rows;

pub use config::SegmenterConfig;
pub use document::{Body, Book, Document, Section, SectionRef};
pub use error::{LitError, Result};
pub use output::{read_document, write_json_atomic};
pub use rows::{flatten, SectionRow};

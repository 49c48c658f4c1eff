use crate::segmenter::Segmentation;
use lit_core::{LitError, Result};
use std::path::Path;

/// Trait for text-to-document segmenters.
pub trait TextSegmenter: Send + Sync {
    /// Name of the rule set, used in logs.
    fn name(&self) -> &str;

    /// Segment an in-memory source text.
    fn segment_text(&self, text: &str) -> Result<Segmentation>;

    /// Segment a source file.
    fn segment_file(&self, path: &Path) -> Result<Segmentation> {
        let text = std::fs::read_to_string(path).map_err(|source| LitError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        self.segment_text(&text)
    }
}

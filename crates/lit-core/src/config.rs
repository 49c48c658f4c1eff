use crate::error::{LitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thresholds shared by every segmentation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Below this many sections the primary pass is considered implausible.
    pub min_sections: usize,
    /// Sections with less trimmed content than this (in chars) are dropped.
    pub min_content_chars: usize,
    /// Length window for the looser all-caps fallback rule.
    pub fallback_min_len: usize,
    pub fallback_max_len: usize,
    /// Drop page numbers, folio markers and symbol-only lines.
    pub drop_noise_lines: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            min_sections: 5,
            min_content_chars: 100,
            fallback_min_len: 5,
            fallback_max_len: 60,
            drop_noise_lines: true,
        }
    }
}

impl SegmenterConfig {
    /// Load overrides from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LitError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

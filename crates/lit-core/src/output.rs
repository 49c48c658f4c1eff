//! JSON output with atomic replacement of the target file.

use crate::document::Document;
use crate::error::{LitError, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Serialise `value` as indented JSON and move it into place in one rename,
/// so a reader never observes a half-written file.
pub fn write_json_atomic<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');

    let fail = |source: std::io::Error| LitError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(fail)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    let result = (|| -> std::io::Result<()> {
        let mut f = fs::File::create(&tmp_path)?;
        f.write_all(json.as_bytes())?;
        f.flush()?;
        f.sync_all()?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    })();
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(fail(e));
    }
    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote document");
    Ok(())
}

/// Load a document previously produced by [`write_json_atomic`].
pub fn read_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| LitError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

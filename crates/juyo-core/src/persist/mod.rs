//! Persister: deterministic output paths and file writes.
//!
//! Layout is `<root>/<category>/<short_code>/<year>/<filename>`. Writes go
//! to `<file>.part` and are renamed over the final path, so re-runs replace
//! earlier output.

mod filename;

pub use filename::sanitize_filename;

use std::fs;
use std::path::{Path, PathBuf};

use crate::area::Area;
use crate::error::{JuyoError, Result};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// What gets written: normalized UTF-8 text, or bytes kept as retrieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Raw(Vec<u8>),
}

impl Content {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Content::Text(t) => t.as_bytes(),
            Content::Raw(b) => b,
        }
    }
}

/// Root of the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Destination for `filename`; pure in (area, year, filename).
    pub fn destination(&self, area: Area, year: i32, filename: &str) -> PathBuf {
        let spec = area.spec();
        self.root
            .join(spec.category)
            .join(spec.short_code)
            .join(year.to_string())
            .join(filename)
    }
}

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `content` to its destination, creating directories as needed.
///
/// An existing file at the destination is replaced. Returns the final path.
pub fn persist(
    layout: &OutputLayout,
    area: Area,
    year: i32,
    filename: &str,
    content: &Content,
) -> Result<PathBuf> {
    let filename = sanitize_filename(filename)?;
    let final_path = layout.destination(area, year, &filename);

    if let Some(parent) = final_path.parent() {
        fs::create_dir_all(parent).map_err(|e| JuyoError::filesystem(parent, e))?;
    }

    let tmp = temp_path(&final_path);
    if let Err(e) = fs::write(&tmp, content.as_bytes()) {
        discard_temp(&tmp);
        return Err(JuyoError::filesystem(&tmp, e));
    }
    if let Err(e) = fs::rename(&tmp, &final_path) {
        discard_temp(&tmp);
        return Err(JuyoError::filesystem(&final_path, e));
    }

    tracing::info!(path = %final_path.display(), bytes = content.as_bytes().len(), "wrote");
    Ok(final_path)
}

/// Best-effort removal of a leftover `.part`; the original error is what gets reported.
fn discard_temp(tmp: &Path) {
    if let Err(e) = fs::remove_file(tmp) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %tmp.display(), "could not remove temp file: {}", e);
        }
    }
}

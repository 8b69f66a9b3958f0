//! In-memory ZIP reading for the monthly and quarterly archives.

use std::io::{Cursor, Read};
use std::path::Path;

use crate::error::{JuyoError, Result};

/// One file member of an archive, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Base name of the member (directory components dropped).
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Reads every file member in archive order.
///
/// A corrupt central directory fails the whole call. A member that cannot be
/// read is returned as an `Err` in its slot so the caller can decide whether
/// the remaining members still get processed.
pub fn read_entries(bytes: &[u8]) -> Result<Vec<Result<ArchiveEntry>>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let entry = match archive.by_index(index) {
            Ok(mut file) => {
                if file.is_dir() {
                    continue;
                }
                let name = base_name(file.name());
                let mut buf = Vec::with_capacity(file.size() as usize);
                match file.read_to_end(&mut buf) {
                    Ok(_) => name.map(|name| ArchiveEntry { name, bytes: buf }),
                    Err(e) => Err(JuyoError::Archive(e.into())),
                }
            }
            Err(e) => Err(JuyoError::Archive(e)),
        };
        entries.push(entry);
    }

    tracing::debug!(members = entries.len(), "read archive");
    Ok(entries)
}

fn base_name(member: &str) -> Result<String> {
    // Some producers use backslashes as separators.
    let normalized = member.replace('\\', "/");
    Path::new(&normalized)
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| JuyoError::InvalidFilename(member.to_string()))
}

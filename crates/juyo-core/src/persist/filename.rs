//! Output filename checks.

use crate::error::{JuyoError, Result};

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Makes a remote or archive-member name safe to use as a single path component.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Trims leading/trailing spaces
/// - Truncates to 255 bytes on a char boundary
///
/// Empty results and `.`/`..` are rejected rather than replaced.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = replaced.trim_matches(' ');
    let mut take = trimmed.len().min(NAME_MAX);
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    let out = &trimmed[..take];

    if out.is_empty() || out == "." || out == ".." {
        return Err(JuyoError::InvalidFilename(name.to_string()));
    }
    Ok(out.to_string())
}

//! Finding the archive link inside a lookup page.

use url::Url;

use crate::error::{JuyoError, Result};

/// Finds the first occurrence of `pattern` in `html` and resolves it against `base`.
///
/// The match is a case-sensitive literal substring search on the raw markup;
/// no HTML parsing and no pattern syntax.
pub fn resolve_link(html: &str, pattern: &str, base: &Url, page_url: &str) -> Result<Url> {
    let start = html.find(pattern).ok_or_else(|| JuyoError::ResourceNotFound {
        pattern: pattern.to_string(),
        page: page_url.to_string(),
    })?;
    let href = &html[start..start + pattern.len()];
    join(base, href)
}

pub(crate) fn join(base: &Url, relative: &str) -> Result<Url> {
    base.join(relative).map_err(|source| JuyoError::Url {
        url: relative.to_string(),
        source,
    })
}

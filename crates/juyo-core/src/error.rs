//! Error taxonomy for the fetch pipeline.
//!
//! Every stage returns [`JuyoError`]; nothing is retried inside the core.
//! Config and logging stay on `anyhow` since they only ever surface to the CLI.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JuyoError>;

#[derive(Debug, Error)]
pub enum JuyoError {
    /// Date string was neither `YYYY-MM-DD` nor `YYYYMMDD`.
    #[error("invalid date {input:?}: expected YYYY-MM-DD or YYYYMMDD")]
    InvalidDate { input: String },

    #[error("unsupported area: {0}")]
    UnsupportedArea(String),

    /// Non-2xx response on any GET.
    #[error("GET {url} returned HTTP {status}")]
    Http { status: u32, url: String },

    /// Connection, TLS, timeout or other libcurl-level failure.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The lookup page was fetched but does not link the expected archive.
    #[error("no data link found for this date: {pattern:?} not present in {page}")]
    ResourceNotFound { pattern: String, page: String },

    #[error("payload is not valid {encoding}")]
    Decode { encoding: &'static str },

    #[error("invalid url {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Archive member or URL yielded no usable filename.
    #[error("invalid output filename {0:?}")]
    InvalidFilename(String),

    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JuyoError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        JuyoError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

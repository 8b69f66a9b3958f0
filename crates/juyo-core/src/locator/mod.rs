//! Resource locator: (date, area) → where the dataset lives.
//!
//! Pure: no I/O happens here. The quarterly areas need one extra hop (an HTML
//! page that links the archive), which is described, not performed.

mod link;
mod quarter;

pub use link::resolve_link;
pub use quarter::quarter_bounds;

use url::Url;

use crate::area::{Area, DeliveryMode};
use crate::date::RequestDate;
use crate::error::{JuyoError, Result};

/// What a direct URL is expected to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Csv,
    Archive,
}

/// Resolved remote location(s) for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceDescriptor {
    /// The data URL is known up front.
    Direct {
        url: Url,
        filename: String,
        kind: PayloadKind,
    },
    /// The data URL must be read out of `page_url`'s markup; it is the first
    /// occurrence of `pattern`, resolved against `base_url`. Always an archive.
    HtmlLookup {
        page_url: Url,
        base_url: Url,
        pattern: String,
        filename: String,
    },
}

impl ResourceDescriptor {
    /// Remote filename (CSV name or archive name).
    pub fn filename(&self) -> &str {
        match self {
            ResourceDescriptor::Direct { filename, .. }
            | ResourceDescriptor::HtmlLookup { filename, .. } => filename,
        }
    }
}

/// Maps a request date and area to the resource to fetch.
pub fn locate(date: &RequestDate, area: Area) -> Result<ResourceDescriptor> {
    let spec = area.spec();
    let base = Url::parse(spec.base_url).map_err(|source| JuyoError::Url {
        url: spec.base_url.to_string(),
        source,
    })?;
    let year = date.year();

    let descriptor = match spec.delivery {
        DeliveryMode::DirectCsvByYear { path } => {
            let filename = format!("juyo_{}_{}.csv", year, area.key());
            ResourceDescriptor::Direct {
                url: link::join(&base, &format!("{path}{filename}"))?,
                filename,
                kind: PayloadKind::Csv,
            }
        }
        DeliveryMode::DirectCsvByDate => {
            let filename = format!("juyo_05_{}.csv", date.compact());
            ResourceDescriptor::Direct {
                url: link::join(&base, &filename)?,
                filename,
                kind: PayloadKind::Csv,
            }
        }
        DeliveryMode::MonthlyZip { path } => {
            let filename = format!("{}{:02}_power_usage.zip", year, date.month());
            ResourceDescriptor::Direct {
                url: link::join(&base, &format!("{path}{filename}"))?,
                filename,
                kind: PayloadKind::Archive,
            }
        }
        DeliveryMode::QuarterlyZipViaHtmlLookup { page } => {
            let (start, end) = quarter_bounds(date.month());
            let filename = format!(
                "{}{:02}-{:02}_{}_denkiyohou.zip",
                year,
                start,
                end,
                area.key()
            );
            ResourceDescriptor::HtmlLookup {
                page_url: link::join(&base, page)?,
                pattern: format!("area/data/zip/{filename}"),
                base_url: base,
                filename,
            }
        }
    };

    tracing::debug!(%area, %date, ?descriptor, "located resource");
    Ok(descriptor)
}

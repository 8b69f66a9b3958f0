//! Supported areas and their per-area acquisition policy.
//!
//! Each area is one static [`AreaSpec`] record; the pipeline only ever reads
//! these records, so adding an area means adding a table entry.

mod table;

use std::fmt;
use std::str::FromStr;

use crate::decode::UntrustedEncodingPolicy;
use crate::error::JuyoError;
use crate::normalize::CleaningMode;

/// Regional provider whose demand data we can fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    Hokkaido,
    Tohoku,
    Tokyo,
    Chubu,
    Hokuriku,
}

/// Shape of the remote publishing mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// One CSV per calendar year at `<base><path>juyo_<year>_<area>.csv`.
    DirectCsvByYear { path: &'static str },
    /// One CSV per day at `<base>juyo_05_<YYYYMMDD>.csv`.
    DirectCsvByDate,
    /// One ZIP per month at `<base><path><year><MM>_power_usage.zip`.
    MonthlyZip { path: &'static str },
    /// One ZIP per quarter, linked from an HTML page under the base URL.
    QuarterlyZipViaHtmlLookup { page: &'static str },
}

impl DeliveryMode {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryMode::DirectCsvByYear { .. } => "yearly csv",
            DeliveryMode::DirectCsvByDate => "daily csv",
            DeliveryMode::MonthlyZip { .. } => "monthly zip",
            DeliveryMode::QuarterlyZipViaHtmlLookup { .. } => "quarterly zip (html lookup)",
        }
    }
}

/// Static policy record for one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaSpec {
    pub area: Area,
    pub base_url: &'static str,
    pub delivery: DeliveryMode,
    pub cleaning: CleaningMode,
    pub untrusted_encoding: UntrustedEncodingPolicy,
    /// Top-level segment under the output root.
    pub category: &'static str,
    /// Short area segment under the category.
    pub short_code: &'static str,
}

impl Area {
    pub const ALL: [Area; 5] = [
        Area::Hokkaido,
        Area::Tohoku,
        Area::Tokyo,
        Area::Chubu,
        Area::Hokuriku,
    ];

    /// Lowercase key used in URLs, filenames and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Area::Hokkaido => "hokkaido",
            Area::Tohoku => "tohoku",
            Area::Tokyo => "tokyo",
            Area::Chubu => "chubu",
            Area::Hokuriku => "hokuriku",
        }
    }

    pub fn spec(self) -> &'static AreaSpec {
        table::spec_for(self)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Area {
    type Err = JuyoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Area::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| JuyoError::UnsupportedArea(s.to_string()))
    }
}

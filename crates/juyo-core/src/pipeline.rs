//! The fetch pipeline: locate → fetch → (per member) decode → normalize → persist.
//!
//! One generic pipeline serves every area; all per-area behavior comes from
//! the area's [`AreaSpec`]. Nothing is kept between runs.

use std::path::PathBuf;

use crate::archive::{read_entries, ArchiveEntry};
use crate::area::{Area, AreaSpec};
use crate::config::{JuyoConfig, MemberFailurePolicy};
use crate::date::RequestDate;
use crate::decode::{decode, ChardetngDetector, DecodeOutcome, EncodingDetector};
use crate::error::{JuyoError, Result};
use crate::fetch::{fetch, CurlClient, FetchedPayload, HttpGet};
use crate::locator::locate;
use crate::normalize::normalize;
use crate::persist::{persist, Content, OutputLayout};

/// An archive member that failed while the skip policy was active.
#[derive(Debug)]
pub struct SkippedMember {
    /// Position among the archive's file members.
    pub index: usize,
    /// Member name, when it could be read.
    pub name: Option<String>,
    pub error: JuyoError,
}

/// Outcome of one `run`.
#[derive(Debug)]
pub struct FetchReport {
    pub area: Area,
    pub date: RequestDate,
    /// Files written, in processing order.
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedMember>,
}

pub struct Pipeline<C, D> {
    client: C,
    detector: D,
    layout: OutputLayout,
    member_failure: MemberFailurePolicy,
}

impl Pipeline<CurlClient, ChardetngDetector> {
    /// Production pipeline: libcurl transport and chardetng detection.
    pub fn from_config(cfg: &JuyoConfig) -> Self {
        Pipeline::new(
            CurlClient::new(&cfg.http),
            ChardetngDetector,
            OutputLayout::new(&cfg.output_root),
        )
        .with_member_failure(cfg.member_failure)
    }
}

impl<C: HttpGet, D: EncodingDetector> Pipeline<C, D> {
    pub fn new(client: C, detector: D, layout: OutputLayout) -> Self {
        Self {
            client,
            detector,
            layout,
            member_failure: MemberFailurePolicy::default(),
        }
    }

    pub fn with_member_failure(mut self, policy: MemberFailurePolicy) -> Self {
        self.member_failure = policy;
        self
    }

    /// Fetches, normalizes and writes the dataset for `date` in `area`.
    pub fn run(&self, date: &RequestDate, area: Area) -> Result<FetchReport> {
        let spec = area.spec();
        let descriptor = locate(date, area)?;
        let payload = fetch(&self.client, &descriptor)?;
        tracing::debug!(%area, %date, bytes = payload.len(), "fetched payload");

        let mut report = FetchReport {
            area,
            date: *date,
            written: Vec::new(),
            skipped: Vec::new(),
        };

        match payload {
            FetchedPayload::Csv { filename, bytes } => {
                let path = self.store(spec, date.year(), &filename, bytes)?;
                report.written.push(path);
            }
            FetchedPayload::Archive { filename, bytes } => {
                let members = read_entries(&bytes)?;
                for (index, member) in members.into_iter().enumerate() {
                    let name = member.as_ref().ok().map(|m| m.name.clone());
                    let outcome = member.and_then(|ArchiveEntry { name, bytes }| {
                        self.store(spec, date.year(), &name, bytes)
                    });
                    match outcome {
                        Ok(path) => report.written.push(path),
                        Err(error) => match self.member_failure {
                            MemberFailurePolicy::Abort => return Err(error),
                            MemberFailurePolicy::Skip => {
                                tracing::warn!(
                                    archive = %filename,
                                    index,
                                    member = name.as_deref().unwrap_or("?"),
                                    "skipping member: {}",
                                    error
                                );
                                report.skipped.push(SkippedMember { index, name, error });
                            }
                        },
                    }
                }
            }
        }

        Ok(report)
    }

    fn store(&self, spec: &AreaSpec, year: i32, filename: &str, bytes: Vec<u8>) -> Result<PathBuf> {
        let content = match decode(bytes, &self.detector, spec.untrusted_encoding)? {
            DecodeOutcome::Text { text, encoding } => {
                tracing::debug!(file = filename, encoding = encoding.name(), "decoded");
                Content::Text(normalize(&text, spec.cleaning))
            }
            DecodeOutcome::Raw { bytes, guessed } => {
                tracing::debug!(file = filename, guessed = guessed.name(), "kept raw");
                Content::Raw(bytes)
            }
        };
        persist(&self.layout, spec.area, year, filename, &content)
    }
}

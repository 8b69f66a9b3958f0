//! Decoder: raw bytes → UTF-8 text.
//!
//! Upstream servers declare no charset, so the encoding is guessed by an
//! [`EncodingDetector`] and then confirmed by a strict decode. Bytes are never
//! decoded with replacement characters.

mod detect;

pub use detect::{ChardetngDetector, EncodingDetector, FixedDetector};

use encoding_rs::{Encoding, EUC_JP, ISO_2022_JP, SHIFT_JIS, UTF_8};

use crate::error::{JuyoError, Result};

/// Used when detection yields nothing.
pub static FALLBACK_ENCODING: &Encoding = &encoding_rs::SHIFT_JIS_INIT;

/// What to do with a payload whose guessed encoding is outside the trusted set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UntrustedEncodingPolicy {
    /// Strict-decode with the guessed encoding anyway.
    Decode,
    /// Keep the payload as opaque bytes; no text processing.
    PassThrough,
}

/// Result of decoding one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Text {
        text: String,
        encoding: &'static Encoding,
    },
    /// Not decoded; bytes are kept as retrieved.
    Raw {
        bytes: Vec<u8>,
        guessed: &'static Encoding,
    },
}

/// Shift_JIS, EUC-JP, ISO-2022-JP and UTF-8 are decoded without further policy checks.
pub fn is_trusted(encoding: &'static Encoding) -> bool {
    [SHIFT_JIS, EUC_JP, ISO_2022_JP, UTF_8].contains(&encoding)
}

/// Guesses the encoding of `bytes`: a BOM wins, then the detector, then
/// [`FALLBACK_ENCODING`]. Returns the encoding and the BOM length to skip.
pub fn resolve_encoding<D: EncodingDetector + ?Sized>(
    bytes: &[u8],
    detector: &D,
) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return (encoding, bom_len);
    }
    (detector.detect(bytes).unwrap_or(FALLBACK_ENCODING), 0)
}

/// Decodes `bytes`, or hands them back untouched when the guessed encoding
/// is untrusted and the policy says to pass through.
pub fn decode<D: EncodingDetector + ?Sized>(
    bytes: Vec<u8>,
    detector: &D,
    policy: UntrustedEncodingPolicy,
) -> Result<DecodeOutcome> {
    let (encoding, bom_len) = resolve_encoding(&bytes, detector);

    if !is_trusted(encoding) && policy == UntrustedEncodingPolicy::PassThrough {
        tracing::debug!(
            encoding = encoding.name(),
            "untrusted encoding, keeping raw bytes"
        );
        return Ok(DecodeOutcome::Raw {
            bytes,
            guessed: encoding,
        });
    }

    let text = strict(&bytes[bom_len..], encoding)?;
    Ok(DecodeOutcome::Text { text, encoding })
}

fn strict(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or(JuyoError::Decode {
            encoding: encoding.name(),
        })
}

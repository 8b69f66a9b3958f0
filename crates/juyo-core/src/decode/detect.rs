//! Heuristic charset detection.

use encoding_rs::{Encoding, UTF_8};

/// Guesses the charset of a payload. The guess is untrusted: callers always
/// validate it by attempting a strict decode.
pub trait EncodingDetector {
    /// `None` when there is nothing to go on (empty input).
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding>;
}

impl<T: EncodingDetector + ?Sized> EncodingDetector for &T {
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding> {
        (**self).detect(bytes)
    }
}

/// Detector backed by `chardetng`, biased toward the `.jp` TLD.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChardetngDetector;

impl EncodingDetector for ChardetngDetector {
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding> {
        if bytes.is_empty() {
            return None;
        }
        // chardetng reports windows-1252 for pure ASCII; ASCII is valid UTF-8.
        if bytes.is_ascii() {
            return Some(UTF_8);
        }
        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(bytes, true);
        Some(detector.guess(Some(b"jp"), true))
    }
}

/// Always answers with a fixed guess (or none). Useful to pin detection.
#[derive(Debug, Clone, Copy)]
pub struct FixedDetector(pub Option<&'static Encoding>);

impl EncodingDetector for FixedDetector {
    fn detect(&self, _bytes: &[u8]) -> Option<&'static Encoding> {
        self.0
    }
}

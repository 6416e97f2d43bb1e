//! Text samples and their byte encoding.
//!
//! Symbols of a sample are Unicode scalar values (`char`). Compressors receive the UTF-8
//! encoding of the sample. A `TextSample` always holds valid text, so malformed input is
//! rejected when the sample is constructed from raw UTF-8 bytes or UTF-16 code units.

use crate::types::{Result, SignalInfoError};
use std::fmt;

/// Name of the encoding used to turn samples into bytes.
pub const TEXT_ENCODING: &str = "UTF-8";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextSample {
    text: String,
}

impl TextSample {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self { text: text.into() }
    }

    /// Build a sample from UTF-8 bytes.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self> {
        String::from_utf8(bytes)
            .map(Self::new)
            .map_err(|err| SignalInfoError::EncodingFailure {
                encoding: TEXT_ENCODING,
                reason: err.to_string(),
            })
    }

    /// Build a sample from UTF-16 code units. Unpaired surrogates are rejected.
    pub fn from_utf16(units: &[u16]) -> Result<Self> {
        String::from_utf16(units)
            .map(Self::new)
            .map_err(|err| SignalInfoError::EncodingFailure {
                encoding: "UTF-16",
                reason: err.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The UTF-8 bytes handed to compressors.
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of symbols (chars) in the sample.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }
}

impl From<&str> for TextSample {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextSample {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for TextSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let sample = TextSample::new("héllo");
        assert_eq!(sample.len(), 5);
        assert_eq!(sample.byte_len(), 6);
        assert_eq!(sample.as_bytes(), "héllo".as_bytes());
    }

    #[test]
    fn test_empty_sample() {
        let sample = TextSample::default();
        assert!(sample.is_empty());
        assert_eq!(sample.len(), 0);
    }

    #[test]
    fn test_unpaired_surrogate_is_rejected() {
        let units = [0x0048, 0xD800, 0x0069];
        assert!(matches!(
            TextSample::from_utf16(&units),
            Err(SignalInfoError::EncodingFailure { encoding: "UTF-16", .. })
        ));

        let units: Vec<u16> = "Hi😀".encode_utf16().collect();
        assert_eq!(TextSample::from_utf16(&units).unwrap().as_str(), "Hi😀");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert!(matches!(
            TextSample::from_utf8(vec![0x41, 0xFF, 0x42]),
            Err(SignalInfoError::EncodingFailure { encoding: TEXT_ENCODING, .. })
        ));
        assert_eq!(TextSample::from_utf8(b"AB".to_vec()).unwrap().len(), 2);
    }
}

//! General purpose byte compressors used to measure compressed sizes.
//!
//! Both compressors run at their best compression level. The gzip header carries
//! no file name and a zero modification time, so outputs are deterministic.

use crate::text::TextSample;
use crate::types::{Result, SignalInfoError};
use std::fmt;
use std::io::{Read, Write};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CompressorId {
    /// DEFLATE in a gzip container
    GZIP,
    /// Burrows-Wheeler block sorting compressor
    BZIP2,
}

impl CompressorId {
    pub const ALL: [CompressorId; 2] = [CompressorId::GZIP, CompressorId::BZIP2];

    pub fn name(&self) -> &'static str {
        match self {
            CompressorId::GZIP => "Gzip",
            CompressorId::BZIP2 => "Bz2",
        }
    }
}

impl fmt::Display for CompressorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait Compressor {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

impl Compressor for CompressorId {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let failure = |err| SignalInfoError::CompressorFailure(*self, err);

        let compressed = match self {
            CompressorId::GZIP => {
                let mut encoder =
                    flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::best());
                encoder.write_all(data).map_err(failure)?;
                encoder.finish().map_err(failure)?
            }
            CompressorId::BZIP2 => {
                let mut encoder =
                    bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::best());
                encoder.write_all(data).map_err(failure)?;
                encoder.finish().map_err(failure)?
            }
        };

        debug!(
            compressor = %self,
            input_bytes = data.len(),
            output_bytes = compressed.len(),
            "compressed"
        );
        Ok(compressed)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        let result = match self {
            CompressorId::GZIP => flate2::read::GzDecoder::new(data).read_to_end(&mut output),
            CompressorId::BZIP2 => bzip2::read::BzDecoder::new(data).read_to_end(&mut output),
        };
        result.map_err(|err| SignalInfoError::CompressorFailure(*self, err))?;
        Ok(output)
    }
}

/// Size in bits of the UTF-8 encoding of `sample` after compression with `method`.
pub fn compressed_size(sample: &TextSample, method: CompressorId) -> Result<usize> {
    Ok(8 * method.compress(sample.as_bytes())?.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH: &str = "Entropy measures uncertainty or surprise in data.";

    #[test]
    fn test_round_trip() {
        for method in CompressorId::ALL.iter() {
            for text in ["", "AAAAAAAAAA", ENGLISH, "naïve façade 😀"].iter() {
                let compressed = method.compress(text.as_bytes()).unwrap();
                assert_eq!(method.decompress(&compressed).unwrap(), text.as_bytes());
            }
        }
    }

    #[test]
    fn test_empty_sample_is_deterministic_overhead() {
        let sample = TextSample::new("");
        for &method in CompressorId::ALL.iter() {
            let first = compressed_size(&sample, method).unwrap();
            let second = compressed_size(&sample, method).unwrap();
            assert!(first > 0);
            assert_eq!(first % 8, 0);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_repetitive_text_compresses_well() {
        let repetitive = TextSample::new("A".repeat(1000));
        for &method in CompressorId::ALL.iter() {
            assert!(compressed_size(&repetitive, method).unwrap() < 8 * 100);
        }
    }

    #[test]
    fn test_corrupt_input_fails_to_decompress() {
        for method in CompressorId::ALL.iter() {
            assert!(matches!(
                method.decompress(b"not a compressed stream"),
                Err(SignalInfoError::CompressorFailure(..))
            ));
        }
    }
}

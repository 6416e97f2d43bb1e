//! Comparison of theoretical entropy bounds with achieved compressed sizes.

use crate::compressor::{compressed_size, CompressorId};
use crate::entropy::FrequencyTable;
use crate::text::TextSample;
use crate::types::Result;
use std::fmt;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompressedSizeMeasurement {
    pub compressor: CompressorId,
    pub bits: usize,
}

impl CompressedSizeMeasurement {
    pub fn bytes(&self) -> f64 {
        self.bits as f64 / 8.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonReport {
    /// Number of symbols in the sample
    pub length: usize,
    /// Entropy in bits per symbol
    pub entropy: f64,
    /// Entropy times length
    pub theoretical_bits: f64,
    /// One measurement per compressor, in the order requested
    pub measurements: Vec<CompressedSizeMeasurement>,
}

impl ComparisonReport {
    pub fn theoretical_bytes(&self) -> f64 {
        self.theoretical_bits / 8.0
    }

    pub fn measurement(&self, compressor: CompressorId) -> Option<&CompressedSizeMeasurement> {
        self.measurements
            .iter()
            .find(|measurement| measurement.compressor == compressor)
    }

    /// Compressed size relative to the theoretical size. `None` if the theoretical size is zero.
    pub fn ratio(&self, compressor: CompressorId) -> Option<f64> {
        if self.theoretical_bits <= 0.0 {
            return None;
        }
        self.measurement(compressor)
            .map(|measurement| measurement.bits as f64 / self.theoretical_bits)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Text length: {} chars", self.length)?;
        writeln!(f, "Entropy: {:.3} bits/char", self.entropy)?;
        writeln!(
            f,
            "Theoretical minimum size: {:.2} bytes",
            self.theoretical_bytes()
        )?;
        for measurement in &self.measurements {
            writeln!(
                f,
                "{} compressed size: {:.2} bytes",
                measurement.compressor,
                measurement.bytes()
            )?;
        }
        write!(f, "{}", "-".repeat(40))
    }
}

/// Compare the entropy of `sample` with the sizes achieved by all compressors.
pub fn compare(sample: &TextSample) -> Result<ComparisonReport> {
    compare_with(sample, &CompressorId::ALL)
}

/// Compare the entropy of `sample` with the sizes achieved by `compressors`.
pub fn compare_with(sample: &TextSample, compressors: &[CompressorId]) -> Result<ComparisonReport> {
    let table = FrequencyTable::from_text(sample);
    let length = table.total();
    let entropy = table.entropy();
    let theoretical_bits = entropy * length as f64;

    let measurements = compressors
        .iter()
        .map(|&compressor| {
            Ok(CompressedSizeMeasurement {
                compressor,
                bits: compressed_size(sample, compressor)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(length, entropy, theoretical_bits, "compared sample");

    Ok(ComparisonReport {
        length,
        entropy,
        theoretical_bits,
        measurements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_distinct_symbols() {
        let report = compare(&TextSample::new("ABCDEFGH")).unwrap();

        assert_eq!(report.length, 8);
        assert_eq!(report.entropy, 3.0);
        assert_eq!(report.theoretical_bits, 24.0);
        assert_eq!(report.theoretical_bytes(), 3.0);
        assert_eq!(report.measurements.len(), 2);
        assert_eq!(report.measurements[0].compressor, CompressorId::GZIP);
        assert_eq!(report.measurements[1].compressor, CompressorId::BZIP2);
    }

    #[test]
    fn test_report_for_repetitive_sample() {
        let report = compare(&TextSample::new("AAAAAAAAAA")).unwrap();

        assert_eq!(report.entropy, 0.0);
        assert_eq!(report.theoretical_bits, 0.0);
        assert_eq!(report.ratio(CompressorId::GZIP), None);
        for measurement in &report.measurements {
            // Header and framing dominate; the payload itself is a handful of bytes.
            assert!(measurement.bytes() < 64.0);
        }
    }

    #[test]
    fn test_compare_with_subset() {
        let sample = TextSample::new("Hello world!");
        let report = compare_with(&sample, &[CompressorId::BZIP2]).unwrap();

        assert_eq!(report.measurements.len(), 1);
        assert!(report.measurement(CompressorId::GZIP).is_none());
        assert_eq!(
            report.measurement(CompressorId::BZIP2).unwrap().bits,
            compressed_size(&sample, CompressorId::BZIP2).unwrap()
        );
        assert!(report.ratio(CompressorId::BZIP2).unwrap() > 1.0);
    }

    #[test]
    fn test_display() {
        let report = ComparisonReport {
            length: 8,
            entropy: 3.0,
            theoretical_bits: 24.0,
            measurements: vec![CompressedSizeMeasurement {
                compressor: CompressorId::GZIP,
                bits: 224,
            }],
        };

        let expected = "Text length: 8 chars\n\
                        Entropy: 3.000 bits/char\n\
                        Theoretical minimum size: 3.00 bytes\n\
                        Gzip compressed size: 28.00 bytes\n\
                        ----------------------------------------";
        assert_eq!(report.to_string(), expected);
    }
}

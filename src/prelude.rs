//! Collect all traits and other exports here.

pub use crate::compressor::{compressed_size, Compressor, CompressorId};
pub use crate::denoise::Denoise;
pub use crate::entropy::{compute_entropy, FrequencyTable};
pub use crate::helpers::RelDiff;
pub use crate::random_matrix::RandomMatrix;
pub use crate::report::{compare, compare_with, ComparisonReport};
pub use crate::svd::SVD;
pub use crate::text::TextSample;
pub use crate::types::{Result, ScalarType, SignalInfoError};
pub use crate::TruncationType;

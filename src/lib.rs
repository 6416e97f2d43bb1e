//! Low rank denoising of matrices and entropy measurements of text.
//!
//! The crate provides two independent groups of routines.
//!
//! * [`svd`] and [`denoise`] decompose a matrix with the SVD and reconstruct a
//!   rank $k$ approximation, which removes additive noise from low rank signals.
//! * [`entropy`], [`compressor`] and [`report`] compute the order-0 Shannon entropy of a
//!   text sample and compare the implied minimum size with gzip and bzip2 output.
//!
//! The [`scenario`] module contains reproducible harnesses for both.

pub mod compressor;
pub mod denoise;
pub mod entropy;
pub mod examples;
pub mod helpers;
pub mod prelude;
pub mod random_matrix;
pub mod report;
pub mod scenario;
pub mod svd;
pub mod text;
pub mod types;

/// Rank selection policy for truncating an SVD.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TruncationType {
    /// Keep a fixed number of singular triplets
    RANK(usize),
    /// Keep the singular values with $\sigma_i / \sigma_1 \geq$ tol, where $0\leq$ tol $< 1$
    ADAPTIVE(f64),
    /// Keep the smallest number of singular values whose squares reach the given
    /// fraction of the total energy $\sum_i\sigma_i^2$
    ENERGY(f64),
}

pub use compressor::{compressed_size, Compressor, CompressorId};
pub use denoise::Denoise;
pub use entropy::{compute_entropy, FrequencyTable};
pub use helpers::RelDiff;
pub use random_matrix::RandomMatrix;
pub use report::{compare, compare_with, ComparisonReport, CompressedSizeMeasurement};
pub use scenario::{
    compare_samples, default_entropy_samples, DenoisingOutcome, DenoisingScenario, TruncationResult,
};
pub use svd::SVD;
pub use text::{TextSample, TEXT_ENCODING};
pub use types::{NumericalFailureReason, Result, SignalInfoError};

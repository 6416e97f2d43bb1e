//! Error type and common type definitions

use crate::compressor::CompressorId;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

pub use ndarray_linalg::{c32, c64, Lapack, Scalar};

/// Scalar types on which the decomposition routines operate.
pub trait ScalarType: Scalar + Lapack {}

impl<A: Scalar + Lapack> ScalarType for A {}

#[derive(Error, Debug)]
pub enum SignalInfoError {
    #[error("Numerical failure: {0}")]
    NumericalFailure(NumericalFailureReason),
    #[error("Invalid truncation rank {rank}, expected a value in [1, {max_rank}]")]
    InvalidRank { rank: usize, max_rank: usize },
    #[error("Invalid truncation tolerance {0}")]
    InvalidTolerance(f64),
    #[error("Require 0 < sigma_min < sigma_max, got sigma_min = {sigma_min}, sigma_max = {sigma_max}")]
    InvalidSingularValueRange { sigma_min: f64, sigma_max: f64 },
    #[error("Matrix of shape ({0}, {1}) has no entries")]
    EmptyMatrix(usize, usize),
    #[error("Noise standard deviation must be finite and non-negative, got {0}")]
    InvalidNoiseLevel(f64),
    #[error("Text sample is not valid {encoding}: {reason}")]
    EncodingFailure {
        encoding: &'static str,
        reason: String,
    },
    #[error("Compressor {0} failed")]
    CompressorFailure(CompressorId, #[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum NumericalFailureReason {
    #[error("non-finite entry at position ({row}, {col})")]
    NonFinite { row: usize, col: usize },
    #[error("Lapack Error: {0}")]
    Lapack(LinalgError),
    #[error("SVD did not return singular vectors")]
    MissingFactor,
}

impl From<LinalgError> for SignalInfoError {
    fn from(err: LinalgError) -> Self {
        SignalInfoError::NumericalFailure(NumericalFailureReason::Lapack(err))
    }
}

pub type Result<T> = std::result::Result<T, SignalInfoError>;

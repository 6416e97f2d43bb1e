//! Generation of random matrices for various types

use crate::types::{NumericalFailureReason, Result, ScalarType, SignalInfoError};
use ndarray::{Array, Array2, ArrayBase, Data, Ix2};
use ndarray_linalg::{JobSvd, SVDDCInto, Scalar};
use num::complex::Complex;
use num::traits::cast::cast;
use num::Float;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

pub trait RandomMatrix
where
    Self: ScalarType,
{
    /// Generate a random Gaussian matrix with zero mean.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `std_dev`: Standard deviation of each entry.
    /// * `rng`: The random number generator to use.
    fn random_gaussian<R: Rng>(dimension: (usize, usize), std_dev: f64, rng: &mut R)
        -> Array2<Self>;

    /// Return a copy of `mat` with independent zero mean Gaussian noise added to each entry.
    ///
    /// Fails with `InvalidNoiseLevel` if `std_dev` is negative or not finite.
    fn add_gaussian_noise<S: Data<Elem = Self>, R: Rng>(
        mat: &ArrayBase<S, Ix2>,
        std_dev: f64,
        rng: &mut R,
    ) -> Result<Array2<Self>> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(SignalInfoError::InvalidNoiseLevel(std_dev));
        }
        Ok(mat + &Self::random_gaussian(mat.dim(), std_dev, rng))
    }

    /// Generate a random matrix with orthogonal rows or columns.
    ///
    /// If m > n then the returned matrix has orthogonal columns. If n > m
    /// the returned matrix has orthogonalized rows.
    fn random_orthogonal_matrix<R: Rng>(
        dimension: (usize, usize),
        rng: &mut R,
    ) -> Result<Array2<Self>> {
        let mut m = dimension.0;
        let mut n = dimension.1;

        // Always orthogonalize a long and skinny matrix.
        if dimension.1 > dimension.0 {
            std::mem::swap(&mut m, &mut n);
        }

        let mat = Self::random_gaussian((m, n), 1.0, rng);

        let (u, _, _) = mat.svddc_into(JobSvd::Some)?;
        let u = u.ok_or(SignalInfoError::NumericalFailure(
            NumericalFailureReason::MissingFactor,
        ))?;

        if dimension.1 > dimension.0 {
            Ok(u.t().map(|item| item.conj()))
        } else {
            Ok(u)
        }
    }

    /// Generate a random approximate low-rank matrix.
    ///
    /// The singular values are logarithmically distributed between
    /// `sigma_max` and `sigma_min`. Fails with `InvalidSingularValueRange`
    /// unless `0 < sigma_min < sigma_max` and both are finite.
    fn random_approximate_low_rank_matrix<R: Rng>(
        dimension: (usize, usize),
        sigma_max: f64,
        sigma_min: f64,
        rng: &mut R,
    ) -> Result<Array2<Self>> {
        let invalid = SignalInfoError::InvalidSingularValueRange {
            sigma_min,
            sigma_max,
        };
        if !(sigma_min > 0.0 && sigma_min < sigma_max && sigma_max.is_finite()) {
            return Err(invalid);
        }

        let min_dim = std::cmp::min(dimension.0, dimension.1);

        let u = Self::random_orthogonal_matrix((dimension.0, min_dim), rng)?;
        let vt = Self::random_orthogonal_matrix((min_dim, dimension.1), rng)?;
        let singvals = Array::geomspace(sigma_max, sigma_min, min_dim)
            .ok_or(invalid)?
            .map(|&item| Self::from_real(Self::real(item)));
        let sigma = Array2::from_diag(&singvals);
        Ok(u.dot(&sigma.dot(&vt)))
    }
}

impl RandomMatrix for f64 {
    fn random_gaussian<R: Rng>(dimension: (usize, usize), std_dev: f64, rng: &mut R) -> Array2<f64> {
        random_gaussian_real::<f64, R>(dimension, std_dev, rng)
    }
}

impl RandomMatrix for f32 {
    fn random_gaussian<R: Rng>(dimension: (usize, usize), std_dev: f64, rng: &mut R) -> Array2<f32> {
        random_gaussian_real::<f32, R>(dimension, std_dev, rng)
    }
}

impl RandomMatrix for Complex<f64> {
    fn random_gaussian<R: Rng>(
        dimension: (usize, usize),
        std_dev: f64,
        rng: &mut R,
    ) -> Array2<Complex<f64>> {
        random_gaussian_complex::<f64, R>(dimension, std_dev, rng)
    }
}

impl RandomMatrix for Complex<f32> {
    fn random_gaussian<R: Rng>(
        dimension: (usize, usize),
        std_dev: f64,
        rng: &mut R,
    ) -> Array2<Complex<f32>> {
        random_gaussian_complex::<f32, R>(dimension, std_dev, rng)
    }
}

fn sample_normal<R: Rng>(std_dev: f64, rng: &mut R) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    z * std_dev
}

fn random_gaussian_real<T: Float, R: Rng>(
    dimension: (usize, usize),
    std_dev: f64,
    rng: &mut R,
) -> Array2<T> {
    Array2::from_shape_simple_fn(dimension, || {
        cast::<f64, T>(sample_normal(std_dev, rng)).unwrap_or_else(T::zero)
    })
}

/// Complex Gaussian entries with independent real and imaginary parts,
/// each of standard deviation `std_dev / sqrt(2)`.
fn random_gaussian_complex<T: Float, R: Rng>(
    dimension: (usize, usize),
    std_dev: f64,
    rng: &mut R,
) -> Array2<Complex<T>> {
    let std_dev = std_dev / 2f64.sqrt();
    Array2::from_shape_simple_fn(dimension, || {
        let re = cast::<f64, T>(sample_normal(std_dev, rng)).unwrap_or_else(T::zero);
        let im = cast::<f64, T>(sample_normal(std_dev, rng)).unwrap_or_else(T::zero);
        Complex::new(re, im)
    })
}

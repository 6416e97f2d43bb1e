//! Singular Value Decomposition and truncated reconstruction.
//!
//! The SVD of a matrix $A\in\mathbb{C}^{m\times n}$ is defined as $A = U\Sigma V^H$, where
//! $U$ and $V$ have orthonormal columns and $\Sigma$ is diagonal with the singular values
//! $\sigma_1\geq\sigma_2\geq\dots\geq 0$. In the economy form $U\in\mathbb{C}^{m\times p}$ and
//! $V^H\in\mathbb{C}^{p\times n}$ with $p=\min\{m, n\}$. The full form has square $U$ and $V^H$.
//!
//! Keeping only the first $k$ columns of $U$, the first $k$ singular values and the first $k$ rows of
//! $V^H$ gives the best rank $k$ approximation of $A$ in the Frobenius and spectral norms
//! (Eckart-Young). If $A$ is a low rank signal with additive noise, the noise spreads over all singular
//! directions while the signal concentrates in the leading ones, so truncation removes more noise than signal.

use crate::types::{NumericalFailureReason, Result, ScalarType, SignalInfoError};
use crate::TruncationType;
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis, Zip};
use ndarray_linalg::{JobSvd, SVDDCInto, Scalar};
use num::{Float, ToPrimitive};
use tracing::debug;

pub struct SVD<A: ScalarType> {
    /// The U matrix
    pub u: Array2<A>,
    /// The array of singular values in descending order
    pub s: Array1<A::Real>,
    /// The vt matrix
    pub vt: Array2<A>,
}

impl<A: ScalarType> SVD<A> {
    /// Compute the economy size SVD of a matrix.
    ///
    /// Fails with `EmptyMatrix` if the matrix has no entries and with `NumericalFailure`
    /// if it contains NaN or infinite values or if Lapack does not converge.
    pub fn compute_from(arr: ArrayView2<A>) -> Result<SVD<A>> {
        compute_svd(arr, JobSvd::Some)
    }

    /// Compute the full SVD of a matrix with square factors `u` and `vt`.
    pub fn compute_full_from(arr: ArrayView2<A>) -> Result<SVD<A>> {
        compute_svd(arr, JobSvd::All)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.u.nrows()
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.vt.ncols()
    }

    /// Number of singular triplets
    pub fn rank(&self) -> usize {
        self.s.len()
    }

    pub fn singular_values(&self) -> ArrayView1<A::Real> {
        self.s.view()
    }

    /// Keep only the first `rank` singular triplets.
    pub fn truncate(&self, rank: usize) -> Result<SVD<A>> {
        check_rank(rank, self.rank())?;

        Ok(SVD {
            u: self.u.slice(s![.., 0..rank]).to_owned(),
            s: self.s.slice(s![0..rank]).to_owned(),
            vt: self.vt.slice(s![0..rank, ..]).to_owned(),
        })
    }

    /// Return the product $U_k\Sigma_kV_k^H$ of the first `rank` singular triplets.
    ///
    /// Fails with `InvalidRank` unless `1 <= rank <= self.rank()`.
    pub fn reconstruct_rank_k(&self, rank: usize) -> Result<Array2<A>> {
        check_rank(rank, self.rank())?;
        debug!(
            nrows = self.nrows(),
            ncols = self.ncols(),
            rank,
            "reconstructing truncated svd"
        );
        Ok(low_rank_product(
            self.u.view(),
            self.s.view(),
            self.vt.view(),
            rank,
        ))
    }

    /// Convert the SVD back to a matrix using all singular triplets.
    pub fn to_mat(&self) -> Array2<A> {
        low_rank_product(self.u.view(), self.s.view(), self.vt.view(), self.rank())
    }

    /// Determine the truncation rank for a given rank selection policy.
    pub fn select_rank(&self, truncation: TruncationType) -> Result<usize> {
        let max_rank = self.rank();
        if max_rank == 0 {
            return Err(SignalInfoError::EmptyMatrix(self.nrows(), self.ncols()));
        }

        let singvals: Vec<f64> = self
            .s
            .iter()
            .map(|item| item.to_f64().unwrap_or(f64::NAN))
            .collect();

        let rank = match truncation {
            TruncationType::RANK(rank) => {
                check_rank(rank, max_rank)?;
                rank
            }
            TruncationType::ADAPTIVE(tol) => {
                if !(0.0..1.0).contains(&tol) {
                    return Err(SignalInfoError::InvalidTolerance(tol));
                }
                let sigma_max = singvals[0];
                if sigma_max == 0.0 {
                    1
                } else {
                    singvals
                        .iter()
                        .position(|&item| item / sigma_max < tol)
                        .unwrap_or(max_rank)
                }
            }
            TruncationType::ENERGY(fraction) => {
                if !(fraction > 0.0 && fraction <= 1.0) {
                    return Err(SignalInfoError::InvalidTolerance(fraction));
                }
                let total: f64 = singvals.iter().map(|item| item * item).sum();
                if total == 0.0 {
                    1
                } else {
                    singvals
                        .iter()
                        .scan(0.0, |acc, item| {
                            *acc += item * item;
                            Some(*acc)
                        })
                        .position(|energy| energy >= fraction * total)
                        .map_or(max_rank, |index| index + 1)
                }
            }
        };

        debug!(?truncation, rank, max_rank, "selected truncation rank");
        Ok(rank)
    }

    /// Truncate the SVD with a given rank selection policy.
    pub fn compress(&self, truncation: TruncationType) -> Result<SVD<A>> {
        self.truncate(self.select_rank(truncation)?)
    }
}

fn check_rank(rank: usize, max_rank: usize) -> Result<()> {
    if rank < 1 || rank > max_rank {
        Err(SignalInfoError::InvalidRank { rank, max_rank })
    } else {
        Ok(())
    }
}

fn is_finite<A: Scalar>(item: &A) -> bool {
    Float::is_finite(item.re()) && Float::is_finite(item.im())
}

fn compute_svd<A: ScalarType>(arr: ArrayView2<A>, job: JobSvd) -> Result<SVD<A>> {
    let (nrows, ncols) = arr.dim();
    if nrows == 0 || ncols == 0 {
        return Err(SignalInfoError::EmptyMatrix(nrows, ncols));
    }

    if let Some(((row, col), _)) = arr.indexed_iter().find(|(_, item)| !is_finite(*item)) {
        return Err(SignalInfoError::NumericalFailure(
            NumericalFailureReason::NonFinite { row, col },
        ));
    }

    let (u, s, vt) = arr.to_owned().svddc_into(job)?;

    let missing = || SignalInfoError::NumericalFailure(NumericalFailureReason::MissingFactor);
    let u = u.ok_or_else(missing)?;
    let vt = vt.ok_or_else(missing)?;

    debug!(
        nrows,
        ncols,
        u_shape = ?u.dim(),
        vt_shape = ?vt.dim(),
        "computed svd"
    );

    Ok(SVD { u, s, vt })
}

fn low_rank_product<A: ScalarType>(
    u: ArrayView2<A>,
    sigma: ArrayView1<A::Real>,
    vt: ArrayView2<A>,
    rank: usize,
) -> Array2<A> {
    let u = u.slice(s![.., 0..rank]);
    let mut scaled_vt = vt.slice(s![0..rank, ..]).to_owned();

    Zip::from(scaled_vt.axis_iter_mut(Axis(0)))
        .and(sigma.slice(s![0..rank]))
        .for_each(|mut row, &sigma_elem| {
            row.map_inplace(|item| *item *= A::from_real(sigma_elem))
        });

    u.dot(&scaled_vt)
}

//! Frobenius norm distances between matrices.

use crate::types::ScalarType;
use ndarray::{ArrayBase, Data, Ix2};
use ndarray_linalg::{Norm, Scalar};

pub trait RelDiff {
    type A: ScalarType;

    /// Return the Frobenius norm of `self - other`.
    fn diff_fro<T: Data<Elem = Self::A>>(
        &self,
        other: &ArrayBase<T, Ix2>,
    ) -> <Self::A as Scalar>::Real;

    /// Return the Frobenius norm of `self - other` relative to the Frobenius norm of `other`.
    fn rel_diff_fro<T: Data<Elem = Self::A>>(
        &self,
        other: &ArrayBase<T, Ix2>,
    ) -> <Self::A as Scalar>::Real {
        self.diff_fro(other) / other.norm_l2()
    }
}

impl<A, S> RelDiff for ArrayBase<S, Ix2>
where
    A: ScalarType,
    S: Data<Elem = A>,
{
    type A = A;

    fn diff_fro<T: Data<Elem = A>>(&self, other: &ArrayBase<T, Ix2>) -> A::Real {
        let diff = self - other;
        diff.norm_l2()
    }
}

//! Denoising of matrices by truncating their SVD

use crate::svd::SVD;
use crate::types::{Result, ScalarType};
use crate::TruncationType;
use ndarray::{Array2, ArrayBase, Data, Ix2};
use tracing::debug;

pub trait Denoise {
    type A: ScalarType;

    /// Return the low rank approximation of `self` selected by `truncation`.
    fn denoise(&self, truncation: TruncationType) -> Result<Array2<Self::A>>;
}

impl<A, S> Denoise for ArrayBase<S, Ix2>
where
    A: ScalarType,
    S: Data<Elem = A>,
{
    type A = A;

    fn denoise(&self, truncation: TruncationType) -> Result<Array2<A>> {
        let svd = SVD::<A>::compute_from(self.view())?;
        let rank = svd.select_rank(truncation)?;
        debug!(rank, max_rank = svd.rank(), "denoising by truncated svd");
        svd.reconstruct_rank_k(rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::RelDiff;
    use crate::random_matrix::RandomMatrix;
    use crate::types::{c32, c64, SignalInfoError};
    use ndarray::{Array1, Axis};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    macro_rules! denoise_tests {
        ($($name:ident: $scalar:ty, $dim:expr, $std_dev:expr,)*) => {
            $(
            #[test]
            fn $name() {
                let m = $dim.0;
                let n = $dim.1;

                let mut rng = StdRng::seed_from_u64(42);
                let left = <$scalar>::random_gaussian((m, 1), 1.0, &mut rng);
                let right = <$scalar>::random_gaussian((1, n), 1.0, &mut rng);
                let signal = left.dot(&right);
                let noisy = <$scalar>::add_gaussian_noise(&signal, $std_dev, &mut rng).unwrap();

                let denoised = noisy.denoise(TruncationType::RANK(1)).unwrap();

                assert_eq!(denoised.dim(), (m, n));
                assert!(denoised.diff_fro(&signal) < noisy.diff_fro(&signal));
            }
            )*
        };
    }

    denoise_tests! {
        test_denoise_rank_one_f32_thin: f32, (60, 10), 0.1,
        test_denoise_rank_one_f64_thin: f64, (60, 10), 0.1,
        test_denoise_rank_one_f32_thick: f32, (10, 60), 0.1,
        test_denoise_rank_one_f64_thick: f64, (10, 60), 0.1,
        test_denoise_rank_one_c32_thin: c32, (60, 10), 0.1,
        test_denoise_rank_one_c64_thin: c64, (60, 10), 0.1,
        test_denoise_rank_one_c32_thick: c32, (10, 60), 0.1,
        test_denoise_rank_one_c64_thick: c64, (10, 60), 0.1,
    }

    #[test]
    fn test_denoise_line_tiled_into_columns() {
        let x = Array1::linspace(0.0, 10.0, 5);
        let signal = x.insert_axis(Axis(1)).dot(&Array2::<f64>::ones((1, 5)));

        let mut rng = StdRng::seed_from_u64(42);
        let noisy = f64::add_gaussian_noise(&signal, 0.5, &mut rng).unwrap();
        let denoised = noisy.denoise(TruncationType::RANK(1)).unwrap();

        assert!(denoised.diff_fro(&signal) < noisy.diff_fro(&signal));
    }

    #[test]
    fn test_denoise_propagates_invalid_rank() {
        let mat = Array2::<f64>::eye(3);
        assert!(matches!(
            mat.denoise(TruncationType::RANK(4)),
            Err(SignalInfoError::InvalidRank { rank: 4, max_rank: 3 })
        ));
    }
}

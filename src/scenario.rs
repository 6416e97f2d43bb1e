//! Reproducible demonstration harnesses.
//!
//! The denoising scenario tiles a line into a rank one matrix, adds seeded Gaussian noise and
//! removes it again by truncating the SVD. The entropy scenario runs the comparison report over
//! a list of labelled samples. All parameters are explicit so that runs are reproducible.

use crate::helpers::RelDiff;
use crate::random_matrix::RandomMatrix;
use crate::report::{compare, ComparisonReport};
use crate::svd::SVD;
use crate::text::TextSample;
use crate::types::Result;
use crate::TruncationType;
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct DenoisingScenario {
    /// One column of the clean signal
    pub signal: Array1<f64>,
    /// Number of times the signal is repeated side by side
    pub columns: usize,
    /// Standard deviation of the additive noise
    pub noise_std: f64,
    pub seed: u64,
    pub truncation: TruncationType,
}

#[derive(Clone, Debug)]
pub struct DenoisingOutcome {
    pub true_signal: Array2<f64>,
    pub noisy: Array2<f64>,
    pub denoised: Array2<f64>,
    pub singular_values: Array1<f64>,
    /// Rank kept in the reconstruction
    pub rank: usize,
    /// Frobenius distance between noisy data and true signal
    pub noisy_error: f64,
    /// Frobenius distance between denoised data and true signal
    pub denoised_error: f64,
}

/// Rank and reconstruction error of one truncation policy applied to a noisy outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TruncationResult {
    pub truncation: TruncationType,
    pub rank: usize,
    /// Frobenius distance between the truncated reconstruction and the true signal
    pub error: f64,
}

impl Default for DenoisingScenario {
    fn default() -> Self {
        Self::linspace(0.0, 10.0, 50)
    }
}

impl DenoisingScenario {
    /// A straight line of `samples` points from `start` to `stop`, tiled into 5 columns.
    pub fn linspace(start: f64, stop: f64, samples: usize) -> Self {
        Self::from_signal(Array1::linspace(start, stop, samples), 5)
    }

    pub fn from_signal(signal: Array1<f64>, columns: usize) -> Self {
        Self {
            signal,
            columns,
            noise_std: 0.5,
            seed: 42,
            truncation: TruncationType::RANK(1),
        }
    }

    pub fn with_noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_truncation(mut self, truncation: TruncationType) -> Self {
        self.truncation = truncation;
        self
    }

    /// The rank one matrix with the signal in every column.
    pub fn true_signal(&self) -> Array2<f64> {
        self.signal
            .view()
            .insert_axis(Axis(1))
            .dot(&Array2::<f64>::ones((1, self.columns)))
    }

    pub fn run(&self) -> Result<DenoisingOutcome> {
        let true_signal = self.true_signal();

        let mut rng = StdRng::seed_from_u64(self.seed);
        let noisy = f64::add_gaussian_noise(&true_signal, self.noise_std, &mut rng)?;

        let svd = SVD::<f64>::compute_from(noisy.view())?;
        let rank = svd.select_rank(self.truncation)?;
        let denoised = svd.reconstruct_rank_k(rank)?;

        let noisy_error = noisy.diff_fro(&true_signal);
        let denoised_error = denoised.diff_fro(&true_signal);
        debug!(
            seed = self.seed,
            rank,
            noisy_error,
            denoised_error,
            "denoising scenario finished"
        );

        Ok(DenoisingOutcome {
            true_signal,
            noisy,
            denoised,
            singular_values: svd.s,
            rank,
            noisy_error,
            denoised_error,
        })
    }
}

impl DenoisingOutcome {
    /// Apply each policy in `truncations` to the noisy data, in order.
    pub fn compare_truncations(
        &self,
        truncations: &[TruncationType],
    ) -> Result<Vec<TruncationResult>> {
        let svd = SVD::<f64>::compute_from(self.noisy.view())?;
        truncations
            .iter()
            .map(|&truncation| {
                let rank = svd.select_rank(truncation)?;
                let error = svd.reconstruct_rank_k(rank)?.diff_fro(&self.true_signal);
                debug!(?truncation, rank, error, "truncation compared");
                Ok(TruncationResult {
                    truncation,
                    rank,
                    error,
                })
            })
            .collect()
    }
}

/// Run the comparison report on each labelled sample, keeping the input order.
pub fn compare_samples<L, I>(samples: I) -> Result<Vec<(L, ComparisonReport)>>
where
    I: IntoIterator<Item = (L, TextSample)>,
{
    samples
        .into_iter()
        .map(|(label, sample)| Ok((label, compare(&sample)?)))
        .collect()
}

/// Samples ranging from a single repeated symbol to English prose.
pub fn default_entropy_samples() -> Vec<(&'static str, TextSample)> {
    vec![
        (
            "Low entropy",
            TextSample::new("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
        ),
        (
            "Medium entropy",
            TextSample::new("ABABABABABABABABABABABABABABABAB"),
        ),
        (
            "High entropy",
            TextSample::new("qwertyuiopasdfghjklzxcvbnm1234567890!@#$"),
        ),
        (
            "English text",
            TextSample::new("Entropy measures uncertainty or surprise in data."),
        ),
    ]
}

use ndarray::{array, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rusty_signal_info::prelude::*;
use rusty_signal_info::DenoisingScenario;

#[test]
fn full_rank_reconstruction_reproduces_matrix() {
    let mut rng = StdRng::seed_from_u64(11);
    for &dim in [(1, 1), (1, 6), (6, 1), (8, 3), (3, 8), (7, 7)].iter() {
        let mat = f64::random_gaussian(dim, 2.0, &mut rng);
        let svd = SVD::<f64>::compute_from(mat.view()).unwrap();
        let rank = dim.0.min(dim.1);

        assert_eq!(svd.rank(), rank);
        assert!(svd.reconstruct_rank_k(rank).unwrap().rel_diff_fro(&mat) < 1E-12);
    }
}

#[test]
fn tiled_line_is_denoised_for_many_seeds() {
    for seed in 0..20 {
        let outcome = DenoisingScenario::from_signal(array![0.0, 2.5, 5.0, 7.5, 10.0], 5)
            .with_seed(seed)
            .run()
            .unwrap();

        assert!(
            outcome.denoised_error < outcome.noisy_error,
            "seed {}: {} >= {}",
            seed,
            outcome.denoised_error,
            outcome.noisy_error
        );
    }
}

#[test]
fn denoised_columns_follow_the_line() {
    let outcome = DenoisingScenario::default().run().unwrap();

    // Every column of the rank one reconstruction is a multiple of the same vector.
    let first = outcome.denoised.index_axis(Axis(1), 0).to_owned();
    for col in outcome.denoised.axis_iter(Axis(1)) {
        let scale = col.dot(&first) / first.dot(&first);
        let residual = &col - &(&first * scale);
        assert!(residual.iter().all(|item| item.abs() < 1E-9));
    }
}

#[test]
fn truncation_policies_agree_on_clear_gap() {
    let outcome = DenoisingScenario::default().run().unwrap();
    let svd = SVD::<f64>::compute_from(outcome.noisy.view()).unwrap();

    assert_eq!(svd.select_rank(TruncationType::ADAPTIVE(0.2)).unwrap(), 1);
    assert_eq!(svd.select_rank(TruncationType::ENERGY(0.98)).unwrap(), 1);

    let by_policy = outcome.noisy.denoise(TruncationType::ADAPTIVE(0.2)).unwrap();
    assert!(by_policy.diff_fro(&outcome.denoised) < 1E-10);
}

// Singular values of a noisy rank one matrix and the rank chosen by each policy.

use rusty_signal_info::{DenoisingScenario, TruncationType};
use tracing_subscriber::EnvFilter;

pub fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let outcome = DenoisingScenario::default().run()?;

    println!("Singular values:");
    for (index, sigma) in outcome.singular_values.iter().enumerate() {
        println!("  sigma_{} = {:.4}", index + 1, sigma);
    }

    let results = outcome.compare_truncations(&[
        TruncationType::RANK(1),
        TruncationType::ADAPTIVE(0.1),
        TruncationType::ENERGY(0.99),
        TruncationType::ENERGY(0.9999),
    ])?;
    for result in &results {
        println!(
            "{:?}: rank {}, error to true signal {:.4}",
            result.truncation, result.rank, result.error
        );
    }

    Ok(())
}

// Denoising a straight line with a rank one truncated SVD.

use plotters::prelude::*;
use rusty_signal_info::DenoisingScenario;
use tracing_subscriber::EnvFilter;

pub fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let outcome = DenoisingScenario::default().run()?;

    println!("Rank: {}", outcome.rank);
    println!("Noisy error: {:.4}", outcome.noisy_error);
    println!("Denoised error: {:.4}", outcome.denoised_error);

    let column = 0;
    let samples = outcome.true_signal.nrows();
    let series = |mat: &ndarray::Array2<f64>| -> Vec<(f64, f64)> {
        mat.column(column)
            .iter()
            .enumerate()
            .map(|(index, &value)| (index as f64, value))
            .collect()
    };

    let y_min = outcome.noisy.column(column).fold(f64::INFINITY, |acc, &v| acc.min(v)) - 1.0;
    let y_max = outcome.noisy.column(column).fold(f64::NEG_INFINITY, |acc, &v| acc.max(v)) + 1.0;

    let root = BitMapBackend::new("denoising.png", (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("SVD De-noising: Separating Signal from Noise", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..samples as f64, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Data Point Index")
        .y_desc("Value")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            series(&outcome.true_signal),
            GREEN.stroke_width(3),
        ))?
        .label("1. True Signal")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));

    chart
        .draw_series(
            series(&outcome.noisy)
                .into_iter()
                .map(|point| Circle::new(point, 3, RED.mix(0.6).filled())),
        )?
        .label("2. Noisy Data")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, RED.filled()));

    chart
        .draw_series(LineSeries::new(
            series(&outcome.denoised),
            BLUE.stroke_width(2),
        ))?
        .label(format!("3. SVD De-noised Data (k={})", outcome.rank))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    println!("Plot written to denoising.png");

    Ok(())
}

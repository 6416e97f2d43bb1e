// Entropy of text samples against gzip and bzip2 compressed sizes.

use plotters::prelude::*;
use rusty_signal_info::prelude::*;
use rusty_signal_info::{compare_samples, default_entropy_samples};
use tracing_subscriber::EnvFilter;

pub fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for (label, report) in compare_samples(default_entropy_samples())? {
        println!("\n--- {} ---", label);
        println!("{}", report);
    }

    let sample = TextSample::new("Entropy measures uncertainty or surprise in data.");
    let table = FrequencyTable::from_text(&sample);
    let ranked = table.ranked_probabilities();
    let max_probability = ranked.first().map_or(1.0, |(_, p)| *p);

    let root = BitMapBackend::new("char_probabilities.png", (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Character Probability Distribution", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..ranked.len(), 0.0..max_probability * 1.1)?;

    let labels: Vec<String> = ranked
        .iter()
        .map(|(symbol, _)| format!("{:?}", symbol))
        .collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(ranked.len())
        .x_label_formatter(&|index| labels.get(*index).cloned().unwrap_or_default())
        .y_desc("Probability")
        .draw()?;

    chart.draw_series(ranked.iter().enumerate().map(|(index, (_, probability))| {
        Rectangle::new([(index, 0.0), (index + 1, *probability)], BLUE.mix(0.7).filled())
    }))?;

    root.present()?;
    println!("Plot written to char_probabilities.png");

    Ok(())
}

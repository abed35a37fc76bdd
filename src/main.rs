//! Seasonal Revenue - command-line entry point.
//!
//! Synthesizes the revenue table and exports the chart in one shot.

use anyhow::Result;
use seasonal_revenue::charts::{ChartRenderer, RenderOptions};
use seasonal_revenue::data::RevenueGenerator;

fn main() -> Result<()> {
    let frame = RevenueGenerator::generate()?;

    let options = RenderOptions::default();
    ChartRenderer::render(&frame, &options)?;

    let dim = options.pixel_dim();
    println!(
        "Chart saved as {} ({}×{} pixels)",
        options.output_path.display(),
        dim,
        dim
    );

    Ok(())
}

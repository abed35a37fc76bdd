//! Static Chart Renderer
//! Draws the seasonal revenue line chart and rasterizes it straight to PNG.
//!
//! Layout:
//! 1. Title: "Seasonal Revenue Trends by Year" centered
//! 2. One line per year with circular markers, colors from the palette
//! 3. Month axis with rotated tick labels, revenue axis in $K, light grid
//! 4. Legend box in the upper-left corner

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};
use polars::prelude::DataFrame;

use crate::data::{MONTHS, YEARS};
use crate::stats::RevenueStats;

/// Per-year line colors sampled from the viridis ramp.
pub const PALETTE: [RGBColor; 3] = [
    RGBColor(68, 1, 84),    // Purple
    RGBColor(33, 145, 140), // Teal
    RGBColor(253, 231, 37), // Yellow
];

/// Grid line color
const GRID: RGBColor = RGBColor(220, 220, 220);

const TITLE: &str = "Seasonal Revenue Trends by Year (Business Performance Analytics)";

/// Output path and raster sizing for the exported chart.
///
/// Pixel dimensions follow print arithmetic: DPI times figure size in
/// inches, per axis. The default (100 DPI x 5.12 in) and the equivalent
/// 64 DPI x 8 in combination both land on a 512 x 512 raster.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub output_path: PathBuf,
    pub dpi: u32,
    pub fig_size_in: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("chart.png"),
            dpi: 100,
            fig_size_in: 5.12,
        }
    }
}

impl RenderOptions {
    /// Edge length of the square output raster, in pixels.
    pub fn pixel_dim(&self) -> u32 {
        (self.dpi as f64 * self.fig_size_in).round() as u32
    }
}

/// Renders the revenue frame as a line chart and writes the PNG.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Draw one line per year over the month axis and export to
    /// `options.output_path`, overwriting any existing file.
    pub fn render(df: &DataFrame, options: &RenderOptions) -> Result<()> {
        let dim = options.pixel_dim();
        let root = BitMapBackend::new(&options.output_path, (dim, dim)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow!("Failed to fill chart background: {}", e))?;

        let (y_min, y_max) = RevenueStats::revenue_range(df);

        // Half a slot of padding keeps the Jan/Dec markers off the frame edge.
        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Bold))
            .margin(8)
            .x_label_area_size(42)
            .y_label_area_size(48)
            .build_cartesian_2d(-0.5f64..11.5f64, y_min..y_max)
            .map_err(|e| anyhow!("Failed to build chart axes: {}", e))?;

        chart
            .configure_mesh()
            .x_labels(MONTHS.len())
            .x_label_formatter(&|x| {
                let idx = x.round();
                if (x - idx).abs() > 0.01 || !(0.0..12.0).contains(&idx) {
                    return String::new();
                }
                MONTHS[idx as usize].to_string()
            })
            .y_label_formatter(&|y| format!("${:.0}K", y / 1000.0))
            .x_desc("Month")
            .y_desc("Revenue ($)")
            .x_label_style(
                ("sans-serif", 9)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_label_style(("sans-serif", 9))
            .light_line_style(GRID)
            .draw()
            .map_err(|e| anyhow!("Failed to draw chart mesh: {}", e))?;

        for (i, &year) in YEARS.iter().enumerate() {
            let series = RevenueStats::monthly_series(df, year);
            let color = PALETTE[i % PALETTE.len()];

            chart
                .draw_series(LineSeries::new(
                    series.iter().enumerate().map(|(m, &v)| (m as f64, v)),
                    color.stroke_width(2),
                ))
                .map_err(|e| anyhow!("Failed to draw series for {}: {}", year, e))?
                .label(year.to_string())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                });

            chart
                .draw_series(
                    series
                        .iter()
                        .enumerate()
                        .map(|(m, &v)| Circle::new((m as f64, v), 3, color.filled())),
                )
                .map_err(|e| anyhow!("Failed to draw markers for {}: {}", year, e))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 10))
            .draw()
            .map_err(|e| anyhow!("Failed to draw legend: {}", e))?;

        root.present().map_err(|e| {
            anyhow!(
                "Failed to write chart to {}: {}",
                options.output_path.display(),
                e
            )
        })?;

        Ok(())
    }
}

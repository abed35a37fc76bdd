//! End-to-end render test: generate the dataset, export the chart, and
//! validate the PNG on disk.

use image::GenericImageView;
use seasonal_revenue::charts::{ChartRenderer, RenderOptions};
use seasonal_revenue::data::RevenueGenerator;

#[test]
fn renders_png_at_target_resolution() {
    let df = RevenueGenerator::generate().expect("generate revenue frame");

    let path = std::env::temp_dir().join("seasonal_revenue_chart_test.png");
    let options = RenderOptions {
        output_path: path.clone(),
        ..Default::default()
    };

    ChartRenderer::render(&df, &options).expect("render chart");

    let meta = std::fs::metadata(&path).expect("chart file exists");
    assert!(meta.len() > 0, "chart file is empty");

    let img = image::open(&path).expect("chart decodes as an image");
    assert_eq!((img.width(), img.height()), (512, 512));

    std::fs::remove_file(&path).ok();
}

#[test]
fn binary_writes_chart_and_confirms() {
    let dir = std::env::temp_dir().join("seasonal_revenue_e2e");
    std::fs::create_dir_all(&dir).expect("create scratch dir");

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_seasonal_revenue"))
        .current_dir(&dir)
        .output()
        .expect("run binary");

    assert!(output.status.success(), "binary exited with {}", output.status);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Chart saved as chart.png"),
        "missing confirmation line in {:?}",
        stdout
    );

    let chart = dir.join("chart.png");
    assert!(chart.exists(), "binary did not write chart.png");

    std::fs::remove_file(&chart).ok();
    std::fs::remove_dir(&dir).ok();
}

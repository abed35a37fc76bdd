//! Revenue Data Generator Module
//! Synthesizes the deterministic seasonal revenue table and packs it into a
//! Polars DataFrame for the rest of the pipeline.

use polars::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

/// Calendar month labels, in plot order.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Years covered by the dataset, ascending.
pub const YEARS: [i32; 3] = [2022, 2023, 2024];

/// Baseline monthly revenue before seasonal scaling.
pub const BASE_REVENUE: f64 = 100_000.0;

/// Per-month demand multipliers, Jan through Dec.
const SEASONAL_MULTIPLIERS: [f64; 12] = [
    0.8, 0.85, 0.95, 1.0, 1.1, 1.2, 1.3, 1.25, 1.15, 1.05, 0.95, 1.4,
];

/// Compounding year-over-year growth rate.
const GROWTH_RATE: f64 = 0.05;

/// Standard deviation of the multiplicative noise term.
const NOISE_STD_DEV: f64 = 0.1;

/// Fixed noise seed so every run produces the same table.
const RNG_SEED: u64 = 42;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to build revenue frame: {0}")]
    FrameError(#[from] PolarsError),
    #[error("Invalid noise distribution: {0}")]
    NoiseError(#[from] rand_distr::NormalError),
}

/// One synthesized (month, year, revenue) observation.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueRecord {
    pub month: &'static str,
    pub year: i32,
    pub revenue: f64,
}

/// Produces the fixed synthetic revenue table.
pub struct RevenueGenerator;

impl RevenueGenerator {
    /// Synthesize all revenue records, year-major with months in calendar order.
    ///
    /// Each record is `base * seasonal * (1 + noise) * (1 + growth)^(year - first)`,
    /// with noise drawn from a seeded normal generator. The generator is
    /// re-seeded on every call, so repeated calls yield identical output.
    pub fn generate_records() -> Result<Vec<RevenueRecord>, GeneratorError> {
        let mut rng = SmallRng::seed_from_u64(RNG_SEED);
        let noise = Normal::new(0.0, NOISE_STD_DEV)?;

        let mut records = Vec::with_capacity(YEARS.len() * MONTHS.len());
        for &year in &YEARS {
            let growth = (1.0 + GROWTH_RATE).powi(year - YEARS[0]);
            for (i, &month) in MONTHS.iter().enumerate() {
                let revenue =
                    BASE_REVENUE * SEASONAL_MULTIPLIERS[i] * (1.0 + noise.sample(&mut rng)) * growth;
                records.push(RevenueRecord {
                    month,
                    year,
                    revenue,
                });
            }
        }

        Ok(records)
    }

    /// Pack the records into a columnar frame.
    ///
    /// Output columns: ["month", "year", "revenue"], in record order.
    pub fn generate() -> Result<DataFrame, GeneratorError> {
        let records = Self::generate_records()?;

        let mut months: Vec<String> = Vec::with_capacity(records.len());
        let mut years: Vec<i32> = Vec::with_capacity(records.len());
        let mut revenues: Vec<f64> = Vec::with_capacity(records.len());

        for record in &records {
            months.push(record.month.to_string());
            years.push(record.year);
            revenues.push(record.revenue);
        }

        let df = DataFrame::new(vec![
            Column::new("month".into(), months),
            Column::new("year".into(), years),
            Column::new("revenue".into(), revenues),
        ])?;

        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_exactly_36_records_in_order() {
        let records = RevenueGenerator::generate_records().unwrap();

        assert_eq!(records.len(), 36);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.year, YEARS[i / 12]);
            assert_eq!(record.month, MONTHS[i % 12]);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let first = RevenueGenerator::generate_records().unwrap();
        let second = RevenueGenerator::generate_records().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn revenues_are_positive() {
        let records = RevenueGenerator::generate_records().unwrap();

        for record in &records {
            assert!(
                record.revenue > 0.0,
                "{} {} produced non-positive revenue {}",
                record.month,
                record.year,
                record.revenue
            );
        }
    }

    #[test]
    fn december_peak_dominates_january_trough() {
        // Multipliers are 1.4 vs 0.8, far more than the noise can invert.
        let records = RevenueGenerator::generate_records().unwrap();

        for &year in &YEARS {
            let jan = records
                .iter()
                .find(|r| r.year == year && r.month == "Jan")
                .unwrap();
            let dec = records
                .iter()
                .find(|r| r.year == year && r.month == "Dec")
                .unwrap();
            assert!(dec.revenue > jan.revenue);
        }
    }

    #[test]
    fn frame_has_expected_shape() {
        let df = RevenueGenerator::generate().unwrap();

        assert_eq!(df.height(), 36);

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, ["month", "year", "revenue"]);

        assert_eq!(df.column("year").unwrap().dtype(), &DataType::Int32);
        assert_eq!(df.column("revenue").unwrap().dtype(), &DataType::Float64);
    }
}

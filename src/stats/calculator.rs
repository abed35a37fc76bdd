//! Revenue Statistics Module
//! Descriptive summaries and per-year series extraction over the revenue frame.

use polars::prelude::*;
use statrs::statistics::Statistics;

use crate::data::{BASE_REVENUE, YEARS};

/// Descriptive statistics for one year of revenue.
#[derive(Debug, Clone)]
pub struct YearSummary {
    pub year: i32,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Computes the summaries the renderer and sanity checks rely on.
pub struct RevenueStats;

impl RevenueStats {
    /// Revenue values for one year, in calendar order.
    ///
    /// Frame rows are already calendar-ordered within a year, and the lazy
    /// filter preserves row order.
    pub fn monthly_series(df: &DataFrame, year: i32) -> Vec<f64> {
        df.clone()
            .lazy()
            .filter(col("year").eq(lit(year)))
            .select([col("revenue")])
            .collect()
            .ok()
            .and_then(|df| df.column("revenue").ok().cloned())
            .map(|col| {
                col.f64()
                    .ok()
                    .map(|ca| ca.into_iter().filter_map(|v| v).collect())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    /// Descriptive statistics for one year's revenues.
    pub fn year_summary(df: &DataFrame, year: i32) -> YearSummary {
        let values = Self::monthly_series(df, year);
        if values.is_empty() {
            return YearSummary {
                year,
                count: 0,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &values {
            min = min.min(v);
            max = max.max(v);
        }

        YearSummary {
            year,
            count: values.len(),
            mean: values.iter().mean(),
            std: values.iter().std_dev(),
            min,
            max,
        }
    }

    /// Summaries for every year in the dataset, ascending.
    pub fn year_summaries(df: &DataFrame) -> Vec<YearSummary> {
        YEARS
            .iter()
            .map(|&year| Self::year_summary(df, year))
            .collect()
    }

    /// Padded (min, max) over all revenues, used for chart y-axis bounds.
    pub fn revenue_range(df: &DataFrame) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        if let Ok(col) = df.column("revenue") {
            if let Ok(ca) = col.f64() {
                for v in ca.into_iter().filter_map(|v| v) {
                    if !v.is_nan() {
                        min = min.min(v);
                        max = max.max(v);
                    }
                }
            }
        }

        if min.is_infinite() {
            return (0.0, BASE_REVENUE);
        }

        let pad = (max - min) * 0.15;
        ((min - pad).floor(), (max + pad).ceil())
    }
}

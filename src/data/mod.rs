//! Data module - Synthetic revenue generation

mod generator;

pub use generator::{GeneratorError, RevenueGenerator, RevenueRecord, BASE_REVENUE, MONTHS, YEARS};

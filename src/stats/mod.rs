//! Stats module - Descriptive revenue summaries

mod calculator;

pub use calculator::{RevenueStats, YearSummary};

//! Stats module - report aggregates

mod calculator;

pub use calculator::{StatsCalculator, StatsError, SurveySummary};

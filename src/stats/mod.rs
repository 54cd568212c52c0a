//! Stats module - Descriptive statistics

mod calculator;

pub use calculator::HoursSummary;

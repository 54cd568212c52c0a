//! Statistics Calculator Module
//! Descriptive statistics over the numeric hour columns.

use crate::data::{column_values, HoursColumn, HoursRecord};
use rayon::prelude::*;

/// Statistics for a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation (divides by count).
    pub std: f64,
}

impl Default for ColumnStats {
    fn default() -> Self {
        Self {
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
        }
    }
}

/// Mean, median and standard deviation for each hour column.
///
/// Derived once from the full row set of a load; filtering never touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct HoursSummary {
    pub expected: ColumnStats,
    pub compulsory: ColumnStats,
    pub voluntary: ColumnStats,
}

impl HoursSummary {
    /// Compute the summary over all records.
    pub fn from_records(records: &[HoursRecord]) -> Self {
        let per_column: Vec<ColumnStats> = HoursColumn::ALL
            .par_iter()
            .map(|&column| StatsCalculator::compute_column_stats(&column_values(records, column)))
            .collect();

        Self {
            expected: per_column[0],
            compulsory: per_column[1],
            voluntary: per_column[2],
        }
    }

    pub fn get(&self, column: HoursColumn) -> ColumnStats {
        match column {
            HoursColumn::Expected => self.expected,
            HoursColumn::Compulsory => self.compulsory,
            HoursColumn::Voluntary => self.voluntary,
        }
    }

    /// The nine display lines, two decimals: means, then medians, then
    /// standard deviations. NaN shows as "NaN".
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(9);
        for column in HoursColumn::ALL {
            lines.push(format!("Average {}: {:.2}", column.label(), self.get(column).mean));
        }
        for column in HoursColumn::ALL {
            lines.push(format!("Median {}: {:.2}", column.label(), self.get(column).median));
        }
        for column in HoursColumn::ALL {
            lines.push(format!(
                "Standard Deviation of {}: {:.2}",
                column.label(),
                self.get(column).std
            ));
        }
        lines
    }
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    pub fn compute_column_stats(values: &[f64]) -> ColumnStats {
        if values.is_empty() {
            return ColumnStats::default();
        }

        ColumnStats {
            mean: Self::mean(values),
            median: Self::median(values),
            std: Self::population_std_dev(values),
        }
    }

    /// Sum divided by count; NaN for empty input.
    pub fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Middle element of the sorted values, or the average of the two
    /// central ones for an even count; NaN for empty input.
    pub fn median(values: &[f64]) -> f64 {
        let n = values.len();
        if n == 0 {
            return f64::NAN;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        }
    }

    /// Square root of the mean squared deviation from the mean; NaN for empty input.
    pub fn population_std_dev(values: &[f64]) -> f64 {
        let mean = Self::mean(values);
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_is_arithmetic_average() {
        assert_eq!(StatsCalculator::mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(StatsCalculator::mean(&[7.0]), 7.0);
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(StatsCalculator::median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(StatsCalculator::median(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(StatsCalculator::median(&[3.0, 1.0, 2.0]), 2.0);
    }

    #[test]
    fn median_does_not_reorder_input() {
        let values = [4.0, 1.0, 3.0];
        StatsCalculator::median(&values);
        assert_eq!(values, [4.0, 1.0, 3.0]);
    }

    #[test]
    fn std_dev_uses_population_formula() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(StatsCalculator::population_std_dev(&values), 2.0);
        assert_eq!(StatsCalculator::population_std_dev(&[5.0]), 0.0);
    }

    #[test]
    fn empty_input_is_nan() {
        let stats = StatsCalculator::compute_column_stats(&[]);
        assert!(stats.mean.is_nan());
        assert!(stats.median.is_nan());
        assert!(stats.std.is_nan());

        assert!(StatsCalculator::mean(&[]).is_nan());
        assert!(StatsCalculator::median(&[]).is_nan());
        assert!(StatsCalculator::population_std_dev(&[]).is_nan());
    }

    #[test]
    fn summary_covers_each_column() {
        let records = vec![
            HoursRecord::new("2023-01-01", 10.0, 5.0, 2.0),
            HoursRecord::new("2023-01-02", 0.0, 6.0, 3.0),
        ];
        let summary = HoursSummary::from_records(&records);

        assert_eq!(summary.expected.mean, 5.0);
        assert_eq!(summary.expected.median, 5.0);
        assert_eq!(summary.expected.std, 5.0);
        assert_eq!(summary.compulsory.mean, 5.5);
        assert_eq!(summary.compulsory.std, 0.5);
        assert_eq!(summary.voluntary.median, 2.5);
        assert_eq!(summary.get(HoursColumn::Voluntary), summary.voluntary);
    }

    #[test]
    fn lines_format_two_decimals_in_order() {
        let records = vec![
            HoursRecord::new("a", 8.0, 4.0, 1.0),
            HoursRecord::new("b", 7.0, 4.0, 2.0),
        ];
        let lines = HoursSummary::from_records(&records).lines();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Average Expected Hours: 7.50");
        assert_eq!(lines[1], "Average Compulsory Hours: 4.00");
        assert_eq!(lines[2], "Average Voluntary Hours: 1.50");
        assert_eq!(lines[3], "Median Expected Hours: 7.50");
        assert_eq!(lines[6], "Standard Deviation of Expected Hours: 0.50");
        assert_eq!(lines[8], "Standard Deviation of Voluntary Hours: 0.50");
    }

    #[test]
    fn empty_summary_displays_nan() {
        let lines = HoursSummary::from_records(&[]).lines();
        assert_eq!(lines[0], "Average Expected Hours: NaN");
        assert!(lines.iter().all(|l| l.ends_with("NaN")));
    }
}

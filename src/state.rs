//! Dashboard State Module
//! Rows, statistics and search text owned by the dashboard window.

use crate::data::{filtered_indices, HoursRecord, LoadedData};
use crate::stats::HoursSummary;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// The dashboard's UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Full row set from the most recent load.
    pub records: Vec<HoursRecord>,

    /// Statistics over `records` (None until the first load completes).
    pub summary: Option<HoursSummary>,

    /// Current date search text.
    pub query: String,

    /// Indices of records matching `query` (cached).
    pub visible_indices: Vec<usize>,

    /// File the current rows came from.
    pub source: Option<PathBuf>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl DashboardState {
    /// Replace the row set wholesale and recompute statistics.
    pub fn set_loaded(&mut self, loaded: LoadedData) {
        self.source = loaded.source;
        self.set_records(loaded.records);
        self.status_message = if loaded.missing_columns.is_empty() {
            None
        } else {
            Some(format!("Missing columns: {}", loaded.missing_columns.join(", ")))
        };
    }

    /// Apply the outcome of a load and return the status line to show.
    ///
    /// A failed load leaves rows, statistics and query as they were.
    pub fn apply_load_result(&mut self, result: Result<LoadedData, String>) -> String {
        match result {
            Ok(loaded) => {
                let row_count = loaded.row_count();
                self.set_loaded(loaded);
                format!("Loaded {} rows", row_count)
            }
            Err(error) => format!("Error: {}", error),
        }
    }

    pub fn set_records(&mut self, records: Vec<HoursRecord>) {
        let summary = HoursSummary::from_records(&records);
        log::debug!("Computed summary over {} rows: {:?}", records.len(), summary);
        self.summary = Some(summary);
        self.records = records;
        self.refilter();
    }

    /// Change the search text; statistics are left as they are.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Recompute `visible_indices` after a query or row change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.records, &self.query);
    }

    /// Records matching the current query, in source order.
    pub fn visible_records(&self) -> impl Iterator<Item = &HoursRecord> + '_ {
        self.visible_indices.iter().map(|&i| &self.records[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<HoursRecord> {
        vec![
            HoursRecord::new("2023-01-01", 10.0, 5.0, 2.0),
            HoursRecord::new("2023-02-01", 6.0, 4.0, 1.0),
            HoursRecord::new("2023-01-15", 8.0, 3.0, 0.0),
        ]
    }

    #[test]
    fn no_summary_before_load() {
        let state = DashboardState::default();
        assert!(state.summary.is_none());
        assert_eq!(state.visible_records().count(), 0);
    }

    #[test]
    fn filtering_leaves_summary_untouched() {
        let mut state = DashboardState::default();
        state.set_records(sample());
        let before = state.summary.clone();

        state.set_query("2023-01");
        let dates: Vec<&str> = state.visible_records().map(|r| r.extract_date.as_str()).collect();
        assert_eq!(dates, vec!["2023-01-01", "2023-01-15"]);
        assert_eq!(state.summary, before);
        assert_eq!(state.records.len(), 3);

        state.set_query("");
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.summary, before);
    }

    #[test]
    fn reload_replaces_rows_and_keeps_query() {
        let mut state = DashboardState::default();
        state.set_records(sample());
        state.set_query("-02-");

        state.set_loaded(LoadedData {
            records: vec![
                HoursRecord::new("2024-02-01", 1.0, 1.0, 1.0),
                HoursRecord::new("2024-03-01", 3.0, 3.0, 3.0),
            ],
            columns: Vec::new(),
            missing_columns: vec!["TOTAL_HOURS_VOLUNTARY".to_string()],
            source: Some(PathBuf::from("other.csv")),
        });

        assert_eq!(state.records.len(), 2);
        assert_eq!(state.visible_indices, vec![0]);
        assert_eq!(state.summary.as_ref().map(|s| s.expected.mean), Some(2.0));
        assert_eq!(state.source, Some(PathBuf::from("other.csv")));
        assert_eq!(
            state.status_message.as_deref(),
            Some("Missing columns: TOTAL_HOURS_VOLUNTARY")
        );
    }

    #[test]
    fn failed_reload_keeps_previous_rows_and_summary() {
        let mut state = DashboardState::default();
        let status = state.apply_load_result(Ok(LoadedData {
            records: sample(),
            source: Some(PathBuf::from("data.csv")),
            ..LoadedData::default()
        }));
        assert_eq!(status, "Loaded 3 rows");
        state.set_query("2023-01");
        let before = state.summary.clone();

        let status = state.apply_load_result(Err("Failed to read other.csv".to_string()));

        assert_eq!(status, "Error: Failed to read other.csv");
        assert_eq!(state.records, sample());
        assert_eq!(state.summary, before);
        assert_eq!(state.visible_indices, vec![0, 2]);
        assert_eq!(state.source, Some(PathBuf::from("data.csv")));
    }

    #[test]
    fn failed_first_load_leaves_statistics_pending() {
        let mut state = DashboardState::default();
        let status = state.apply_load_result(Err("CSV input has no header row".to_string()));

        assert!(status.starts_with("Error: "));
        assert!(state.summary.is_none());
        assert!(state.records.is_empty());
    }
}

use super::record::HoursRecord;

// ---------------------------------------------------------------------------
// Date search filter
// ---------------------------------------------------------------------------

/// Return indices of records whose date label contains `query`,
/// ignoring case. An empty query keeps every record.
pub fn filtered_indices(records: &[HoursRecord], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| needle.is_empty() || r.extract_date.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(dates: &[&str]) -> Vec<HoursRecord> {
        dates
            .iter()
            .map(|d| HoursRecord::new(*d, 1.0, 1.0, 1.0))
            .collect()
    }

    #[test]
    fn substring_match_on_date() {
        let rows = records(&["2023-01-01", "2023-02-01"]);
        assert_eq!(filtered_indices(&rows, "2023-01"), vec![0]);
    }

    #[test]
    fn match_ignores_case() {
        let rows = records(&["01-jan-2023", "01-feb-2023"]);
        assert_eq!(filtered_indices(&rows, "JAN"), vec![0]);
        assert_eq!(filtered_indices(&rows, "Feb"), vec![1]);
    }

    #[test]
    fn empty_query_keeps_all_in_order() {
        let rows = records(&["c", "a", "b"]);
        assert_eq!(filtered_indices(&rows, ""), vec![0, 1, 2]);
    }

    #[test]
    fn no_match_is_empty() {
        let rows = records(&["2023-01-01"]);
        assert!(filtered_indices(&rows, "2024").is_empty());
    }

    #[test]
    fn empty_date_only_matches_empty_query() {
        let rows = records(&["", "2023-01-01"]);
        assert_eq!(filtered_indices(&rows, ""), vec![0, 1]);
        assert_eq!(filtered_indices(&rows, "2023"), vec![1]);
    }
}

//! Hour-tracking record types.

/// CSV header of the date label column.
pub const DATE_COLUMN: &str = "EXTRACT_DATE";

/// One of the three numeric hour fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoursColumn {
    Expected,
    Compulsory,
    Voluntary,
}

impl HoursColumn {
    /// All numeric columns, in chart series order.
    pub const ALL: [HoursColumn; 3] = [
        HoursColumn::Expected,
        HoursColumn::Compulsory,
        HoursColumn::Voluntary,
    ];

    /// Header name in the source CSV.
    pub fn header(self) -> &'static str {
        match self {
            HoursColumn::Expected => "EXPECTED_HOURS",
            HoursColumn::Compulsory => "TOTAL_HOURS_COMPULSORY",
            HoursColumn::Voluntary => "TOTAL_HOURS_VOLUNTARY",
        }
    }

    /// Short human label used in the statistics block.
    pub fn label(self) -> &'static str {
        match self {
            HoursColumn::Expected => "Expected Hours",
            HoursColumn::Compulsory => "Compulsory Hours",
            HoursColumn::Voluntary => "Voluntary Hours",
        }
    }
}

/// One normalized CSV row.
///
/// The numeric fields are always finite; anything unparseable has already
/// been coerced to `0.0` by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct HoursRecord {
    /// Free-form date label, never parsed as a calendar date.
    pub extract_date: String,
    pub expected_hours: f64,
    pub compulsory_hours: f64,
    pub voluntary_hours: f64,
}

impl HoursRecord {
    pub fn new(
        extract_date: impl Into<String>,
        expected_hours: f64,
        compulsory_hours: f64,
        voluntary_hours: f64,
    ) -> Self {
        Self {
            extract_date: extract_date.into(),
            expected_hours,
            compulsory_hours,
            voluntary_hours,
        }
    }

    /// Value of one numeric column.
    pub fn value(&self, column: HoursColumn) -> f64 {
        match column {
            HoursColumn::Expected => self.expected_hours,
            HoursColumn::Compulsory => self.compulsory_hours,
            HoursColumn::Voluntary => self.voluntary_hours,
        }
    }
}

/// Collect one numeric column across records, preserving order.
pub fn column_values(records: &[HoursRecord], column: HoursColumn) -> Vec<f64> {
    records.iter().map(|r| r.value(column)).collect()
}

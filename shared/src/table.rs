//! rows for the mappings table

use crate::mapping::MappingRecord;

/// columns: short url, original url, visits, device, os
pub const TABLE_COLUMNS: usize = 5;

/// shown in place of a missing device / os
pub const FALLBACK: &str = "N/A";

pub const NO_MAPPINGS: &str = "No mappings found.";
pub const LOADING_MAPPINGS: &str = "Loading mappings...";
pub const ERROR_LOADING: &str = "Error loading mappings.";
pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

/// display values for one table row, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRow {
    pub short_url: String,
    /// link text and link target
    pub original_url: String,
    pub visits: String,
    pub device: String,
    pub os: String,
}

/// contents of the table body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<MappingRow>),
    /// single row spanning every column
    Placeholder(&'static str),
}

impl From<&MappingRecord> for MappingRow {
    fn from(record: &MappingRecord) -> Self {
        Self {
            short_url: record.short_url.clone(),
            original_url: record.original_url.clone(),
            visits: record.count.to_string(),
            device: record.device().unwrap_or(FALLBACK).to_string(),
            os: record.os().unwrap_or(FALLBACK).to_string(),
        }
    }
}

impl TableBody {
    /// number of `<tr>` elements this body renders
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Placeholder(_) => 1,
        }
    }
}

/// one row per record, or the "no mappings" placeholder when there are none
pub fn table_body(records: &[MappingRecord]) -> TableBody {
    if records.is_empty() {
        return TableBody::Placeholder(NO_MAPPINGS);
    }
    TableBody::Rows(records.iter().map(MappingRow::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(short_url: &str, device: Option<&str>, os: Option<&str>) -> MappingRecord {
        MappingRecord {
            short_url: short_url.to_string(),
            original_url: format!("https://example.com/{short_url}"),
            count: 3,
            device: device.map(str::to_string),
            os: os.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_records_render_single_placeholder() {
        let body = table_body(&[]);
        assert_eq!(body, TableBody::Placeholder(NO_MAPPINGS));
        assert_eq!(body.row_count(), 1);
    }

    #[test]
    fn test_missing_device_and_os_fall_back() {
        let body = table_body(&[record("abc", None, None)]);
        let TableBody::Rows(rows) = body else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].device, "N/A");
        assert_eq!(rows[0].os, "N/A");
    }

    #[test]
    fn test_rows_keep_record_order_and_values() {
        let body = table_body(&[
            record("first", Some("Desktop"), Some("Windows")),
            record("second", Some("Mobile"), None),
        ]);
        let TableBody::Rows(rows) = body else {
            panic!("expected rows");
        };

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].short_url, "first");
        assert_eq!(rows[0].original_url, "https://example.com/first");
        assert_eq!(rows[0].visits, "3");
        assert_eq!(rows[0].device, "Desktop");
        assert_eq!(rows[1].short_url, "second");
        assert_eq!(rows[1].os, FALLBACK);
    }
}

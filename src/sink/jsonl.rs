//! JSONL file sink
//!
//! Writes each batch kind to its own newline-delimited JSON file under an
//! output directory, one row per line, flushed at the end of every insert
//! call. The files mirror the operations database tables the rows are
//! bulk-loaded into.

use super::{BatchSink, PersistenceError};
use crate::records::{HourlyTrafficRecord, MaintenanceEvent, RideUsageRecord};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Batch sink writing JSONL files into a directory
#[derive(Debug)]
pub struct JsonlSink {
    traffic: BufWriter<File>,
    usage: BufWriter<File>,
    maintenance: BufWriter<File>,
}

impl JsonlSink {
    /// File name for the traffic batch
    pub const TRAFFIC_FILE: &'static str = "foot_traffic.jsonl";
    /// File name for the usage batch
    pub const USAGE_FILE: &'static str = "ride_usage.jsonl";
    /// File name for the maintenance batch
    pub const MAINTENANCE_FILE: &'static str = "maintenance_log.jsonl";

    /// Create the output directory and the three batch files, truncating
    /// any existing ones
    pub fn create<P: AsRef<Path>>(dir: P) -> Result<Self, PersistenceError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        info!("Writing JSONL batches under {}", dir.display());

        Ok(Self {
            traffic: BufWriter::new(File::create(dir.join(Self::TRAFFIC_FILE))?),
            usage: BufWriter::new(File::create(dir.join(Self::USAGE_FILE))?),
            maintenance: BufWriter::new(File::create(dir.join(Self::MAINTENANCE_FILE))?),
        })
    }

    fn write_rows<T: Serialize>(
        writer: &mut BufWriter<File>,
        rows: &[T],
    ) -> Result<(), PersistenceError> {
        for row in rows {
            let line = serde_json::to_string(row)?;
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl BatchSink for JsonlSink {
    fn insert_traffic(&mut self, rows: &[HourlyTrafficRecord]) -> Result<(), PersistenceError> {
        Self::write_rows(&mut self.traffic, rows)
    }

    fn insert_usage(&mut self, rows: &[RideUsageRecord]) -> Result<(), PersistenceError> {
        Self::write_rows(&mut self.usage, rows)
    }

    fn insert_maintenance(&mut self, rows: &[MaintenanceEvent]) -> Result<(), PersistenceError> {
        Self::write_rows(&mut self.maintenance, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::TRAFFIC_SOURCE_TAG;
    use crate::types::RideId;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 19).unwrap()
    }

    #[test]
    fn test_writes_one_line_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = JsonlSink::create(dir.path()).unwrap();

        let rows: Vec<HourlyTrafficRecord> = (0u32..3)
            .map(|hour| HourlyTrafficRecord {
                timestamp: date().and_hms_opt(10 + hour, 0, 0).unwrap(),
                date: date(),
                visitor_count: 100 * hour,
                source_system: TRAFFIC_SOURCE_TAG.to_string(),
            })
            .collect();
        sink.insert_traffic(&rows).unwrap();

        let content =
            fs::read_to_string(dir.path().join(JsonlSink::TRAFFIC_FILE)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: HourlyTrafficRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, rows[0]);
    }

    #[test]
    fn test_successive_inserts_append() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = JsonlSink::create(dir.path()).unwrap();

        let row = RideUsageRecord {
            timestamp: date().and_hms_opt(14, 0, 0).unwrap(),
            date: date(),
            ride_id: RideId(5),
            boardings: 106,
        };
        sink.insert_usage(&[row.clone()]).unwrap();
        sink.insert_usage(&[row]).unwrap();

        let content = fs::read_to_string(dir.path().join(JsonlSink::USAGE_FILE)).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_empty_batch_leaves_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = JsonlSink::create(dir.path()).unwrap();

        sink.insert_maintenance(&[]).unwrap();

        let content =
            fs::read_to_string(dir.path().join(JsonlSink::MAINTENANCE_FILE)).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        JsonlSink::create(&nested).unwrap();
        assert!(nested.join(JsonlSink::TRAFFIC_FILE).exists());
    }
}

//! In-memory batch recorder
//!
//! Test double for the persistence seam. Records every accepted batch and
//! can be told to reject a specific batch kind, which is how the failure
//! path of the runner gets exercised.

use super::{BatchKind, BatchSink, PersistenceError};
use crate::records::{HourlyTrafficRecord, MaintenanceEvent, RideUsageRecord};

/// Batch sink that records rows in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Accepted traffic rows
    pub traffic: Vec<HourlyTrafficRecord>,
    /// Accepted usage rows
    pub usage: Vec<RideUsageRecord>,
    /// Accepted maintenance rows
    pub maintenance: Vec<MaintenanceEvent>,
    fail_on: Option<BatchKind>,
}

impl MemorySink {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that rejects every batch of the given kind
    pub fn failing_on(kind: BatchKind) -> Self {
        Self { fail_on: Some(kind), ..Self::default() }
    }

    /// Total rows accepted so far across all batch kinds
    pub fn total_rows(&self) -> usize {
        self.traffic.len() + self.usage.len() + self.maintenance.len()
    }

    fn guard(&self, kind: BatchKind) -> Result<(), PersistenceError> {
        if self.fail_on == Some(kind) {
            return Err(PersistenceError::Rejected(format!(
                "injected failure for {} batch",
                kind
            )));
        }
        Ok(())
    }
}

impl BatchSink for MemorySink {
    fn insert_traffic(&mut self, rows: &[HourlyTrafficRecord]) -> Result<(), PersistenceError> {
        self.guard(BatchKind::Traffic)?;
        self.traffic.extend_from_slice(rows);
        Ok(())
    }

    fn insert_usage(&mut self, rows: &[RideUsageRecord]) -> Result<(), PersistenceError> {
        self.guard(BatchKind::Usage)?;
        self.usage.extend_from_slice(rows);
        Ok(())
    }

    fn insert_maintenance(&mut self, rows: &[MaintenanceEvent]) -> Result<(), PersistenceError> {
        self.guard(BatchKind::Maintenance)?;
        self.maintenance.extend_from_slice(rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::TRAFFIC_SOURCE_TAG;
    use chrono::NaiveDate;

    fn traffic_row() -> HourlyTrafficRecord {
        let date = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
        HourlyTrafficRecord {
            timestamp: date.and_hms_opt(10, 0, 0).unwrap(),
            date,
            visitor_count: 1000,
            source_system: TRAFFIC_SOURCE_TAG.to_string(),
        }
    }

    #[test]
    fn test_records_batches() {
        let mut sink = MemorySink::new();
        sink.insert_traffic(&[traffic_row(), traffic_row()]).unwrap();
        assert_eq!(sink.traffic.len(), 2);
        assert_eq!(sink.total_rows(), 2);
    }

    #[test]
    fn test_failure_injection() {
        let mut sink = MemorySink::failing_on(BatchKind::Traffic);
        let result = sink.insert_traffic(&[traffic_row()]);
        assert!(matches!(result, Err(PersistenceError::Rejected(_))));
        assert!(sink.traffic.is_empty());

        // Other batch kinds still work
        sink.insert_maintenance(&[]).unwrap();
    }
}

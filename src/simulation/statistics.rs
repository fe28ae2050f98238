//! Run summary
//!
//! Observational counts for one completed run. The summary exists for
//! operator logs only; the functional output of a run is the three batches
//! handed to the sink.

use crate::types::RunId;
use chrono::NaiveDate;
use std::time::Duration;

/// Counts and timing for one completed simulated day
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Correlation id of the run
    pub run_id: RunId,
    /// The simulated date
    pub date: NaiveDate,
    /// Total visitors across all operating hours
    pub total_visitors: u64,
    /// Traffic rows submitted
    pub traffic_rows: usize,
    /// Usage rows submitted
    pub usage_rows: usize,
    /// Maintenance rows submitted
    pub maintenance_rows: usize,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Total rows submitted across all three batches
    pub fn total_rows(&self) -> usize {
        self.traffic_rows + self.usage_rows + self.maintenance_rows
    }

    /// Multi-line report suitable for operator output
    pub fn report(&self) -> String {
        format!(
            "Simulation complete for {date} ({run_id})\n\
             \x20 Total Visitors: {visitors}\n\
             \x20 Traffic Rows: {traffic}\n\
             \x20 Usage Rows: {usage}\n\
             \x20 Maintenance Rows: {maintenance}\n\
             \x20 Runtime: {runtime:.2}s",
            date = self.date,
            run_id = self.run_id,
            visitors = self.total_visitors,
            traffic = self.traffic_rows,
            usage = self.usage_rows,
            maintenance = self.maintenance_rows,
            runtime = self.duration.as_secs_f64(),
        )
    }
}

//! Day runner
//!
//! Orchestrates one full simulated day: reads the park configuration once,
//! drives the hour-by-hour traffic and usage loop, runs the daily breakdown
//! sweep, and flushes the accumulated rows to the persistence sink as three
//! bulk batches. Runs single-threaded and synchronously; hours are
//! generated in a fixed order so the log output is auditable.

use crate::model::{BreakdownModel, RideUsageModel, TrafficModel};
use crate::park::ParkConfig;
use crate::records::{HourlyTrafficRecord, MaintenanceEvent, RideUsageRecord, TRAFFIC_SOURCE_TAG};
use crate::simulation::{RunSummary, SimulationError, SimulationResult};
use crate::sink::{BatchKind, BatchSink, PersistenceError};
use crate::types::RunId;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Lifecycle of the runner across a run.
///
/// `Failed` is terminal: a runner whose persistence step failed refuses
/// further runs, leaving retry policy to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No run started yet
    Idle,
    /// Generating traffic, usage, and breakdown records
    Running,
    /// Flushing batches to the sink
    Persisting,
    /// The last run completed and all batches were accepted
    Complete,
    /// A persistence call failed; the runner is unusable
    Failed,
}

/// Orchestrates simulated days against a validated park configuration
#[derive(Debug)]
pub struct SimulationRunner {
    config: ParkConfig,
    rng: StdRng,
    state: RunState,
}

impl SimulationRunner {
    /// Create a runner with an entropy-seeded generator.
    ///
    /// Two runners built this way produce different output for the same
    /// date; use [`SimulationRunner::with_seed`] for reproducible runs.
    pub fn new(config: ParkConfig) -> SimulationResult<Self> {
        debug!("Using entropy-based random seed");
        Self::build(config, StdRng::from_entropy())
    }

    /// Create a runner with a deterministic seed. The same seed and date
    /// reproduce identical traffic, usage, and breakdown output.
    pub fn with_seed(config: ParkConfig, seed: u64) -> SimulationResult<Self> {
        info!("Using deterministic seed: {}", seed);
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: ParkConfig, rng: StdRng) -> SimulationResult<Self> {
        config.validate()?;
        Ok(Self { config, rng, state: RunState::Idle })
    }

    /// Current lifecycle state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The park configuration the runner was built with
    pub fn config(&self) -> &ParkConfig {
        &self.config
    }

    /// Simulate one full day and flush the results to the sink.
    ///
    /// The three batches are submitted in order: traffic, usage, then
    /// maintenance (only when breakdowns occurred). The first persistence
    /// failure aborts the run; batches already accepted stay written.
    #[instrument(skip(self, sink), fields(date = %date))]
    pub fn run_day<S: BatchSink>(
        &mut self,
        date: NaiveDate,
        sink: &mut S,
    ) -> SimulationResult<RunSummary> {
        if self.state == RunState::Failed {
            return Err(SimulationError::RunnerUnavailable(self.state));
        }

        let started = Instant::now();
        let run_id = RunId::new();
        self.state = RunState::Running;

        info!(%run_id, "Starting simulation for {}", date);

        let opening_hour = self.config.opening_hour;
        let operating_hours = self.config.operating_hours;
        let ride_count = self.config.rides.len();

        let traffic_model = TrafficModel::new(&self.config);
        let usage_model = RideUsageModel;
        let breakdown_model = BreakdownModel;

        let mut traffic = Vec::with_capacity(operating_hours);
        let mut usage = Vec::with_capacity(operating_hours * ride_count);
        let mut total_visitors: u64 = 0;

        for hour_index in 0..operating_hours {
            let visitors = traffic_model.hourly_traffic(date, hour_index, &mut self.rng)?;
            total_visitors += u64::from(visitors);

            let timestamp = slot_timestamp(date, opening_hour, hour_index);
            traffic.push(HourlyTrafficRecord {
                timestamp,
                date,
                visitor_count: visitors,
                source_system: TRAFFIC_SOURCE_TAG.to_string(),
            });

            for ride in &self.config.rides {
                usage.push(RideUsageRecord {
                    timestamp,
                    date,
                    ride_id: ride.id,
                    boardings: usage_model.boardings(ride, visitors),
                });
            }
        }

        // Daily breakdown sweep, one trial per ride. A flagged ride keeps
        // its usage rows for the day; the event is an advisory log entry.
        let mut maintenance = Vec::new();
        for ride in &self.config.rides {
            if breakdown_model.check(ride, &mut self.rng) {
                debug!(ride = %ride.name, "Breakdown check fired");
                maintenance.push(MaintenanceEvent::advisory(date, ride));
            }
        }

        self.state = RunState::Persisting;

        sink.insert_traffic(&traffic)
            .map_err(|source| self.fail_persist(BatchKind::Traffic, source))?;
        info!("Inserted {} foot traffic entries", traffic.len());

        sink.insert_usage(&usage)
            .map_err(|source| self.fail_persist(BatchKind::Usage, source))?;
        info!("Inserted {} ride usage entries", usage.len());

        if !maintenance.is_empty() {
            sink.insert_maintenance(&maintenance)
                .map_err(|source| self.fail_persist(BatchKind::Maintenance, source))?;
        }
        info!(
            "Maintenance check complete, {} ride(s) logged for maintenance",
            maintenance.len()
        );

        self.state = RunState::Complete;

        let summary = RunSummary {
            run_id,
            date,
            total_visitors,
            traffic_rows: traffic.len(),
            usage_rows: usage.len(),
            maintenance_rows: maintenance.len(),
            duration: started.elapsed(),
        };

        info!(
            %run_id,
            total_visitors = summary.total_visitors,
            rows = summary.total_rows(),
            "Simulation complete for {}",
            date
        );

        Ok(summary)
    }

    fn fail_persist(&mut self, batch: BatchKind, source: PersistenceError) -> SimulationError {
        error!("Failed to insert {} batch: {}", batch, source);
        self.state = RunState::Failed;
        SimulationError::Persistence { batch, source }
    }
}

/// Start-of-slot timestamp for a 0-based operating hour
fn slot_timestamp(date: NaiveDate, opening_hour: u32, hour_index: usize) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(opening_hour) + hour_index as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_runner_starts_idle() {
        let runner = SimulationRunner::with_seed(ParkConfig::default(), 1).unwrap();
        assert_eq!(runner.state(), RunState::Idle);
    }

    #[test]
    fn test_runner_rejects_invalid_config() {
        let config = ParkConfig { rides: Vec::new(), ..ParkConfig::default() };
        let result = SimulationRunner::with_seed(config, 1);
        assert!(matches!(result, Err(SimulationError::Configuration(_))));
    }

    #[test]
    fn test_run_day_completes() {
        let mut runner = SimulationRunner::with_seed(ParkConfig::default(), 1).unwrap();
        let mut sink = MemorySink::new();

        let summary = runner.run_day(date(2025, 7, 19), &mut sink).unwrap();
        assert_eq!(runner.state(), RunState::Complete);
        assert_eq!(summary.traffic_rows, 12);
        assert_eq!(summary.usage_rows, 12 * 15);
        assert!(summary.maintenance_rows <= 15);
    }

    #[test]
    fn test_slot_timestamps_follow_operating_window() {
        let mut runner = SimulationRunner::with_seed(ParkConfig::default(), 1).unwrap();
        let mut sink = MemorySink::new();
        let day = date(2025, 7, 19);

        runner.run_day(day, &mut sink).unwrap();

        assert_eq!(sink.traffic.first().unwrap().timestamp, day.and_hms_opt(10, 0, 0).unwrap());
        assert_eq!(sink.traffic.last().unwrap().timestamp, day.and_hms_opt(21, 0, 0).unwrap());
    }

    #[test]
    fn test_failed_runner_is_terminal() {
        let mut runner = SimulationRunner::with_seed(ParkConfig::default(), 1).unwrap();
        let mut failing = MemorySink::failing_on(BatchKind::Usage);
        let day = date(2025, 7, 19);

        let result = runner.run_day(day, &mut failing);
        assert!(matches!(
            result,
            Err(SimulationError::Persistence { batch: BatchKind::Usage, .. })
        ));
        assert_eq!(runner.state(), RunState::Failed);

        // Earlier batches stay written; the runner refuses another run.
        assert_eq!(failing.traffic.len(), 12);
        let mut sink = MemorySink::new();
        let result = runner.run_day(day, &mut sink);
        assert!(matches!(result, Err(SimulationError::RunnerUnavailable(RunState::Failed))));
    }

    #[test]
    fn test_complete_runner_can_run_again() {
        let mut runner = SimulationRunner::with_seed(ParkConfig::default(), 1).unwrap();
        let mut sink = MemorySink::new();

        runner.run_day(date(2025, 7, 19), &mut sink).unwrap();
        runner.run_day(date(2025, 7, 20), &mut sink).unwrap();

        assert_eq!(sink.traffic.len(), 24);
        assert_eq!(sink.usage.len(), 2 * 12 * 15);
    }
}

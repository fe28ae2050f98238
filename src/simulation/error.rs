//! Error types for the simulation runner
//!
//! The taxonomy mirrors the failure surfaces of a run: configuration
//! validation before anything executes, argument contract violations on the
//! model entry points, and persistence failures while flushing batches. A
//! run either fully completes or fails with no further batches submitted;
//! batches already accepted by the sink are not rolled back.

use crate::park::ConfigValidationError;
use crate::simulation::RunState;
use crate::sink::{BatchKind, PersistenceError};
use thiserror::Error;

/// Errors that can occur during a simulation run
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The park configuration failed validation; nothing was simulated
    #[error("Configuration validation failed: {0}")]
    Configuration(#[from] ConfigValidationError),

    /// The sink rejected or failed a bulk-insert call
    #[error("Persistence failed for the {batch} batch: {source}")]
    Persistence {
        /// Which batch was being flushed
        batch: BatchKind,
        /// Underlying sink failure
        source: PersistenceError,
    },

    /// An hour index outside the operating window was passed to a model
    #[error("Hour index {hour_index} outside operating window 0..{operating_hours}")]
    InvalidHourIndex {
        /// The offending 0-based hour index
        hour_index: usize,
        /// Number of operating hours in the window
        operating_hours: usize,
    },

    /// The runner has already failed; a failed run is terminal
    #[error("Runner is in the {0:?} state and cannot start another run")]
    RunnerUnavailable(RunState),
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

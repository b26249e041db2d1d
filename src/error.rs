//! Simulation error types.
//!
//! Input problems are rejected earlier by [`crate::validation`]; the errors
//! here signal broken engine invariants and are never expected for
//! validated input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ProcessId;

/// Internal invariant violations raised by the simulation engine.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SimulationError {
    /// Incomplete processes remain but none is ready and none will arrive.
    #[error("simulation stalled at t={time}: {remaining} process(es) incomplete with no future arrival")]
    Stalled {
        /// Simulation time when progress stopped.
        time: i64,
        /// Number of incomplete processes.
        remaining: usize,
    },

    /// Metrics were requested for a process the run never finished.
    #[error("process P{id} has no start or finish time")]
    IncompleteProcess {
        /// Offending process.
        id: ProcessId,
    },

    /// The simulation clock would pass `i64::MAX`.
    #[error("simulation clock overflow at t={time} advancing by {ticks}")]
    TimeOverflow {
        /// Clock value before the step.
        time: i64,
        /// Requested advance.
        ticks: i64,
    },
}

impl SimulationError {
    /// Creates a stall error.
    #[inline]
    pub fn stalled(time: i64, remaining: usize) -> Self {
        Self::Stalled { time, remaining }
    }
}

/// Advances the clock by `ticks`, failing instead of wrapping.
#[inline]
pub(crate) fn advance_clock(now: i64, ticks: i64) -> SimulationOutcome<i64> {
    now.checked_add(ticks)
        .ok_or(SimulationError::TimeOverflow { time: now, ticks })
}

/// Result alias for engine operations.
pub type SimulationOutcome<T> = Result<T, SimulationError>;

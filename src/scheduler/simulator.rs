//! Simulation front-end.
//!
//! # Algorithm
//!
//! 1. Clone the caller's processes (the driver resets their run state).
//! 2. Dispatch to the driver matching the requested [`Algorithm`].
//! 3. Merge abutting same-owner intervals in the timeline.
//! 4. Derive per-process metrics and aggregate KPIs.
//!
//! The caller's records are never mutated, so any number of runs can share
//! one input set without observing each other.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{Algorithm, ProcessMetrics, SimulationKpi};
use crate::error::SimulationOutcome;
use crate::models::{Process, SimulationResult};

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule, in input order.
    pub processes: Vec<Process>,
    /// Scheduling discipline.
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a new simulation request.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
        }
    }

    /// Replaces the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Single-CPU scheduling simulator.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Algorithm, Simulator};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let result = Simulator::new().simulate(&processes, &Algorithm::Fcfs).unwrap();
///
/// assert_eq!(result.timeline.to_string(), "[P1:0-5, P2:5-8]");
/// assert_eq!(result.metrics_for(2).unwrap().waiting_time, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    merge_timeline: bool,
}

impl Simulator {
    /// Creates a simulator that merges timelines before returning.
    pub fn new() -> Self {
        Self {
            merge_timeline: true,
        }
    }

    /// Sets whether abutting same-owner intervals are merged.
    ///
    /// Disable to inspect the raw driver output (e.g. individual Round
    /// Robin slices).
    pub fn with_merge(mut self, merge_timeline: bool) -> Self {
        self.merge_timeline = merge_timeline;
        self
    }

    /// Runs one algorithm over a fresh copy of the processes.
    #[instrument(skip_all, fields(algorithm = algorithm.id(), processes = processes.len()))]
    pub fn simulate(
        &self,
        processes: &[Process],
        algorithm: &Algorithm,
    ) -> SimulationOutcome<SimulationResult> {
        let mut working: Vec<Process> = processes.to_vec();
        debug!("simulation started");

        let mut timeline = algorithm.run(&mut working)?;
        if self.merge_timeline {
            timeline.merge_adjacent();
        }

        let metrics = ProcessMetrics::collect(&working)?;
        let kpi = SimulationKpi::calculate(&metrics, &timeline);

        debug!(
            makespan = kpi.makespan,
            avg_waiting = kpi.average_waiting_time,
            avg_turnaround = kpi.average_turnaround_time,
            "simulation finished"
        );

        Ok(SimulationResult {
            algorithm: *algorithm,
            processes: working,
            metrics,
            timeline,
            kpi,
        })
    }

    /// Runs a request.
    pub fn simulate_request(&self, request: &SimulationRequest) -> SimulationOutcome<SimulationResult> {
        self.simulate(&request.processes, &request.algorithm)
    }

    /// Runs all eight disciplines over the same input.
    ///
    /// Results are in [`Algorithm::all`] order.
    pub fn compare(
        &self,
        processes: &[Process],
        quantum: NonZeroU32,
    ) -> SimulationOutcome<Vec<SimulationResult>> {
        Algorithm::all(quantum)
            .iter()
            .map(|algorithm| self.simulate(processes, algorithm))
            .collect()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

//! Simulation result model.
//!
//! The complete output of one scheduling run: the process set with every
//! timing field populated, the merged timeline, and the derived metrics.
//! Presentation layers consume this read-only.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Timeline};
use crate::scheduler::{Algorithm, ProcessMetrics, SimulationKpi};

/// Output of a single simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Processes in input order, with start/finish populated.
    pub processes: Vec<Process>,
    /// Per-process metrics in input order.
    pub metrics: Vec<ProcessMetrics>,
    /// Execution timeline.
    pub timeline: Timeline,
    /// Aggregate indicators.
    pub kpi: SimulationKpi,
}

impl SimulationResult {
    /// Mean waiting time across all processes.
    #[inline]
    pub fn average_waiting_time(&self) -> f64 {
        self.kpi.average_waiting_time
    }

    /// Mean turnaround time across all processes.
    #[inline]
    pub fn average_turnaround_time(&self) -> f64 {
        self.kpi.average_turnaround_time
    }

    /// Finds a process by ID.
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Finds the metrics row for a process.
    pub fn metrics_for(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.id == id)
    }

    /// Makespan of the run.
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }
}

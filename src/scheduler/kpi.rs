//! Simulation performance metrics (KPIs).
//!
//! Derives per-process timing measures from a completed run and
//! aggregates them into summary indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | Makespan | Latest interval end |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | process-to-process handovers |
//!
//! Averages are plain arithmetic means with no rounding; display layers
//! round as they see fit.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, SimulationOutcome};
use crate::models::{Process, ProcessId, Timeline};

/// Per-process timing measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process ID.
    pub id: ProcessId,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// First dispatch time.
    pub start_time: i64,
    /// Completion time.
    pub finish_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Time from arrival to first dispatch.
    pub response_time: i64,
}

impl ProcessMetrics {
    /// Derives metrics for a process that has completed a run.
    pub fn from_process(process: &Process) -> SimulationOutcome<Self> {
        let incomplete = || SimulationError::IncompleteProcess { id: process.id };
        let start_time = process.start_time.ok_or_else(incomplete)?;
        let finish_time = process.finish_time.ok_or_else(incomplete)?;
        let turnaround_time = finish_time - process.arrival_time;

        Ok(Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            finish_time,
            waiting_time: turnaround_time - process.burst_time,
            turnaround_time,
            response_time: start_time - process.arrival_time,
        })
    }

    /// Derives metrics for every process, preserving order.
    pub fn collect(processes: &[Process]) -> SimulationOutcome<Vec<Self>> {
        processes.iter().map(Self::from_process).collect()
    }
}

/// Aggregate indicators for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Total idle time within `[0, makespan]`.
    pub total_idle_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Process-to-process handovers.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from per-process metrics and the run's timeline.
    pub fn calculate(metrics: &[ProcessMetrics], timeline: &Timeline) -> Self {
        let makespan = timeline.makespan();
        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                timeline.busy_time() as f64 / makespan as f64,
                metrics.len() as f64 / makespan as f64,
            )
        };

        Self {
            average_waiting_time: mean(metrics.iter().map(|m| m.waiting_time)),
            average_turnaround_time: mean(metrics.iter().map(|m| m.turnaround_time)),
            average_response_time: mean(metrics.iter().map(|m| m.response_time)),
            makespan,
            total_idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            context_switches: timeline.merged().context_switches(),
        }
    }
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let (sum, count) = values.fold((0i64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;

    fn finished(id: u32, arrival: i64, burst: i64, start: i64, finish: i64) -> Process {
        let mut p = Process::new(id, arrival, burst);
        p.start_time = Some(start);
        p.finish_time = Some(finish);
        p.remaining_time = 0;
        p
    }

    #[test]
    fn test_process_metrics() {
        let m = ProcessMetrics::from_process(&finished(2, 1, 3, 5, 8)).unwrap();
        assert_eq!(m.turnaround_time, 7);
        assert_eq!(m.waiting_time, 4);
        assert_eq!(m.response_time, 4);
    }

    #[test]
    fn test_incomplete_process() {
        let err = ProcessMetrics::from_process(&Process::new(3, 0, 2)).unwrap_err();
        assert_eq!(err, SimulationError::IncompleteProcess { id: 3 });
    }

    #[test]
    fn test_kpi_basic() {
        let processes = vec![finished(1, 0, 5, 0, 5), finished(2, 1, 3, 5, 8)];
        let metrics = ProcessMetrics::collect(&processes).unwrap();
        let mut timeline = Timeline::new();
        timeline.record(Owner::Process(1), 0, 5);
        timeline.record(Owner::Process(2), 5, 8);

        let kpi = SimulationKpi::calculate(&metrics, &timeline);
        assert!((kpi.average_waiting_time - 2.0).abs() < 1e-10); // (0+4)/2
        assert!((kpi.average_turnaround_time - 6.0).abs() < 1e-10); // (5+7)/2
        assert!((kpi.average_response_time - 2.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.context_switches, 1);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle() {
        let processes = vec![finished(1, 2, 2, 2, 4)];
        let metrics = ProcessMetrics::collect(&processes).unwrap();
        let mut timeline = Timeline::new();
        timeline.record_idle(0, 2);
        timeline.record(Owner::Process(1), 2, 4);

        let kpi = SimulationKpi::calculate(&metrics, &timeline);
        assert_eq!(kpi.total_idle_time, 2);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 0);
    }

    #[test]
    fn test_kpi_non_integral_average() {
        let processes = vec![
            finished(1, 0, 1, 0, 1),
            finished(2, 0, 1, 1, 2),
            finished(3, 0, 1, 2, 3),
        ];
        let metrics = ProcessMetrics::collect(&processes).unwrap();
        let kpi = SimulationKpi::calculate(&metrics, &Timeline::new());
        // waiting: 0, 1, 2 → 1.0; turnaround 1, 2, 3 → 2.0
        assert!((kpi.average_waiting_time - 1.0).abs() < 1e-10);
        assert!((kpi.average_turnaround_time - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = SimulationKpi::calculate(&[], &Timeline::new());
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.average_waiting_time - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }
}

//! Process (job) model.
//!
//! A process is a unit of CPU demand: it becomes ready at its arrival
//! time and needs `burst_time` units of processor time to complete.
//!
//! # Time Representation
//! All times are integer ticks on a discrete simulation axis starting at t=0.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier (1-based, assigned by input order).
pub type ProcessId = u32;

/// A process to be scheduled on a single CPU.
///
/// The input fields (`id`, `arrival_time`, `burst_time`, `priority`) are
/// fixed. The run-state fields (`remaining_time`, `start_time`,
/// `finish_time`) are written only by the one simulation run that owns this
/// record; `reset` restores them to their pre-simulation values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Stable process identifier.
    pub id: ProcessId,
    /// Time at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU demand.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent).
    #[serde(default)]
    pub priority: i32,
    /// CPU time still owed to this process.
    #[serde(default)]
    pub remaining_time: i64,
    /// First dispatch time. `None` = not yet started.
    #[serde(default)]
    pub start_time: Option<i64>,
    /// Completion time. `None` = not yet complete.
    #[serde(default)]
    pub finish_time: Option<i64>,
}

impl Process {
    /// Creates a process with priority 0 and pristine run state.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            start_time: None,
            finish_time: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Restores the run state to what it was before any simulation.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.finish_time = None;
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Whether the process has run to completion.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process is eligible to run at `time`.
    #[inline]
    pub fn is_ready(&self, time: i64) -> bool {
        self.has_arrived(time) && !self.is_complete()
    }

    /// Records the first dispatch. Later dispatches leave it untouched.
    pub(crate) fn mark_started(&mut self, time: i64) -> bool {
        if self.start_time.is_none() {
            self.start_time = Some(time);
            true
        } else {
            false
        }
    }

    /// Executes `ticks` units of work ending at `now`.
    ///
    /// Returns `true` when this slice completes the process.
    pub(crate) fn execute(&mut self, ticks: i64, now: i64) -> bool {
        self.remaining_time -= ticks;
        if self.remaining_time == 0 {
            self.finish_time = Some(now);
            true
        } else {
            false
        }
    }

    /// Turnaround time: `finish - arrival`.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.finish_time.map(|finish| finish - self.arrival_time)
    }

    /// Waiting time: `turnaround - burst`.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// Response time: `start - arrival`.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|start| start - self.arrival_time)
    }
}

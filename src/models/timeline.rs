//! Execution timeline (Gantt) model.
//!
//! A timeline is the ordered list of intervals during which the CPU was
//! owned by a process or sat idle. A complete run tiles `[0, makespan]`
//! with no gaps and no overlaps.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProcessId;

/// Who owned the CPU during an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    /// No process was ready.
    Idle,
    /// The given process was running.
    Process(ProcessId),
}

impl Owner {
    /// The owning process, if any.
    pub fn process_id(&self) -> Option<ProcessId> {
        match self {
            Owner::Idle => None,
            Owner::Process(id) => Some(*id),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Idle => write!(f, "Idle"),
            Owner::Process(id) => write!(f, "P{id}"),
        }
    }
}

/// A half-open interval `[start, end)` of CPU ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineInterval {
    /// CPU owner.
    pub owner: Owner,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl TimelineInterval {
    /// Creates a new interval.
    pub fn new(owner: Owner, start: i64, end: i64) -> Self {
        Self { owner, start, end }
    }

    /// Interval length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether this is an idle gap.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.owner == Owner::Idle
    }
}

impl fmt::Display for TimelineInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.owner, self.start, self.end)
    }
}

/// Ordered execution intervals for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Intervals in recording order.
    pub intervals: Vec<TimelineInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval. Empty intervals (`end <= start`) are dropped.
    pub fn record(&mut self, owner: Owner, start: i64, end: i64) {
        if end > start {
            self.intervals.push(TimelineInterval::new(owner, start, end));
        }
    }

    /// Appends an idle gap.
    pub fn record_idle(&mut self, start: i64, end: i64) {
        self.record(Owner::Idle, start, end);
    }

    /// Returns a copy with abutting same-owner intervals collapsed.
    ///
    /// Order-preserving and idempotent.
    pub fn merged(&self) -> Self {
        let mut merged: Vec<TimelineInterval> = Vec::with_capacity(self.intervals.len());
        for interval in &self.intervals {
            match merged.last_mut() {
                Some(last) if last.owner == interval.owner && last.end == interval.start => {
                    last.end = interval.end;
                }
                _ => merged.push(*interval),
            }
        }
        Self { intervals: merged }
    }

    /// Collapses abutting same-owner intervals in place.
    pub fn merge_adjacent(&mut self) {
        *self = self.merged();
    }

    /// Latest end time across all intervals.
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Total time the CPU was owned by some process.
    pub fn busy_time(&self) -> i64 {
        self.intervals
            .iter()
            .filter(|i| !i.is_idle())
            .map(|i| i.duration())
            .sum()
    }

    /// Total idle time.
    pub fn idle_time(&self) -> i64 {
        self.intervals
            .iter()
            .filter(|i| i.is_idle())
            .map(|i| i.duration())
            .sum()
    }

    /// Intervals owned by the given process.
    pub fn intervals_for(&self, id: ProcessId) -> Vec<&TimelineInterval> {
        self.intervals
            .iter()
            .filter(|i| i.owner == Owner::Process(id))
            .collect()
    }

    /// Total CPU time given to the given process.
    pub fn executed_time(&self, id: ProcessId) -> i64 {
        self.intervals_for(id).iter().map(|i| i.duration()).sum()
    }

    /// Number of process-to-different-process handovers, idle gaps skipped.
    pub fn context_switches(&self) -> usize {
        let mut switches = 0;
        let mut previous: Option<ProcessId> = None;
        for id in self.intervals.iter().filter_map(|i| i.owner.process_id()) {
            if let Some(prev) = previous {
                if prev != id {
                    switches += 1;
                }
            }
            previous = Some(id);
        }
        switches
    }

    /// Whether the intervals, sorted by start, tile `[0, makespan]`.
    pub fn is_contiguous(&self) -> bool {
        let mut sorted: Vec<&TimelineInterval> = self.intervals.iter().collect();
        sorted.sort_by_key(|i| i.start);
        let mut cursor = 0;
        for interval in sorted {
            if interval.start != cursor || interval.end <= interval.start {
                return false;
            }
            cursor = interval.end;
        }
        true
    }

    /// Iterates over the intervals.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineInterval> {
        self.intervals.iter()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no interval has been recorded.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineInterval;
    type IntoIter = std::slice::Iter<'a, TimelineInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{interval}")?;
        }
        write!(f, "]")
    }
}

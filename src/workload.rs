//! Sample workloads.
//!
//! Built-in example process sets for demos, plus a seeded random workload
//! generator for exercising the simulator.

use rand::Rng;

use crate::models::{Process, ProcessId};

/// A named example workload in raw text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWorkload {
    /// Whitespace-separated arrival times.
    pub arrival: &'static str,
    /// Whitespace-separated burst times.
    pub burst: &'static str,
    /// Whitespace-separated priorities.
    pub priority: &'static str,
}

/// Built-in example workloads.
pub const SAMPLE_WORKLOADS: [SampleWorkload; 4] = [
    SampleWorkload {
        arrival: "0 1 2 3",
        burst: "5 3 8 6",
        priority: "2 1 4 3",
    },
    SampleWorkload {
        arrival: "1 2 3 4",
        burst: "4 6 2 5",
        priority: "3 1 4 2",
    },
    SampleWorkload {
        arrival: "0 2 4 6",
        burst: "7 5 3 9",
        priority: "1 3 2 4",
    },
    SampleWorkload {
        arrival: "3 5 7 9",
        burst: "6 4 7 3",
        priority: "4 2 3 1",
    },
];

/// Picks one of the built-in workloads at random.
pub fn random_sample<R: Rng>(rng: &mut R) -> SampleWorkload {
    SAMPLE_WORKLOADS[rng.random_range(0..SAMPLE_WORKLOADS.len())]
}

/// Bounds for [`random_processes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadShape {
    /// Number of processes.
    pub count: usize,
    /// Largest arrival time (inclusive).
    pub max_arrival: i64,
    /// Largest burst time (inclusive, minimum burst is 1).
    pub max_burst: i64,
    /// Largest priority value (inclusive, minimum is 0).
    pub max_priority: i32,
}

impl Default for WorkloadShape {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 8,
            max_priority: 5,
        }
    }
}

impl WorkloadShape {
    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the largest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the largest burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }
}

/// Generates a valid random process set (IDs 1..=count in input order).
pub fn random_processes<R: Rng>(rng: &mut R, shape: &WorkloadShape) -> Vec<Process> {
    (0..shape.count)
        .map(|i| {
            let arrival = rng.random_range(0..=shape.max_arrival.max(0));
            let burst = rng.random_range(1..=shape.max_burst.max(1));
            let priority = rng.random_range(0..=shape.max_priority.max(0));
            Process::new(i as ProcessId + 1, arrival, burst).with_priority(priority)
        })
        .collect()
}

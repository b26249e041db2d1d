//! Round Robin time-slicing.
//!
//! # Algorithm
//!
//! 1. Enqueue every process that has arrived by the current time, in
//!    arrival order.
//! 2. If the ready queue is empty, idle until the next arrival.
//! 3. Otherwise dequeue the head and run it for `min(quantum, remaining)`.
//! 4. Enqueue arrivals that happened during the slice, *then* re-queue the
//!    process that just ran (if unfinished). Newcomers therefore get ahead
//!    of the preempted process.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;
use std::num::NonZeroU32;

use tracing::trace;

use super::driver::{arrival_order, has_incomplete, idle_until_next_arrival};
use crate::error::{advance_clock, SimulationOutcome};
use crate::models::{Owner, Process, Timeline};

/// Round Robin driver with a fixed time quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: NonZeroU32,
}

impl RoundRobin {
    /// Creates a driver with the given quantum.
    pub fn new(quantum: NonZeroU32) -> Self {
        Self { quantum }
    }

    /// The time quantum.
    pub fn quantum(&self) -> NonZeroU32 {
        self.quantum
    }

    /// Simulates the processes, writing their run state in place.
    ///
    /// Any run state left in `processes` is reset first.
    pub fn run(&self, processes: &mut [Process]) -> SimulationOutcome<Timeline> {
        processes.iter_mut().for_each(Process::reset);
        let quantum = i64::from(self.quantum.get());
        let order = arrival_order(processes);
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
        let mut cursor = 0;
        let mut timeline = Timeline::new();
        let mut now = 0;

        while has_incomplete(processes) {
            admit_arrivals(processes, &order, &mut cursor, now, &mut queue);

            let Some(idx) = queue.pop_front() else {
                now = idle_until_next_arrival(processes, now, &mut timeline)?;
                continue;
            };

            let process = &mut processes[idx];
            let slice = quantum.min(process.remaining_time);
            let start = now;
            now = advance_clock(now, slice)?;
            process.mark_started(start);
            let finished = process.execute(slice, now);
            timeline.record(Owner::Process(process.id), start, now);
            trace!(process = process.id, start, end = now, finished, "slice");

            admit_arrivals(processes, &order, &mut cursor, now, &mut queue);
            if !finished {
                queue.push_back(idx);
            }
        }

        Ok(timeline)
    }
}

/// Pushes every not-yet-admitted process with `arrival <= now` to the queue.
fn admit_arrivals(
    processes: &[Process],
    order: &[usize],
    cursor: &mut usize,
    now: i64,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&idx) = order.get(*cursor) {
        if !processes[idx].has_arrived(now) {
            break;
        }
        queue.push_back(idx);
        *cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantum(q: u32) -> NonZeroU32 {
        NonZeroU32::new(q).unwrap()
    }

    fn make_processes(specs: &[(i64, i64)]) -> Vec<Process> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(arrival, burst))| Process::new(i as u32 + 1, arrival, burst))
            .collect()
    }

    #[test]
    fn test_arrivals_before_requeue() {
        let mut processes = make_processes(&[(0, 5), (1, 3)]);
        let timeline = RoundRobin::new(quantum(2)).run(&mut processes).unwrap();
        assert_eq!(
            timeline.to_string(),
            "[P1:0-2, P2:2-4, P1:4-6, P2:6-7, P1:7-8]"
        );
        assert_eq!(processes[0].finish_time, Some(8));
        assert_eq!(processes[1].start_time, Some(2));
        assert_eq!(processes[1].finish_time, Some(7));
    }

    #[test]
    fn test_single_process_slices() {
        let mut processes = make_processes(&[(0, 5)]);
        let timeline = RoundRobin::new(quantum(2)).run(&mut processes).unwrap();
        // Raw slices abut; merging collapses them
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.merged().to_string(), "[P1:0-5]");
    }

    #[test]
    fn test_idle_between_arrivals() {
        let mut processes = make_processes(&[(0, 1), (4, 2)]);
        let timeline = RoundRobin::new(quantum(3)).run(&mut processes).unwrap();
        assert_eq!(timeline.to_string(), "[P1:0-1, Idle:1-4, P2:4-6]");
    }

    #[test]
    fn test_large_quantum_is_fcfs() {
        let mut processes = make_processes(&[(0, 3), (1, 4), (2, 2)]);
        let timeline = RoundRobin::new(quantum(100)).run(&mut processes).unwrap();
        assert_eq!(timeline.to_string(), "[P1:0-3, P2:3-7, P3:7-9]");
    }

    #[test]
    fn test_finished_processes_run_again() {
        let mut processes = make_processes(&[(0, 3), (1, 1)]);
        let driver = RoundRobin::new(quantum(2));
        let first = driver.run(&mut processes).unwrap();
        assert!(processes.iter().all(Process::is_complete));

        let second = driver.run(&mut processes).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.to_string(), "[P1:0-2, P2:2-3, P1:3-4]");
    }

    #[test]
    fn test_simultaneous_arrivals_keep_input_order() {
        let mut processes = make_processes(&[(0, 2), (0, 2), (0, 2)]);
        let timeline = RoundRobin::new(quantum(1)).run(&mut processes).unwrap();
        assert_eq!(
            timeline.to_string(),
            "[P1:0-1, P2:1-2, P3:2-3, P1:3-4, P2:4-5, P3:5-6]"
        );
    }
}

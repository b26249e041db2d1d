//! Generic selection-driven simulation.
//!
//! # Algorithm
//!
//! 1. Fix the scan order: process indices stably sorted by arrival time.
//! 2. At each decision point, collect the ready set (arrived, incomplete)
//!    in scan order and let the [`RuleEngine`] pick one process.
//! 3. Non-preemptive: the pick runs to completion as a single interval.
//!    Preemptive: the pick runs for one tick, then the ready set is
//!    re-evaluated; consecutive ticks of the same process form one run.
//! 4. If nothing is ready, record an idle gap up to the next arrival and
//!    fast-forward the clock.
//!
//! # Complexity
//! Non-preemptive: O(n²). Preemptive: O(n · B) where B = total burst time.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use tracing::{error, trace};

use crate::dispatching::{DispatchingRule, RuleEngine};
use crate::error::{advance_clock, SimulationError, SimulationOutcome};
use crate::models::{Owner, Process, Timeline};

/// Whether a running process may be interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preemption {
    /// The selected process runs until it completes.
    NonPreemptive,
    /// The ready set is re-evaluated after every tick.
    Preemptive,
}

/// One simulation driver for every selection-based discipline.
///
/// The discipline is fully described by its rule engine and its
/// preemption mode.
///
/// # Example
///
/// ```
/// use cpu_sched::dispatching::rules;
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::SelectionDriver;
///
/// let mut processes = vec![Process::new(1, 0, 7), Process::new(2, 2, 4)];
/// let timeline = SelectionDriver::preemptive(rules::Lwkr)
///     .run(&mut processes)
///     .unwrap();
/// assert_eq!(timeline.to_string(), "[P1:0-2, P2:2-6, P1:6-11]");
/// ```
#[derive(Debug, Clone)]
pub struct SelectionDriver {
    engine: RuleEngine,
    preemption: Preemption,
}

impl SelectionDriver {
    /// Creates a driver from an engine and a preemption mode.
    pub fn new(engine: RuleEngine, preemption: Preemption) -> Self {
        Self { engine, preemption }
    }

    /// Run-to-completion driver with a single rule.
    pub fn non_preemptive<R: DispatchingRule + 'static>(rule: R) -> Self {
        Self::new(RuleEngine::new().with_rule(rule), Preemption::NonPreemptive)
    }

    /// Per-tick re-evaluating driver with a single rule.
    pub fn preemptive<R: DispatchingRule + 'static>(rule: R) -> Self {
        Self::new(RuleEngine::new().with_rule(rule), Preemption::Preemptive)
    }

    /// The preemption mode.
    pub fn preemption(&self) -> Preemption {
        self.preemption
    }

    /// Simulates the processes, writing their run state in place.
    ///
    /// Any run state left in `processes` is reset first. Returns the raw
    /// timeline; preemptive runs are already emitted as maximal runs, so
    /// merging only affects idle/run boundaries.
    pub fn run(&self, processes: &mut [Process]) -> SimulationOutcome<Timeline> {
        processes.iter_mut().for_each(Process::reset);
        match self.preemption {
            Preemption::NonPreemptive => self.run_to_completion(processes),
            Preemption::Preemptive => self.run_per_tick(processes),
        }
    }

    fn run_to_completion(&self, processes: &mut [Process]) -> SimulationOutcome<Timeline> {
        let order = arrival_order(processes);
        let mut timeline = Timeline::new();
        let mut now = 0;

        while has_incomplete(processes) {
            let ready = order.iter().copied().filter(|&i| processes[i].is_ready(now));
            let selected = self.engine.select_best(processes, ready);

            match selected {
                Some(idx) => {
                    let process = &mut processes[idx];
                    let start = now;
                    let burst = process.remaining_time;
                    now = advance_clock(now, burst)?;
                    process.mark_started(start);
                    process.execute(burst, now);
                    timeline.record(Owner::Process(process.id), start, now);
                    trace!(process = process.id, start, end = now, "ran to completion");
                }
                None => now = idle_until_next_arrival(processes, now, &mut timeline)?,
            }
        }

        Ok(timeline)
    }

    fn run_per_tick(&self, processes: &mut [Process]) -> SimulationOutcome<Timeline> {
        let order = arrival_order(processes);
        let mut timeline = Timeline::new();
        let mut now = 0;
        // (index, time the current run began)
        let mut running: Option<(usize, i64)> = None;

        while has_incomplete(processes) {
            let ready = order.iter().copied().filter(|&i| processes[i].is_ready(now));
            let selected = self.engine.select_best(processes, ready);

            let Some(idx) = selected else {
                if let Some((prev, since)) = running.take() {
                    timeline.record(Owner::Process(processes[prev].id), since, now);
                }
                now = idle_until_next_arrival(processes, now, &mut timeline)?;
                continue;
            };

            let since = match running {
                Some((current, since)) if current == idx => since,
                previous => {
                    if let Some((prev, since)) = previous {
                        timeline.record(Owner::Process(processes[prev].id), since, now);
                        trace!(
                            preempted = processes[prev].id,
                            by = processes[idx].id,
                            time = now,
                            "context switch"
                        );
                    }
                    processes[idx].mark_started(now);
                    now
                }
            };

            now = advance_clock(now, 1)?;
            if processes[idx].execute(1, now) {
                timeline.record(Owner::Process(processes[idx].id), since, now);
                trace!(process = processes[idx].id, time = now, "completed");
                running = None;
            } else {
                running = Some((idx, since));
            }
        }

        Ok(timeline)
    }
}

/// Process indices stably sorted by arrival time (ties keep input order).
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);
    order
}

pub(crate) fn has_incomplete(processes: &[Process]) -> bool {
    processes.iter().any(|p| !p.is_complete())
}

/// Earliest arrival strictly after `now` among incomplete processes.
fn next_arrival(processes: &[Process], now: i64) -> Option<i64> {
    processes
        .iter()
        .filter(|p| !p.is_complete() && p.arrival_time > now)
        .map(|p| p.arrival_time)
        .min()
}

/// Records an idle gap up to the next arrival and returns the new clock.
///
/// Fails with [`SimulationError::Stalled`] when no future arrival exists.
pub(crate) fn idle_until_next_arrival(
    processes: &[Process],
    now: i64,
    timeline: &mut Timeline,
) -> SimulationOutcome<i64> {
    match next_arrival(processes, now) {
        Some(arrival) => {
            timeline.record_idle(now, arrival);
            trace!(from = now, to = arrival, "cpu idle");
            Ok(arrival)
        }
        None => {
            let remaining = processes.iter().filter(|p| !p.is_complete()).count();
            error!(time = now, remaining, "no ready process and no future arrival");
            Err(SimulationError::stalled(now, remaining))
        }
    }
}

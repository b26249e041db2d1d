//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Arrival-based**: FIFO
//! - **Burst-based** (non-preemptive): SPT, LPT
//! - **Remaining-work** (preemptive): LWKR, MWKR
//! - **Priority**: PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

// ======================== Arrival-based rules ========================

/// First In First Out.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

// ======================== Burst-based rules ========================

/// Shortest Processing Time.
///
/// Prioritizes the process with the smallest total burst. Minimizes
/// average waiting time among non-preemptive policies.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Longest Processing Time.
///
/// Prioritizes the process with the largest total burst.
#[derive(Debug, Clone, Copy)]
pub struct Lpt;

impl DispatchingRule for Lpt {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        -process.burst_time
    }

    fn description(&self) -> &'static str {
        "Longest Job First"
    }
}

// ======================== Remaining-work rules ========================

/// Least Work Remaining.
///
/// Prioritizes the process closest to completion. Under per-tick
/// re-evaluation this is Shortest Remaining Time First (SRTF).
#[derive(Debug, Clone, Copy)]
pub struct Lwkr;

impl DispatchingRule for Lwkr {
    fn name(&self) -> &'static str {
        "LWKR"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Most Work Remaining.
///
/// Prioritizes the process with the most work left (preemptive LJF).
#[derive(Debug, Clone, Copy)]
pub struct Mwkr;

impl DispatchingRule for Mwkr {
    fn name(&self) -> &'static str {
        "MWKR"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        -process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Longest Remaining Time First"
    }
}

// ======================== Priority-based rule ========================

/// Static priority rule.
///
/// Lower `process.priority` values are more urgent.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}

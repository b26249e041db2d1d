//! Selection policies for choosing the next process to run.
//!
//! Every scheduling discipline in this crate differs from the others only
//! in how it ranks ready processes. A [`DispatchingRule`] scores a process;
//! the [`RuleEngine`] scans a ready set and returns the best candidate.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::RuleEngine;
//! use cpu_sched::dispatching::rules;
//! use cpu_sched::models::Process;
//!
//! let processes = vec![Process::new(1, 0, 7), Process::new(2, 0, 3)];
//! let engine = RuleEngine::new().with_rule(rules::Spt);
//!
//! let best = engine.select_best(&processes, [0, 1]);
//! assert_eq!(best, Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that ranks a ready process.
///
/// # Score Convention
/// **Lower score = dispatched first.** Rules that prefer large values
/// (longest job first) return the negated quantity.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

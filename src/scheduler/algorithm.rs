//! Algorithm selector.
//!
//! Maps an algorithm identifier (and, for Round Robin, a quantum) onto the
//! driver that simulates it.
//!
//! | Identifier | Driver | Rule |
//! |------------|--------|------|
//! | `fcfs` | non-preemptive | FIFO |
//! | `sjfNonPreemptive` | non-preemptive | SPT |
//! | `sjfPreemptive` | preemptive | LWKR |
//! | `ljfNonPreemptive` | non-preemptive | LPT |
//! | `ljfPreemptive` | preemptive | MWKR |
//! | `priorityNonPreemptive` | non-preemptive | PRIORITY |
//! | `priorityPreemptive` | preemptive | PRIORITY |
//! | `roundRobin` | round robin | - |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use super::{RoundRobin, SelectionDriver};
use crate::dispatching::rules;
use crate::error::SimulationOutcome;
use crate::models::{Process, Timeline};
use crate::validation::{validate_quantum, ValidationError, ValidationErrorKind};

/// Default Round Robin quantum when none is supplied.
pub const DEFAULT_QUANTUM: u32 = 2;

/// A single-CPU scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Algorithm {
    /// First Come First Served.
    Fcfs,
    /// Shortest Job First, run to completion.
    SjfNonPreemptive,
    /// Shortest Remaining Time First.
    SjfPreemptive,
    /// Longest Job First, run to completion.
    LjfNonPreemptive,
    /// Longest Remaining Time First.
    LjfPreemptive,
    /// Static priority, run to completion.
    PriorityNonPreemptive,
    /// Static priority with preemption.
    PriorityPreemptive,
    /// Time-sliced FIFO.
    RoundRobin {
        /// Slice length.
        quantum: NonZeroU32,
    },
}

impl Algorithm {
    /// Round Robin with the given quantum.
    pub fn round_robin(quantum: NonZeroU32) -> Self {
        Algorithm::RoundRobin { quantum }
    }

    /// Parses an external identifier.
    ///
    /// `quantum` is only consulted for `roundRobin`; when absent,
    /// [`DEFAULT_QUANTUM`] applies.
    pub fn parse(id: &str, quantum: Option<i64>) -> Result<Self, ValidationError> {
        let algorithm = match id {
            "fcfs" => Algorithm::Fcfs,
            "sjfNonPreemptive" => Algorithm::SjfNonPreemptive,
            "sjfPreemptive" => Algorithm::SjfPreemptive,
            "ljfNonPreemptive" => Algorithm::LjfNonPreemptive,
            "ljfPreemptive" => Algorithm::LjfPreemptive,
            "priorityNonPreemptive" => Algorithm::PriorityNonPreemptive,
            "priorityPreemptive" => Algorithm::PriorityPreemptive,
            "roundRobin" => {
                let quantum = validate_quantum(quantum.unwrap_or(i64::from(DEFAULT_QUANTUM)))?;
                Algorithm::RoundRobin { quantum }
            }
            other => {
                return Err(ValidationError::new(
                    ValidationErrorKind::UnknownAlgorithm,
                    format!("Unknown algorithm: {other}"),
                ))
            }
        };
        Ok(algorithm)
    }

    /// All eight disciplines in canonical order.
    pub fn all(quantum: NonZeroU32) -> [Algorithm; 8] {
        [
            Algorithm::Fcfs,
            Algorithm::SjfNonPreemptive,
            Algorithm::SjfPreemptive,
            Algorithm::LjfNonPreemptive,
            Algorithm::LjfPreemptive,
            Algorithm::PriorityNonPreemptive,
            Algorithm::PriorityPreemptive,
            Algorithm::RoundRobin { quantum },
        ]
    }

    /// External identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::SjfNonPreemptive => "sjfNonPreemptive",
            Algorithm::SjfPreemptive => "sjfPreemptive",
            Algorithm::LjfNonPreemptive => "ljfNonPreemptive",
            Algorithm::LjfPreemptive => "ljfPreemptive",
            Algorithm::PriorityNonPreemptive => "priorityNonPreemptive",
            Algorithm::PriorityPreemptive => "priorityPreemptive",
            Algorithm::RoundRobin { .. } => "roundRobin",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come First Serve (FCFS)",
            Algorithm::SjfNonPreemptive => "Shortest Job First (Non-Preemptive)",
            Algorithm::SjfPreemptive => "Shortest Job First (Preemptive)",
            Algorithm::LjfNonPreemptive => "Longest Job First (Non-Preemptive)",
            Algorithm::LjfPreemptive => "Longest Job First (Preemptive)",
            Algorithm::PriorityNonPreemptive => "Priority (Non-Preemptive)",
            Algorithm::PriorityPreemptive => "Priority (Preemptive)",
            Algorithm::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether a running process can lose the CPU before completing.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::SjfPreemptive
                | Algorithm::LjfPreemptive
                | Algorithm::PriorityPreemptive
                | Algorithm::RoundRobin { .. }
        )
    }

    /// Whether the discipline reads `Process::priority`.
    pub fn uses_priority(&self) -> bool {
        matches!(
            self,
            Algorithm::PriorityNonPreemptive | Algorithm::PriorityPreemptive
        )
    }

    /// Runs the matching driver over the processes.
    ///
    /// The processes are reset and then mutated in place.
    pub fn run(&self, processes: &mut [Process]) -> SimulationOutcome<Timeline> {
        match *self {
            Algorithm::Fcfs => SelectionDriver::non_preemptive(rules::Fifo).run(processes),
            Algorithm::SjfNonPreemptive => {
                SelectionDriver::non_preemptive(rules::Spt).run(processes)
            }
            Algorithm::SjfPreemptive => SelectionDriver::preemptive(rules::Lwkr).run(processes),
            Algorithm::LjfNonPreemptive => {
                SelectionDriver::non_preemptive(rules::Lpt).run(processes)
            }
            Algorithm::LjfPreemptive => SelectionDriver::preemptive(rules::Mwkr).run(processes),
            Algorithm::PriorityNonPreemptive => {
                SelectionDriver::non_preemptive(rules::Priority).run(processes)
            }
            Algorithm::PriorityPreemptive => {
                SelectionDriver::preemptive(rules::Priority).run(processes)
            }
            Algorithm::RoundRobin { quantum } => RoundRobin::new(quantum).run(processes),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin { quantum } => {
                write!(f, "{} (quantum {})", self.display_name(), quantum)
            }
            _ => write!(f, "{}", self.display_name()),
        }
    }
}

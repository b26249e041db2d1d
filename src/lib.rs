//! Single-processor CPU scheduling simulator.
//!
//! Given processes with arrival times, burst durations and optional
//! priorities, computes the exact execution timeline (idle gaps included)
//! and per-process performance metrics for eight classic disciplines.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `TimelineInterval`,
//!   `Owner`, `SimulationResult`
//! - **`dispatching`**: Selection rules (FIFO, SPT, LPT, LWKR, MWKR, PRIORITY)
//!   and the `RuleEngine` that applies them to a ready set
//! - **`scheduler`**: Simulation drivers, `Algorithm` selector, `Simulator`
//!   front-end and KPI computation
//! - **`validation`**: Raw input parsing and integrity checks
//! - **`workload`**: Built-in example workloads and random generation
//! - **`error`**: Engine invariant violations
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::{Algorithm, Simulator};
//!
//! let processes = vec![Process::new(1, 0, 7), Process::new(2, 2, 4), Process::new(3, 4, 1)];
//! let result = Simulator::new()
//!     .simulate(&processes, &Algorithm::SjfNonPreemptive)
//!     .unwrap();
//!
//! assert_eq!(result.timeline.to_string(), "[P1:0-7, P3:7-8, P2:8-12]");
//! ```
//!
//! # Time Model
//!
//! Time is a discrete integer axis starting at 0. There is no wall clock;
//! every run is a deterministic function of its input.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use models::{Owner, Process, ProcessId, SimulationResult, Timeline, TimelineInterval};
pub use scheduler::{Algorithm, Simulator};

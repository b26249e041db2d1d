//! Scheduling drivers, algorithm selection and KPI evaluation.
//!
//! # Drivers
//!
//! - `SelectionDriver`: one discrete-event loop shared by FCFS, SJF, LJF
//!   and Priority, parameterised by a dispatching rule and a preemption
//!   mode.
//! - `RoundRobin`: FIFO ready queue with a fixed time quantum.
//!
//! # Selection
//!
//! `Algorithm` maps an identifier to its driver; `Simulator` runs it on a
//! fresh copy of the input and derives metrics.
//!
//! # KPI
//!
//! `ProcessMetrics` holds waiting, turnaround and response time per
//! process; `SimulationKpi` aggregates averages, makespan, utilization and
//! throughput.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod driver;
mod kpi;
mod round_robin;
mod simulator;

pub use algorithm::{Algorithm, DEFAULT_QUANTUM};
pub use driver::{Preemption, SelectionDriver};
pub use kpi::{ProcessMetrics, SimulationKpi};
pub use round_robin::RoundRobin;
pub use simulator::{SimulationRequest, Simulator};

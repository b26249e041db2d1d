//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduling algorithm: the
//! process record, the execution timeline, and the simulation result.
//!
//! # Domain Mappings
//!
//! | cpu-sched | Textbook | Gantt chart |
//! |-----------|----------|-------------|
//! | Process | Job / PCB | Row label |
//! | TimelineInterval | CPU burst slice | Block |
//! | Owner::Idle | Idle CPU | Gap |
//! | SimulationResult | Schedule + measures | Chart + table |

mod process;
mod result;
mod timeline;

pub use process::{Process, ProcessId};
pub use result::SimulationResult;
pub use timeline::{Owner, Timeline, TimelineInterval};

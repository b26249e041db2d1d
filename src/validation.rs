//! Input validation for simulation requests.
//!
//! The simulation engine assumes well-formed input. This module is the
//! boundary that turns raw user input into processes and rejects:
//! - Empty process sets
//! - Mismatched arrival / burst / priority list lengths
//! - Non-positive burst times and negative arrival times
//! - Missing priorities for priority-based algorithms
//! - Non-positive Round Robin quanta
//! - Duplicate process IDs
//!
//! All detected problems are reported together rather than stopping at the
//! first one.

use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::models::{Process, ProcessId};
use crate::scheduler::Algorithm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    Empty,
    /// Input lists differ in length.
    LengthMismatch,
    /// A burst time is zero or negative.
    NonPositiveBurst,
    /// An arrival time is negative.
    NegativeArrival,
    /// A priority-based algorithm was chosen without a priority per process.
    MissingPriority,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Two processes share the same ID.
    DuplicateId,
    /// A value could not be parsed or is out of range.
    InvalidNumber,
    /// The algorithm identifier is not recognised.
    UnknownAlgorithm,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Parses a whitespace-separated list of numbers.
///
/// `field` names the input in error messages. Blank text yields an
/// empty list.
pub fn parse_values<T: FromStr>(field: &str, text: &str) -> Result<Vec<T>, ValidationError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<T>().map_err(|_| {
                ValidationError::new(
                    ValidationErrorKind::InvalidNumber,
                    format!("Invalid {field} value: '{token}'"),
                )
            })
        })
        .collect()
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> Result<NonZeroU32, ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be greater than zero, got {quantum}"),
        ));
    }
    u32::try_from(quantum)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::InvalidNumber,
                format!("Time quantum {quantum} is too large"),
            )
        })
}

/// Builds processes from parallel input lists.
///
/// Process IDs are assigned 1-based in input order. Priorities are
/// required (one per process) only when `algorithm` uses them; otherwise
/// missing entries default to 0.
pub fn build_processes(
    arrivals: &[i64],
    bursts: &[i64],
    priorities: &[i32],
    algorithm: &Algorithm,
) -> Result<Vec<Process>, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if arrivals.is_empty() || bursts.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::Empty,
            "Please enter arrival and burst times",
        ));
        return Err(errors);
    }

    if arrivals.len() != bursts.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "Number of arrival times ({}) must match number of burst times ({})",
                arrivals.len(),
                bursts.len()
            ),
        ));
    }

    if algorithm.uses_priority() && priorities.len() != arrivals.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingPriority,
            format!(
                "{} requires a priority for all {} processes, got {}",
                algorithm.display_name(),
                arrivals.len(),
                priorities.len()
            ),
        ));
    }

    let processes: Vec<Process> = arrivals
        .iter()
        .zip(bursts)
        .enumerate()
        .map(|(i, (&arrival, &burst))| {
            let priority = priorities.get(i).copied().unwrap_or(0);
            Process::new(i as ProcessId + 1, arrival, burst).with_priority(priority)
        })
        .collect();

    if let Err(mut process_errors) = check_processes(&processes) {
        errors.append(&mut process_errors);
    }

    if errors.is_empty() {
        Ok(processes)
    } else {
        Err(errors)
    }
}

/// Parses raw text fields and builds processes.
///
/// `priority_text` may be blank for algorithms that ignore priority.
pub fn processes_from_text(
    arrival_text: &str,
    burst_text: &str,
    priority_text: &str,
    algorithm: &Algorithm,
) -> Result<Vec<Process>, Vec<ValidationError>> {
    let arrivals = parse_values::<i64>("arrival time", arrival_text);
    let bursts = parse_values::<i64>("burst time", burst_text);
    let priorities = parse_values::<i32>("priority", priority_text);

    match (arrivals, bursts, priorities) {
        (Ok(a), Ok(b), Ok(p)) => build_processes(&a, &b, &p, algorithm),
        (a, b, p) => Err([a.err(), b.err(), p.err()].into_iter().flatten().collect()),
    }
}

/// Validates an already-built process set for the given algorithm.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. All burst times > 0
/// 4. All arrival times >= 0
pub fn validate_input(processes: &[Process], algorithm: &Algorithm) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::Empty,
            format!("{} needs at least one process", algorithm.display_name()),
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: P{}", p.id),
            ));
        }
    }

    if let Err(mut process_errors) = check_processes(processes) {
        errors.append(&mut process_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    for p in processes {
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Burst time of P{} must be greater than zero", p.id),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Arrival time of P{} must not be negative", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

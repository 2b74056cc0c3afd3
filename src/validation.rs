//! Input validation for simulation runs.
//!
//! The schedulers trust their input. Callers that accept process sets from
//! users run these checks first. Detects:
//! - Duplicate or empty process IDs
//! - Process IDs that collide with the idle label
//! - Negative arrival times
//! - Non-positive service times
//! - Non-positive Round Robin quanta

use std::collections::HashSet;
use thiserror::Error;

use crate::models::{Process, IDLE_LABEL};
use crate::scheduler::Algorithm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// A process is named like the idle label.
    ReservedId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative processor time.
    NonPositiveService,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. No empty IDs
/// 2. No duplicate IDs
/// 3. No ID equal to the idle label
/// 4. All arrivals >= 0
/// 5. All service times > 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (idx, p) in processes.iter().enumerate() {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at index {idx} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.id == IDLE_LABEL {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedId,
                format!("Process ID '{IDLE_LABEL}' is reserved for idle slices"),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }

        if p.service <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveService,
                format!("Process '{}' has non-positive service {}", p.id, p.service),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates algorithm parameters.
pub fn validate_algorithm(algorithm: &Algorithm) -> ValidationResult {
    match *algorithm {
        Algorithm::RoundRobin { quantum } if quantum < 1 => Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Round Robin quantum must be >= 1, got {quantum}"),
        )]),
        _ => Ok(()),
    }
}

/// Validates a process set together with the algorithm that will run it.
///
/// Collects the errors of [`validate_processes`] and [`validate_algorithm`].
pub fn validate_input(processes: &[Process], algorithm: &Algorithm) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(mut e) = validate_processes(processes) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_algorithm(algorithm) {
        errors.append(&mut e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Process model.
//!
//! A process is one schedulable unit: it becomes eligible to run at its
//! arrival time and needs a fixed amount of processor time to complete.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A process to be scheduled.
///
/// # Time Representation
/// Times are abstract integer ticks relative to a simulation epoch (t=0).
/// The consumer decides what one tick means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g. "P1").
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total processor time the process requires.
    pub service: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival: i64, service: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            service,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the service time.
    pub fn with_service(mut self, service: i64) -> Self {
        self.service = service;
        self
    }

    /// Dispatch order shared by every scheduler: ascending arrival,
    /// ties broken by lexicographic id.
    pub fn arrival_order(&self, other: &Self) -> Ordering {
        self.arrival
            .cmp(&other.arrival)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Returns references to `processes` sorted by [`Process::arrival_order`].
pub(crate) fn sorted_by_arrival(processes: &[Process]) -> Vec<&Process> {
    let mut sorted: Vec<&Process> = processes.iter().collect();
    sorted.sort_by(|a, b| a.arrival_order(b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 0, 4).with_arrival(3).with_service(7);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.service, 7);
    }

    #[test]
    fn test_arrival_order_ties_by_id() {
        let procs = vec![
            Process::new("P3", 2, 1),
            Process::new("P2", 0, 1),
            Process::new("P1", 2, 1),
        ];
        let ids: Vec<&str> = sorted_by_arrival(&procs)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["P2", "P1", "P3"]);
    }

    #[test]
    fn test_arrival_order_is_lexicographic() {
        // "P10" < "P2" as strings
        let a = Process::new("P10", 0, 1);
        let b = Process::new("P2", 0, 1);
        assert_eq!(a.arrival_order(&b), Ordering::Less);
    }
}

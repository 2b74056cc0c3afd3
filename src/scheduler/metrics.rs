//! Per-process completion metrics.
//!
//! Derives classic scheduling measures from a Gantt sequence and the
//! process set that produced it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Start | Start of the process's first slice |
//! | Finish | End of the process's last slice |
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - service |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::models::{Process, Slice};

/// Completion statistics for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Process id.
    pub id: String,
    /// Arrival time, copied from the process.
    pub arrival: i64,
    /// Service time, copied from the process.
    pub service: i64,
    /// First dispatch time.
    pub start: i64,
    /// Completion time.
    pub finish: i64,
    /// Completion minus arrival.
    pub turnaround: i64,
    /// Turnaround minus service.
    pub waiting: i64,
}

/// Metric rows for a whole simulation plus their averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// One row per process, in input order.
    pub rows: Vec<MetricRow>,
    /// Mean waiting time (0.0 when there are no processes).
    pub average_waiting: f64,
    /// Mean turnaround time (0.0 when there are no processes).
    pub average_turnaround: f64,
}

impl SimulationMetrics {
    /// Computes metrics from a slice sequence and its input processes.
    ///
    /// No consistency check is made between `slices` and `processes`. A
    /// process that owns no slice gets `start = arrival` and `finish = 0`,
    /// which yields a negative turnaround.
    pub fn calculate(slices: &[Slice], processes: &[Process]) -> Self {
        let rows: Vec<MetricRow> = processes
            .iter()
            .map(|p| {
                let mut owned = slices.iter().filter(|s| s.is_owned_by(&p.id));
                let first = owned.next();
                let last = owned.last().or(first);

                if first.is_none() {
                    warn!(id = %p.id, "process owns no slice; defaulting finish to 0");
                }

                let start = first.map_or(p.arrival, |s| s.start);
                let finish = last.map_or(0, |s| s.end);
                let turnaround = finish - p.arrival;
                MetricRow {
                    id: p.id.clone(),
                    arrival: p.arrival,
                    service: p.service,
                    start,
                    finish,
                    turnaround,
                    waiting: turnaround - p.service,
                }
            })
            .collect();

        let (average_waiting, average_turnaround) = if rows.is_empty() {
            (0.0, 0.0)
        } else {
            let n = rows.len() as f64;
            let waiting: i64 = rows.iter().map(|r| r.waiting).sum();
            let turnaround: i64 = rows.iter().map(|r| r.turnaround).sum();
            (waiting as f64 / n, turnaround as f64 / n)
        };

        Self {
            rows,
            average_waiting,
            average_turnaround,
        }
    }

    /// Finds the row for a process id.
    pub fn row(&self, id: &str) -> Option<&MetricRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Latest finish time across all rows (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.rows.iter().map(|r| r.finish).max().unwrap_or(0)
    }

    /// Largest waiting time of any process (0 when empty).
    pub fn max_waiting(&self) -> i64 {
        self.rows.iter().map(|r| r.waiting).max().unwrap_or(0)
    }
}

/// Computes per-process metrics and their averages.
///
/// Shorthand for [`SimulationMetrics::calculate`].
///
/// # Example
///
/// ```
/// use proc_sched::models::Process;
/// use proc_sched::scheduler::{compute_metrics, schedule_fifo};
///
/// let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 2, 3)];
/// let metrics = compute_metrics(&schedule_fifo(&procs), &procs);
/// assert_eq!(metrics.row("P2").unwrap().waiting, 3);
/// assert!((metrics.average_turnaround - 5.5).abs() < 1e-10);
/// ```
pub fn compute_metrics(slices: &[Slice], processes: &[Process]) -> SimulationMetrics {
    SimulationMetrics::calculate(slices, processes)
}

/// Formats a time value for display: integers without decimals,
/// anything else with one decimal place.
pub fn format_time(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

impl fmt::Display for SimulationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.id.len())
            .max()
            .unwrap_or(0)
            .max(2);
        writeln!(f, "{:<width$} {:>5} {:>5} {:>5} {:>5}", "ID", "AT", "PT", "WT", "TAT")?;
        for r in &self.rows {
            writeln!(
                f,
                "{:<width$} {:>5} {:>5} {:>5} {:>5}",
                r.id, r.arrival, r.service, r.waiting, r.turnaround
            )?;
        }
        write!(
            f,
            "avg WT: {} | avg TAT: {}",
            format_time(self.average_waiting),
            format_time(self.average_turnaround)
        )
    }
}

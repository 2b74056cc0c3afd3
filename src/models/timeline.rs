//! Queries over a Gantt sequence.
//!
//! Helpers a renderer or report needs on top of the raw slices: the span to
//! scale against, per-process processor time, idle time and utilization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Process, Slice};

/// Time bounds of a simulated timeline, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSpan {
    /// Earliest arrival among the processes.
    pub start: i64,
    /// Latest slice end, at least `start + 1`.
    pub end: i64,
}

impl TimelineSpan {
    /// Length of the span (always >= 1).
    #[inline]
    pub fn length(&self) -> i64 {
        self.end - self.start
    }
}

/// Bounds a timeline renderer scales against.
///
/// Returns `None` when there are no processes.
pub fn timeline_span(processes: &[Process], slices: &[Slice]) -> Option<TimelineSpan> {
    let start = processes.iter().map(|p| p.arrival).min()?;
    let last_end = slices.iter().map(|s| s.end).max().unwrap_or(start);
    Some(TimelineSpan {
        start,
        end: last_end.max(start + 1),
    })
}

/// Whether each slice ends exactly where the next begins.
pub fn is_contiguous(slices: &[Slice]) -> bool {
    slices.windows(2).all(|w| w[0].end == w[1].start)
}

/// Processor time received per process id. Idle slices are skipped.
pub fn service_by_owner(slices: &[Slice]) -> HashMap<String, i64> {
    let mut received: HashMap<String, i64> = HashMap::new();
    for slice in slices {
        if let Some(id) = slice.process_id() {
            *received.entry(id.to_string()).or_insert(0) += slice.duration();
        }
    }
    received
}

/// Total duration of idle slices.
pub fn idle_time(slices: &[Slice]) -> i64 {
    slices
        .iter()
        .filter(|s| s.is_idle())
        .map(Slice::duration)
        .sum()
}

/// Busy time divided by the time covered by `slices` (0.0..1.0).
///
/// Returns 0.0 for an empty sequence.
pub fn cpu_utilization(slices: &[Slice]) -> f64 {
    let (Some(first), Some(last)) = (slices.first(), slices.last()) else {
        return 0.0;
    };
    let covered = last.end - first.start;
    if covered <= 0 {
        return 0.0;
    }
    let busy = covered - idle_time(slices);
    busy as f64 / covered as f64
}

//! Preemptive Round Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time, ties by id; start the clock at the
//!    earliest arrival and admit everything that has arrived.
//! 2. While the ready queue is non-empty or arrivals remain:
//!    - queue empty: idle until the next arrival and admit it (and any
//!      simultaneous arrivals);
//!    - otherwise: run the head for `min(quantum, remaining)`, admit every
//!      process that arrived by the end of that run, then re-queue the head
//!      at the tail if it still has work left.
//!
//! Arrivals are admitted *before* the preempted process is re-queued, so a
//! process arriving exactly when a quantum expires runs ahead of the
//! preempted one.
//!
//! # Complexity
//! O(n log n) for the sort plus O(number of slices) for the loop.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::models::{sorted_by_arrival, Process, Slice};

/// Schedules `processes` round robin with the given time quantum.
///
/// No slice owned by a process is longer than `quantum`; a process whose
/// remaining service is below the quantum runs exactly that long and
/// completes. An empty input yields an empty sequence.
///
/// # Panics
/// If `quantum < 1`, since the clock could never advance.
///
/// # Example
///
/// ```
/// use proc_sched::models::{Process, Slice};
/// use proc_sched::scheduler::schedule_rr;
///
/// let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let slices = schedule_rr(&procs, 2);
/// assert_eq!(slices[0], Slice::process("P1", 0, 2));
/// assert_eq!(slices[1], Slice::process("P2", 2, 4));
/// assert_eq!(slices.len(), 5);
/// ```
pub fn schedule_rr(processes: &[Process], quantum: i64) -> Vec<Slice> {
    assert!(quantum >= 1, "round robin quantum must be >= 1, got {quantum}");

    let procs = sorted_by_arrival(processes);
    let mut remaining: HashMap<&str, i64> =
        procs.iter().map(|p| (p.id.as_str(), p.service)).collect();
    let mut ready: VecDeque<&str> = VecDeque::new();
    let mut slices = Vec::new();
    let mut next = 0; // index of the next unadmitted arrival
    let mut clock = procs.first().map_or(0, |p| p.arrival);

    admit_arrivals(&procs, &mut next, clock, &mut ready);

    while !ready.is_empty() || next < procs.len() {
        let Some(pid) = ready.pop_front() else {
            let arrival = procs[next].arrival;
            if clock < arrival {
                slices.push(Slice::idle(clock, arrival));
            }
            clock = arrival;
            admit_arrivals(&procs, &mut next, clock, &mut ready);
            continue;
        };

        let left = remaining.get(pid).copied().unwrap_or(0);
        let run = quantum.min(left);
        slices.push(Slice::process(pid, clock, clock + run));
        clock += run;

        // New arrivals go ahead of the preempted process
        admit_arrivals(&procs, &mut next, clock, &mut ready);

        let left = left - run;
        remaining.insert(pid, left);
        if left > 0 {
            trace!(pid = %pid, clock = clock, left = left, "preempted");
            ready.push_back(pid);
        } else {
            trace!(pid = %pid, clock = clock, "completed");
        }
    }

    slices
}

/// Enqueues, in arrival order, every process with `arrival <= clock`
/// starting from the cursor `next`.
fn admit_arrivals<'a>(
    procs: &[&'a Process],
    next: &mut usize,
    clock: i64,
    ready: &mut VecDeque<&'a str>,
) {
    while *next < procs.len() && procs[*next].arrival <= clock {
        let p: &'a Process = procs[*next];
        ready.push_back(p.id.as_str());
        *next += 1;
    }
}

//! CPU scheduling simulator.
//!
//! Simulates non-preemptive FIFO and preemptive Round Robin over a fixed
//! set of processes, producing a Gantt sequence (who held the processor
//! when, idle gaps included) and per-process waiting/turnaround metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Slice`, `Owner`, timeline queries
//! - **`scheduler`**: `schedule_fifo`, `schedule_rr`, `compute_metrics`, and
//!   whole simulation runs (`Algorithm`, `SimulationRequest`, `simulate`)
//! - **`validation`**: Input integrity checks (duplicate IDs, bad times, quantum)
//! - **`workload`**: Demo and random process sets
//!
//! # Architecture
//!
//! Every operation is a pure, synchronous function over immutable inputs.
//! Nothing is cached between runs; changing any parameter means simulating
//! again from scratch. Logging goes through `tracing`; the crate never
//! installs a subscriber.
//!
//! # Example
//!
//! ```
//! use proc_sched::models::Process;
//! use proc_sched::scheduler::{compute_metrics, schedule_rr};
//!
//! let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
//! let slices = schedule_rr(&procs, 2);
//! let metrics = compute_metrics(&slices, &procs);
//! assert_eq!(metrics.row("P1").unwrap().turnaround, 8);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

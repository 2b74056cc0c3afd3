//! CPU schedulers and completion metrics.
//!
//! Every scheduler is a pure function from a process set to a Gantt
//! sequence: ordered, contiguous slices with idle gaps made explicit.
//!
//! # Algorithms
//!
//! | Scheduler | Preemptive | Order |
//! |-----------|-----------|-------|
//! | [`schedule_fifo`] | No | Arrival, ties by id |
//! | [`schedule_rr`] | Yes (quantum) | Ready queue, arrivals before the preempted process |
//!
//! # Metrics
//!
//! [`compute_metrics`] derives start, finish, turnaround and waiting time
//! for each process, plus averages.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fifo;
mod metrics;
mod round_robin;
mod simulation;

pub use fifo::schedule_fifo;
pub use metrics::{compute_metrics, format_time, MetricRow, SimulationMetrics};
pub use round_robin::schedule_rr;
pub use simulation::{
    compare, simulate, simulate_checked, Algorithm, Simulation, SimulationRequest,
    DEFAULT_QUANTUM,
};

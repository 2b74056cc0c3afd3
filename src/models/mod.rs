//! CPU scheduling domain models.
//!
//! Provides the shared vocabulary of the simulator: the processes that
//! compete for a single processor and the slices that record who held it.
//!
//! # Domain Mappings
//!
//! | proc-sched | Operating System | Classroom Gantt |
//! |------------|------------------|-----------------|
//! | Process | Task/Thread | Row in the process table |
//! | Slice | Dispatch interval | Colored bar segment |
//! | Owner::Idle | Idle task | Grey segment |

mod process;
mod slice;
mod timeline;

pub(crate) use process::sorted_by_arrival;
pub use process::Process;
pub use slice::{Owner, Slice, IDLE_LABEL};
pub use timeline::{
    cpu_utilization, idle_time, is_contiguous, service_by_owner, timeline_span, TimelineSpan,
};

//! Execution slice model.
//!
//! A slice is a contiguous interval during which exactly one entity, a
//! process or the idle state, holds the processor. A scheduler's output is
//! an ordered, gap-free sequence of slices (a Gantt sequence).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for idle slices when displayed.
pub const IDLE_LABEL: &str = "IDLE";

/// Who holds the processor during a slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Owner {
    /// No process is ready; the processor idles.
    Idle,
    /// The process with the given id runs.
    Process(String),
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Idle => f.write_str(IDLE_LABEL),
            Owner::Process(id) => f.write_str(id),
        }
    }
}

/// A contiguous interval of processor ownership, `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Owner of the processor during this interval.
    pub owner: Owner,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a slice owned by the given process.
    pub fn process(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            owner: Owner::Process(id.into()),
            start,
            end,
        }
    }

    /// Creates an idle slice.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            owner: Owner::Idle,
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the processor is idle during this slice.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.owner, Owner::Idle)
    }

    /// Owning process id, or `None` for idle slices.
    pub fn process_id(&self) -> Option<&str> {
        match &self.owner {
            Owner::Process(id) => Some(id),
            Owner::Idle => None,
        }
    }

    /// Whether this slice is owned by the process `id`.
    #[inline]
    pub fn is_owned_by(&self, id: &str) -> bool {
        self.process_id() == Some(id)
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}→{})", self.owner, self.start, self.end)
    }
}

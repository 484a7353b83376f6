//! Engine lifecycle state.

use std::fmt;

/// The three states an [`crate::Engine`] instance can be in.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Lifecycle {
    Idle,
    Running,
    Completed,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lifecycle::Idle => "IDLE",
            Lifecycle::Running => "RUNNING",
            Lifecycle::Completed => "COMPLETED",
        };
        f.write_str(s)
    }
}

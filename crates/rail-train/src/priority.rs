//! Train priority class.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dispatch priority, also used to derive a train's nominal line speed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Priority {
    Express,
    Regional,
    Freight,
}

impl Priority {
    /// Nominal speed in km/h, used absent a block speed restriction.
    pub fn nominal_speed_kmh(self) -> f64 {
        match self {
            Priority::Express => 100.0,
            Priority::Regional => 70.0,
            Priority::Freight => 60.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Express => "EXPRESS",
            Priority::Regional => "REGIONAL",
            Priority::Freight => "FREIGHT",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

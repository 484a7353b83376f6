//! Per-block occupancy, issue state, and headway bookkeeping.

use std::fmt;

use rail_core::{BlockIdx, SimTime, TrainIdx};

/// Why a block is currently unusable.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum IssueKind {
    Blocked,
    SignalFailure,
    Maintenance,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IssueKind::Blocked => "BLOCKED",
            IssueKind::SignalFailure => "SIGNAL_FAILURE",
            IssueKind::Maintenance => "MAINTENANCE",
        };
        f.write_str(s)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct BlockIssue {
    pub kind: IssueKind,
    pub since: SimTime,
}

/// Structure-of-Arrays dynamic block state: occupancy, active issue, and
/// last-exit time (for headway enforcement), indexed by `BlockIdx`.
pub struct BlockOccupancy {
    occupied_by: Vec<TrainIdx>,
    issue: Vec<Option<BlockIssue>>,
    last_exit_time: Vec<Option<SimTime>>,
}

impl BlockOccupancy {
    pub fn new(block_count: usize) -> Self {
        Self {
            occupied_by: vec![TrainIdx::INVALID; block_count],
            issue: vec![None; block_count],
            last_exit_time: vec![None; block_count],
        }
    }

    #[inline]
    pub fn is_free(&self, block: BlockIdx) -> bool {
        self.occupied_by[block.index()] == TrainIdx::INVALID
    }

    #[inline]
    pub fn occupant(&self, block: BlockIdx) -> Option<TrainIdx> {
        let t = self.occupied_by[block.index()];
        (t != TrainIdx::INVALID).then_some(t)
    }

    #[inline]
    pub fn issue(&self, block: BlockIdx) -> Option<&BlockIssue> {
        self.issue[block.index()].as_ref()
    }

    #[inline]
    pub fn has_issue(&self, block: BlockIdx) -> bool {
        self.issue[block.index()].is_some()
    }

    #[inline]
    pub fn last_exit_time(&self, block: BlockIdx) -> Option<SimTime> {
        self.last_exit_time[block.index()]
    }

    /// Occupy `block` for `train`. Caller must have checked `is_free` first.
    pub fn occupy(&mut self, block: BlockIdx, train: TrainIdx) {
        self.occupied_by[block.index()] = train;
    }

    /// Vacate `block`, recording `now` as its last-exit time for headway
    /// enforcement on the next entering train.
    pub fn vacate(&mut self, block: BlockIdx, now: SimTime) {
        self.occupied_by[block.index()] = TrainIdx::INVALID;
        self.last_exit_time[block.index()] = Some(now);
    }

    pub fn set_issue(&mut self, block: BlockIdx, kind: IssueKind, since: SimTime) {
        self.issue[block.index()] = Some(BlockIssue { kind, since });
    }

    pub fn clear_issue(&mut self, block: BlockIdx) {
        self.issue[block.index()] = None;
    }

    /// `true` if headway has elapsed since `block`'s last exit, or the block
    /// has never been exited. `headway_sec == 0` disables the check.
    pub fn headway_elapsed(&self, block: BlockIdx, now: SimTime, headway_sec: f64) -> bool {
        if headway_sec <= 0.0 {
            return true;
        }
        match self.last_exit_time(block) {
            Some(last) => now.since(last) >= headway_sec,
            None => true,
        }
    }

    pub fn block_count(&self) -> usize {
        self.occupied_by.len()
    }
}

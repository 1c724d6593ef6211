//! Execution timeline model.
//!
//! The output of a policy run: a sequence of execution blocks, each
//! recording that one process occupied the CPU over a half-open interval.
//! Blocks never overlap; idle gaps are simply time not covered by any
//! block. Policies append blocks in emission order, which may or may not
//! be start-sorted — consumers use [`Timeline::sorted`] when order matters.

use serde::{Deserialize, Serialize};

/// One contiguous stretch of CPU occupancy: `pid` ran over `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionBlock {
    /// First instant of the block (inclusive).
    pub start: i64,
    /// First instant after the block (exclusive).
    pub end: i64,
    /// Process that occupied the CPU.
    pub pid: String,
}

impl ExecutionBlock {
    /// Creates a block for `pid` over `[start, end)`.
    pub fn new(start: i64, end: i64, pid: impl Into<String>) -> Self {
        Self {
            start,
            end,
            pid: pid.into(),
        }
    }

    /// Block length in time units.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An ordered sequence of execution blocks produced by one policy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    blocks: Vec<ExecutionBlock>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block.
    pub fn push(&mut self, block: ExecutionBlock) {
        self.blocks.push(block);
    }

    /// Blocks in emission order.
    pub fn blocks(&self) -> &[ExecutionBlock] {
        &self.blocks
    }

    /// Whether the timeline holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Blocks sorted by start time.
    pub fn sorted(&self) -> Vec<ExecutionBlock> {
        let mut blocks = self.blocks.clone();
        blocks.sort_by_key(|b| b.start);
        blocks
    }

    /// Latest end time across all blocks, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.blocks.iter().map(|b| b.end).max().unwrap_or(0)
    }

    /// Number of CPU handoffs: adjacent start-sorted block pairs naming
    /// different processes. Pairs separated by an idle gap count too.
    pub fn context_switches(&self) -> usize {
        let sorted = self.sorted();
        sorted
            .windows(2)
            .filter(|pair| pair[0].pid != pair[1].pid)
            .count()
    }
}

impl FromIterator<ExecutionBlock> for Timeline {
    fn from_iter<I: IntoIterator<Item = ExecutionBlock>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

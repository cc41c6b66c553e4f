//! Search configuration: which room to start from and which to reach.

use maze_core::Cell;
use maze_paths::manhattan;

use crate::rooms::{GOAL, START};

/// Start and goal rooms for one search. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub start: Cell,
    pub goal: Cell,
}

impl SearchConfig {
    pub const fn new(start: Cell, goal: Cell) -> Self {
        Self { start, goal }
    }

    /// Whether `c` is the goal room.
    #[inline]
    pub fn is_goal(&self, c: Cell) -> bool {
        c == self.goal
    }

    /// Manhattan distance from `c` to the goal room.
    #[inline]
    pub fn heuristic(&self, c: Cell) -> i32 {
        manhattan(c, self.goal)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(START, GOAL)
    }
}

//! Maze — the shortest route through a fixed 4x4 maze of rooms.

pub mod config;
pub mod report;
pub mod rooms;

use maze_core::Cell;
use maze_paths::{DoorMap, astar_path};

pub use config::SearchConfig;

/// Find the shortest route from `cfg.start` to `cfg.goal` through `doors`.
///
/// Returns an empty path when the goal cannot be reached.
pub fn solve(doors: &DoorMap, cfg: &SearchConfig) -> Vec<Cell> {
    astar_path(doors, cfg.start, cfg.goal)
}

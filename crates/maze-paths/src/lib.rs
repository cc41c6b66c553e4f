//! Search algorithms for door-connected grid mazes.
//!
//! Rooms are [`Cell`](maze_core::Cell)s and moves follow explicit, possibly
//! one-way doors held in a [`DoorMap`]. Every move costs one step.
//!
//! - **A\*** shortest-path search ([`astar_path`])
//! - **BFS** unit-cost distance maps ([`bfs_map`], [`bfs_distance`])
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod bfs;
mod distance;
mod doors;
mod frontier;
mod traits;

pub use astar::{astar_path, steps};
pub use bfs::{bfs_distance, bfs_map};
pub use distance::manhattan;
pub use doors::{DoorError, DoorMap};
pub use frontier::PathNode;
pub use traits::{AstarPather, Pather};

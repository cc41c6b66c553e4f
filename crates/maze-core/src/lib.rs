//! **maze-core** — value types shared by the maze crates.
//!
//! A maze is a rectangle of rooms. Each room is addressed by a [`Cell`] and
//! the rectangle itself by a [`Bounds`].

pub mod geom;

pub use geom::{Bounds, BoundsIter, Cell};

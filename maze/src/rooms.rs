//! The fixed maze: a 4x4 block of rooms and the doors between them.

use maze_core::{Bounds, Cell};
use maze_paths::{DoorError, DoorMap};

/// Width and height of the maze in rooms.
pub const SIZE: i32 = 4;

/// Room the search starts from.
pub const START: Cell = Cell::new(0, 3);

/// Room the search is trying to reach.
pub const GOAL: Cell = Cell::new(3, 0);

/// Open doors leading out of each room, in the order they are tried.
pub const OPEN_DOORS: &[((i32, i32), &[(i32, i32)])] = &[
    ((0, 3), &[(1, 3)]),
    ((1, 3), &[(0, 3), (2, 3)]),
    ((2, 3), &[(1, 3), (2, 2), (3, 3)]),
    ((3, 3), &[(2, 3), (3, 2)]),
    //
    ((0, 2), &[(1, 2), (0, 1)]),
    ((1, 2), &[(0, 2), (2, 2)]),
    ((2, 2), &[(1, 2), (2, 3)]),
    ((3, 2), &[(3, 3)]),
    //
    ((0, 1), &[(1, 1), (0, 2), (0, 0)]),
    ((1, 1), &[(0, 1), (2, 1)]),
    ((2, 1), &[(1, 1), (3, 1)]),
    ((3, 1), &[(2, 1), (3, 0)]),
    //
    ((0, 0), &[(0, 1)]),
    ((1, 0), &[(2, 0)]),
    ((2, 0), &[(1, 0), (3, 0)]),
    ((3, 0), &[(2, 0), (3, 1)]),
];

/// The bounds every room lies in.
pub fn bounds() -> Bounds {
    Bounds::new(0, 0, SIZE, SIZE)
}

/// Build the door map for the fixed maze.
pub fn build() -> Result<DoorMap, DoorError> {
    DoorMap::new(
        bounds(),
        OPEN_DOORS
            .iter()
            .map(|&(room, doors)| (room, doors.iter().copied())),
    )
}

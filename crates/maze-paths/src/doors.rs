//! The adjacency relation of a maze: which rooms open onto which.

use std::collections::BTreeMap;
use std::fmt;

use maze_core::{Bounds, Cell};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather};

/// Fixed mapping from each room to the rooms reachable through its open
/// doors, in declaration order.
///
/// Doors are one-way: a door from `a` to `b` says nothing about `b` to `a`.
/// The map is validated once on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoorMap {
    bounds: Bounds,
    rooms: BTreeMap<Cell, Vec<Cell>>,
}

impl DoorMap {
    /// Build a door map from `(room, doors)` pairs.
    ///
    /// Every room and door target must lie inside `bounds`, every door must
    /// join two cardinal neighbours, and every door target must itself be
    /// declared as a room.
    pub fn new<I, C, N, D>(bounds: Bounds, rooms: I) -> Result<Self, DoorError>
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<Cell>,
        N: IntoIterator<Item = D>,
        D: Into<Cell>,
    {
        let mut map: BTreeMap<Cell, Vec<Cell>> = BTreeMap::new();
        let mut declared = Vec::new();

        for (room, doors) in rooms {
            let room = room.into();
            if !bounds.contains(room) {
                return Err(DoorError::OutOfBounds(room));
            }
            if map.contains_key(&room) {
                return Err(DoorError::DuplicateRoom(room));
            }
            let mut targets = Vec::new();
            for to in doors {
                let to = to.into();
                if !bounds.contains(to) {
                    return Err(DoorError::OutOfBounds(to));
                }
                if !room.is_cardinal_neighbor(to) {
                    return Err(DoorError::NotAdjacent { from: room, to });
                }
                if targets.contains(&to) {
                    return Err(DoorError::DuplicateDoor { from: room, to });
                }
                targets.push(to);
            }
            map.insert(room, targets);
            declared.push(room);
        }

        // Second pass in declaration order so the reported error is stable.
        for from in declared {
            for &to in &map[&from] {
                if !map.contains_key(&to) {
                    return Err(DoorError::UnknownNeighbor { from, to });
                }
            }
        }

        let dm = Self { bounds, rooms: map };
        log::debug!(
            "door map: {} rooms, {} doors in {}",
            dm.rooms.len(),
            dm.door_count(),
            dm.bounds
        );
        Ok(dm)
    }

    /// The rectangle every room lies in.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Rooms reachable in one move from `c`, in declaration order.
    ///
    /// A cell with no entry in the map has no doors, so the result is empty
    /// rather than an error. Searches starting there simply find nothing.
    pub fn neighbors(&self, c: Cell) -> &[Cell] {
        self.rooms.get(&c).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `c` is a declared room.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.rooms.contains_key(&c)
    }

    /// Whether a door leads from `from` to `to`.
    pub fn is_door(&self, from: Cell, to: Cell) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Iterate over all declared rooms in coordinate order.
    pub fn rooms(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rooms.keys().copied()
    }

    /// Number of declared rooms.
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether no room is declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Total number of one-way doors.
    pub fn door_count(&self) -> usize {
        self.rooms.values().map(Vec::len).sum()
    }

    /// Whether every consecutive pair of `path` is joined by a door.
    ///
    /// Empty and single-cell paths are trivially walkable.
    pub fn is_walk(&self, path: &[Cell]) -> bool {
        path.windows(2).all(|w| self.is_door(w[0], w[1]))
    }
}

impl Pather for DoorMap {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend_from_slice(DoorMap::neighbors(self, c));
    }
}

impl AstarPather for DoorMap {
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}

/// Errors that can occur when building a [`DoorMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoorError {
    /// A room or door target lies outside the maze bounds.
    OutOfBounds(Cell),
    /// The same room was declared twice.
    DuplicateRoom(Cell),
    /// The same door was listed twice for one room.
    DuplicateDoor { from: Cell, to: Cell },
    /// A door joins two cells that are not one axis-aligned step apart.
    NotAdjacent { from: Cell, to: Cell },
    /// A door leads to a cell that has no entry of its own.
    UnknownNeighbor { from: Cell, to: Cell },
}

impl fmt::Display for DoorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "door map: cell {c} is out of bounds"),
            Self::DuplicateRoom(c) => write!(f, "door map: room {c} declared twice"),
            Self::DuplicateDoor { from, to } => {
                write!(f, "door map: door {from} -> {to} listed twice")
            }
            Self::NotAdjacent { from, to } => {
                write!(f, "door map: {from} and {to} are not adjacent")
            }
            Self::UnknownNeighbor { from, to } => {
                write!(f, "door map: door {from} -> {to} leads to an undeclared room")
            }
        }
    }
}

impl std::error::Error for DoorError {}

#[cfg(test)]
mod tests {
    use super::*;

    type Table<'a> = &'a [((i32, i32), &'a [(i32, i32)])];

    fn build(bounds: Bounds, table: Table<'_>) -> Result<DoorMap, DoorError> {
        DoorMap::new(
            bounds,
            table.iter().map(|&(room, doors)| (room, doors.iter().copied())),
        )
    }

    const LINE: Table<'static> = &[
        ((0, 0), &[(1, 0)]),
        ((1, 0), &[(2, 0), (0, 0)]),
        ((2, 0), &[]),
    ];

    #[test]
    fn neighbors_keep_declaration_order() {
        let dm = build(Bounds::new(0, 0, 3, 1), LINE).unwrap();
        assert_eq!(
            dm.neighbors(Cell::new(1, 0)),
            &[Cell::new(2, 0), Cell::new(0, 0)]
        );
        assert_eq!(dm.len(), 3);
        assert_eq!(dm.door_count(), 3);
    }

    #[test]
    fn doors_are_one_way() {
        let dm = build(Bounds::new(0, 0, 3, 1), LINE).unwrap();
        assert!(dm.is_door(Cell::new(1, 0), Cell::new(2, 0)));
        assert!(!dm.is_door(Cell::new(2, 0), Cell::new(1, 0)));
    }

    #[test]
    fn unknown_cell_has_no_neighbors() {
        let dm = build(Bounds::new(0, 0, 3, 1), LINE).unwrap();
        assert!(!dm.contains(Cell::new(7, 7)));
        assert!(dm.neighbors(Cell::new(7, 7)).is_empty());

        let mut buf = Vec::new();
        Pather::neighbors(&dm, Cell::new(7, 7), &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn rooms_iterate_in_coordinate_order() {
        let dm = build(
            Bounds::new(0, 0, 2, 2),
            &[((1, 1), &[(0, 1)]), ((0, 1), &[]), ((0, 0), &[])],
        )
        .unwrap();
        let rooms: Vec<_> = dm.rooms().collect();
        assert_eq!(rooms, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]);
    }

    #[test]
    fn is_walk_checks_every_step() {
        let dm = build(Bounds::new(0, 0, 3, 1), LINE).unwrap();
        let a = Cell::new(0, 0);
        let b = Cell::new(1, 0);
        let c = Cell::new(2, 0);
        assert!(dm.is_walk(&[]));
        assert!(dm.is_walk(&[c]));
        assert!(dm.is_walk(&[a, b, c]));
        assert!(!dm.is_walk(&[c, b]));
        assert!(!dm.is_walk(&[a, c]));
    }

    #[test]
    fn estimate_is_manhattan() {
        let dm = build(Bounds::new(0, 0, 3, 1), LINE).unwrap();
        assert_eq!(dm.estimate(Cell::new(0, 0), Cell::new(2, 0)), 2);
    }

    #[test]
    fn rejects_undeclared_neighbor() {
        let err = build(Bounds::new(0, 0, 2, 1), &[((0, 0), &[(1, 0)])]).unwrap_err();
        assert_eq!(
            err,
            DoorError::UnknownNeighbor {
                from: Cell::new(0, 0),
                to: Cell::new(1, 0),
            }
        );
    }

    #[test]
    fn rejects_out_of_bounds() {
        let err = build(Bounds::new(0, 0, 2, 1), &[((2, 0), &[])]).unwrap_err();
        assert_eq!(err, DoorError::OutOfBounds(Cell::new(2, 0)));

        let err = build(Bounds::new(0, 0, 2, 1), &[((0, 0), &[(0, -1)])]).unwrap_err();
        assert_eq!(err, DoorError::OutOfBounds(Cell::new(0, -1)));
    }

    #[test]
    fn rejects_duplicate_room() {
        let err = build(
            Bounds::new(0, 0, 2, 1),
            &[((0, 0), &[]), ((1, 0), &[]), ((0, 0), &[])],
        )
        .unwrap_err();
        assert_eq!(err, DoorError::DuplicateRoom(Cell::new(0, 0)));
    }

    #[test]
    fn rejects_duplicate_door() {
        let err = build(
            Bounds::new(0, 0, 2, 1),
            &[((0, 0), &[(1, 0), (1, 0)]), ((1, 0), &[])],
        )
        .unwrap_err();
        assert!(matches!(err, DoorError::DuplicateDoor { .. }));
    }

    #[test]
    fn rejects_diagonal_and_self_doors() {
        let err = build(
            Bounds::new(0, 0, 2, 2),
            &[((0, 0), &[(1, 1)]), ((1, 1), &[])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DoorError::NotAdjacent {
                from: Cell::new(0, 0),
                to: Cell::new(1, 1),
            }
        );

        let err = build(Bounds::new(0, 0, 2, 2), &[((0, 0), &[(0, 0)])]).unwrap_err();
        assert!(matches!(err, DoorError::NotAdjacent { .. }));
    }

    #[test]
    fn error_messages_name_the_cells() {
        let err = DoorError::UnknownNeighbor {
            from: Cell::new(0, 0),
            to: Cell::new(1, 0),
        };
        assert_eq!(
            err.to_string(),
            "door map: door (0,0) -> (1,0) leads to an undeclared room"
        );
    }
}

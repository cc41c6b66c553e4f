use maze_core::Cell;

/// Minimal search interface — provides neighbour enumeration.
pub trait Pather {
    /// Append the cells reachable in one move from `c` into `buf`, in a
    /// stable order. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with an admissible heuristic, as needed by A*.
///
/// Every move is assumed to cost 1.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the number of moves from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}

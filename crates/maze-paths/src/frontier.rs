use std::cmp::Ordering;

use maze_core::Cell;

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Cell,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// A* frontier entry
// ---------------------------------------------------------------------------

/// One discovered-but-not-finalized cell, carrying the path that reached it.
///
/// Invariant: `f == g + estimate(cell, goal)`.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) f: i32,
    pub(crate) g: i32,
    pub(crate) seq: u64,
    pub(crate) cell: Cell,
    pub(crate) path: Vec<Cell>,
}

impl Entry {
    #[inline]
    fn key(&self) -> (i32, i32, u64) {
        (self.f, self.g, self.seq)
    }
}

// `seq` is unique per search, so the key alone is a total order and the
// cell/path payload never takes part in comparisons.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(f: i32, g: i32, seq: u64) -> Entry {
        Entry {
            f,
            g,
            seq,
            cell: Cell::new(seq as i32, 0),
            path: Vec::new(),
        }
    }

    #[test]
    fn heap_pops_lowest_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(5, 1, 0));
        heap.push(entry(3, 2, 1));
        heap.push(entry(4, 0, 2));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.f).collect();
        assert_eq!(order, vec![3, 4, 5]);
    }

    #[test]
    fn equal_f_prefers_lower_g_then_earlier_seq() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(4, 3, 0));
        heap.push(entry(4, 2, 2));
        heap.push(entry(4, 2, 1));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|e| (e.g, e.seq))
            .collect();
        assert_eq!(order, vec![(2, 1), (2, 2), (3, 0)]);
    }
}

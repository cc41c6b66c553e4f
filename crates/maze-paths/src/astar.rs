use std::collections::{BinaryHeap, HashSet};

use maze_core::Cell;

use crate::frontier::Entry;
use crate::traits::AstarPather;

/// Compute the shortest path from `from` to `to` using A*.
///
/// Returns the full path (including both endpoints), or an empty vector if
/// `to` cannot be reached. Among equally short paths the result is fixed:
/// ties on estimated total cost go to the entry with the smaller cost so far,
/// then to the one discovered first.
///
/// Each call owns its frontier and visited set; nothing survives the call.
pub fn astar_path<P: AstarPather>(pather: &P, from: Cell, to: Cell) -> Vec<Cell> {
    if from == to {
        return vec![from];
    }

    let mut open: BinaryHeap<Entry> = BinaryHeap::new();
    let mut visited: HashSet<Cell> = HashSet::new();
    let mut seq: u64 = 0;

    open.push(Entry {
        f: pather.estimate(from, to),
        g: 0,
        seq,
        cell: from,
        path: vec![from],
    });
    seq += 1;

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    while let Some(current) = open.pop() {
        // Stale duplicate of an already finalized cell.
        if !visited.insert(current.cell) {
            continue;
        }
        log::trace!(
            "astar: pop {} f={} g={}",
            current.cell,
            current.f,
            current.g
        );

        if current.cell == to {
            log::debug!(
                "astar: {from} -> {to} in {} steps, {expanded} expansions",
                current.g
            );
            return current.path;
        }
        expanded += 1;

        nbuf.clear();
        pather.neighbors(current.cell, &mut nbuf);

        let g = current.g + 1;
        for &n in nbuf.iter() {
            if visited.contains(&n) {
                continue;
            }
            let mut path = Vec::with_capacity(current.path.len() + 1);
            path.extend_from_slice(&current.path);
            path.push(n);
            open.push(Entry {
                f: g + pather.estimate(n, to),
                g,
                seq,
                cell: n,
                path,
            });
            seq += 1;
        }
    }

    log::debug!("astar: {from} -> {to} unreachable after {expanded} expansions");
    Vec::new()
}

/// Number of moves in `path`; zero for an empty or single-cell path.
#[inline]
pub fn steps(path: &[Cell]) -> usize {
    path.len().saturating_sub(1)
}

use std::collections::{HashMap, VecDeque};

use maze_core::Cell;

use crate::frontier::PathNode;
use crate::traits::Pather;

/// Compute a multi-source breadth-first search distance map.
///
/// Each move has cost 1. Expansion stops when the distance exceeds
/// `max_dist`. Returns every reached cell in discovery order, sources first
/// with cost 0. A source listed more than once is only reported once.
pub fn bfs_map<P: Pather>(pather: &P, sources: &[Cell], max_dist: i32) -> Vec<PathNode> {
    let mut dist: HashMap<Cell, i32> = HashMap::new();
    let mut results = Vec::new();
    let mut queue: VecDeque<Cell> = VecDeque::new();

    for &src in sources {
        if dist.contains_key(&src) {
            continue;
        }
        dist.insert(src, 0);
        queue.push_back(src);
        results.push(PathNode { pos: src, cost: 0 });
    }

    let mut nbuf = Vec::with_capacity(4);

    while let Some(c) = queue.pop_front() {
        let nd = dist[&c] + 1;
        if nd > max_dist {
            continue;
        }

        nbuf.clear();
        pather.neighbors(c, &mut nbuf);

        for &n in nbuf.iter() {
            if dist.contains_key(&n) {
                continue;
            }
            dist.insert(n, nd);
            queue.push_back(n);
            results.push(PathNode { pos: n, cost: nd });
        }
    }

    results
}

/// Number of moves on a shortest path from `from` to `to`, or `None` if `to`
/// cannot be reached.
pub fn bfs_distance<P: Pather>(pather: &P, from: Cell, to: Cell) -> Option<i32> {
    bfs_map(pather, &[from], i32::MAX)
        .into_iter()
        .find(|node| node.pos == to)
        .map(|node| node.cost)
}

//! Breadth-first and depth-first reach queries
//!
//! Both traversals mark vertices in a dense `visited` vector indexed by
//! `VertexId`, so each reachable vertex is reported exactly once. O(V + E).

use crate::domain::graph::ReferralGraph;
use std::collections::VecDeque;
use std::hash::Hash;

/// Vertices reachable from `start`, in breadth-first discovery order.
///
/// Uses a FIFO frontier and a visited set seeded with `start`. Neighbors are
/// enqueued in edge insertion order. An unregistered `start` yields `[start]`.
pub fn breadth_first<V: Eq + Hash + Clone>(graph: &ReferralGraph<V>, start: &V) -> Vec<V> {
    let Some(root) = graph.vertex_id(start) else {
        return vec![start.clone()];
    };

    let mut visited = vec![false; graph.vertex_count()];
    let mut frontier = VecDeque::from([root]);
    let mut order = Vec::new();
    visited[root] = true;

    while let Some(id) = frontier.pop_front() {
        order.push(graph.key(id).clone());
        for &next in graph.out_edges(id) {
            if !visited[next] {
                visited[next] = true;
                frontier.push_back(next);
            }
        }
    }

    order
}

/// Vertices reachable from `start`, in depth-first pre-order.
///
/// Visits a vertex, then descends into each unvisited out-neighbor in edge
/// insertion order before moving to the next one. The explicit stack holds
/// `(vertex, next edge position)` pairs so long referral chains cannot
/// exhaust the call stack. An unregistered `start` yields `[start]`.
pub fn depth_first<V: Eq + Hash + Clone>(graph: &ReferralGraph<V>, start: &V) -> Vec<V> {
    let Some(root) = graph.vertex_id(start) else {
        return vec![start.clone()];
    };

    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![(root, 0usize)];
    let mut order = vec![graph.key(root).clone()];
    visited[root] = true;

    while let Some((id, cursor)) = stack.last_mut() {
        let edges = graph.out_edges(*id);
        let Some(&next) = edges.get(*cursor) else {
            stack.pop();
            continue;
        };
        *cursor += 1;
        if !visited[next] {
            visited[next] = true;
            order.push(graph.key(next).clone());
            stack.push((next, 0));
        }
    }

    order
}

//! Path reconstruction from parent links.

use waygrid_core::{Grid, NodeState, Point};

/// Walk parent links back from `goal` and return the visited positions in
/// start→goal order.
///
/// Interior nodes are marked [`NodeState::Path`]; the endpoints keep their
/// [`NodeState::Start`] / [`NodeState::Goal`] states (the root is restored
/// to `Start`, since expanding it closed it). Only parent links are read,
/// never written, so calling this again on the same finished search yields
/// the identical sequence. Runs in O(path length).
///
/// Returns an empty sequence when `goal` lies outside the grid.
pub fn reconstruct(grid: &mut Grid, goal: Point) -> Vec<Point> {
    let Some(goal_idx) = grid.idx(goal) else {
        return Vec::new();
    };
    let mut path = vec![goal];
    let mut i = goal_idx;
    while let Some(pi) = grid.node(i).parent {
        i = pi;
        path.push(grid.point(i));
        grid.node_mut(i).state = NodeState::Path;
    }
    // The parentless end of the chain is the root.
    if i != goal_idx {
        grid.node_mut(i).state = NodeState::Start;
    }
    path.reverse();
    path
}

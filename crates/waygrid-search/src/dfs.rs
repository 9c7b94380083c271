//! Depth-first search: LIFO expansion.

use waygrid_core::Grid;

use crate::search::Strategy;

/// Depth-first strategy: always expands the most recently discovered node
/// (pop the back, push to the back).
///
/// Tracks no costs and never revisits a seen neighbour, so it gives no
/// shortest-path guarantee, only that a reachable goal is eventually
/// found.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

impl Strategy for Dfs {
    fn label(&self) -> &'static str {
        "dfs"
    }

    fn select(&mut self, open: &mut Vec<usize>) -> Option<usize> {
        open.pop()
    }

    fn discover(&mut self, grid: &mut Grid, curr: usize, nb: usize) {
        grid.node_mut(nb).parent = Some(curr);
    }
}

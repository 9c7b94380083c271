//! Breadth-first search: FIFO expansion.

use waygrid_core::Grid;

use crate::search::Strategy;

/// Breadth-first strategy: expands nodes in discovery order (pop the front,
/// push to the back).
///
/// No costs are tracked: the first visit wins, which already yields a
/// shortest path when every step costs the same. Already-seen neighbours
/// are never revisited.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl Strategy for Bfs {
    fn label(&self) -> &'static str {
        "bfs"
    }

    fn select(&mut self, open: &mut Vec<usize>) -> Option<usize> {
        if open.is_empty() {
            None
        } else {
            Some(open.remove(0))
        }
    }

    fn discover(&mut self, grid: &mut Grid, curr: usize, nb: usize) {
        grid.node_mut(nb).parent = Some(curr);
    }
}

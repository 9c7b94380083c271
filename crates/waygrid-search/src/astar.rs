//! A* search: best-first on `f = g + weight·h`.

use waygrid_core::Grid;

use crate::distance::euclidean;
use crate::search::Strategy;

/// A* strategy: expands the open node with the lowest final cost
/// `f = g + weight·h`, where `h` is the straight-line distance to the goal.
///
/// The heuristic weight is a per-instance knob. The returned path is only
/// guaranteed shortest while `weight·h` never overestimates the true
/// remaining cost; larger weights chase the goal harder at the expense of
/// that guarantee. Unlike [`Dijkstra`](crate::Dijkstra), A* moves a closed
/// node back onto the open list when a cheaper route to it turns up.
#[derive(Debug, Clone)]
pub struct AStar {
    /// Multiplier applied to the heuristic in the final cost.
    pub weight: f64,
}

impl AStar {
    /// A* with the given heuristic weight.
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    /// Recompute the neighbour's heuristic and return the final cost it
    /// would have when reached with accumulated cost `g`.
    fn final_cost(&self, grid: &mut Grid, nb: usize, g: i32) -> f64 {
        let h = euclidean(grid.point(nb), grid.goal_point());
        grid.node_mut(nb).heuristic = h;
        g as f64 + self.weight * h
    }

    fn step_cost(grid: &Grid, curr: usize, nb: usize) -> i32 {
        grid.node(curr).total_cost + grid.node(nb).given_cost
    }
}

impl Default for AStar {
    /// The stock heuristic weight of 10.
    fn default() -> Self {
        Self { weight: 10.0 }
    }
}

impl Strategy for AStar {
    fn label(&self) -> &'static str {
        "astar"
    }

    fn select(&mut self, open: &mut Vec<usize>) -> Option<usize> {
        // `reorder` keeps the list ascending by f, so the head is cheapest.
        if open.is_empty() {
            None
        } else {
            Some(open.remove(0))
        }
    }

    fn discover(&mut self, grid: &mut Grid, curr: usize, nb: usize) {
        let g = Self::step_cost(grid, curr, nb);
        let f = self.final_cost(grid, nb, g);
        let node = grid.node_mut(nb);
        node.total_cost = g;
        node.final_cost = f;
        node.parent = Some(curr);
    }

    fn improve_open(&mut self, grid: &mut Grid, curr: usize, nb: usize) {
        let g = Self::step_cost(grid, curr, nb);
        let f = self.final_cost(grid, nb, g);
        if f < grid.node(nb).final_cost {
            let node = grid.node_mut(nb);
            node.total_cost = g;
            node.final_cost = f;
            node.parent = Some(curr);
        }
    }

    fn reopen_closed(&mut self, grid: &mut Grid, curr: usize, nb: usize) -> bool {
        let g = Self::step_cost(grid, curr, nb);
        let f = self.final_cost(grid, nb, g);
        if f < grid.node(nb).final_cost {
            let node = grid.node_mut(nb);
            node.total_cost = g;
            node.final_cost = f;
            node.parent = Some(curr);
            return true;
        }
        false
    }

    fn reorder(&mut self, open: &mut Vec<usize>, grid: &Grid) {
        // Stable sort: equal costs keep the neighbour visiting order.
        open.sort_by(|&a, &b| grid.node(a).final_cost.total_cmp(&grid.node(b).final_cost));
    }
}

//! Dijkstra search: uniform-cost, lowest accumulated cost first.

use waygrid_core::Grid;

use crate::search::Strategy;

/// Dijkstra strategy: expands the open node with the lowest accumulated
/// cost `g`.
///
/// Open nodes are relaxed when a cheaper route turns up, but a closed node
/// is final: it is never moved back onto the open list, unlike
/// [`AStar`](crate::AStar). On a uniform-cost grid the returned path is
/// always a shortest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Dijkstra {
    fn step_cost(grid: &Grid, curr: usize, nb: usize) -> i32 {
        grid.node(curr).total_cost + grid.node(nb).given_cost
    }
}

impl Strategy for Dijkstra {
    fn label(&self) -> &'static str {
        "dijkstra"
    }

    fn select(&mut self, open: &mut Vec<usize>) -> Option<usize> {
        // `reorder` keeps the list ascending by g, so the head is cheapest.
        if open.is_empty() {
            None
        } else {
            Some(open.remove(0))
        }
    }

    fn discover(&mut self, grid: &mut Grid, curr: usize, nb: usize) {
        let g = Self::step_cost(grid, curr, nb);
        let node = grid.node_mut(nb);
        node.total_cost = g;
        node.parent = Some(curr);
    }

    fn improve_open(&mut self, grid: &mut Grid, curr: usize, nb: usize) {
        let g = Self::step_cost(grid, curr, nb);
        if g < grid.node(nb).total_cost {
            let node = grid.node_mut(nb);
            node.total_cost = g;
            node.parent = Some(curr);
        }
    }

    fn reopen_closed(&mut self, _grid: &mut Grid, _curr: usize, _nb: usize) -> bool {
        // Closed nodes are final here; only A* revisits them.
        false
    }

    fn reorder(&mut self, open: &mut Vec<usize>, grid: &Grid) {
        // Stable sort: equal costs keep the neighbour visiting order.
        open.sort_by_key(|&i| grid.node(i).total_cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Search, Step};
    use crate::{manhattan, reconstruct};
    use waygrid_core::{NodeState, Point};

    #[test]
    fn finds_shortest_detour() {
        let start = Point::new(1, 2);
        let goal = Point::new(3, 2);
        let mut g = Grid::build(5, 5, &[Point::new(2, 2)], start, goal).unwrap();
        let mut s = Search::new(Dijkstra, &g);
        let Step::Found(hit) = s.run(&mut g) else {
            panic!("expected a path");
        };
        let path = reconstruct(&mut g, hit);
        assert_eq!(path.len() - 1, manhattan(start, goal) as usize + 2);
    }

    #[test]
    fn never_reopens_closed_nodes() {
        let mut g = Grid::build(5, 5, &[], Point::new(0, 0), Point::new(4, 4)).unwrap();
        let mut dijkstra = Dijkstra;
        let curr = g.idx(Point::new(1, 1)).unwrap();
        let nb = g.idx(Point::new(1, 2)).unwrap();
        g.node_mut(curr).total_cost = 1;
        g.node_mut(nb).state = NodeState::Closed;
        g.node_mut(nb).total_cost = 9;

        // Even a strictly cheaper route leaves a closed node untouched.
        assert!(!dijkstra.reopen_closed(&mut g, curr, nb));
        assert_eq!(g.node(nb).total_cost, 9);
        assert_eq!(g.node(nb).parent, None);
    }

    #[test]
    fn relaxes_open_nodes() {
        let mut g = Grid::build(5, 5, &[], Point::new(0, 0), Point::new(4, 4)).unwrap();
        let mut dijkstra = Dijkstra;
        let cheap = g.idx(Point::new(1, 1)).unwrap();
        let dear = g.idx(Point::new(3, 3)).unwrap();
        let nb = g.idx(Point::new(2, 2)).unwrap();
        g.node_mut(cheap).total_cost = 1;
        g.node_mut(dear).total_cost = 6;
        g.node_mut(nb).state = NodeState::Open;

        dijkstra.discover(&mut g, dear, nb);
        assert_eq!(g.node(nb).total_cost, 7);
        dijkstra.improve_open(&mut g, cheap, nb);
        assert_eq!(g.node(nb).total_cost, 2);
        assert_eq!(g.node(nb).parent, Some(cheap));
    }
}

//! The [`Grid`] type — exclusive owner of the node arena.
//!
//! A `Grid` is built once per search run from dimensions, an obstacle set,
//! and the start/goal cells, then mutated in place by a search strategy.
//! Rebuilding from scratch is the only way to reset state between runs, so
//! partial progress from an abandoned search can never leak into a new one.

use std::fmt;

use crate::geom::Point;
use crate::node::{Node, NodeState};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-size 2D grid of [`Node`]s with a designated start and goal cell.
///
/// All nodes live in one row-major arena owned by the grid; parent links
/// between nodes are arena indices, so the parent forest is cycle-free by
/// construction. Dimensions are immutable after [`build`](Grid::build).
#[derive(Debug, Clone)]
pub struct Grid {
    nodes: Vec<Node>,
    width: i32,
    height: i32,
    start: usize,
    goal: usize,
}

impl Grid {
    /// Build a grid from dimensions, obstacle positions, and the start and
    /// goal cells.
    ///
    /// Obstacle cells become [`NodeState::Block`] and never leave that
    /// state; obstacle positions outside the grid are ignored. All remaining
    /// cells start as [`NodeState::New`] except the start and goal, which
    /// get their own states.
    ///
    /// Fails with [`GridError::InvalidDimensions`] when either dimension is
    /// not positive, and with [`GridError::InvalidStart`] /
    /// [`GridError::InvalidGoal`] when the position is out of bounds, on an
    /// obstacle, or (for the goal) coincident with the start.
    pub fn build(
        width: i32,
        height: i32,
        obstacles: &[Point],
        start: Point,
        goal: Point,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let mut grid = Self {
            nodes: vec![Node::default(); (width as usize) * (height as usize)],
            width,
            height,
            start: 0,
            goal: 0,
        };
        for &p in obstacles {
            if let Some(i) = grid.idx(p) {
                grid.nodes[i].state = NodeState::Block;
            }
        }
        let Some(si) = grid.idx(start) else {
            return Err(GridError::InvalidStart(start));
        };
        if grid.nodes[si].state == NodeState::Block {
            return Err(GridError::InvalidStart(start));
        }
        let Some(gi) = grid.idx(goal) else {
            return Err(GridError::InvalidGoal(goal));
        };
        if gi == si || grid.nodes[gi].state == NodeState::Block {
            return Err(GridError::InvalidGoal(goal));
        }
        grid.nodes[si].state = NodeState::Start;
        grid.nodes[gi].state = NodeState::Goal;
        grid.start = si;
        grid.goal = gi;
        Ok(grid)
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Convert a `Point` to an arena index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// Convert an arena index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Borrow the node at `idx`.
    #[inline]
    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Mutably borrow the node at `idx`.
    #[inline]
    pub fn node_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    /// Arena index of the start node.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Arena index of the goal node.
    #[inline]
    pub fn goal(&self) -> usize {
        self.goal
    }

    /// Position of the start node.
    #[inline]
    pub fn start_point(&self) -> Point {
        self.point(self.start)
    }

    /// Position of the goal node.
    #[inline]
    pub fn goal_point(&self) -> Point {
        self.point(self.goal)
    }

    /// The state of the cell at `p`, or `None` if `p` is outside the grid.
    ///
    /// This is the per-cell snapshot a renderer polls between search steps.
    #[inline]
    pub fn state_at(&self, p: Point) -> Option<NodeState> {
        self.idx(p).map(|i| self.nodes[i].state)
    }

    /// Lazy iterator over the traversable cardinal neighbours of `p`, in the
    /// fixed order +y, −y, +x, −x, skipping out-of-bounds and
    /// [`NodeState::Block`] cells.
    #[inline]
    pub fn neighbors(&self, p: Point) -> Neighbors<'_> {
        Neighbors {
            grid: self,
            around: p.neighbors_4(),
            next: 0,
        }
    }

    /// Row-major iterator over every `(Point, NodeState)` pair.
    #[inline]
    pub fn iter(&self) -> GridIter<'_> {
        GridIter { grid: self, idx: 0 }
    }
}

// ---------------------------------------------------------------------------
// Neighbors
// ---------------------------------------------------------------------------

/// Iterator over the traversable cardinal neighbours of one cell.
///
/// Yields at most four positions, lazily and in a fixed deterministic order.
/// Created by [`Grid::neighbors`].
pub struct Neighbors<'a> {
    grid: &'a Grid,
    around: [Point; 4],
    next: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while self.next < self.around.len() {
            let p = self.around[self.next];
            self.next += 1;
            match self.grid.state_at(p) {
                Some(NodeState::Block) | None => {}
                Some(_) => return Some(p),
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Row-major iterator over `(Point, NodeState)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    idx: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, NodeState);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.grid.nodes.get(self.idx)?;
        let p = self.grid.point(self.idx);
        self.idx += 1;
        Some((p, node.state))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.grid.nodes.len() - self.idx;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a grid.
///
/// All of them are construction-time and non-recoverable for the given
/// inputs; no search can start on a grid that failed to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A dimension was zero or negative.
    InvalidDimensions { width: i32, height: i32 },
    /// The start position is out of bounds or on an obstacle.
    InvalidStart(Point),
    /// The goal position is out of bounds, on an obstacle, or equal to the
    /// start.
    InvalidGoal(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions {width}x{height} are not positive")
            }
            Self::InvalidStart(p) => write!(f, "invalid start position {p}"),
            Self::InvalidGoal(p) => write!(f, "invalid goal position {p}"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_initializes_states() {
        let g = Grid::build(
            4,
            3,
            &[Point::new(1, 1)],
            Point::new(0, 0),
            Point::new(3, 2),
        )
        .unwrap();
        assert_eq!(g.state_at(Point::new(0, 0)), Some(NodeState::Start));
        assert_eq!(g.state_at(Point::new(3, 2)), Some(NodeState::Goal));
        assert_eq!(g.state_at(Point::new(1, 1)), Some(NodeState::Block));
        assert_eq!(g.state_at(Point::new(2, 1)), Some(NodeState::New));
        assert_eq!(g.state_at(Point::new(4, 0)), None);
    }

    #[test]
    fn build_rejects_bad_dimensions() {
        let err = Grid::build(0, 3, &[], Point::new(0, 0), Point::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDimensions {
                width: 0,
                height: 3
            }
        );
        assert!(Grid::build(3, -1, &[], Point::new(0, 0), Point::new(1, 1)).is_err());
    }

    #[test]
    fn build_rejects_bad_start() {
        let oob = Grid::build(3, 3, &[], Point::new(3, 0), Point::new(1, 1)).unwrap_err();
        assert_eq!(oob, GridError::InvalidStart(Point::new(3, 0)));

        let on_block = Grid::build(
            3,
            3,
            &[Point::new(0, 0)],
            Point::new(0, 0),
            Point::new(1, 1),
        )
        .unwrap_err();
        assert_eq!(on_block, GridError::InvalidStart(Point::new(0, 0)));
    }

    #[test]
    fn build_rejects_bad_goal() {
        let oob = Grid::build(3, 3, &[], Point::new(0, 0), Point::new(0, -1)).unwrap_err();
        assert_eq!(oob, GridError::InvalidGoal(Point::new(0, -1)));

        let on_block = Grid::build(
            3,
            3,
            &[Point::new(2, 2)],
            Point::new(0, 0),
            Point::new(2, 2),
        )
        .unwrap_err();
        assert_eq!(on_block, GridError::InvalidGoal(Point::new(2, 2)));

        let same = Grid::build(3, 3, &[], Point::new(1, 1), Point::new(1, 1)).unwrap_err();
        assert_eq!(same, GridError::InvalidGoal(Point::new(1, 1)));
    }

    #[test]
    fn out_of_bounds_obstacles_are_ignored() {
        let g = Grid::build(
            3,
            3,
            &[Point::new(-1, 0), Point::new(5, 5)],
            Point::new(0, 0),
            Point::new(2, 2),
        )
        .unwrap();
        assert!(g.iter().all(|(_, s)| s != NodeState::Block));
    }

    #[test]
    fn neighbors_follow_fixed_order() {
        let g = Grid::build(5, 5, &[], Point::new(0, 0), Point::new(4, 4)).unwrap();
        let ns: Vec<Point> = g.neighbors(Point::new(2, 2)).collect();
        assert_eq!(
            ns,
            vec![
                Point::new(2, 3),
                Point::new(2, 1),
                Point::new(3, 2),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn neighbors_skip_blocks_and_edges() {
        let g = Grid::build(
            5,
            5,
            &[Point::new(1, 0)],
            Point::new(4, 4),
            Point::new(0, 4),
        )
        .unwrap();
        // Corner cell: two in-bounds neighbours, one of them blocked.
        let ns: Vec<Point> = g.neighbors(Point::new(0, 0)).collect();
        assert_eq!(ns, vec![Point::new(0, 1)]);
    }

    #[test]
    fn idx_point_round_trip() {
        let g = Grid::build(4, 3, &[], Point::new(0, 0), Point::new(3, 2)).unwrap();
        for (p, _) in g.iter() {
            let i = g.idx(p).unwrap();
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.iter().len(), 12);
    }

    #[test]
    fn error_messages_name_the_position() {
        let err = Grid::build(3, 3, &[], Point::new(9, 9), Point::new(1, 1)).unwrap_err();
        assert_eq!(err.to_string(), "invalid start position (9, 9)");
    }
}

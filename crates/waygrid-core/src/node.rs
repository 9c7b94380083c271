//! The per-cell [`Node`] record and its [`NodeState`] state machine.

/// The traversal state of a grid cell. Exactly one state is active at a
/// time.
///
/// `Block` cells never leave that state; the other transitions are driven by
/// the grid at construction time and by the search strategies afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    /// Not yet discovered by the search.
    New,
    /// Discovered and waiting on the open list.
    Open,
    /// Fully expanded; on the closed list.
    Closed,
    /// An obstacle. Never traversable, never transitions.
    Block,
    /// The cell the search starts from.
    Start,
    /// The cell the search is looking for.
    Goal,
    /// Part of the reconstructed path (endpoints excluded).
    Path,
}

/// One grid cell: traversal state, cost fields, and the back-reference used
/// for path reconstruction.
///
/// `parent` is an index into the owning grid's node arena, so parent links
/// form a forest rooted at the start node and can never cycle through
/// ownership. The start node keeps `parent == None` for the whole run.
#[derive(Clone, Debug)]
pub struct Node {
    /// Current traversal state.
    pub state: NodeState,
    /// Uniform edge weight for entering this cell, fixed at 1.
    pub given_cost: i32,
    /// Straight-line distance to the goal, recomputed each time the node is
    /// evaluated.
    pub heuristic: f64,
    /// Accumulated path cost from the start (g).
    pub total_cost: i32,
    /// g + weight·heuristic (f). Only A* reads this.
    pub final_cost: f64,
    /// Arena index of the node this one was reached from.
    pub parent: Option<usize>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            state: NodeState::New,
            given_cost: 1,
            heuristic: 0.0,
            total_cost: 0,
            final_cost: 0.0,
            parent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_node_is_new_and_parentless() {
        let n = Node::default();
        assert_eq!(n.state, NodeState::New);
        assert_eq!(n.given_cost, 1);
        assert_eq!(n.parent, None);
    }
}

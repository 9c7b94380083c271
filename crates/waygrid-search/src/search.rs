//! The shared stepwise search driver.
//!
//! Every strategy expands nodes the same way: pop one node from the open
//! list, dispatch each traversable neighbour on its state, then close the
//! node. The selection rule, the cost updates, the closed-node reopen policy
//! and the open-list ordering differ per variant and live behind the
//! [`Strategy`] trait, so each policy stays explicit and testable on its
//! own.

use waygrid_core::{Grid, NodeState, Point};

/// Outcome of a single [`Search::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One node was expanded; the search can continue.
    Continue,
    /// A neighbour of the expanded node was the goal; the search is over.
    Found(Point),
    /// The open list ran dry without reaching the goal: no path exists.
    Exhausted,
}

/// The per-variant capability set of a search strategy.
///
/// The driver guarantees `discover` is only called for `New` nodes,
/// `improve_open` for `Open` ones and `reopen_closed` for `Closed` ones;
/// state flips and list membership stay with the driver.
pub trait Strategy {
    /// Name used in log output.
    fn label(&self) -> &'static str;

    /// Remove and return the next node to expand from the open list.
    fn select(&mut self, open: &mut Vec<usize>) -> Option<usize>;

    /// First discovery of `nb` via `curr`. Write whatever costs the variant
    /// tracks, plus the parent link.
    fn discover(&mut self, grid: &mut Grid, curr: usize, nb: usize);

    /// `nb` is already on the open list; relax its costs and parent if the
    /// route via `curr` is cheaper. Most variants leave this a no-op.
    fn improve_open(&mut self, _grid: &mut Grid, _curr: usize, _nb: usize) {}

    /// `nb` is closed; return `true` to move it back onto the open list.
    fn reopen_closed(&mut self, _grid: &mut Grid, _curr: usize, _nb: usize) -> bool {
        false
    }

    /// Restore the open list's selection order after a node closes.
    fn reorder(&mut self, _open: &mut Vec<usize>, _grid: &Grid) {}
}

/// Stepwise search over one freshly built [`Grid`].
///
/// Owns the open and closed worklists for a single run; a node is on at
/// most one of the two, and its [`NodeState`] always agrees with its
/// membership. Dropping the search (and the grid) between steps cancels the
/// run with nothing to clean up.
pub struct Search<S> {
    strategy: S,
    open: Vec<usize>,
    closed: Vec<usize>,
    nbuf: Vec<Point>,
    expansions: u32,
    terminal: Option<Step>,
}

impl<S: Strategy> Search<S> {
    /// Start a search over `grid` with the given strategy.
    ///
    /// The open list is seeded with the start node. Its costs stay at zero,
    /// which keeps the root from ever being relaxed or reopened.
    pub fn new(strategy: S, grid: &Grid) -> Self {
        log::debug!(
            "{}: searching {} -> {}",
            strategy.label(),
            grid.start_point(),
            grid.goal_point()
        );
        Self {
            strategy,
            open: vec![grid.start()],
            closed: Vec::new(),
            nbuf: Vec::with_capacity(4),
            expansions: 0,
            terminal: None,
        }
    }

    /// Expand exactly one node.
    ///
    /// Pops a node per the strategy's selection rule, dispatches each
    /// traversable neighbour on its state, then closes the node. Returns
    /// [`Step::Found`] the moment a neighbour is the goal (the goal itself
    /// is never pushed onto the open list) and [`Step::Exhausted`] once the
    /// open list runs dry, which proves no path exists. After a terminal
    /// result, further calls return the same result.
    pub fn step(&mut self, grid: &mut Grid) -> Step {
        if let Some(done) = self.terminal {
            return done;
        }
        let Some(ci) = self.strategy.select(&mut self.open) else {
            log::debug!(
                "{}: exhausted after {} expansions",
                self.strategy.label(),
                self.expansions
            );
            self.terminal = Some(Step::Exhausted);
            return Step::Exhausted;
        };
        self.expansions += 1;
        let cp = grid.point(ci);
        log::trace!("{}: expanding {cp}", self.strategy.label());

        self.nbuf.clear();
        self.nbuf.extend(grid.neighbors(cp));
        for i in 0..self.nbuf.len() {
            let np = self.nbuf[i];
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            match grid.node(ni).state {
                NodeState::Goal => {
                    grid.node_mut(ni).parent = Some(ci);
                    log::debug!(
                        "{}: goal {np} reached after {} expansions",
                        self.strategy.label(),
                        self.expansions
                    );
                    self.terminal = Some(Step::Found(np));
                    return Step::Found(np);
                }
                NodeState::New => {
                    self.strategy.discover(grid, ci, ni);
                    grid.node_mut(ni).state = NodeState::Open;
                    self.open.push(ni);
                }
                NodeState::Open => {
                    self.strategy.improve_open(grid, ci, ni);
                }
                NodeState::Closed => {
                    if self.strategy.reopen_closed(grid, ci, ni) {
                        grid.node_mut(ni).state = NodeState::Open;
                        self.closed.retain(|&c| c != ni);
                        self.open.push(ni);
                    }
                }
                // Start is the parentless root and stays that way; Block
                // never makes it through the neighbour filter.
                NodeState::Start | NodeState::Block | NodeState::Path => {}
            }
        }

        grid.node_mut(ci).state = NodeState::Closed;
        self.closed.push(ci);
        self.strategy.reorder(&mut self.open, grid);
        Step::Continue
    }

    /// Drive [`step`](Search::step) until the search terminates.
    pub fn run(&mut self, grid: &mut Grid) -> Step {
        loop {
            match self.step(grid) {
                Step::Continue => {}
                done => return done,
            }
        }
    }

    /// Number of nodes expanded so far.
    #[inline]
    pub fn expansions(&self) -> u32 {
        self.expansions
    }
}

//! Search strategies for the waygrid pathfinding engine.
//!
//! Four interchangeable strategies share one stepwise driver:
//!
//! - **A\*** best-first search on `f = g + weight·h` ([`AStar`])
//! - **Dijkstra** uniform-cost search ([`Dijkstra`])
//! - **BFS** breadth-first search, FIFO ([`Bfs`])
//! - **DFS** depth-first search, LIFO ([`Dfs`])
//!
//! A [`Search`] expands exactly one node per [`step`](Search::step) call and
//! reports [`Continue`](Step::Continue), [`Found`](Step::Found) or
//! [`Exhausted`](Step::Exhausted), so a caller can interleave rendering with
//! search progress without the engine knowing about timing. After `Found`,
//! [`reconstruct`] turns the parent links into a start→goal position
//! sequence and [`describe`] compresses that into numbered cardinal
//! instructions.
//!
//! BFS and Dijkstra always return a minimum-length path on a uniform-cost
//! grid. A* matches them whenever `weight·h` never overestimates the true
//! remaining cost; larger weights trade optimality for speed. DFS gives no
//! length guarantee, only reachability.

mod astar;
mod bfs;
mod describe;
mod dfs;
mod dijkstra;
mod distance;
mod path;
mod search;

pub use astar::AStar;
pub use bfs::Bfs;
pub use describe::{Direction, Instruction, describe};
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use distance::{euclidean, manhattan};
pub use path::reconstruct;
pub use search::{Search, Step, Strategy};

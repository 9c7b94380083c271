//! **waygrid-core** — node and grid model for the waygrid pathfinding engine.
//!
//! This crate provides the data model shared by every search strategy: the
//! [`Point`] geometry primitive, the per-cell [`Node`] record with its
//! [`NodeState`] state machine, and the [`Grid`] arena that exclusively owns
//! all nodes of one search run.
//!
//! A `Grid` is built once per run from dimensions, an obstacle set, and the
//! start/goal cells; strategies mutate node state and costs in place. The
//! per-cell state snapshot ([`Grid::state_at`], [`Grid::iter`]) is the only
//! surface a renderer needs.

pub mod geom;
pub mod grid;
pub mod node;

pub use geom::Point;
pub use grid::{Grid, GridError, Neighbors};
pub use node::{Node, NodeState};

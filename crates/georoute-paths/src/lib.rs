//! Search strategies for geographic route finding.
//!
//! This crate provides five interchangeable graph-search algorithms over a
//! fixed set of named geographic locations:
//!
//! - **Breadth-first** ([`Router::bfs_path`]) — fewest stops
//! - **Depth-first** ([`Router::dfs_path`]) — no guarantee
//! - **Iterative-deepening depth-first** ([`Router::iddfs_path`]) — fewest
//!   stops with a DFS memory profile
//! - **Best-first / greedy** ([`Router::greedy_path`]) — heuristic only,
//!   no guarantee
//! - **A\*** ([`Router::astar_path`]) — shortest total distance
//!
//! All algorithms operate through [`Router`], which owns and reuses internal
//! arenas so that repeated queries incur no allocations after warm-up, and
//! are dispatched uniformly through [`search`] with a [`Strategy`] selector.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, ID-DFS |
//! | [`WeightedPather`] : [`Pather`] | route distance totals |
//! | [`AstarPather`] : [`WeightedPather`] | best-first, A* |

mod astar;
mod bestfirst;
mod bfs;
mod dfs;
mod iddfs;
mod report;
mod router;
mod strategy;
mod traits;

pub use report::RouteReport;
pub use router::Router;
pub use strategy::{Strategy, SearchResult, route_distance, search};
pub use traits::{AstarPather, Pather, WeightedPather};

//! **georoute-core** — Geographic route finding (core types).
//!
//! This crate provides the foundational types used across the *georoute*
//! ecosystem: geographic coordinates with great-circle distance, the
//! interned location table, the undirected adjacency graph, and the shared
//! error taxonomy.
//!
//! All of it is loaded once at startup and shared read-only by every search;
//! nothing here mutates after construction.

pub mod coord;
pub mod error;
pub mod graph;
pub mod table;

pub use coord::{Coord, EARTH_RADIUS_KM};
pub use error::SearchError;
pub use graph::AdjacencyGraph;
pub use table::{LocationId, LocationTable};

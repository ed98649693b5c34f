//! The undirected adjacency graph over location ids.

use crate::table::LocationId;

/// Undirected neighbor relation between locations.
///
/// Every inserted edge is stored in both directions, so symmetry holds by
/// construction regardless of how the input lists edges. Neighbor lists keep
/// insertion order, and duplicate edges in the input are preserved as
/// duplicate entries (harmless to correctness; the visited set keeps any
/// search from expanding a node twice).
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    edges: Vec<Vec<LocationId>>,
}

impl AdjacencyGraph {
    /// Create a graph over `len` locations with no edges.
    pub fn new(len: usize) -> Self {
        Self {
            edges: vec![Vec::new(); len],
        }
    }

    /// Insert an undirected edge between `a` and `b`.
    pub fn add_edge(&mut self, a: LocationId, b: LocationId) {
        self.edges[a.index()].push(b);
        self.edges[b.index()].push(a);
    }

    /// The neighbors of a location, in insertion order. Empty for isolated
    /// locations.
    #[inline]
    pub fn neighbors(&self, id: LocationId) -> &[LocationId] {
        &self.edges[id.index()]
    }

    /// Number of locations the graph was sized for.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no locations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of directed edge entries (twice the undirected count).
    pub fn edge_entries(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: LocationId = LocationId(0);
    const B: LocationId = LocationId(1);
    const C: LocationId = LocationId(2);

    #[test]
    fn edges_are_symmetric() {
        let mut g = AdjacencyGraph::new(3);
        g.add_edge(A, B);
        g.add_edge(B, C);
        assert!(g.neighbors(A).contains(&B));
        assert!(g.neighbors(B).contains(&A));
        assert!(g.neighbors(B).contains(&C));
        assert!(g.neighbors(C).contains(&B));
        assert_eq!(g.neighbors(C).len(), 1);
    }

    #[test]
    fn isolated_location_has_no_neighbors() {
        let g = AdjacencyGraph::new(2);
        assert!(g.neighbors(A).is_empty());
        assert_eq!(g.edge_entries(), 0);
    }

    #[test]
    fn duplicate_edges_are_preserved() {
        let mut g = AdjacencyGraph::new(2);
        g.add_edge(A, B);
        g.add_edge(A, B);
        assert_eq!(g.neighbors(A), &[B, B]);
        assert_eq!(g.neighbors(B), &[A, A]);
        assert_eq!(g.edge_entries(), 4);
    }

    #[test]
    fn neighbor_order_is_insertion_order() {
        let mut g = AdjacencyGraph::new(3);
        g.add_edge(B, C);
        g.add_edge(B, A);
        assert_eq!(g.neighbors(B), &[C, A]);
    }
}

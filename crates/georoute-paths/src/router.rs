use georoute_core::LocationId;

// ---------------------------------------------------------------------------
// Internal node arena shared by all searches
// ---------------------------------------------------------------------------

/// Sentinel parent index meaning "search origin".
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Node {
    /// Accumulated path cost (A*).
    pub(crate) g: f64,
    /// Depth at which the node was last expanded (ID-DFS).
    pub(crate) depth: u32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            depth: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry for the priority-queue searches, ordered by `f` for use
/// in `BinaryHeap`.
///
/// Ties on `f` break by insertion sequence: the entry pushed first pops
/// first. This makes best-first and A* fully deterministic for a fixed
/// graph and neighbor order.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, earliest seq.
        other
            .f
            .total_cmp(&self.f)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Central coordinator for route searches over a fixed location set.
///
/// `Router` owns the per-node arena (parent pointers, visit generations,
/// costs) and scratch buffers, so that repeated queries incur no
/// allocations after the first use. Visit state is invalidated lazily by
/// bumping a generation counter rather than clearing the arena.
///
/// One search runs at a time; the arena holds the state of the most recent
/// search only.
pub struct Router {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) nbuf: Vec<LocationId>,
    pub(crate) expanded: usize,
}

impl Router {
    /// Create a router for a location set of the given size.
    pub fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::default(); len],
            generation: 0,
            nbuf: Vec::with_capacity(8),
            expanded: 0,
        }
    }

    /// Replace the location-set size, reallocating the arena only when it
    /// grows beyond current capacity. Shrinking keeps the allocation and
    /// relies on generation bumps to invalidate stale entries.
    pub fn resize(&mut self, len: usize) {
        if len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }
        self.nodes.clear();
        self.nodes.resize(len, Node::default());
        self.generation = 0;
    }

    /// Number of locations the router is sized for.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the router is sized for zero locations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes expanded by the most recent search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Start a fresh search: bump the generation so every node reads as
    /// unvisited, and zero the expansion counter.
    pub(crate) fn begin(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.expanded = 0;
        self.generation
    }

    /// Walk parent pointers back from `goal` and return the path in
    /// start-to-goal order.
    pub(crate) fn reconstruct(&self, goal: usize) -> Vec<LocationId> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(LocationId(ci as u32));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_smaller_preserves_capacity() {
        let mut r = Router::new(20);
        let before = r.generation;
        r.resize(5);
        assert_eq!(r.nodes.len(), 20);
        assert!(r.generation > before);
    }

    #[test]
    fn resize_larger_reallocates() {
        let mut r = Router::new(5);
        r.resize(20);
        assert_eq!(r.nodes.len(), 20);
        assert_eq!(r.generation, 0);
    }

    #[test]
    fn heap_pops_smallest_f_first() {
        use std::collections::BinaryHeap;
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 3.5, seq: 0 });
        heap.push(NodeRef { idx: 1, f: 1.25, seq: 1 });
        heap.push(NodeRef { idx: 2, f: 2.0, seq: 2 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn heap_breaks_ties_by_insertion_order() {
        use std::collections::BinaryHeap;
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 7, f: 1.0, seq: 0 });
        heap.push(NodeRef { idx: 3, f: 1.0, seq: 1 });
        heap.push(NodeRef { idx: 9, f: 1.0, seq: 2 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![7, 3, 9]);
    }
}

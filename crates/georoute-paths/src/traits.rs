use georoute_core::LocationId;

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `node` into `buf`. The caller clears `buf`
    /// before calling. Order must be stable for a fixed input graph.
    fn neighbors(&self, node: LocationId, buf: &mut Vec<LocationId>);
}

/// Pather with positive-cost edges.
///
/// For geographic routing the cost of an edge is always the great-circle
/// distance between its endpoints, never a stored weight.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`, in kilometers.
    /// Must be > 0 for distinct locations.
    fn cost(&self, from: LocationId, to: LocationId) -> f64;
}

/// Full informed-search pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of remaining distance from `from` to `to`.
    /// Must never overestimate the true cost along graph edges
    /// (admissible); straight-line geographic distance qualifies.
    fn estimate(&self, from: LocationId, to: LocationId) -> f64;
}

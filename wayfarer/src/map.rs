//! The loaded map: location table plus adjacency graph, wired into the
//! search traits.

use std::path::Path;

use georoute_core::{AdjacencyGraph, LocationId, LocationTable, SearchError};
use georoute_paths::{AstarPather, Pather, WeightedPather};

use crate::load::{self, LoadError};

/// Everything a search needs: coordinates and neighbor relation, loaded
/// once and read-only from then on.
pub struct RouteMap {
    pub table: LocationTable,
    pub graph: AdjacencyGraph,
}

impl RouteMap {
    /// Load a map from a coordinates CSV and an adjacency list file.
    pub fn load(coordinates: &Path, adjacencies: &Path) -> Result<Self, LoadError> {
        let table = load::read_locations(coordinates)?;
        let graph = load::read_adjacencies(adjacencies, &table)?;
        Ok(Self { table, graph })
    }

    /// Resolve a user-supplied name to a location id. This is the only
    /// place an unknown name can surface; past it, ids are always valid.
    pub fn resolve(&self, name: &str) -> Result<LocationId, SearchError> {
        self.table
            .id(name)
            .ok_or_else(|| SearchError::UnknownLocation(name.to_owned()))
    }
}

impl Pather for RouteMap {
    fn neighbors(&self, node: LocationId, buf: &mut Vec<LocationId>) {
        buf.extend_from_slice(self.graph.neighbors(node));
    }
}

impl WeightedPather for RouteMap {
    fn cost(&self, from: LocationId, to: LocationId) -> f64 {
        self.table.distance_km(from, to)
    }
}

impl AstarPather for RouteMap {
    fn estimate(&self, from: LocationId, to: LocationId) -> f64 {
        self.table.distance_km(from, to)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use georoute_core::Coord;
    use georoute_paths::{Router, Strategy, search};

    use super::*;

    fn sample_map() -> RouteMap {
        let mut table = LocationTable::new();
        let a = table.insert("Anthony", Coord::new(37.1536, -98.0312));
        let h = table.insert("Harper", Coord::new(37.2836, -98.0262));
        let w = table.insert("Wichita", Coord::new(37.6872, -97.3301));
        let mut graph = AdjacencyGraph::new(table.len());
        graph.add_edge(a, h);
        graph.add_edge(h, w);
        RouteMap { table, graph }
    }

    #[test]
    fn resolve_known_and_unknown() {
        let map = sample_map();
        assert!(map.resolve("Harper").is_ok());
        let err = map.resolve("Atlantis").unwrap_err();
        assert_eq!(err, SearchError::UnknownLocation("Atlantis".into()));
    }

    #[test]
    fn searches_through_the_trait_impls() {
        let map = sample_map();
        let mut router = Router::new(map.table.len());
        let from = map.resolve("Anthony").unwrap();
        let to = map.resolve("Wichita").unwrap();
        let result = search(&mut router, &map, Strategy::AStar, from, to);
        let route = result.route.as_deref().unwrap();
        assert_eq!(route.len(), 3);
        assert!(result.distance_km > 0.0);
    }

    #[test]
    fn load_from_files() {
        let mut locs = tempfile::NamedTempFile::new().unwrap();
        writeln!(locs, "A,37.0,-97.0").unwrap();
        writeln!(locs, "B,37.5,-97.0").unwrap();
        let mut adj = tempfile::NamedTempFile::new().unwrap();
        writeln!(adj, "A B").unwrap();

        let map = RouteMap::load(locs.path(), adj.path()).unwrap();
        assert_eq!(map.table.len(), 2);
        let a = map.resolve("A").unwrap();
        assert_eq!(map.graph.neighbors(a).len(), 1);
    }
}

//! Strategy selection and the uniform search entry point.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use georoute_core::{LocationId, SearchError};

use crate::Router;
use crate::traits::{AstarPather, WeightedPather};

/// The supported search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first: fewest stops.
    Bfs,
    /// Depth-first: no guarantee.
    Dfs,
    /// Iterative-deepening depth-first: fewest stops, DFS memory profile.
    IdDfs,
    /// Greedy best-first: heuristic only, no guarantee.
    BestFirst,
    /// A*: shortest total distance.
    AStar,
}

impl Strategy {
    /// All strategies, in presentation order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::IdDfs,
        Strategy::BestFirst,
        Strategy::AStar,
    ];

    /// Canonical selector spelling.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::IdDfs => "id-dfs",
            Strategy::BestFirst => "best-first",
            Strategy::AStar => "a*",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "id-dfs" | "iddfs" => Ok(Strategy::IdDfs),
            "best-first" | "bestfirst" | "greedy" => Ok(Strategy::BestFirst),
            "a*" | "astar" | "a-star" => Ok(Strategy::AStar),
            _ => Err(SearchError::UnknownStrategy(s.to_owned())),
        }
    }
}

/// The outcome of one route query. Created fresh per query.
///
/// `route: None` means the search space was exhausted without reaching the
/// goal — the expected outcome for disconnected components, not an error.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Ordered stops from start to goal inclusive, if a route was found.
    pub route: Option<Vec<LocationId>>,
    /// Total great-circle distance along the route, in kilometers.
    /// Zero when no route was found.
    pub distance_km: f64,
    /// Wall-clock time of the search loop itself, excluding I/O.
    pub elapsed: Duration,
    /// Nodes expanded before the search terminated.
    pub expanded: usize,
}

impl SearchResult {
    /// Whether a route was found.
    pub fn found(&self) -> bool {
        self.route.is_some()
    }
}

/// Total distance along `route`, summing edge costs between consecutive
/// stops.
///
/// Always recomputed from the pather rather than read back from frontier
/// priorities, since best-first priorities are not cumulative.
pub fn route_distance<P: WeightedPather>(pather: &P, route: &[LocationId]) -> f64 {
    route.windows(2).map(|w| pather.cost(w[0], w[1])).sum()
}

/// Run `strategy` from `from` to `to` and package the outcome.
///
/// Elapsed time covers the algorithm's search loop only; resolving names
/// and rendering results happen outside it.
pub fn search<P: AstarPather>(
    router: &mut Router,
    pather: &P,
    strategy: Strategy,
    from: LocationId,
    to: LocationId,
) -> SearchResult {
    let started = Instant::now();
    let route = match strategy {
        Strategy::Bfs => router.bfs_path(pather, from, to),
        Strategy::Dfs => router.dfs_path(pather, from, to),
        Strategy::IdDfs => router.iddfs_path(pather, from, to),
        Strategy::BestFirst => router.greedy_path(pather, from, to),
        Strategy::AStar => router.astar_path(pather, from, to),
    };
    let elapsed = started.elapsed();

    let distance_km = route
        .as_deref()
        .map(|r| route_distance(pather, r))
        .unwrap_or(0.0);

    log::debug!(
        "{strategy}: {} ({} expanded, {:.3} ms)",
        if route.is_some() { "route found" } else { "no route" },
        router.expanded(),
        elapsed.as_secs_f64() * 1e3,
    );

    SearchResult {
        route,
        distance_km,
        elapsed,
        expanded: router.expanded(),
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn strategy_round_trip() {
        for s in Strategy::ALL {
            let json = serde_json::to_string(&s).unwrap();
            let back: Strategy = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }

    #[test]
    fn search_result_round_trip() {
        let result = SearchResult {
            route: Some(vec![LocationId(0), LocationId(2), LocationId(1)]),
            distance_km: 123.45,
            elapsed: Duration::from_micros(250),
            expanded: 7,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.route, result.route);
        assert_eq!(back.distance_km, result.distance_km);
        assert_eq!(back.elapsed, result.elapsed);
        assert_eq!(back.expanded, result.expanded);
    }
}

//! Rendering a search result for display.

use std::fmt;

use georoute_core::LocationTable;

use crate::strategy::SearchResult;

/// Displayable view of a [`SearchResult`], resolving location ids back to
/// names. Pure presentation; no algorithmic content.
pub struct RouteReport<'a> {
    table: &'a LocationTable,
    result: &'a SearchResult,
}

impl<'a> RouteReport<'a> {
    pub fn new(table: &'a LocationTable, result: &'a SearchResult) -> Self {
        Self { table, result }
    }
}

impl fmt::Display for RouteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result.route.as_deref() {
            Some(route) => {
                write!(f, "Route ({} stops): ", route.len())?;
                for (i, &id) in route.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" -> ")?;
                    }
                    f.write_str(self.table.name(id))?;
                }
                writeln!(f)?;
                writeln!(f, "Total distance: {:.1} km", self.result.distance_km)?;
            }
            None => {
                writeln!(f, "No route found.")?;
            }
        }
        write!(
            f,
            "Search time: {:.3} ms ({} nodes expanded)",
            self.result.elapsed.as_secs_f64() * 1e3,
            self.result.expanded,
        )
    }
}

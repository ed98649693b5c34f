//! The location table: interned names with coordinates.

use std::collections::HashMap;
use std::fmt;

use crate::coord::Coord;

/// Index of a location in the [`LocationTable`], assigned at load time.
///
/// Search code works exclusively in terms of ids; resolving a user-facing
/// name to an id happens once, before any search starts, so an unknown name
/// can never reach the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationId(pub u32);

impl LocationId {
    /// The id as a usable array index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The set of known locations: name, coordinate, stable id.
///
/// Built once at startup and shared read-only by every search. Inserting a
/// name twice keeps the original id and overwrites the coordinate (last
/// entry in the input wins).
#[derive(Debug, Default, Clone)]
pub struct LocationTable {
    names: Vec<String>,
    coords: Vec<Coord>,
    by_name: HashMap<String, LocationId>,
}

impl LocationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a location, returning its id. Re-inserting an existing name
    /// updates the coordinate in place.
    pub fn insert(&mut self, name: &str, coord: Coord) -> LocationId {
        if let Some(&id) = self.by_name.get(name) {
            self.coords[id.index()] = coord;
            return id;
        }
        let id = LocationId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.coords.push(coord);
        self.by_name.insert(name.to_owned(), id);
        id
    }

    /// Look up a location id by name.
    #[inline]
    pub fn id(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    /// The name of a location.
    #[inline]
    pub fn name(&self, id: LocationId) -> &str {
        &self.names[id.index()]
    }

    /// The coordinate of a location.
    #[inline]
    pub fn coord(&self, id: LocationId) -> Coord {
        self.coords[id.index()]
    }

    /// Great-circle distance between two locations in kilometers.
    #[inline]
    pub fn distance_km(&self, a: LocationId, b: LocationId) -> f64 {
        self.coord(a).distance_km(self.coord(b))
    }

    /// Number of locations in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all `(id, name)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (LocationId(i as u32), n.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut t = LocationTable::new();
        let a = t.insert("Anthony", Coord::new(37.15, -97.92));
        let b = t.insert("Wichita", Coord::new(37.69, -97.34));
        assert_eq!(t.len(), 2);
        assert_eq!(t.id("Anthony"), Some(a));
        assert_eq!(t.id("Wichita"), Some(b));
        assert_eq!(t.id("Topeka"), None);
        assert_eq!(t.name(a), "Anthony");
        assert_eq!(t.coord(b), Coord::new(37.69, -97.34));
    }

    #[test]
    fn reinsert_keeps_id_updates_coord() {
        let mut t = LocationTable::new();
        let a = t.insert("Anthony", Coord::new(0.0, 0.0));
        let a2 = t.insert("Anthony", Coord::new(37.15, -97.92));
        assert_eq!(a, a2);
        assert_eq!(t.len(), 1);
        assert_eq!(t.coord(a), Coord::new(37.15, -97.92));
    }

    #[test]
    fn distance_is_symmetric() {
        let mut t = LocationTable::new();
        let a = t.insert("A", Coord::new(37.0, -97.0));
        let b = t.insert("B", Coord::new(38.0, -96.0));
        assert_eq!(t.distance_km(a, b), t.distance_km(b, a));
        assert_eq!(t.distance_km(a, a), 0.0);
    }
}

//! File loaders for the location table and adjacency list.

use std::path::Path;

use georoute_core::{AdjacencyGraph, Coord, LocationTable};
use thiserror::Error;

/// An input file that could not be turned into a usable map.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path}: record {record}: {reason}")]
    Malformed {
        path: String,
        record: usize,
        reason: String,
    },

    #[error("{path}: line {line}: unknown location in adjacency list: {name}")]
    UnknownLocation {
        path: String,
        line: usize,
        name: String,
    },
}

/// Read a headerless CSV of `name,lat,lon` triples.
///
/// A name appearing twice keeps its id; the later coordinates win.
pub fn read_locations(path: &Path) -> Result<LocationTable, LoadError> {
    let display = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LoadError::Csv {
            path: display.clone(),
            source,
        })?;

    let mut table = LocationTable::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|source| LoadError::Csv {
            path: display.clone(),
            source,
        })?;
        let malformed = |reason: &str| LoadError::Malformed {
            path: display.clone(),
            record: i + 1,
            reason: reason.to_owned(),
        };
        if record.len() != 3 {
            return Err(malformed("expected name,lat,lon"));
        }
        let name = &record[0];
        if name.is_empty() {
            return Err(malformed("empty location name"));
        }
        let lat: f64 = record[1]
            .parse()
            .map_err(|_| malformed("latitude is not a number"))?;
        let lon: f64 = record[2]
            .parse()
            .map_err(|_| malformed("longitude is not a number"))?;
        table.insert(name, Coord::new(lat, lon));
    }
    Ok(table)
}

/// Read an adjacency list: one whitespace-separated chain of location names
/// per line, each consecutive pair an undirected edge.
///
/// A line with a single name mentions the location without adding edges.
/// Every name must already exist in `table`; duplicate edges in the input
/// are kept as-is.
pub fn read_adjacencies(
    path: &Path,
    table: &LocationTable,
) -> Result<AdjacencyGraph, LoadError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;

    let mut graph = AdjacencyGraph::new(table.len());
    for (i, line) in text.lines().enumerate() {
        let mut prev = None;
        for name in line.split_whitespace() {
            let id = table.id(name).ok_or_else(|| LoadError::UnknownLocation {
                path: display.clone(),
                line: i + 1,
                name: name.to_owned(),
            })?;
            if let Some(prev) = prev {
                graph.add_edge(prev, id);
            }
            prev = Some(id);
        }
    }
    Ok(graph)
}

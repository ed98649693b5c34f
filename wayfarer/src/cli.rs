//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Find a route between two named locations.
#[derive(Parser, Debug)]
#[command(name = "wayfarer", version, about)]
pub struct Cli {
    /// Start location name.
    pub start: String,

    /// Goal location name.
    pub goal: String,

    /// Search strategy: bfs, dfs, id-dfs, best-first, a*.
    ///
    /// Parsed by the engine, not clap, so an unsupported selector is
    /// reported through the same error taxonomy as an unknown location.
    #[arg(short, long, default_value = "a*")]
    pub strategy: String,

    /// Run every strategy on the same query and print each result.
    #[arg(long, conflicts_with = "strategy")]
    pub all: bool,

    /// Coordinates CSV: one name,lat,lon triple per line, no header.
    #[arg(long, default_value = "wayfarer/data/coordinates.csv")]
    pub coordinates: PathBuf,

    /// Adjacency list: whitespace-separated name chains, one per line.
    #[arg(long, default_value = "wayfarer/data/adjacencies.txt")]
    pub adjacencies: PathBuf,

    /// Log search internals to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

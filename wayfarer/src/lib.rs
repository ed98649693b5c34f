//! Wayfarer — a route finder for named geographic locations.

pub mod cli;
pub mod load;
pub mod logging;
pub mod map;

pub use cli::Cli;
pub use load::LoadError;
pub use map::RouteMap;

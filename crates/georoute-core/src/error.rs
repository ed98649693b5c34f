//! Shared error taxonomy for route queries.

use thiserror::Error;

/// A query that could not be attempted.
///
/// Both variants are deterministic functions of the query inputs and are
/// recoverable by issuing a different query. An exhausted search space is
/// *not* an error: it is reported as an absent route in the search result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Start or goal name is not in the location table. Detected before
    /// any search begins.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// The requested algorithm selector is not one of the supported set.
    #[error("unknown search strategy: {0}")]
    UnknownStrategy(String),
}

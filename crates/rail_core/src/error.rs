//! Errors returned by the route search.

use crate::graph::Station;

/// Failure of a route query. Both variants are ordinary outcomes for the caller to handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The optimization key is neither `cost` nor `time`
    #[error("invalid optimization criterion '{0}', expected 'cost' or 'time'")]
    InvalidCriterion(String),

    /// No path connects the two stations
    #[error("no route from {from} to {to} ({edges_examined} connections explored)")]
    Unreachable {
        from: Station,
        to: Station,
        edges_examined: usize,
    },
}

impl RouteError {
    /// Connections inspected before the search gave up. Zero for rejected queries.
    pub fn edges_examined(&self) -> usize {
        match self {
            RouteError::InvalidCriterion(_) => 0,
            RouteError::Unreachable { edges_examined, .. } => *edges_examined,
        }
    }
}

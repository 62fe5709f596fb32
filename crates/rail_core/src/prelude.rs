//! Re-exports of the most commonly used items in `rail_core`.
pub use crate::constants::{Weight, DEFAULT_REPORT_FILE};
pub use crate::criterion::Criterion;
pub use crate::error::RouteError;
pub use crate::graph::{Edge, Network, Station};
pub use crate::lookup::{Resolution, StationResolver};
pub use crate::report::RouteReport;
pub use crate::search::{dijkstra::RouteSearch, find_route, find_route_by_key, route::Route};
pub use crate::util;

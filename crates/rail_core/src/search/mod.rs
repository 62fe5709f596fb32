use rustc_hash::FxHashMap;

use crate::{
    constants::Weight,
    criterion::Criterion,
    error::RouteError,
    graph::{Connection, Network, NodeIndex},
};

use self::{dijkstra::RouteSearch, route::Route};

pub mod dijkstra;
pub mod route;

/// Distance accumulated during a search. A path has fewer than `u32::MAX` connections of
/// at most `Weight::MAX` each, so sums never overflow.
pub(crate) type Distance = u128;

/// Tentative distance of a station and the connection it was last relaxed over. Stations
/// without an entry are at infinite distance.
pub(crate) type NodeData = FxHashMap<NodeIndex, (Distance, Option<(NodeIndex, Connection)>)>;

/// Finds the route from `start` to `end` minimizing `criterion`.
///
/// Unknown station names are not an error here, they are simply unreachable.
pub fn find_route(
    network: &Network,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Result<Route, RouteError> {
    RouteSearch::new(network).search(start, end, criterion)
}

/// Same as [`find_route`] but takes the criterion as its key (`"cost"` or `"time"`).
///
/// An unsupported key fails with [`RouteError::InvalidCriterion`] before the network is
/// touched.
pub fn find_route_by_key(
    network: &Network,
    start: &str,
    end: &str,
    criterion: &str,
) -> Result<Route, RouteError> {
    let criterion: Criterion = criterion.parse()?;
    find_route(network, start, end, criterion)
}

/// Follows the recorded predecessors from `target` back to `source`.
///
/// Returns the stations in travel order together with the summed cost and time of the
/// connections that were actually relaxed, or `None` if `target` was never reached.
/// Totals that do not fit a [`Weight`] saturate at `Weight::MAX`.
pub(crate) fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    node_data: &NodeData,
) -> Option<(Vec<NodeIndex>, Weight, Weight)> {
    let mut path = vec![target];
    let mut total_cost: Distance = 0;
    let mut total_time: Distance = 0;

    let mut current = target;
    while let Some((previous, conn)) = node_data.get(&current)?.1 {
        total_cost += Distance::from(conn.cost);
        total_time += Distance::from(conn.time);
        path.push(previous);
        current = previous;
    }

    if current != source {
        return None;
    }

    path.reverse();
    let saturate = |total: Distance| Weight::try_from(total).unwrap_or(Weight::MAX);
    Some((path, saturate(total_cost), saturate(total_time)))
}

#[cfg(test)]
pub(crate) fn assert_route(
    expected_stations: &[&str],
    expected_cost: Weight,
    expected_time: Weight,
    route: Result<Route, RouteError>,
) {
    let route = route.unwrap_or_else(|err| panic!("expected a route, got: {err}"));
    let stations: Vec<&str> = route.stations.iter().map(|s| s.as_str()).collect();

    assert_eq!(expected_stations, stations.as_slice());
    assert_eq!(expected_cost, route.total_cost, "total cost");
    assert_eq!(expected_time, route.total_time, "total time");
}

#[cfg(test)]
pub(crate) fn assert_unreachable(route: Result<Route, RouteError>) {
    assert!(
        matches!(route, Err(RouteError::Unreachable { .. })),
        "expected no route, got: {route:?}"
    );
}

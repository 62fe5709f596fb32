use std::collections::BinaryHeap;

use crate::criterion::Criterion;
use crate::error::RouteError;
use crate::graph::*;
use crate::search::{reconstruct_path, route::Route, Distance, NodeData};
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::FxHashSet;

#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) weight: Distance,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Distance) -> Self {
        Self { node_idx, weight }
    }
}

// Reversed so that `BinaryHeap` pops the smallest weight first. Ties fall back to the
// lower station index, which keeps repeated searches identical.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.node_idx == other.node_idx
    }
}

impl Eq for Candidate {}

/// Dijkstra search with lazy deletion and early exit on the destination.
///
/// The search only borrows the network. All working state lives in `search`, so one
/// `RouteSearch` can answer any number of queries and several can share a network.
pub struct RouteSearch<'a> {
    pub stats: SearchStats,
    network: &'a Network,
}

impl<'a> RouteSearch<'a> {
    pub fn new(network: &'a Network) -> Self {
        RouteSearch {
            network,
            stats: SearchStats::default(),
        }
    }

    pub fn search(
        &mut self,
        start: &str,
        end: &str,
        criterion: Criterion,
    ) -> Result<Route, RouteError> {
        self.stats.init();

        let Some(source) = self.network.station_index(start) else {
            self.stats.finish();
            info!("Unknown departure station {:?}", start);
            return Err(self.unreachable(start, end));
        };

        if start == end {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(Route::new(
                vec![Station::new(start)],
                0,
                0,
                0,
                criterion,
            ));
        }

        // An unknown destination is never settled, the queue simply drains
        let target = self.network.station_index(end);

        let mut node_data = NodeData::default();
        node_data.insert(source, (0, None));

        let mut settled = FxHashSet::default();
        let mut queue = BinaryHeap::new();

        queue.push(Candidate::new(source, 0));

        while let Some(Candidate { node_idx, weight }) = queue.pop() {
            // Stale entry of a station that was settled through a shorter distance
            if !settled.insert(node_idx) {
                continue;
            }
            self.stats.nodes_settled += 1;

            if Some(node_idx) == target {
                break;
            }

            for conn in self.network.connections(node_idx) {
                self.stats.edges_examined += 1;

                if settled.contains(&conn.to) {
                    continue;
                }

                let new_distance = weight + Distance::from(criterion.weight(conn));
                let improves = node_data
                    .get(&conn.to)
                    .map_or(true, |(distance, _)| new_distance < *distance);

                // Ties keep the predecessor that was found first
                if improves {
                    node_data.insert(conn.to, (new_distance, Some((node_idx, *conn))));
                    queue.push(Candidate::new(conn.to, new_distance));
                }
            }
        }
        self.stats.finish();

        let Some((path, total_cost, total_time)) =
            target.and_then(|target| reconstruct_path(target, source, &node_data))
        else {
            info!("No route found: {}", self.stats);
            return Err(self.unreachable(start, end));
        };

        let stations: Vec<Station> = path
            .into_iter()
            .filter_map(|idx| self.network.station(idx).cloned())
            .collect();

        debug!("Route found: {:?}", stations);

        let route = Route::new(
            stations,
            total_cost,
            total_time,
            self.stats.edges_examined,
            criterion,
        );
        info!(
            "Route found, {}: {}, {}",
            criterion,
            route.optimized_total(),
            self.stats
        );

        Ok(route)
    }

    fn unreachable(&self, start: &str, end: &str) -> RouteError {
        RouteError::Unreachable {
            from: start.into(),
            to: end.into(),
            edges_examined: self.stats.edges_examined,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::Weight;
    use crate::network;
    use crate::search::{assert_route, assert_unreachable, find_route};
    use crate::util::test_graphs::{brute_force_best, generate_simple_network, triangle};
    use proptest::prop_assert_eq;

    use super::*;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn criterion_changes_route() {
        init_log();
        let n = triangle();

        let mut s = RouteSearch::new(&n);

        assert_route(&["A", "B", "C"], 20, 10, s.search("A", "C", Criterion::Cost));
        assert_eq!(s.stats.edges_examined, 4);

        assert_route(&["A", "C"], 25, 8, s.search("A", "C", Criterion::Time));
        assert_eq!(s.stats.edges_examined, 4);
    }

    #[test]
    fn edges_examined_is_reported() {
        let n = triangle();

        let route = find_route(&n, "A", "C", Criterion::Cost).unwrap();
        assert_eq!(route.edges_examined, 4);
        assert_eq!(route.criterion, Criterion::Cost);
        assert_eq!(route.optimized_total(), 20);
    }

    #[test]
    fn isolated_station_is_unreachable() {
        let mut n = triangle();
        n.add_station("D");

        let result = find_route(&n, "A", "D", Criterion::Cost);
        assert_unreachable(result.clone());
        // The whole component of A was explored
        assert_eq!(result.unwrap_err().edges_examined(), 6);
    }

    #[test]
    fn same_station() {
        let mut n = triangle();
        n.add_station("D");

        let route = find_route(&n, "B", "B", Criterion::Time).unwrap();
        assert_eq!(route.stations, vec![Station::new("B")]);
        assert_eq!((route.total_cost, route.total_time), (0, 0));
        assert_eq!(route.edges_examined, 0);

        assert_route(&["D"], 0, 0, find_route(&n, "D", "D", Criterion::Cost));
    }

    #[test]
    fn unknown_stations() {
        let n = triangle();

        let result = find_route(&n, "X", "A", Criterion::Cost);
        assert_eq!(
            result,
            Err(RouteError::Unreachable {
                from: "X".into(),
                to: "A".into(),
                edges_examined: 0,
            })
        );

        assert_unreachable(find_route(&n, "X", "X", Criterion::Cost));

        let result = find_route(&n, "A", "a", Criterion::Cost);
        assert_unreachable(result.clone());
        assert_eq!(result.unwrap_err().edges_examined(), 6);
    }

    #[test]
    fn empty_network() {
        let n = Network::new();

        assert_unreachable(find_route(&n, "A", "B", Criterion::Cost));
        assert_unreachable(find_route(&n, "A", "A", Criterion::Time));
    }

    #[test]
    fn early_termination() {
        // A - B - C - D - E
        let n = network!(
            ("A", "B", 1, 1),
            ("B", "C", 1, 1),
            ("C", "D", 1, 1),
            ("D", "E", 1, 1),
        );

        let route = find_route(&n, "A", "B", Criterion::Cost).unwrap();
        assert_eq!(route.edges_examined, 1);

        let route = find_route(&n, "A", "E", Criterion::Cost).unwrap();
        assert_eq!(route.edges_examined, 7);
        assert_eq!(route.total_cost, 4);
    }

    #[test]
    fn parallel_edges() {
        let n = network!(("A", "B", 10, 5), ("A", "B", 3, 9));

        // Totals come from the connection that was relaxed, not the first one listed
        assert_route(&["A", "B"], 3, 9, find_route(&n, "A", "B", Criterion::Cost));
        assert_route(&["A", "B"], 10, 5, find_route(&n, "A", "B", Criterion::Time));
        assert_route(&["B", "A"], 3, 9, find_route(&n, "B", "A", Criterion::Cost));
    }

    #[test]
    fn maximal_weights() {
        let n = network!(("A", "B", Weight::MAX, 1), ("B", "C", 1, 1));

        assert_route(&["A", "B"], Weight::MAX, 1, find_route(&n, "A", "B", Criterion::Cost));
        // The distance to C exceeds a single weight but C is still reachable
        assert_route(
            &["A", "B", "C"],
            Weight::MAX,
            2,
            find_route(&n, "A", "C", Criterion::Cost),
        );
        assert_route(
            &["A", "B", "C"],
            Weight::MAX,
            2,
            find_route(&n, "A", "C", Criterion::Time),
        );
    }

    #[test]
    fn maximal_weight_loses_to_cheaper_detour() {
        let n = network!(
            ("A", "B", Weight::MAX, 1),
            ("A", "C", Weight::MAX - 2, 5),
            ("C", "B", 1, 5),
        );

        assert_route(
            &["A", "C", "B"],
            Weight::MAX - 1,
            10,
            find_route(&n, "A", "B", Criterion::Cost),
        );
        assert_route(&["A", "B"], Weight::MAX, 1, find_route(&n, "A", "B", Criterion::Time));
    }

    #[test]
    fn zero_weights() {
        let n = network!(("A", "B", 0, 3), ("B", "C", 0, 3), ("A", "C", 1, 1));

        assert_route(&["A", "B", "C"], 0, 6, find_route(&n, "A", "C", Criterion::Cost));
        assert_route(&["A", "C"], 1, 1, find_route(&n, "A", "C", Criterion::Time));
    }

    #[test]
    fn simple_path() {
        //      7 - 8 - 9
        //      |       |
        // 0 -  5 - 6 - |
        // |        | \ |
        // 1 -  2 - 3 - 4
        init_log();
        let n = generate_simple_network();

        assert_route(
            &["0", "5", "7", "8", "9", "4"],
            13,
            5,
            find_route(&n, "0", "4", Criterion::Cost),
        );
        assert_route(
            &["4", "9", "8", "7", "5", "0"],
            13,
            5,
            find_route(&n, "4", "0", Criterion::Cost),
        );
        assert_route(
            &["6", "5", "0", "1", "2", "3"],
            9,
            5,
            find_route(&n, "6", "3", Criterion::Cost),
        );
        assert_route(&["6", "3"], 20, 1, find_route(&n, "6", "3", Criterion::Time));
        assert_route(&["1", "2", "3"], 2, 2, find_route(&n, "1", "3", Criterion::Cost));
        assert_route(
            &["0", "5", "6", "4"],
            26,
            3,
            find_route(&n, "0", "4", Criterion::Time),
        );
    }

    #[test]
    fn disconnected_network() {
        // 0 - 1 - 2
        // 3 - 4 - 5
        let n = network!(
            ("0", "1", 1, 1),
            ("1", "2", 1, 1),
            ("3", "4", 3, 1),
            ("4", "5", 1, 1),
        );

        assert_unreachable(find_route(&n, "0", "3", Criterion::Cost));
        assert_unreachable(find_route(&n, "3", "0", Criterion::Time));
        assert_route(&["0", "1", "2"], 2, 2, find_route(&n, "0", "2", Criterion::Cost));
        assert_route(&["3", "4", "5"], 4, 2, find_route(&n, "3", "5", Criterion::Cost));
    }

    #[test]
    fn go_around() {
        // A - B
        // |   |
        // C - D
        let n = network!(
            ("A", "B", 10, 1),
            ("A", "C", 1, 1),
            ("C", "D", 1, 1),
            ("D", "B", 1, 1),
        );

        assert_route(
            &["A", "C", "D", "B"],
            3,
            3,
            find_route(&n, "A", "B", Criterion::Cost),
        );
        assert_route(&["A", "B"], 10, 1, find_route(&n, "A", "B", Criterion::Time));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let n = generate_simple_network();
        let mut s = RouteSearch::new(&n);

        let first = s.search("1", "9", Criterion::Cost);
        for _ in 0..5 {
            assert_eq!(first, s.search("1", "9", Criterion::Cost));
        }
    }

    #[test]
    fn concurrent_searches_share_network() {
        let n = generate_simple_network();
        let expected = find_route(&n, "0", "4", Criterion::Cost);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| find_route(&n, "0", "4", Criterion::Cost)))
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn matches_brute_force() {
        init_log();
        let mut runner = proptest::test_runner::TestRunner::default();

        let strategy = (
            2usize..7,
            proptest::collection::vec((0usize..7, 0usize..7, 0u64..20, 0u64..20), 0..14),
            0usize..7,
            0usize..7,
        );

        runner
            .run(&strategy, |(num_stations, raw_edges, a, b)| {
                let mut n = Network::new();
                for i in 0..num_stations {
                    n.add_station(&i.to_string());
                }
                for (x, y, cost, time) in raw_edges {
                    n.add_edge(
                        &(x % num_stations).to_string(),
                        &(y % num_stations).to_string(),
                        cost,
                        time,
                    );
                }

                let start = (a % num_stations).to_string();
                let end = (b % num_stations).to_string();

                for criterion in [Criterion::Cost, Criterion::Time] {
                    let result = find_route(&n, &start, &end, criterion);
                    let best = brute_force_best(&n, &start, &end, criterion);

                    match (result, best) {
                        (Ok(route), Some(best)) => {
                            prop_assert_eq!(route.optimized_total(), best);
                            prop_assert_eq!(
                                route.departure().map(Station::as_str),
                                Some(start.as_str())
                            );
                            prop_assert_eq!(
                                route.destination().map(Station::as_str),
                                Some(end.as_str())
                            );

                            // Every hop is a real connection, and the reversed route
                            // is equally good in the other direction
                            for hop in route.stations.windows(2) {
                                prop_assert_eq!(
                                    n.neighbors(hop[0].as_str())
                                        .any(|nb| nb.station == &hop[1]),
                                    true
                                );
                            }
                            let back = find_route(&n, &end, &start, criterion);
                            prop_assert_eq!(back.map(|r| r.optimized_total()), Ok(best));
                        }
                        (Err(RouteError::Unreachable { .. }), None) => {}
                        (result, best) => {
                            panic!("search returned {result:?}, brute force {best:?}")
                        }
                    }
                }
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn totals_sum_path_connections() {
        let n = generate_simple_network();

        for criterion in [Criterion::Cost, Criterion::Time] {
            let route = find_route(&n, "1", "7", criterion).unwrap();

            let (cost, time) = route
                .stations
                .windows(2)
                .map(|hop| {
                    let nb = n
                        .neighbors(hop[0].as_str())
                        .find(|nb| nb.station == &hop[1])
                        .unwrap();
                    (nb.cost, nb.time)
                })
                .fold((0, 0), |(c, t), (dc, dt)| (c + dc, t + dt));

            assert_eq!((route.total_cost, route.total_time), (cost, time));
        }
    }
}

use crate::{
    constants::Weight,
    criterion::Criterion,
    graph::{Network, NodeIndex},
    network,
};

/// A - B - C with a direct but expensive A - C connection.
///
/// Cheapest A -> C goes through B (cost 20, time 10), fastest is direct (cost 25, time 8).
pub fn triangle() -> Network {
    network!(("A", "B", 10, 5), ("B", "C", 10, 5), ("A", "C", 25, 8))
}

pub fn generate_simple_network() -> Network {
    //      7 - 8 - 9
    //      |       |
    // 0 -  5 - 6 - |
    // |        | \ |
    // 1 -  2 - 3 - 4
    //
    // Cost as drawn below, every connection takes one time unit
    network!(
        ("0", "1", 1, 1),
        ("1", "2", 1, 1),
        ("2", "3", 1, 1),
        ("3", "4", 20, 1),
        ("0", "5", 5, 1),
        ("5", "6", 1, 1),
        ("6", "4", 20, 1),
        ("6", "3", 20, 1),
        ("5", "7", 5, 1),
        ("7", "8", 1, 1),
        ("8", "9", 1, 1),
        ("9", "4", 1, 1),
    )
}

/// Grid of `width * height` stations named `"x,y"`. Horizontal connections are cheap
/// and slow, vertical ones expensive and fast.
pub fn generate_grid_network(width: usize, height: usize) -> Network {
    let mut n = Network::with_capacity(width * height, 2 * width * height);
    let name = |x: usize, y: usize| format!("{x},{y}");

    for y in 0..height {
        for x in 0..width {
            n.add_station(&name(x, y));
            if x > 0 {
                n.add_edge(&name(x - 1, y), &name(x, y), 2, 7 + (x % 3) as Weight);
            }
            if y > 0 {
                n.add_edge(&name(x, y - 1), &name(x, y), 9 + (y % 4) as Weight, 3);
            }
        }
    }

    n
}

/// Smallest `criterion` total over all simple paths from `start` to `end`, found by
/// enumerating every one of them.
pub fn brute_force_best(
    network: &Network,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Option<Weight> {
    fn visit(
        network: &Network,
        node: NodeIndex,
        target: NodeIndex,
        criterion: Criterion,
        distance: Weight,
        on_path: &mut Vec<bool>,
        best: &mut Option<Weight>,
    ) {
        if node == target {
            *best = Some(best.map_or(distance, |b| b.min(distance)));
            return;
        }

        for conn in network.connections(node) {
            if on_path[conn.to.index()] {
                continue;
            }
            on_path[conn.to.index()] = true;
            visit(
                network,
                conn.to,
                target,
                criterion,
                distance + criterion.weight(conn),
                on_path,
                best,
            );
            on_path[conn.to.index()] = false;
        }
    }

    let source = network.station_index(start)?;
    let target = network.station_index(end)?;

    let mut on_path = vec![false; network.station_count()];
    on_path[source.index()] = true;

    let mut best = None;
    visit(
        network,
        source,
        target,
        criterion,
        0,
        &mut on_path,
        &mut best,
    );
    best
}

use crate::constants::Weight;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt};

/// Default integer type for station indices
pub type DefaultIdx = u32;

/// Name of a station.
///
/// Equality and hashing are exact, byte-for-byte and case-sensitive. Any kind of
/// case-insensitive or approximate matching is done by [`crate::lookup`] before a
/// name reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Station(String);

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Station(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Station {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Station(name.to_owned())
    }
}

impl From<String> for Station {
    fn from(name: String) -> Self {
        Station(name)
    }
}

impl PartialEq<str> for Station {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Station {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Station identifier inside a [`Network`]. Indices are dense and follow insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// An invalid `NodeIndex`, one past the largest representable station.
    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// One entry of an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub to: NodeIndex,
    pub cost: Weight,
    pub time: Weight,
}

impl Connection {
    pub fn new(to: NodeIndex, cost: Weight, time: Weight) -> Self {
        Connection { to, cost, time }
    }
}

/// An undirected connection between two named stations, as read from or written to CSV.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Edge {
    pub station1: Station,
    pub station2: Station,
    pub cost: Weight,
    pub time: Weight,
}

impl Edge {
    pub fn new(
        station1: impl Into<Station>,
        station2: impl Into<Station>,
        cost: Weight,
        time: Weight,
    ) -> Self {
        Edge {
            station1: station1.into(),
            station2: station2.into(),
            cost,
            time,
        }
    }
}

/// Neighbor of a station as seen through [`Network::neighbors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor<'a> {
    pub station: &'a Station,
    pub cost: Weight,
    pub time: Weight,
}

/// Undirected railway network where every connection carries a cost and a travel time.
///
/// The network is built once and then only read. Searches borrow it immutably and keep
/// their own working state, so any number of them may run against the same network.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    station_index: FxHashMap<Station, NodeIndex>,
    adjacency: Vec<Vec<Connection>>,
    // Logical edges in insertion order, `(station1, station2, cost, time)`
    edges: Vec<(NodeIndex, NodeIndex, Weight, Weight)>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_stations: usize, num_edges: usize) -> Self {
        Self {
            stations: Vec::with_capacity(num_stations),
            station_index: FxHashMap::with_capacity_and_hasher(num_stations, Default::default()),
            adjacency: Vec::with_capacity(num_stations),
            edges: Vec::with_capacity(num_edges),
        }
    }

    /// Adds a station without any connection. Adding a known station is a no-op.
    ///
    /// **Panics** if the network is at the maximum number of stations for its index type
    ///
    /// Returns the index of the station.
    pub fn add_station(&mut self, name: &str) -> NodeIndex {
        if let Some(idx) = self.station_index.get(name) {
            return *idx;
        }

        let idx = NodeIndex::new(self.stations.len());
        assert!(
            NodeIndex::end() != idx,
            "Maximum number of stations for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        let station = Station::new(name);
        self.station_index.insert(station.clone(), idx);
        self.stations.push(station);
        self.adjacency.push(Vec::new());

        idx
    }

    /// Adds an undirected connection between `a` and `b`.
    ///
    /// Both stations are registered if they are unknown. Each adjacency list gets an
    /// entry with the same weights. Parallel connections are kept as they are.
    pub fn add_edge(&mut self, a: &str, b: &str, cost: Weight, time: Weight) {
        let a_idx = self.add_station(a);
        let b_idx = self.add_station(b);

        self.adjacency[a_idx.index()].push(Connection::new(b_idx, cost, time));
        self.adjacency[b_idx.index()].push(Connection::new(a_idx, cost, time));
        self.edges.push((a_idx, b_idx, cost, time));
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge>) {
        for edge in edges {
            self.add_edge(
                edge.station1.as_str(),
                edge.station2.as_str(),
                edge.cost,
                edge.time,
            );
        }
    }

    pub fn has_station(&self, name: &str) -> bool {
        self.station_index.contains_key(name)
    }

    pub fn station_index(&self, name: &str) -> Option<NodeIndex> {
        self.station_index.get(name).copied()
    }

    pub fn station(&self, idx: NodeIndex) -> Option<&Station> {
        self.stations.get(idx.index())
    }

    /// Returns an iterator over all stations in insertion order
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Adjacency list of the station at `idx`, empty for unknown indices.
    pub fn connections(&self, idx: NodeIndex) -> &[Connection] {
        self.adjacency
            .get(idx.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Neighbors of `name` in the order the connections were added. An unknown station
    /// simply has no neighbors.
    pub fn neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = Neighbor<'a>> + 'a {
        self.station_index(name)
            .into_iter()
            .flat_map(move |idx| self.connections(idx).iter())
            .map(move |conn| Neighbor {
                station: &self.stations[conn.to.index()],
                cost: conn.cost,
                time: conn.time,
            })
    }

    /// Returns an iterator over all logical connections in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|(a, b, cost, time)| {
            Edge::new(
                self.stations[a.index()].clone(),
                self.stations[b.index()].clone(),
                *cost,
                *time,
            )
        })
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of logical connections. Every connection is stored twice, once per direction.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Network:\t#Stations: {}, #Connections: {}",
            self.station_count(),
            self.edge_count()
        )
    }
}

/// Macro to build a network from `(station1, station2, cost, time)` tuples
///
/// network!(("A", "B", 10, 5), ("B", "C", 10, 5))
#[macro_export]
macro_rules! network {
    ($(($a:expr, $b:expr, $cost:expr, $time:expr)),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut network = $crate::graph::Network::new();
        $(
            network.add_edge($a, $b, $cost, $time);
        )*
        network
    }};
}

//! Cheapest and fastest routes through a railway network.
//!
//! A [`Network`] holds stations and undirected connections, each carrying a ticket cost
//! and a travel time. The route search runs Dijkstra's algorithm over one of the two
//! weights, chosen per query with a [`Criterion`].
//!
//! # Basic usage
//! ```
//! use rail_core::prelude::*;
//!
//! let mut network = Network::new();
//! network.add_edge("A", "B", 10, 5);
//! network.add_edge("B", "C", 10, 5);
//! network.add_edge("A", "C", 25, 8);
//!
//! let cheapest = find_route(&network, "A", "C", Criterion::Cost).unwrap();
//! assert_eq!(cheapest.total_cost, 20);
//!
//! let fastest = find_route(&network, "A", "C", Criterion::Time).unwrap();
//! assert_eq!(fastest.total_time, 8);
//! ```
//!
//! [`Network`]: crate::graph::Network
//! [`Criterion`]: crate::criterion::Criterion
pub mod constants;
pub mod criterion;
pub mod error;
pub mod graph;
pub mod loader;
pub mod lookup;
pub mod prelude;
pub mod report;
pub mod search;
pub mod statistics;
pub mod util;

use crate::{constants::Weight, criterion::Criterion, graph::Station};

/// Result of a successful route query.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Route {
    /// Stations from departure to destination, both inclusive
    pub stations: Vec<Station>,
    /// Sum of connection costs, saturating at `Weight::MAX`
    pub total_cost: Weight,
    /// Sum of connection times, saturating at `Weight::MAX`
    pub total_time: Weight,
    /// Adjacency entries inspected by the search
    pub edges_examined: usize,
    /// Weight the search minimized
    pub criterion: Criterion,
}

impl Route {
    pub fn new(
        stations: Vec<Station>,
        total_cost: Weight,
        total_time: Weight,
        edges_examined: usize,
        criterion: Criterion,
    ) -> Self {
        Route {
            stations,
            total_cost,
            total_time,
            edges_examined,
            criterion,
        }
    }

    pub fn departure(&self) -> Option<&Station> {
        self.stations.first()
    }

    pub fn destination(&self) -> Option<&Station> {
        self.stations.last()
    }

    /// Total of the weight that was minimized.
    pub fn optimized_total(&self) -> Weight {
        match self.criterion {
            Criterion::Cost => self.total_cost,
            Criterion::Time => self.total_time,
        }
    }
}

//! Human readable journey summary of a [`Route`].
use std::{fmt, path::Path};

use anyhow::Context;
use log::info;

use crate::{criterion::Criterion, search::route::Route};

const REPORT_WIDTH: usize = 70;

pub struct RouteReport<'a> {
    route: &'a Route,
}

impl<'a> RouteReport<'a> {
    pub fn new(route: &'a Route) -> Self {
        RouteReport { route }
    }

    /// Writes the report to `path`, replacing any previous content.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, format!("{}\n\n", self))
            .with_context(|| format!("Error saving route to {}", path.display()))?;
        info!("Route saved to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for RouteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let route = self.route;
        let banner = format!("{:^width$}", "ROUTE FOUND", width = REPORT_WIDTH);

        writeln!(f, "{}", banner.trim_end())?;
        writeln!(f)?;
        match route.criterion {
            Criterion::Cost => writeln!(f, " Cheapest Route")?,
            Criterion::Time => writeln!(f, " Fastest Route")?,
        }

        writeln!(f)?;
        writeln!(f, "Route (in order):")?;
        let last = route.stations.len();
        for (i, station) in route.stations.iter().enumerate() {
            let n = i + 1;
            if n == 1 {
                writeln!(f, " {}. {} (START)", n, station)?;
            } else if n == last {
                writeln!(f, " {}. {} (DESTINATION)", n, station)?;
            } else {
                writeln!(f, " {}. {}", n, station)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Journey Summary:")?;
        writeln!(f, " • Total Stations: {}", route.stations.len())?;
        writeln!(f, " • Total Cost: £{}", route.total_cost)?;
        writeln!(
            f,
            " • Total Time: {} minutes ({}h {}m)",
            route.total_time,
            route.total_time / 60,
            route.total_time % 60
        )?;
        write!(f, " • Connections Explored: {}", route.edges_examined)
    }
}

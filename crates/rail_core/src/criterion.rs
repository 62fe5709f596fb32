//! Selects which connection weight a search minimizes.
use std::{fmt, str::FromStr};

use clap::ValueEnum;

use crate::{constants::Weight, error::RouteError, graph::Connection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Criterion {
    /// Cheapest route
    #[default]
    Cost,
    /// Fastest route
    Time,
}

impl Criterion {
    /// Weight of `conn` under this criterion.
    #[inline(always)]
    pub fn weight(self, conn: &Connection) -> Weight {
        match self {
            Criterion::Cost => conn.cost,
            Criterion::Time => conn.time,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Criterion::Cost => "cost",
            Criterion::Time => "time",
        }
    }
}

impl FromStr for Criterion {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cost" => Ok(Criterion::Cost),
            "time" => Ok(Criterion::Time),
            other => Err(RouteError::InvalidCriterion(other.to_owned())),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

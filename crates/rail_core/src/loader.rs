//! Reading and writing networks as `station1,station2,cost,time` CSV.
use std::{fs::File, io::Read, path::Path};

use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};

use crate::{
    constants::Weight,
    graph::{Edge, Network},
};

impl Network {
    /// Loads a network from a CSV file of `station1,station2,cost,time` rows.
    pub fn from_csv(path: &Path) -> anyhow::Result<Self> {
        info!("Loading railway network: {}", path.display());

        let file = File::open(path)
            .with_context(|| format!("Could not open network file {}", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("Could not load network file {}", path.display()))
    }

    /// Loads a network from CSV data.
    ///
    /// Rows that do not have exactly four fields, a header row and rows whose cost is not
    /// a non-negative integer that fits a [`Weight`] are skipped. A row with a valid cost
    /// but an invalid time is an error.
    pub fn from_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut edges = Vec::new();
        let mut skipped = 0;

        for result in reader.records() {
            let record = result.context("Failed to read CSV record")?;
            let line = record.position().map_or(0, |pos| pos.line());

            match skip_reason(&record) {
                Some(SkipReason::Header) => {
                    debug!("Skipping header on line {}", line);
                    continue;
                }
                Some(SkipReason::Invalid(reason)) => {
                    warn!("Skipping line {}: {}", line, reason);
                    skipped += 1;
                    continue;
                }
                None => {}
            }

            let edge: Edge = record
                .deserialize(None)
                .with_context(|| format!("Failed to parse connection on line {}", line))?;
            edges.push(edge);
        }

        let mut network = Network::new();
        network.add_edges(edges);

        info!(
            "Network loaded: {} stations, {} connections ({} lines skipped)",
            network.station_count(),
            network.edge_count(),
            skipped
        );

        Ok(network)
    }

    /// Writes every connection once, with a `station1,station2,cost,time` header.
    pub fn export_csv(&self, path: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Could not create {}", path.display()))?;

        debug!("BEGIN writing connections");
        for edge in self.edges() {
            wtr.serialize(edge)?;
        }

        wtr.flush()?;
        debug!("FINISHED writing connections");
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum SkipReason {
    Header,
    Invalid(&'static str),
}

fn skip_reason(record: &StringRecord) -> Option<SkipReason> {
    if record.len() != 4 {
        return Some(SkipReason::Invalid("expected 4 fields"));
    }
    if record[0].eq_ignore_ascii_case("station1") {
        return Some(SkipReason::Header);
    }
    let cost = &record[2];
    if cost.is_empty()
        || !cost.bytes().all(|b| b.is_ascii_digit())
        || cost.parse::<Weight>().is_err()
    {
        return Some(SkipReason::Invalid(
            "cost is not a non-negative integer within range",
        ));
    }
    None
}

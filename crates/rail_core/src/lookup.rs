//! Resolution of user-typed station names.
//!
//! The route search only knows exact names. Front ends run the input through a
//! [`StationResolver`] first: an exact match wins, then a case-insensitive one, and
//! otherwise the closest names are offered as suggestions.
use log::debug;

use crate::graph::{Network, Station};

/// Maximum number of suggestions returned for an unknown name
pub const MAX_SUGGESTIONS: usize = 3;
/// Minimum normalized similarity for a station to be suggested
pub const SIMILARITY_CUTOFF: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Nothing but whitespace was entered
    Empty,
    Exact(&'a Station),
    /// Matched ignoring case, the caller should tell the user which name was assumed
    CaseInsensitive(&'a Station),
    /// Closest names, best first
    Suggestions(Vec<&'a Station>),
    NotFound,
}

impl<'a> Resolution<'a> {
    /// The resolved station, if the input identified one.
    pub fn station(&self) -> Option<&'a Station> {
        match self {
            Resolution::Exact(station) | Resolution::CaseInsensitive(station) => Some(*station),
            _ => None,
        }
    }
}

pub struct StationResolver<'a> {
    network: &'a Network,
}

impl<'a> StationResolver<'a> {
    pub fn new(network: &'a Network) -> Self {
        StationResolver { network }
    }

    pub fn resolve(&self, input: &str) -> Resolution<'a> {
        let input = input.trim();
        if input.is_empty() {
            return Resolution::Empty;
        }

        if let Some(station) = self
            .network
            .station_index(input)
            .and_then(|idx| self.network.station(idx))
        {
            return Resolution::Exact(station);
        }

        let lowercase = input.to_lowercase();
        if let Some(station) = self
            .network
            .stations()
            .find(|station| station.as_str().to_lowercase() == lowercase)
        {
            debug!("Resolved {:?} to {:?} ignoring case", input, station);
            return Resolution::CaseInsensitive(station);
        }

        let suggestions = self.suggestions(input);
        if suggestions.is_empty() {
            Resolution::NotFound
        } else {
            Resolution::Suggestions(suggestions)
        }
    }

    fn suggestions(&self, input: &str) -> Vec<&'a Station> {
        let mut scored: Vec<(f64, &'a Station)> = self
            .network
            .stations()
            .map(|station| (strsim::normalized_levenshtein(input, station.as_str()), station))
            .filter(|(score, _)| *score >= SIMILARITY_CUTOFF)
            .collect();

        // Best score first, equal scores alphabetically
        scored.sort_by(|(a_score, a), (b_score, b)| {
            b_score.total_cmp(a_score).then_with(|| a.cmp(b))
        });

        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, station)| station)
            .collect()
    }
}

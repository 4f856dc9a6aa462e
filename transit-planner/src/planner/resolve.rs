//! Stop name resolution.
//!
//! Users type stop names loosely ("kendall" for "Kendall/MIT"), so lookup
//! is case-insensitive and falls back to substring matching.

use tracing::info;

use crate::domain::Stop;
use crate::graph::{StopIdx, TransitGraph};

/// How a query was matched to a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The stop's name equals the query, ignoring case.
    Exact,
    /// The stop's name contains the query, ignoring case.
    Approximate,
}

/// A stop picked for a user query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopMatch<'g> {
    pub idx: StopIdx,
    pub stop: &'g Stop,
    pub kind: MatchKind,
}

impl StopMatch<'_> {
    pub fn is_approximate(&self) -> bool {
        self.kind == MatchKind::Approximate
    }

    /// Advisory message for the user when the match was approximate.
    pub fn notice(&self, query: &str) -> Option<String> {
        self.is_approximate()
            .then(|| format!("{query} not found, approximating to {}", self.stop.name))
    }
}

/// Find the stop a user means by `query`.
///
/// An exact case-insensitive name match always wins. Failing that, the
/// first stop in enumeration order whose name contains the query is used;
/// several substring matches are not an error. Returns `None` when nothing
/// matches.
///
/// An empty query also returns `None` rather than matching every name as
/// a substring; `PlanRequest::validate` rejects blank names before this is
/// reached.
pub fn resolve_stop<'g>(graph: &'g TransitGraph, query: &str) -> Option<StopMatch<'g>> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();

    if let Some((idx, stop)) = graph
        .stops()
        .find(|(_, stop)| stop.name.to_lowercase() == needle)
    {
        return Some(StopMatch {
            idx,
            stop,
            kind: MatchKind::Exact,
        });
    }

    let (idx, stop) = graph
        .stops()
        .find(|(_, stop)| stop.name.to_lowercase().contains(&needle))?;
    let approximate = StopMatch {
        idx,
        stop,
        kind: MatchKind::Approximate,
    };

    info!(query, stop = %approximate.stop.name, "approximated stop name");
    Some(approximate)
}

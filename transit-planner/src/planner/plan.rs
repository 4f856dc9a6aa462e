//! Stop-to-stop planning on top of the resolver and route search.

use std::collections::HashSet;
use std::fmt;

use crate::graph::{RouteIdx, TransitGraph};

use super::resolve::{StopMatch, resolve_stop};
use super::search::{RoutePath, RouteSearch};

/// Which end of the trip a stop name was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("Source"),
            Endpoint::Destination => f.write_str("Destination"),
        }
    }
}

/// Error from trip planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Request rejected before any data was fetched
    #[error("invalid plan request: {0}")]
    InvalidInput(String),

    /// A stop name matched nothing, exactly or approximately. `notices`
    /// holds approximation notices for stops resolved before this one and
    /// is printed ahead of the message.
    #[error("{}{endpoint} {query} not found as a stop name!", preceding(.notices))]
    StopNotFound {
        endpoint: Endpoint,
        query: String,
        notices: Vec<String>,
    },
}

fn preceding(notices: &[String]) -> String {
    notices.iter().map(|n| format!("{n}\n")).collect()
}

/// Request to get from one named stop to another.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub source: String,
    pub destination: String,
}

impl PlanRequest {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Validate the request. Call before building a graph so bad input
    /// never costs a network round trip.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.source.trim().is_empty() {
            return Err(PlanError::InvalidInput(
                "source stop name is empty".to_string(),
            ));
        }
        if self.destination.trim().is_empty() {
            return Err(PlanError::InvalidInput(
                "destination stop name is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of planning: the resolved stops and, if one exists, the path.
#[derive(Debug, Clone)]
pub struct PlanOutcome<'g> {
    pub source: StopMatch<'g>,
    pub destination: StopMatch<'g>,
    /// `None` when the stops exist but no route sequence connects them.
    pub path: Option<RoutePath>,
}

/// Resolve both stop names and search for a route path between them.
///
/// Any route serving the destination stop is an acceptable last route.
pub fn plan<'g>(graph: &'g TransitGraph, request: &PlanRequest) -> Result<PlanOutcome<'g>, PlanError> {
    request.validate()?;

    let source = resolve_stop(graph, &request.source).ok_or_else(|| PlanError::StopNotFound {
        endpoint: Endpoint::Source,
        query: request.source.clone(),
        notices: Vec::new(),
    })?;

    let destination =
        resolve_stop(graph, &request.destination).ok_or_else(|| PlanError::StopNotFound {
            endpoint: Endpoint::Destination,
            query: request.destination.clone(),
            notices: source.notice(&request.source).into_iter().collect(),
        })?;

    let acceptable: HashSet<RouteIdx> = graph.routes_at(destination.idx).collect();
    let path = RouteSearch::new(graph).find_path(source.idx, &acceptable);

    Ok(PlanOutcome {
        source,
        destination,
        path,
    })
}

//! Trip planning over the route graph.
//!
//! Answers "which lines do I take from stop A to stop B?" by resolving
//! both stop names and running a breadth-first search in which routes
//! are nodes and shared stops are edges.

mod adjacency;
mod plan;
mod resolve;
mod search;

pub use adjacency::RouteAdjacency;
pub use plan::{Endpoint, PlanError, PlanOutcome, PlanRequest, plan};
pub use resolve::{MatchKind, StopMatch, resolve_stop};
pub use search::{RoutePath, RouteSearch, find_path};

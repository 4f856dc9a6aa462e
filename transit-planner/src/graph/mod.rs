//! The route/stop graph.
//!
//! [`TransitGraph`] is an arena of routes and stops with the association
//! between them stored as two index maps (route → stops, stop → routes).
//! [`GraphBuilder`] fills it from a [`TransitApi`], and the functions in
//! [`reports`] summarise it.

mod builder;
mod network;
pub mod reports;

pub use builder::{BuildConfig, BuildError, GraphBuilder, TransitApi, build_graph};
pub use network::{RouteIdx, StopIdx, TransitGraph};

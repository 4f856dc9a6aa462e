//! Builds a [`TransitGraph`] from API data.
//!
//! The route list is fetched once and fixes the set of routes. Stops are
//! then fetched one route at a time, in batches that run concurrently.
//! Batch results are merged in route order by a single writer, so the
//! canonical stop for each id and the enumeration order of the finished
//! graph don't depend on which response arrives first.

use std::slice;

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::domain::{Route, RouteId, RouteTypeFilter, Stop};
use crate::mbta::MbtaError;

use super::network::TransitGraph;

/// Source of route and stop data.
///
/// This abstraction lets the builder run against the live API, offline
/// fixtures, or in-memory test data.
#[allow(async_fn_in_trait)]
pub trait TransitApi {
    /// List routes whose type passes `filter`.
    async fn fetch_routes(&self, filter: &RouteTypeFilter) -> Result<Vec<Route>, MbtaError>;

    /// List stops served by any of `route_ids`.
    async fn fetch_stops(&self, route_ids: &[RouteId]) -> Result<Vec<Stop>, MbtaError>;
}

/// Error from a graph build. Any fetch failure aborts the whole build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to fetch routes: {0}")]
    Routes(#[source] MbtaError),

    #[error("failed to fetch stops for route {route}: {source}")]
    Stops {
        route: RouteId,
        #[source]
        source: MbtaError,
    },
}

/// Configuration for graph building.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Number of per-route stop requests issued concurrently.
    pub batch_size: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { batch_size: 8 }
    }
}

/// Fetches routes and stops and assembles them into a graph.
pub struct GraphBuilder<'a, A: TransitApi> {
    api: &'a A,
    config: BuildConfig,
}

impl<'a, A: TransitApi> GraphBuilder<'a, A> {
    pub fn new(api: &'a A, config: BuildConfig) -> Self {
        Self { api, config }
    }

    /// Build the graph for every route matching `filter`.
    ///
    /// Returns an error without a partial graph if any request fails.
    pub async fn build(&self, filter: &RouteTypeFilter) -> Result<TransitGraph, BuildError> {
        let routes = self
            .api
            .fetch_routes(filter)
            .await
            .map_err(BuildError::Routes)?;

        debug!(routes = routes.len(), "fetched routes");

        let mut served: Vec<Vec<Stop>> = Vec::with_capacity(routes.len());
        for batch in routes.chunks(self.config.batch_size.max(1)) {
            let futures = batch.iter().map(|route| self.fetch_route_stops(route));
            served.extend(try_join_all(futures).await?);
        }

        let graph = TransitGraph::assemble(routes.into_iter().zip(served));
        debug_assert!(graph.is_consistent());

        info!(
            routes = graph.route_count(),
            stops = graph.stop_count(),
            "built transit graph"
        );

        Ok(graph)
    }

    async fn fetch_route_stops(&self, route: &Route) -> Result<Vec<Stop>, BuildError> {
        let stops = self
            .api
            .fetch_stops(slice::from_ref(&route.id))
            .await
            .map_err(|source| BuildError::Stops {
                route: route.id.clone(),
                source,
            })?;

        debug!(route = %route.id, stops = stops.len(), "fetched stops");
        Ok(stops)
    }
}

/// Build a graph with the default configuration.
pub async fn build_graph<A: TransitApi>(
    api: &A,
    filter: &RouteTypeFilter,
) -> Result<TransitGraph, BuildError> {
    GraphBuilder::new(api, BuildConfig::default()).build(filter).await
}

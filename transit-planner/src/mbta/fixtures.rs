//! Offline transit data served from JSON files.
//!
//! Loads saved API responses from a directory and serves them as if they
//! were live responses, for development and tests without network access.
//!
//! Expected layout:
//!
//! ```text
//! <dir>/routes.json          # a /routes response
//! <dir>/stops/<route>.json   # a /stops?filter[route]=<route> response
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::{Route, RouteId, RouteTypeFilter, Stop};
use crate::graph::TransitApi;

use super::convert::{convert_routes, convert_stops};
use super::error::MbtaError;
use super::types::{RoutesDocument, StopsDocument};

/// Transit API backed by files on disk.
#[derive(Debug, Clone)]
pub struct FixtureApi {
    /// All routes, in file order.
    routes: Vec<Route>,
    /// Stops per route, keyed by the file stem of `stops/<route>.json`.
    stops: HashMap<RouteId, Vec<Stop>>,
}

impl FixtureApi {
    /// Load fixture data from a directory.
    ///
    /// `routes.json` is required; the `stops/` directory is optional, and
    /// a route without a stop file simply has no stops.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, MbtaError> {
        let dir = dir.as_ref();

        let routes_doc: RoutesDocument = read_json(&dir.join("routes.json"))?;
        let routes = convert_routes(&routes_doc)?;

        let mut stops = HashMap::new();
        let stops_dir = dir.join("stops");
        if stops_dir.is_dir() {
            let entries = std::fs::read_dir(&stops_dir).map_err(|e| MbtaError::Fixture {
                message: format!("failed to read {}: {e}", stops_dir.display()),
            })?;

            for entry in entries {
                let entry = entry.map_err(|e| MbtaError::Fixture {
                    message: format!("failed to read directory entry: {e}"),
                })?;

                let path = entry.path();
                if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                    continue;
                }

                let route_id = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .ok_or_else(|| MbtaError::Fixture {
                        message: format!("invalid filename: {}", path.display()),
                    })?;

                let doc: StopsDocument = read_json(&path)?;
                stops.insert(RouteId::new(route_id), convert_stops(&doc)?);
            }
        }

        Ok(Self::from_parts(routes, stops))
    }

    /// Build fixture data directly from domain values.
    pub fn from_parts(routes: Vec<Route>, stops: HashMap<RouteId, Vec<Stop>>) -> Self {
        Self { routes, stops }
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

impl TransitApi for FixtureApi {
    async fn fetch_routes(&self, filter: &RouteTypeFilter) -> Result<Vec<Route>, MbtaError> {
        Ok(self
            .routes
            .iter()
            .filter(|r| filter.matches(r.route_type))
            .cloned()
            .collect())
    }

    /// Stops for the given routes, each stop at most once, in the order of
    /// `route_ids` then file order. No ids means every known stop.
    async fn fetch_stops(&self, route_ids: &[RouteId]) -> Result<Vec<Stop>, MbtaError> {
        let all_ids: Vec<RouteId>;
        let ids: &[RouteId] = if route_ids.is_empty() {
            all_ids = self.routes.iter().map(|r| r.id.clone()).collect();
            &all_ids
        } else {
            route_ids
        };

        let mut seen = HashSet::new();
        let stops = ids
            .iter()
            .filter_map(|id| self.stops.get(id))
            .flatten()
            .filter(|stop| seen.insert(stop.id.clone()))
            .cloned()
            .collect();

        Ok(stops)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, MbtaError> {
    let json = std::fs::read_to_string(path).map_err(|e| MbtaError::Fixture {
        message: format!("failed to read {}: {e}", path.display()),
    })?;

    serde_json::from_str(&json).map_err(|e| MbtaError::Json {
        message: format!("{}: {e}", path.display()),
        body: None,
    })
}

//! Arena storage for routes, stops and their association.

use std::collections::{BTreeSet, HashMap};

use tracing::warn;

use crate::domain::{Route, RouteId, Stop, StopId};

/// Position of a route in a [`TransitGraph`].
///
/// Indices follow the order routes were first added, so iterating a set of
/// them enumerates routes in API order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteIdx(usize);

impl RouteIdx {
    /// Dense position in `0..graph.route_count()`.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Position of a stop in a [`TransitGraph`], in first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopIdx(usize);

/// Routes, stops, and which routes serve which stops.
///
/// Every route id and stop id occurs exactly once. The association is kept
/// symmetric: a stop is in a route's stop set exactly when the route is in
/// the stop's route set. Both sets exist (possibly empty) for every record
/// from the moment it is added.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    routes: Vec<Route>,
    stops: Vec<Stop>,
    route_lookup: HashMap<RouteId, RouteIdx>,
    stop_lookup: HashMap<StopId, StopIdx>,
    route_stops: Vec<BTreeSet<StopIdx>>,
    stop_routes: Vec<BTreeSet<RouteIdx>>,
}

impl TransitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a graph from routes paired with the stops each one serves.
    ///
    /// Routes and stops are registered in iteration order. The first record
    /// seen for an id is canonical; later records with the same id are
    /// merged into it, taking the union of their associations.
    pub fn assemble<I, S>(served: I) -> Self
    where
        I: IntoIterator<Item = (Route, S)>,
        S: IntoIterator<Item = Stop>,
    {
        let mut graph = Self::new();
        for (route, stops) in served {
            let route_idx = graph.add_route(route);
            for stop in stops {
                let stop_idx = graph.add_stop(stop);
                graph.connect(route_idx, stop_idx);
            }
        }
        graph
    }

    fn add_route(&mut self, route: Route) -> RouteIdx {
        if let Some(&idx) = self.route_lookup.get(&route.id) {
            if self.routes[idx.0] != route {
                warn!(route = %route.id, "duplicate route id with different attributes, keeping first");
            }
            return idx;
        }

        let idx = RouteIdx(self.routes.len());
        self.route_lookup.insert(route.id.clone(), idx);
        self.routes.push(route);
        self.route_stops.push(BTreeSet::new());
        idx
    }

    fn add_stop(&mut self, stop: Stop) -> StopIdx {
        if let Some(&idx) = self.stop_lookup.get(&stop.id) {
            return idx;
        }

        let idx = StopIdx(self.stops.len());
        self.stop_lookup.insert(stop.id.clone(), idx);
        self.stops.push(stop);
        self.stop_routes.push(BTreeSet::new());
        idx
    }

    fn connect(&mut self, route: RouteIdx, stop: StopIdx) {
        self.route_stops[route.0].insert(stop);
        self.stop_routes[stop.0].insert(route);
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route(&self, idx: RouteIdx) -> &Route {
        &self.routes[idx.0]
    }

    pub fn stop(&self, idx: StopIdx) -> &Stop {
        &self.stops[idx.0]
    }

    pub fn route_by_id(&self, id: &RouteId) -> Option<RouteIdx> {
        self.route_lookup.get(id).copied()
    }

    pub fn stop_by_id(&self, id: &StopId) -> Option<StopIdx> {
        self.stop_lookup.get(id).copied()
    }

    /// All routes in enumeration order.
    pub fn routes(&self) -> impl Iterator<Item = (RouteIdx, &Route)> {
        self.routes.iter().enumerate().map(|(i, r)| (RouteIdx(i), r))
    }

    /// All stops in enumeration order.
    pub fn stops(&self) -> impl Iterator<Item = (StopIdx, &Stop)> {
        self.stops.iter().enumerate().map(|(i, s)| (StopIdx(i), s))
    }

    /// Stops served by a route.
    pub fn stops_of(&self, route: RouteIdx) -> impl Iterator<Item = StopIdx> + '_ {
        self.route_stops[route.0].iter().copied()
    }

    /// Routes serving a stop.
    pub fn routes_at(&self, stop: StopIdx) -> impl Iterator<Item = RouteIdx> + '_ {
        self.stop_routes[stop.0].iter().copied()
    }

    pub fn stop_count_of(&self, route: RouteIdx) -> usize {
        self.route_stops[route.0].len()
    }

    pub fn route_count_at(&self, stop: StopIdx) -> usize {
        self.stop_routes[stop.0].len()
    }

    pub fn serves(&self, route: RouteIdx, stop: StopIdx) -> bool {
        self.route_stops[route.0].contains(&stop)
    }

    /// Check that the association is symmetric in both directions.
    pub fn is_consistent(&self) -> bool {
        let forward = self.route_stops.iter().enumerate().all(|(r, stops)| {
            stops
                .iter()
                .all(|s| self.stop_routes[s.0].contains(&RouteIdx(r)))
        });
        let backward = self.stop_routes.iter().enumerate().all(|(s, routes)| {
            routes
                .iter()
                .all(|r| self.route_stops[r.0].contains(&StopIdx(s)))
        });
        forward && backward
    }
}

//! BFS over routes.
//!
//! The search graph's nodes are routes, not stops: each hop is a transfer
//! between two routes that share a stop. BFS therefore finds a path with
//! the fewest route segments.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use crate::graph::{RouteIdx, StopIdx, TransitGraph};

use super::adjacency::RouteAdjacency;

/// A sequence of routes, each sharing a stop with the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath(Vec<RouteIdx>);

impl RoutePath {
    pub fn routes(&self) -> &[RouteIdx] {
        &self.0
    }

    /// Number of route segments. Never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn transfers(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Display names of the routes, in travel order.
    pub fn names<'g>(&self, graph: &'g TransitGraph) -> Vec<&'g str> {
        self.0
            .iter()
            .map(|&r| graph.route(r).display_name())
            .collect()
    }
}

/// Route search over one graph; adjacency is computed once up front.
pub struct RouteSearch<'g> {
    graph: &'g TransitGraph,
    adjacency: RouteAdjacency,
}

impl<'g> RouteSearch<'g> {
    pub fn new(graph: &'g TransitGraph) -> Self {
        Self {
            graph,
            adjacency: RouteAdjacency::build(graph),
        }
    }

    /// Find a shortest route sequence from `source` to any route in
    /// `destinations`.
    ///
    /// Every route serving `source` seeds the search. A path is accepted as
    /// soon as it is dequeued with its last route in `destinations`, seeds
    /// included, so a direct route gives a one-segment path. Among equally
    /// short paths the first discovered wins, which follows the order of
    /// the source's routes and then of each route's neighbours.
    ///
    /// Returns `None` when no path exists, including when `source` is served
    /// by no routes.
    pub fn find_path(&self, source: StopIdx, destinations: &HashSet<RouteIdx>) -> Option<RoutePath> {
        // Predecessor of every discovered route; doubles as the visited set.
        let mut came_from: HashMap<RouteIdx, Option<RouteIdx>> = HashMap::new();
        let mut queue: VecDeque<RouteIdx> = VecDeque::new();

        for route in self.graph.routes_at(source) {
            if came_from.insert(route, None).is_none() {
                queue.push_back(route);
            }
        }

        let mut explored = 0;
        while let Some(route) = queue.pop_front() {
            explored += 1;

            if destinations.contains(&route) {
                let path = reconstruct(&came_from, route);
                debug!(explored, segments = path.len(), "route path found");
                return Some(path);
            }

            for next in self.adjacency.neighbours(route) {
                if let Entry::Vacant(entry) = came_from.entry(next) {
                    trace!(from = %self.graph.route(route).id, to = %self.graph.route(next).id, "enqueue");
                    entry.insert(Some(route));
                    queue.push_back(next);
                }
            }
        }

        debug!(explored, "no route path");
        None
    }
}

/// Convenience wrapper that builds the adjacency for a single search.
pub fn find_path(
    graph: &TransitGraph,
    source: StopIdx,
    destinations: &HashSet<RouteIdx>,
) -> Option<RoutePath> {
    RouteSearch::new(graph).find_path(source, destinations)
}

fn reconstruct(came_from: &HashMap<RouteIdx, Option<RouteIdx>>, last: RouteIdx) -> RoutePath {
    let mut routes = vec![last];
    let mut current = last;
    while let Some(&Some(previous)) = came_from.get(&current) {
        routes.push(previous);
        current = previous;
    }
    routes.reverse();
    RoutePath(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Route, RouteType, Stop};
    use proptest::prelude::*;

    fn route(id: &str) -> Route {
        Route::new(id, RouteType::HEAVY_RAIL, format!("{id} Line"))
    }

    fn stops(ids: &[&str]) -> Vec<Stop> {
        ids.iter().map(|id| Stop::new(*id, id.to_uppercase())).collect()
    }

    fn stop(graph: &TransitGraph, id: &str) -> StopIdx {
        graph.stop_by_id(&id.into()).unwrap()
    }

    fn routes(graph: &TransitGraph, ids: &[&str]) -> HashSet<RouteIdx> {
        ids.iter()
            .map(|id| graph.route_by_id(&(*id).into()).unwrap())
            .collect()
    }

    fn ids(graph: &TransitGraph, path: &RoutePath) -> Vec<String> {
        path.routes()
            .iter()
            .map(|&r| graph.route(r).id.to_string())
            .collect()
    }

    #[test]
    fn one_transfer() {
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["a", "b"])),
            (route("Green"), stops(&["b", "c"])),
        ]);

        let path = find_path(&graph, stop(&graph, "a"), &routes(&graph, &["Green"])).unwrap();
        assert_eq!(ids(&graph, &path), ["Red", "Green"]);
        assert_eq!(path.transfers(), 1);
        assert_eq!(path.names(&graph), ["Red Line", "Green Line"]);
    }

    #[test]
    fn direct_route_needs_no_transfer() {
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["a", "b"])),
            (route("Green"), stops(&["b", "c"])),
        ]);

        let path = find_path(&graph, stop(&graph, "b"), &routes(&graph, &["Green"])).unwrap();
        assert_eq!(ids(&graph, &path), ["Green"]);
        assert_eq!(path.transfers(), 0);
    }

    #[test]
    fn disjoint_routes_have_no_path() {
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["x", "y"])),
            (route("Blue"), stops(&["z"])),
        ]);

        assert!(find_path(&graph, stop(&graph, "x"), &routes(&graph, &["Blue"])).is_none());
    }

    #[test]
    fn empty_destination_set_has_no_path() {
        let graph = TransitGraph::assemble([(route("Red"), stops(&["a"]))]);
        assert!(find_path(&graph, stop(&graph, "a"), &HashSet::new()).is_none());
    }

    #[test]
    fn prefers_fewest_segments() {
        // Long way: Red -> Orange -> Blue -> Green. Short way: Red -> Silver -> Green.
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["start", "r-o", "r-s"])),
            (route("Orange"), stops(&["r-o", "o-b"])),
            (route("Blue"), stops(&["o-b", "b-g"])),
            (route("Silver"), stops(&["r-s", "s-g"])),
            (route("Green"), stops(&["b-g", "s-g", "end"])),
        ]);

        let path = find_path(&graph, stop(&graph, "start"), &routes(&graph, &["Green"])).unwrap();
        assert_eq!(ids(&graph, &path), ["Red", "Silver", "Green"]);
    }

    #[test]
    fn terminates_on_cycles() {
        let graph = TransitGraph::assemble([
            (route("A"), stops(&["ab", "ca", "start"])),
            (route("B"), stops(&["ab", "bc"])),
            (route("C"), stops(&["bc", "ca"])),
            (route("Island"), stops(&["far"])),
        ]);

        assert!(find_path(&graph, stop(&graph, "start"), &routes(&graph, &["Island"])).is_none());
    }

    #[test]
    fn ties_follow_enumeration_order() {
        // Two equally short ways from Red to Green; Orange comes first.
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["start", "r-o", "r-b"])),
            (route("Orange"), stops(&["r-o", "o-g"])),
            (route("Blue"), stops(&["r-b", "b-g"])),
            (route("Green"), stops(&["o-g", "b-g"])),
        ]);

        let path = find_path(&graph, stop(&graph, "start"), &routes(&graph, &["Green"])).unwrap();
        assert_eq!(ids(&graph, &path), ["Red", "Orange", "Green"]);
    }

    #[test]
    fn multiple_seed_routes() {
        // Source is served by Red and Mattapan; only Mattapan reaches Bus.
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["ashmont", "park"])),
            (route("Mattapan"), stops(&["ashmont", "mattapan"])),
            (route("Bus"), stops(&["mattapan", "dudley"])),
        ]);

        let path = find_path(&graph, stop(&graph, "ashmont"), &routes(&graph, &["Bus"])).unwrap();
        assert_eq!(ids(&graph, &path), ["Mattapan", "Bus"]);
    }

    #[test]
    fn any_destination_route_is_acceptable() {
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["a", "b"])),
            (route("Green-B"), stops(&["b", "x"])),
            (route("Green-C"), stops(&["b", "x"])),
        ]);

        let destinations = routes(&graph, &["Green-B", "Green-C"]);
        let path = find_path(&graph, stop(&graph, "a"), &destinations).unwrap();
        assert_eq!(ids(&graph, &path), ["Red", "Green-B"]);
    }

    #[test]
    fn search_can_be_reused() {
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["a", "b"])),
            (route("Green"), stops(&["b", "c"])),
        ]);
        let search = RouteSearch::new(&graph);
        let green = routes(&graph, &["Green"]);

        assert_eq!(search.find_path(stop(&graph, "a"), &green).unwrap().len(), 2);
        assert_eq!(search.find_path(stop(&graph, "c"), &green).unwrap().len(), 1);
    }

    /// Shortest distance (in segments) from any source route to any
    /// destination route, computed by layered set expansion over stops.
    fn reference_distance(
        graph: &TransitGraph,
        source: StopIdx,
        destinations: &HashSet<RouteIdx>,
    ) -> Option<usize> {
        let mut frontier: HashSet<RouteIdx> = graph.routes_at(source).collect();
        let mut seen = frontier.clone();
        let mut depth = 1;
        while !frontier.is_empty() {
            if frontier.iter().any(|r| destinations.contains(r)) {
                return Some(depth);
            }
            let next: HashSet<RouteIdx> = frontier
                .iter()
                .flat_map(|&r| graph.stops_of(r).collect::<Vec<_>>())
                .flat_map(|s| graph.routes_at(s).collect::<Vec<_>>())
                .filter(|r| !seen.contains(r))
                .collect();
            seen.extend(next.iter().copied());
            frontier = next;
            depth += 1;
        }
        None
    }

    fn network() -> impl Strategy<Value = Vec<Vec<usize>>> {
        prop::collection::vec(prop::collection::vec(0usize..10, 1..4), 1..9)
    }

    proptest! {
        /// Paths are valid chains and as short as any other connection.
        #[test]
        fn paths_are_valid_and_minimal(
            network in network(),
            source_pick in any::<prop::sample::Index>(),
            dest_picks in prop::collection::vec(any::<prop::sample::Index>(), 1..3),
        ) {
            let graph = TransitGraph::assemble(network.iter().enumerate().map(|(r, stops)| {
                (
                    Route::new(format!("r{r}"), RouteType::BUS, ""),
                    stops.iter().map(|s| Stop::new(format!("s{s}"), format!("Stop {s}"))).collect::<Vec<_>>(),
                )
            }));

            let all_stops: Vec<StopIdx> = graph.stops().map(|(idx, _)| idx).collect();
            let all_routes: Vec<RouteIdx> = graph.routes().map(|(idx, _)| idx).collect();
            let source = *source_pick.get(&all_stops);
            let destinations: HashSet<RouteIdx> =
                dest_picks.iter().map(|p| *p.get(&all_routes)).collect();

            let found = find_path(&graph, source, &destinations);
            let expected = reference_distance(&graph, source, &destinations);

            prop_assert_eq!(found.as_ref().map(RoutePath::len), expected);

            if let Some(path) = found {
                let routes = path.routes();
                prop_assert!(graph.serves(routes[0], source));
                prop_assert!(destinations.contains(routes.last().unwrap()));
                let adjacency = RouteAdjacency::build(&graph);
                for pair in routes.windows(2) {
                    prop_assert!(adjacency.are_adjacent(pair[0], pair[1]));
                }
                let distinct: HashSet<_> = routes.iter().collect();
                prop_assert_eq!(distinct.len(), routes.len());
            }
        }
    }
}

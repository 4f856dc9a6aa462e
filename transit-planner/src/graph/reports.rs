//! Aggregate summaries of a built graph.

use crate::domain::{Route, Stop};

use super::network::TransitGraph;

/// A route together with how many stops it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteStopCount<'g> {
    pub route: &'g Route,
    pub stops: usize,
}

/// A stop together with every route serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedStop<'g> {
    pub stop: &'g Stop,
    pub routes: Vec<&'g Route>,
}

/// The route serving the most stops. Ties go to the earliest route.
pub fn most_stops(graph: &TransitGraph) -> Option<RouteStopCount<'_>> {
    pick_route(graph, |candidate, best| candidate > best)
}

/// The route serving the fewest stops. Ties go to the earliest route.
pub fn least_stops(graph: &TransitGraph) -> Option<RouteStopCount<'_>> {
    pick_route(graph, |candidate, best| candidate < best)
}

fn pick_route(
    graph: &TransitGraph,
    better: impl Fn(usize, usize) -> bool,
) -> Option<RouteStopCount<'_>> {
    graph
        .routes()
        .map(|(idx, route)| RouteStopCount {
            route,
            stops: graph.stop_count_of(idx),
        })
        .reduce(|best, candidate| {
            if better(candidate.stops, best.stops) {
                candidate
            } else {
                best
            }
        })
}

/// Stops served by at least `min_routes` routes, in stop enumeration order.
pub fn shared_stops(graph: &TransitGraph, min_routes: usize) -> Vec<SharedStop<'_>> {
    graph
        .stops()
        .filter(|(idx, _)| graph.route_count_at(*idx) >= min_routes)
        .map(|(idx, stop)| SharedStop {
            stop,
            routes: graph.routes_at(idx).map(|r| graph.route(r)).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteType;

    fn route(id: &str) -> Route {
        Route::new(id, RouteType::HEAVY_RAIL, format!("{id} Line"))
    }

    fn stops(ids: &[&str]) -> Vec<Stop> {
        ids.iter().map(|id| Stop::new(*id, id.to_uppercase())).collect()
    }

    #[test]
    fn max_and_min_by_stop_count() {
        let graph = TransitGraph::assemble([
            (route("Three"), stops(&["a", "b", "c"])),
            (route("One"), stops(&["d"])),
            (route("Five"), stops(&["e", "f", "g", "h", "i"])),
        ]);

        let most = most_stops(&graph).unwrap();
        assert_eq!(most.route.id.as_str(), "Five");
        assert_eq!(most.stops, 5);

        let least = least_stops(&graph).unwrap();
        assert_eq!(least.route.id.as_str(), "One");
        assert_eq!(least.stops, 1);
    }

    #[test]
    fn ties_go_to_first_route() {
        let graph = TransitGraph::assemble([
            (route("First"), stops(&["a", "b"])),
            (route("Second"), stops(&["c", "d"])),
        ]);

        assert_eq!(most_stops(&graph).unwrap().route.id.as_str(), "First");
        assert_eq!(least_stops(&graph).unwrap().route.id.as_str(), "First");
    }

    #[test]
    fn empty_graph_has_no_extremes() {
        let graph = TransitGraph::new();
        assert!(most_stops(&graph).is_none());
        assert!(least_stops(&graph).is_none());
        assert!(shared_stops(&graph, 2).is_empty());
    }

    #[test]
    fn route_without_stops_counts_as_zero() {
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["a"])),
            (route("Ghost"), Vec::new()),
        ]);

        let least = least_stops(&graph).unwrap();
        assert_eq!(least.route.id.as_str(), "Ghost");
        assert_eq!(least.stops, 0);
    }

    #[test]
    fn shared_stops_lists_transfer_points() {
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["alewife", "park", "dtx"])),
            (route("Green"), stops(&["park", "gov"])),
            (route("Orange"), stops(&["dtx", "state"])),
            (route("Blue"), stops(&["gov", "state"])),
        ]);

        let shared = shared_stops(&graph, 2);
        let summary: Vec<(&str, Vec<&str>)> = shared
            .iter()
            .map(|s| {
                (
                    s.stop.id.as_str(),
                    s.routes.iter().map(|r| r.id.as_str()).collect(),
                )
            })
            .collect();

        assert_eq!(
            summary,
            vec![
                ("park", vec!["Red", "Green"]),
                ("dtx", vec!["Red", "Orange"]),
                ("gov", vec!["Green", "Blue"]),
                ("state", vec!["Orange", "Blue"]),
            ]
        );
    }
}

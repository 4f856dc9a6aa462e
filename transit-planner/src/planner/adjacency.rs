//! Route-to-route adjacency: two routes are adjacent when they share a stop.

use std::collections::BTreeSet;

use crate::graph::{RouteIdx, TransitGraph};

/// Adjacency sets over the routes of a graph.
///
/// Neighbours iterate in route enumeration order, which makes BFS
/// tie-breaking deterministic.
#[derive(Debug, Clone)]
pub struct RouteAdjacency {
    neighbours: Vec<BTreeSet<RouteIdx>>,
}

impl RouteAdjacency {
    pub fn build(graph: &TransitGraph) -> Self {
        let neighbours = graph
            .routes()
            .map(|(route, _)| {
                graph
                    .stops_of(route)
                    .flat_map(|stop| graph.routes_at(stop))
                    .filter(|&other| other != route)
                    .collect()
            })
            .collect();

        Self { neighbours }
    }

    pub fn neighbours(&self, route: RouteIdx) -> impl Iterator<Item = RouteIdx> + '_ {
        self.neighbours[route.index()].iter().copied()
    }

    pub fn are_adjacent(&self, a: RouteIdx, b: RouteIdx) -> bool {
        self.neighbours[a.index()].contains(&b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Route, RouteType, Stop};

    fn route(id: &str) -> Route {
        Route::new(id, RouteType::HEAVY_RAIL, id)
    }

    fn stops(ids: &[&str]) -> Vec<Stop> {
        ids.iter().map(|id| Stop::new(*id, *id)).collect()
    }

    #[test]
    fn shared_stop_makes_routes_adjacent() {
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["a", "b"])),
            (route("Green"), stops(&["b", "c"])),
            (route("Blue"), stops(&["z"])),
        ]);
        let adjacency = RouteAdjacency::build(&graph);

        let red = graph.route_by_id(&"Red".into()).unwrap();
        let green = graph.route_by_id(&"Green".into()).unwrap();
        let blue = graph.route_by_id(&"Blue".into()).unwrap();

        assert!(adjacency.are_adjacent(red, green));
        assert!(adjacency.are_adjacent(green, red));
        assert!(!adjacency.are_adjacent(red, blue));
        assert_eq!(adjacency.neighbours(blue).count(), 0);
    }

    #[test]
    fn route_is_never_its_own_neighbour() {
        let graph = TransitGraph::assemble([
            (route("Red"), stops(&["a", "b"])),
            (route("Green"), stops(&["a", "b"])),
        ]);
        let adjacency = RouteAdjacency::build(&graph);
        let red = graph.route_by_id(&"Red".into()).unwrap();

        assert!(!adjacency.are_adjacent(red, red));
        assert_eq!(adjacency.neighbours(red).count(), 1);
    }

    #[test]
    fn neighbours_follow_route_order() {
        let graph = TransitGraph::assemble([
            (route("Hub"), stops(&["x"])),
            (route("A"), stops(&["y"])),
            (route("B"), stops(&["x"])),
            (route("C"), stops(&["x", "y"])),
        ]);
        let adjacency = RouteAdjacency::build(&graph);
        let hub = graph.route_by_id(&"Hub".into()).unwrap();

        let names: Vec<_> = adjacency
            .neighbours(hub)
            .map(|r| graph.route(r).id.as_str())
            .collect();
        assert_eq!(names, ["B", "C"]);
    }
}

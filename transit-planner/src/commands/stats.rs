use crate::domain::RouteTypeFilter;
use crate::graph::reports::{least_stops, most_stops, shared_stops};
use crate::graph::{GraphBuilder, TransitApi};

use super::CommandError;

/// Routes with the most and fewest stops, then every stop served by at
/// least two routes.
pub async fn stop_stats<A: TransitApi>(
    builder: &GraphBuilder<'_, A>,
    filter: &RouteTypeFilter,
) -> Result<Vec<String>, CommandError> {
    let graph = builder.build(filter).await?;
    let mut out = Vec::new();

    match most_stops(&graph) {
        Some(most) => out.push(format!(
            "Route with the most stops: {} ({})",
            most.route.display_name(),
            most.stops
        )),
        None => out.push(
            "There were no routes found; maximum stops couldn't be calculated".to_string(),
        ),
    }

    match least_stops(&graph) {
        Some(least) => out.push(format!(
            "Route with the least stops: {} ({})",
            least.route.display_name(),
            least.stops
        )),
        None => out.push(
            "There were no routes found; minimum stops couldn't be calculated".to_string(),
        ),
    }

    out.push("Stops on at least two routes:".to_string());
    for shared in shared_stops(&graph, 2) {
        let routes: Vec<&str> = shared.routes.iter().map(|r| r.display_name()).collect();
        out.push(format!("    {}: {}", shared.stop.name, routes.join(", ")));
    }

    Ok(out)
}

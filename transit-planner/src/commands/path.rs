use crate::domain::RouteTypeFilter;
use crate::graph::{GraphBuilder, TransitApi};
use crate::planner::{PlanRequest, plan};

use super::CommandError;

/// Which lines to take from one named stop to another.
///
/// The request is validated before anything is fetched. Approximation
/// notices for either stop name come first in the output, or first in the
/// error message when the other stop can't be found.
pub async fn route_path<A: TransitApi>(
    builder: &GraphBuilder<'_, A>,
    filter: &RouteTypeFilter,
    request: &PlanRequest,
) -> Result<Vec<String>, CommandError> {
    request.validate()?;

    let graph = builder.build(filter).await?;
    let outcome = plan(&graph, request)?;

    let mut out = Vec::new();
    out.extend(outcome.source.notice(&request.source));
    out.extend(outcome.destination.notice(&request.destination));

    match outcome.path {
        Some(path) => out.push(format!(
            "Path from {} to {}: {}",
            request.source,
            request.destination,
            path.names(&graph).join(", ")
        )),
        None => out.push(format!(
            "No path from {} to {} could be found",
            request.source, request.destination
        )),
    }

    Ok(out)
}

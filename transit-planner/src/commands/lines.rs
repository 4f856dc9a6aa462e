use crate::domain::RouteTypeFilter;
use crate::graph::{BuildError, TransitApi};

use super::CommandError;

/// Long names of all routes matching `filter`, comma-separated on one line.
///
/// Only the route list is needed, so no stops are fetched.
pub async fn list_routes<A: TransitApi>(
    api: &A,
    filter: &RouteTypeFilter,
) -> Result<Vec<String>, CommandError> {
    let routes = api
        .fetch_routes(filter)
        .await
        .map_err(BuildError::Routes)?;

    let names: Vec<&str> = routes.iter().map(|r| r.display_name()).collect();
    Ok(vec![names.join(", ")])
}

//! Conversion from MBTA DTOs to domain types.

use crate::domain::{Direction, Route, RouteType, Stop};

use super::types::{Resource, RouteAttributes, RoutesDocument, StopAttributes, StopsDocument};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Resource has the wrong JSON:API type
    #[error("expected resource of type {expected}, found {found:?}")]
    UnexpectedType { expected: &'static str, found: String },

    /// Resource has an empty id
    #[error("{0} resource has an empty id")]
    EmptyId(&'static str),

    /// Direction names and destinations are not index-aligned
    #[error("route {route} has {names} direction names but {destinations} destinations")]
    DirectionMismatch {
        route: String,
        names: usize,
        destinations: usize,
    },
}

/// Convert a `/routes` document, preserving API order.
pub fn convert_routes(doc: &RoutesDocument) -> Result<Vec<Route>, ConversionError> {
    doc.data.iter().map(convert_route).collect()
}

/// Convert a `/stops` document, preserving API order.
pub fn convert_stops(doc: &StopsDocument) -> Result<Vec<Stop>, ConversionError> {
    doc.data.iter().map(convert_stop).collect()
}

fn convert_route(resource: &Resource<RouteAttributes>) -> Result<Route, ConversionError> {
    check_resource(resource, "route")?;
    let attrs = &resource.attributes;

    if attrs.direction_names.len() != attrs.direction_destinations.len() {
        return Err(ConversionError::DirectionMismatch {
            route: resource.id.clone(),
            names: attrs.direction_names.len(),
            destinations: attrs.direction_destinations.len(),
        });
    }

    let directions = attrs
        .direction_names
        .iter()
        .zip(&attrs.direction_destinations)
        .map(|(name, destination)| Direction::new(or_empty(name), or_empty(destination)))
        .collect();

    Ok(Route {
        id: resource.id.as_str().into(),
        route_type: RouteType::new(attrs.route_type),
        short_name: or_empty(&attrs.short_name),
        long_name: or_empty(&attrs.long_name),
        directions,
        description: or_empty(&attrs.description),
    })
}

fn convert_stop(resource: &Resource<StopAttributes>) -> Result<Stop, ConversionError> {
    check_resource(resource, "stop")?;
    Ok(Stop::new(
        resource.id.clone(),
        or_empty(&resource.attributes.name),
    ))
}

fn check_resource<A>(resource: &Resource<A>, expected: &'static str) -> Result<(), ConversionError> {
    if resource.kind != expected {
        return Err(ConversionError::UnexpectedType {
            expected,
            found: resource.kind.clone(),
        });
    }
    if resource.id.is_empty() {
        return Err(ConversionError::EmptyId(expected));
    }
    Ok(())
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

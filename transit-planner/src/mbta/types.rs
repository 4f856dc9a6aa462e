//! MBTA API response DTOs.
//!
//! These types map directly to the JSON:API documents returned by the
//! `/routes` and `/stops` endpoints. String attributes are `Option`
//! because the API sends explicit `null`s for many of them.

use serde::Deserialize;

/// Top-level JSON:API document: a list of resources.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<A> {
    pub data: Vec<Resource<A>>,
}

/// A single JSON:API resource object.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource<A> {
    /// Resource type, `"route"` or `"stop"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Stable API identifier.
    pub id: String,

    pub attributes: A,
}

/// Attributes of a `route` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteAttributes {
    /// GTFS route type (0 = light rail, 1 = heavy rail, ...).
    #[serde(rename = "type")]
    pub route_type: u8,

    pub short_name: Option<String>,

    pub long_name: Option<String>,

    /// Direction names, index-aligned with `direction_destinations`.
    #[serde(default)]
    pub direction_names: Vec<Option<String>>,

    #[serde(default)]
    pub direction_destinations: Vec<Option<String>>,

    pub description: Option<String>,
}

/// Attributes of a `stop` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct StopAttributes {
    pub name: Option<String>,
}

pub type RoutesDocument = Document<RouteAttributes>;
pub type StopsDocument = Document<StopAttributes>;

//! Route identifiers and route records.

use std::fmt;

use super::RouteType;

/// Opaque, API-assigned route identifier (e.g. `Red`, `Green-B`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        RouteId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(s: &str) -> Self {
        RouteId::new(s)
    }
}

/// One travel direction of a route, e.g. `South` towards `Ashmont/Braintree`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Direction {
    pub name: String,
    pub destination: String,
}

impl Direction {
    pub fn new(name: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
        }
    }
}

/// A transit line.
///
/// This is an immutable value: equality and hashing cover only the id and
/// the static attributes. Which stops a route serves is recorded by
/// [`TransitGraph`](crate::graph::TransitGraph), never here.
///
/// Direction names and destinations are stored pairwise, so the two lists
/// the API reports separately can never disagree in length once converted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    pub id: RouteId,
    pub route_type: RouteType,
    pub short_name: String,
    pub long_name: String,
    pub directions: Vec<Direction>,
    pub description: String,
}

impl Route {
    /// Create a route with no short name, directions or description.
    pub fn new(id: impl Into<String>, route_type: RouteType, long_name: impl Into<String>) -> Self {
        Self {
            id: RouteId::new(id),
            route_type,
            short_name: String::new(),
            long_name: long_name.into(),
            directions: Vec::new(),
            description: String::new(),
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.directions.push(direction);
        self
    }

    /// Name to show to users: the long name, falling back to the short
    /// name and finally the id.
    pub fn display_name(&self) -> &str {
        if !self.long_name.is_empty() {
            &self.long_name
        } else if !self.short_name.is_empty() {
            &self.short_name
        } else {
            self.id.as_str()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn red() -> Route {
        Route::new("Red", RouteType::HEAVY_RAIL, "Red Line")
            .with_description("Rapid Transit")
            .with_direction(Direction::new("South", "Ashmont/Braintree"))
            .with_direction(Direction::new("North", "Alewife"))
    }

    #[test]
    fn equal_routes_hash_together() {
        let mut set = HashSet::new();
        set.insert(red());
        assert!(set.contains(&red()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn attributes_take_part_in_equality() {
        let renamed = Route {
            long_name: "Crimson Line".to_string(),
            ..red()
        };
        assert_ne!(red(), renamed);
    }

    #[test]
    fn display_name_falls_back() {
        assert_eq!(red().display_name(), "Red Line");

        let bus = Route::new("1", RouteType::BUS, "").with_short_name("1");
        assert_eq!(bus.display_name(), "1");

        let bare = Route::new("Shuttle-X", RouteType::BUS, "");
        assert_eq!(bare.display_name(), "Shuttle-X");
    }

    #[test]
    fn route_id_display() {
        let id = RouteId::from("Green-B");
        assert_eq!(id.as_str(), "Green-B");
        assert_eq!(format!("{id}"), "Green-B");
    }
}

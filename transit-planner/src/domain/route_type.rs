//! Transit mode codes and route-type filters.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid route type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route type {input:?}: {reason}")]
pub struct InvalidRouteType {
    input: String,
    reason: &'static str,
}

/// GTFS route type code as reported by the API.
///
/// The API uses small non-negative integers; the well-known values are
/// exposed as associated constants. Unknown codes are still representable
/// so that new modes don't break deserialization.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::RouteType;
///
/// assert_eq!("1".parse::<RouteType>().unwrap(), RouteType::HEAVY_RAIL);
/// assert_eq!("light-rail".parse::<RouteType>().unwrap(), RouteType::LIGHT_RAIL);
/// assert!("-1".parse::<RouteType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteType(u8);

impl RouteType {
    pub const LIGHT_RAIL: RouteType = RouteType(0);
    pub const HEAVY_RAIL: RouteType = RouteType(1);
    pub const COMMUTER_RAIL: RouteType = RouteType(2);
    pub const BUS: RouteType = RouteType(3);
    pub const FERRY: RouteType = RouteType(4);

    const NAMED: [(RouteType, &'static str); 5] = [
        (Self::LIGHT_RAIL, "light-rail"),
        (Self::HEAVY_RAIL, "heavy-rail"),
        (Self::COMMUTER_RAIL, "commuter-rail"),
        (Self::BUS, "bus"),
        (Self::FERRY, "ferry"),
    ];

    /// Wrap a raw type code.
    pub const fn new(code: u8) -> Self {
        RouteType(code)
    }

    /// The raw integer code sent to and received from the API.
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Human-readable mode name, if the code is a known one.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(route_type, _)| *route_type == self)
            .map(|(_, name)| *name)
    }

    /// True for the two modes the MBTA calls "subway".
    pub fn is_subway(self) -> bool {
        self == Self::LIGHT_RAIL || self == Self::HEAVY_RAIL
    }
}

impl FromStr for RouteType {
    type Err = InvalidRouteType;

    /// Accepts either the numeric code or a known mode name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Ok(RouteType(code));
        }

        Self::NAMED
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(trimmed))
            .map(|(route_type, _)| *route_type)
            .ok_or_else(|| InvalidRouteType {
                input: s.to_string(),
                reason: "expected a code 0-255 or a mode name",
            })
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of route types to request. An empty filter means "all types".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTypeFilter(BTreeSet<RouteType>);

impl RouteTypeFilter {
    /// A filter that matches every route type.
    pub fn all() -> Self {
        Self::default()
    }

    /// Light rail and heavy rail.
    pub fn subway() -> Self {
        Self::from_iter([RouteType::LIGHT_RAIL, RouteType::HEAVY_RAIL])
    }

    /// Whether a route of this type passes the filter.
    pub fn matches(&self, route_type: RouteType) -> bool {
        self.0.is_empty() || self.0.contains(&route_type)
    }

    /// Value for the API's `filter[type]` query parameter, or `None` when
    /// the filter is empty and the parameter should be omitted.
    pub fn query_value(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        let codes: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        Some(codes.join(","))
    }
}

impl FromIterator<RouteType> for RouteTypeFilter {
    fn from_iter<I: IntoIterator<Item = RouteType>>(iter: I) -> Self {
        RouteTypeFilter(iter.into_iter().collect())
    }
}

//! Domain types for the transit planner.
//!
//! Routes and stops are immutable values identified by their API ids.
//! The route/stop association is deliberately not part of these types;
//! it lives in [`crate::graph::TransitGraph`].

mod route;
mod route_type;
mod stop;

pub use route::{Direction, Route, RouteId};
pub use route_type::{InvalidRouteType, RouteType, RouteTypeFilter};
pub use stop::{Stop, StopId};

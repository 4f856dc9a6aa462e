//! MBTA v3 API client.
//!
//! This module provides an HTTP client for the MBTA's JSON:API service
//! (`https://api-v3.mbta.com`) plus an offline fixture source with the same
//! interface.
//!
//! Only two endpoints are used:
//! - `GET /routes`, optionally filtered with `filter[type]=0,1`
//! - `GET /stops`, filtered with `filter[route]=Red`
//!
//! Responses are JSON:API documents; everything beyond `type`, `id` and
//! the handful of attributes we need is ignored.

mod client;
mod convert;
mod error;
mod fixtures;
mod types;

pub use client::{MbtaClient, MbtaConfig};
pub use convert::{ConversionError, convert_routes, convert_stops};
pub use error::MbtaError;
pub use fixtures::FixtureApi;
pub use types::{Document, Resource, RouteAttributes, RoutesDocument, StopAttributes, StopsDocument};

//! Transit route planner.
//!
//! Answers ad-hoc questions about a transit network fetched from the
//! MBTA v3 API: which lines exist, which stops are transfer points, and
//! which sequence of lines gets you from one stop to another.

pub mod commands;
pub mod domain;
pub mod graph;
pub mod mbta;
pub mod planner;

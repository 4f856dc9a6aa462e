//! The three user-facing queries.
//!
//! Each command builds whatever data it needs from a [`TransitApi`] and
//! returns the lines to print, so the binary only has to write them out.

mod lines;
mod path;
mod stats;

pub use lines::list_routes;
pub use path::route_path;
pub use stats::stop_stats;

use crate::graph::BuildError;
use crate::planner::PlanError;

/// Error from running a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

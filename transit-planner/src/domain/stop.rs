//! Stop identifiers and stop records.

use std::fmt;

/// Opaque, API-assigned stop identifier (e.g. `place-alfcl`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(String);

impl StopId {
    pub fn new(id: impl Into<String>) -> Self {
        StopId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StopId {
    fn from(s: &str) -> Self {
        StopId::new(s)
    }
}

/// A station or platform served by one or more routes.
///
/// Like [`Route`](super::Route), this is a plain value; the routes serving a
/// stop are tracked by the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
}

impl Stop {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: StopId::new(id),
            name: name.into(),
        }
    }
}

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single ad dimension the host is willing to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdSize {
    pub width: u32,
    pub height: u32,
}

impl AdSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for AdSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A single auction request handed to the fetch engine.
///
/// Built by the fetcher at start time from the resolved endpoint, the
/// delegate's allowed sizes and the configured placement. The engine must
/// not request sizes outside `sizes`.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Resolved mediation endpoint URL.
    pub endpoint: String,

    /// Ad dimensions the delegate will accept.
    pub sizes: HashSet<AdSize>,

    /// Placement identifier, when the host configured one.
    pub placement_id: Option<String>,

    /// Custom HTTP headers sent with the auction request.
    pub headers: Arc<[(String, String)]>,
}

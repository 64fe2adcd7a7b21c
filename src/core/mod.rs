//! Pure transformations for the fetch lifecycle.
//!
//! Endpoint resolution, result-callback substitution and latency
//! arithmetic. No I/O lives here.

mod endpoint;
mod latency;
mod template;

pub use endpoint::{resolve_endpoint, DEFAULT_ENDPOINT_V1, DEFAULT_ENDPOINT_V2};
pub use latency::total_latency;
pub use template::substitute_result_cb;

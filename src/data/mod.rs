//! Immutable data types for interstitial fetching.
//!
//! Configuration, request and response shapes passed between the fetcher,
//! the engine and the delegate. These types are immutable and designed to
//! be passed between functions without mutation.

pub mod config;
pub mod request;
pub mod response;

pub use config::{FetchConfig, ProtocolVersion};
pub use request::{AdSize, FetchRequest};
pub use response::{AdObject, FetchOutcome, FetchResponse, ResponseReason};

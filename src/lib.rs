//! Interstitial ad fetching with a single-flight lifecycle, cancellation,
//! and delegate callbacks.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and types
//! - [`core`] - Pure transformations
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Single-Flight**: at most one fetch in flight per fetcher; a new
//!   start cancels the old attempt and exactly one of the completion and
//!   cancellation paths wins the terminal transition
//! - **Exactly-Once Reporting**: every completed attempt funnels through
//!   one result-callback dispatch and one delegate notification
//! - **Weak Delegate**: the host is a non-owning back-reference; callbacks
//!   become safe no-ops once it is dropped
//! - **Mechanism-Only**: no retry or timeout policy; those belong to the
//!   [`FetchEngine`](effects::FetchEngine) implementation

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use data::{
    AdObject, AdSize, FetchConfig, FetchOutcome, FetchRequest, FetchResponse, ProtocolVersion,
    ResponseReason,
};
pub use effects::{BeaconSink, FetchEngine, FetchObserver, FetcherDelegate, InterstitialFetcher, NullBeacon};

#[cfg(feature = "reqwest")]
pub use effects::{HttpBeacon, MediationClient};

pub use error::FetchError;

//! I/O operations with trait abstraction.
//!
//! The [`FetchEngine`] and [`BeaconSink`] seams isolate the fetcher from
//! the transport; production implementations live behind the `reqwest`
//! feature. [`InterstitialFetcher`] is the lifecycle state machine itself.

mod beacon;
mod delegate;
mod engine;
mod fetcher;

pub use beacon::{BeaconSink, NullBeacon};
pub use delegate::{FetchObserver, FetcherDelegate};
pub use engine::FetchEngine;
pub use fetcher::InterstitialFetcher;

#[cfg(feature = "reqwest")]
pub use beacon::HttpBeacon;
#[cfg(feature = "reqwest")]
pub use engine::MediationClient;

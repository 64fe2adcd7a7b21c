//! Error types for adfetch.
//!
//! Only pre-flight failures surface here. Once a fetch is in flight, every
//! outcome — success and all failure kinds — travels as a
//! [`ResponseReason`](crate::data::ResponseReason) in the outcome tuple,
//! never as an `Err`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("delegate is no longer available")]
    DelegateGone,

    #[error("invalid mediation endpoint: {0}")]
    InvalidEndpoint(String),
}

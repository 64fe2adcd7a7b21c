use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::request::AdSize;

/// Why a fetch attempt ended the way it did.
///
/// Every attempt terminates in exactly one of these; there is no separate
/// error channel once a fetch is in flight. The numeric code is stable and
/// is what gets substituted into result-callback beacons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseReason {
    /// An eligible ad was returned.
    Success,

    /// The request was malformed or the configuration unsupported
    /// (e.g. no allowed sizes).
    InvalidRequest,

    /// The auction produced no eligible ad.
    NoFill,

    /// Transport-level failure reaching the mediation endpoint.
    NetworkError,

    /// The network layer gave up waiting.
    Timeout,

    /// The auction service answered with something unparseable.
    BadResponse,

    /// The attempt was cancelled by the host.
    Cancelled,

    /// Unexpected failure inside the engine.
    InternalError,
}

impl ResponseReason {
    /// Stable numeric code used in tracking beacons.
    pub const fn code(self) -> u32 {
        match self {
            ResponseReason::Success => 0,
            ResponseReason::InvalidRequest => 1,
            ResponseReason::NoFill => 2,
            ResponseReason::NetworkError => 3,
            ResponseReason::Timeout => 4,
            ResponseReason::BadResponse => 5,
            ResponseReason::Cancelled => 6,
            ResponseReason::InternalError => 7,
        }
    }

    /// Whether this reason carries an ad.
    pub const fn is_success(self) -> bool {
        matches!(self, ResponseReason::Success)
    }
}

impl fmt::Display for ResponseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResponseReason::Success => "success",
            ResponseReason::InvalidRequest => "invalid request",
            ResponseReason::NoFill => "no fill",
            ResponseReason::NetworkError => "network error",
            ResponseReason::Timeout => "timeout",
            ResponseReason::BadResponse => "bad response",
            ResponseReason::Cancelled => "cancelled",
            ResponseReason::InternalError => "internal error",
        };
        f.write_str(s)
    }
}

/// Opaque handle to a fetched creative.
///
/// The fetcher carries this through to the delegate without interpreting
/// it; rendering belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdObject {
    /// Raw creative markup as returned by the auction.
    pub markup: String,

    /// The size the creative was returned at.
    pub size: AdSize,
}

/// What the fetch engine reports back for one attempt.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub reason: ResponseReason,
    pub ad: Option<AdObject>,

    /// Identifier correlating this attempt to a specific auction round.
    pub auction_id: String,
}

impl FetchOutcome {
    /// Shorthand for a failure outcome with no creative attached.
    pub fn failure(reason: ResponseReason, auction_id: impl Into<String>) -> Self {
        Self {
            reason,
            ad: None,
            auction_id: auction_id.into(),
        }
    }
}

/// What the delegate receives: the outcome plus measured round-trip latency.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub reason: ResponseReason,
    pub ad: Option<AdObject>,
    pub auction_id: String,

    /// Elapsed time from request start to outcome delivery.
    pub latency: Duration,
}

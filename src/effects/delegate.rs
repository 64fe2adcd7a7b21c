use std::collections::HashSet;

use crate::data::{AdSize, FetchResponse};

/// Optional observer hook for fetch completion.
///
/// Hosts that want a notification after the required outcome callback has
/// been constructed implement this and surface it through
/// [`FetcherDelegate::observer`].
pub trait FetchObserver: Send + Sync {
    /// Called once per completed attempt, after the required outcome
    /// callback, with the same response object.
    fn did_finish_request(&self, response: &FetchResponse);
}

/// Capabilities the host must supply to an interstitial fetcher.
///
/// The fetcher holds only a `Weak` back-reference to its delegate and
/// treats every callback site as a safe no-op once the delegate is gone.
pub trait FetcherDelegate: Send + Sync {
    /// Ad dimensions the host will accept. The fetcher passes this set to
    /// the fetch engine at request time and never requests sizes outside it.
    fn allowed_ad_sizes(&self) -> HashSet<AdSize>;

    /// Required outcome callback: invoked exactly once per completed
    /// attempt with the terminal response.
    fn did_receive_response(&self, response: &FetchResponse);

    /// Optional completion observer. Delegates that do not care return the
    /// default `None` and the fetcher skips the call.
    fn observer(&self) -> Option<&dyn FetchObserver> {
        None
    }
}

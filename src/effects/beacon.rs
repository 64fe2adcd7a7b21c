use std::future::Future;

/// Fire-and-forget tracking dispatch.
///
/// Result-callback URLs go through this seam. Delivery is best-effort:
/// implementations log failures and never propagate them — a lost beacon
/// must not affect the fetch lifecycle.
pub trait BeaconSink: Send + Sync + 'static {
    /// Dispatch a single tracking call to `url`.
    fn fire(&self, url: String) -> impl Future<Output = ()> + Send;
}

/// Beacon sink that drops every call.
///
/// For hosts that configure no result callback, and for tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBeacon;

impl BeaconSink for NullBeacon {
    async fn fire(&self, _url: String) {}
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use tracing::{debug, warn};

    use super::BeaconSink;

    /// Production beacon sink issuing plain GET requests.
    #[derive(Debug, Clone, Default)]
    pub struct HttpBeacon {
        client: reqwest::Client,
    }

    impl HttpBeacon {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl BeaconSink for HttpBeacon {
        async fn fire(&self, url: String) {
            match self.client.get(&url).send().await {
                Ok(resp) => debug!(status = %resp.status(), "result callback dispatched"),
                Err(err) => warn!(%err, "result callback dispatch failed"),
            }
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::HttpBeacon;

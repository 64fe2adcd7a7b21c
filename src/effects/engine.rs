use std::future::Future;

use crate::data::{FetchOutcome, FetchRequest};

/// Asynchronous ad-auction transport abstraction.
///
/// This is the seam between the lifecycle state machine and the network:
/// implementations run the actual exchange against the mediation endpoint
/// (including any mediation waterfall and retry policy of their own) and
/// report a terminal [`FetchOutcome`]. There is no error channel here —
/// every failure kind is a [`ResponseReason`](crate::data::ResponseReason)
/// in the outcome.
///
/// # Implementations
///
/// - [`MediationClient`]: production implementation using `reqwest`
/// - Mock implementations for testing
pub trait FetchEngine: Send + Sync + 'static {
    /// Run one auction exchange for `request` and report its outcome.
    fn fetch(&self, request: FetchRequest) -> impl Future<Output = FetchOutcome> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use serde::{Deserialize, Serialize};
    use tracing::{debug, warn};

    use super::FetchEngine;
    use crate::data::{AdObject, AdSize, FetchOutcome, FetchRequest, ResponseReason};

    #[derive(Serialize)]
    struct AuctionRequest<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        placement_id: Option<&'a str>,
        sizes: Vec<AdSize>,
    }

    #[derive(Deserialize)]
    struct AuctionResponse {
        status: String,
        #[serde(default)]
        auction_id: String,
        #[serde(default)]
        adm: Option<String>,
        #[serde(default)]
        width: u32,
        #[serde(default)]
        height: u32,
    }

    /// Production auction transport using reqwest.
    #[derive(Debug, Clone, Default)]
    pub struct MediationClient {
        client: reqwest::Client,
    }

    impl MediationClient {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl FetchEngine for MediationClient {
        async fn fetch(&self, request: FetchRequest) -> FetchOutcome {
            let body = AuctionRequest {
                placement_id: request.placement_id.as_deref(),
                sizes: request.sizes.iter().copied().collect(),
            };

            let mut http = self.client.post(&request.endpoint).json(&body);
            for (key, value) in request.headers.iter() {
                http = http.header(key, value);
            }

            let resp = match http.send().await {
                Ok(resp) => resp,
                Err(err) if err.is_timeout() => {
                    warn!(%err, "auction request timed out");
                    return FetchOutcome::failure(ResponseReason::Timeout, "");
                }
                Err(err) => {
                    warn!(%err, "auction request failed");
                    return FetchOutcome::failure(ResponseReason::NetworkError, "");
                }
            };

            if !resp.status().is_success() {
                warn!(status = %resp.status(), "auction endpoint rejected request");
                return FetchOutcome::failure(ResponseReason::NetworkError, "");
            }

            let auction: AuctionResponse = match resp.json().await {
                Ok(auction) => auction,
                Err(err) => {
                    warn!(%err, "malformed auction response");
                    return FetchOutcome::failure(ResponseReason::BadResponse, "");
                }
            };

            debug!(
                status = %auction.status,
                auction_id = %auction.auction_id,
                "auction response received"
            );

            match auction.adm {
                Some(markup) if auction.status == "ok" => FetchOutcome {
                    reason: ResponseReason::Success,
                    ad: Some(AdObject {
                        markup,
                        size: AdSize::new(auction.width, auction.height),
                    }),
                    auction_id: auction.auction_id,
                },
                _ => FetchOutcome::failure(ResponseReason::NoFill, auction.auction_id),
            }
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::MediationClient;

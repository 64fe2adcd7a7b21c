use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::core::{resolve_endpoint, substitute_result_cb, total_latency};
use crate::data::{AdObject, FetchConfig, FetchOutcome, FetchRequest, FetchResponse, ResponseReason};
use crate::effects::beacon::BeaconSink;
use crate::effects::delegate::FetcherDelegate;
use crate::effects::engine::FetchEngine;
use crate::error::FetchError;

/// Drives one interstitial ad-fetch attempt at a time and reports each
/// outcome exactly once.
///
/// Lifecycle: Idle → [`request_ad`](Self::request_ad) → InFlight →
/// (engine outcome | [`stop_ad_load`](Self::stop_ad_load)) → Idle.
/// Starting while in flight first cancels the existing attempt.
/// Cancellation suppresses the outcome callback for the cancelled attempt;
/// it does not synthesize one.
///
/// The delegate is held as a non-owning `Weak` back-reference; once the
/// host drops it, outcome delivery becomes a no-op. Delegate callbacks are
/// always invoked from the fetcher's own spawned fetch task, regardless of
/// where the engine completes.
pub struct InterstitialFetcher<E, B> {
    engine: Arc<E>,
    shared: Arc<Shared<B>>,
}

struct Shared<B> {
    delegate: Weak<dyn FetcherDelegate>,
    beacon: B,
    config: FetchConfig,
    state: Mutex<FlightState>,
}

#[derive(Default)]
struct FlightState {
    in_flight: Option<InFlight>,
    started_at: Option<Instant>,
    next_attempt: u64,
}

struct InFlight {
    attempt: u64,
    task: JoinHandle<()>,
}

impl<E, B> InterstitialFetcher<E, B>
where
    E: FetchEngine,
    B: BeaconSink,
{
    /// Create a fetcher bound to `delegate`.
    pub fn new(delegate: Weak<dyn FetcherDelegate>, engine: E, beacon: B, config: FetchConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            shared: Arc::new(Shared {
                delegate,
                beacon,
                config,
                state: Mutex::new(FlightState::default()),
            }),
        }
    }

    /// Start a fetch attempt.
    ///
    /// Cancels any attempt already in flight, queries the delegate for its
    /// allowed sizes, and hands the request to the engine on a spawned
    /// task. Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// [`FetchError::DelegateGone`] if the delegate has been dropped,
    /// [`FetchError::InvalidEndpoint`] if the configured endpoint override
    /// is not an absolute http(s) URL.
    pub fn request_ad(&self) -> Result<(), FetchError> {
        let delegate = self.shared.delegate.upgrade().ok_or(FetchError::DelegateGone)?;
        let endpoint = resolve_endpoint(
            self.shared.config.protocol_version,
            self.shared.config.endpoint_override.as_deref(),
        )?;
        let sizes = delegate.allowed_ad_sizes();
        drop(delegate);

        let request = FetchRequest {
            endpoint,
            sizes,
            placement_id: self.shared.config.placement_id.clone(),
            headers: Arc::clone(&self.shared.config.headers),
        };

        let mut state = self.shared.lock_state();
        if let Some(stale) = state.in_flight.take() {
            debug!(attempt = stale.attempt, "replacing in-flight attempt");
            stale.task.abort();
        }

        let attempt = state.next_attempt;
        state.next_attempt += 1;
        state.started_at = Some(Instant::now());
        debug!(attempt, endpoint = %request.endpoint, "starting ad fetch");

        let shared = Arc::clone(&self.shared);
        let task = if request.sizes.is_empty() {
            // Nothing the auction could legally fill; terminate through the
            // same funnel as every other outcome.
            tokio::spawn(async move {
                let outcome = FetchOutcome::failure(ResponseReason::InvalidRequest, "");
                shared.complete(attempt, outcome).await;
            })
        } else {
            let engine = Arc::clone(&self.engine);
            tokio::spawn(async move {
                let outcome = engine.fetch(request).await;
                shared.complete(attempt, outcome).await;
            })
        };

        state.in_flight = Some(InFlight { attempt, task });
        Ok(())
    }

    /// Cancel any in-flight fetch. Idempotent.
    ///
    /// The pending engine task is aborted and no outcome callback fires
    /// for the cancelled attempt. Calling this with nothing in flight is a
    /// no-op and never touches the delegate.
    pub fn stop_ad_load(&self) {
        let cancelled = {
            let mut state = self.shared.lock_state();
            state.in_flight.take()
        };
        if let Some(flight) = cancelled {
            debug!(attempt = flight.attempt, "cancelling ad fetch");
            flight.task.abort();
        }
    }

    /// Dispatch a result notification and deliver an outcome to the
    /// delegate.
    ///
    /// This is the single funnel every outcome goes through: substitutes
    /// `reason` and `auction_id` into `result_cb` and fires it as a
    /// tracking beacon, then invokes the delegate's required outcome
    /// callback (and its observer, when present) with the response.
    ///
    /// Calling this manually is the terminal transition for any attempt
    /// still in flight: the pending engine task is aborted so the attempt
    /// cannot report a second time.
    pub async fn fire_result_cb(
        &self,
        result_cb: Option<&str>,
        reason: ResponseReason,
        ad: Option<AdObject>,
        auction_id: &str,
    ) {
        let finalized = {
            let mut state = self.shared.lock_state();
            state.in_flight.take()
        };
        if let Some(flight) = finalized {
            debug!(attempt = flight.attempt, "manual result dispatch finalizes attempt");
            flight.task.abort();
        }

        let latency = self.total_latency(Instant::now());
        self.shared
            .dispatch_result(result_cb, reason, ad, auction_id, latency)
            .await;
    }

    /// Elapsed time from the most recent [`request_ad`](Self::request_ad)
    /// to `stop`, clamped to zero if `stop` precedes it. Zero if no
    /// attempt was ever started.
    pub fn total_latency(&self, stop: Instant) -> Duration {
        let started_at = self.shared.lock_state().started_at;
        match started_at {
            Some(start) => total_latency(start, stop),
            None => Duration::ZERO,
        }
    }

    /// Whether an attempt is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        self.shared.lock_state().in_flight.is_some()
    }
}

impl<E, B> Drop for InterstitialFetcher<E, B> {
    fn drop(&mut self) {
        if let Some(flight) = self.shared.lock_state().in_flight.take() {
            flight.task.abort();
        }
    }
}

impl<B> Shared<B> {
    fn lock_state(&self) -> MutexGuard<'_, FlightState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<B> Shared<B>
where
    B: BeaconSink,
{
    /// Terminal transition for one attempt. Exactly one of this path and
    /// the cancellation path clears the in-flight slot; the loser returns
    /// without side effects.
    async fn complete(&self, attempt: u64, outcome: FetchOutcome) {
        let started_at = {
            let mut state = self.lock_state();
            match &state.in_flight {
                Some(flight) if flight.attempt == attempt => {
                    state.in_flight = None;
                    state.started_at
                }
                _ => {
                    debug!(attempt, "stale completion ignored");
                    return;
                }
            }
        };

        let latency = started_at
            .map(|start| total_latency(start, Instant::now()))
            .unwrap_or_default();

        self.dispatch_result(
            self.config.result_cb_template.as_deref(),
            outcome.reason,
            outcome.ad,
            &outcome.auction_id,
            latency,
        )
        .await;
    }

    async fn dispatch_result(
        &self,
        result_cb: Option<&str>,
        reason: ResponseReason,
        ad: Option<AdObject>,
        auction_id: &str,
        latency: Duration,
    ) {
        if let Some(template) = result_cb {
            let url = substitute_result_cb(template, reason, auction_id);
            self.beacon.fire(url).await;
        }

        let response = FetchResponse {
            reason,
            ad,
            auction_id: auction_id.to_owned(),
            latency,
        };

        match self.delegate.upgrade() {
            Some(delegate) => {
                delegate.did_receive_response(&response);
                if let Some(observer) = delegate.observer() {
                    observer.did_finish_request(&response);
                }
            }
            None => warn!(%reason, "delegate dropped before outcome delivery"),
        }
    }
}

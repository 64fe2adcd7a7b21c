use std::time::{Duration, Instant};

use tracing::warn;

/// Elapsed time between the start of a fetch and `stop`.
///
/// A `stop` that precedes `start` cannot happen through the normal
/// lifecycle; it is clamped to zero and logged rather than letting a
/// negative interval escape downstream.
pub fn total_latency(start: Instant, stop: Instant) -> Duration {
    match stop.checked_duration_since(start) {
        Some(elapsed) => elapsed,
        None => {
            warn!("latency stop time precedes start time, clamping to zero");
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_interval_is_exact() {
        let start = Instant::now();
        let stop = start + Duration::from_millis(250);
        assert_eq!(total_latency(start, stop), Duration::from_millis(250));
    }

    #[test]
    fn equal_instants_yield_zero() {
        let t = Instant::now();
        assert_eq!(total_latency(t, t), Duration::ZERO);
    }

    #[test]
    fn backwards_interval_clamps_to_zero() {
        let stop = Instant::now();
        let start = stop + Duration::from_secs(5);
        assert_eq!(total_latency(start, stop), Duration::ZERO);
    }
}

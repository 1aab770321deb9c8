//! Bounded-rate scheduler for sequential external calls.

use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

/// Enforces a minimum interval between consecutive calls.
///
/// The semantics stage paces vision calls at 500 ms, the generation stage
/// paces Veo calls at 2000 ms. The first call is never delayed. Timing
/// arithmetic lives in [`Pacer::delay_until_ready`] so tests can drive it
/// with synthetic instants instead of sleeping.
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    last_call: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_call: None,
        }
    }

    /// How long a call issued at `now` must wait to honor the interval.
    pub fn delay_until_ready(&self, now: Instant) -> Duration {
        match self.last_call {
            None => Duration::ZERO,
            Some(last) => self.interval.saturating_sub(now.duration_since(last)),
        }
    }

    /// Record that a call was issued at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last_call = Some(now);
    }

    /// Wait until the next call is allowed, then mark it as issued.
    pub async fn pace(&mut self) {
        let delay = self.delay_until_ready(Instant::now());
        if !delay.is_zero() {
            trace!(delay_ms = delay.as_millis() as u64, "Pacing external call");
            tokio::time::sleep(delay).await;
        }
        self.mark(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_is_immediate() {
        let pacer = Pacer::new(Duration::from_millis(500));
        assert_eq!(pacer.delay_until_ready(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_back_to_back_call_waits_full_interval() {
        let mut pacer = Pacer::new(Duration::from_millis(500));
        let t0 = Instant::now();
        pacer.mark(t0);
        assert_eq!(pacer.delay_until_ready(t0), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_elapse_waits_remainder() {
        let mut pacer = Pacer::new(Duration::from_millis(500));
        let t0 = Instant::now();
        pacer.mark(t0);

        let t1 = t0 + Duration::from_millis(300);
        assert_eq!(pacer.delay_until_ready(t1), Duration::from_millis(200));
    }

    #[test]
    fn test_interval_already_elapsed() {
        let mut pacer = Pacer::new(Duration::from_millis(500));
        let t0 = Instant::now();
        pacer.mark(t0);

        let t1 = t0 + Duration::from_secs(2);
        assert_eq!(pacer.delay_until_ready(t1), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pace_spaces_calls_by_interval() {
        let mut pacer = Pacer::new(Duration::from_millis(500));

        let start = Instant::now();
        pacer.pace().await;
        pacer.pace().await;
        pacer.pace().await;

        // Two paced gaps after the free first call
        assert!(Instant::now() - start >= Duration::from_millis(1000));
    }
}

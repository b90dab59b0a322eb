use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Minimum-spacing gate shared by every request of a fetcher
///
/// A leaky bucket of capacity one: `acquire` returns immediately the first
/// time and afterwards only once `interval` has passed since the previous
/// acquisition. Concurrent callers queue on the inner lock, so the spacing
/// holds even when requests are issued from several tasks.
#[derive(Debug)]
pub struct Cooldown {
    interval: Duration,
    last_request_time: Mutex<Option<Instant>>,
}

impl Cooldown {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request_time: Mutex::new(None),
        }
    }

    /// Waits until a request may be issued, then records it
    pub async fn acquire(&self) {
        let mut last = self.last_request_time.lock().await;

        if let Some(wait) = self.time_until_next_request(*last, Instant::now()) {
            tracing::trace!("Cooling down for {:?}", wait);
            tokio::time::sleep(wait).await;
        }

        *last = Some(Instant::now());
    }

    /// Calculates the time until the next request can be made
    ///
    /// Returns None if a request can be made now.
    pub fn time_until_next_request(&self, last: Option<Instant>, now: Instant) -> Option<Duration> {
        let last = last?;
        let elapsed = now.saturating_duration_since(last);
        if elapsed < self.interval {
            Some(self.interval - elapsed)
        } else {
            None
        }
    }
}

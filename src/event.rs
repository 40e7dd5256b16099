use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Fixed-cadence tick source. Firings that come due while the previous
/// tick is still being handled are dropped, never queued.
pub struct Ticker {
    interval: Interval,
    period: Duration,
    last: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            interval,
            period,
            last: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Wait for the next firing and return the seconds since the previous
    /// one. The first firing reports the configured period.
    pub async fn next(&mut self) -> f64 {
        self.interval.tick().await;
        let now = Instant::now();
        match self.last.replace(now) {
            Some(prev) => now.duration_since(prev).as_secs_f64(),
            None => self.period.as_secs_f64(),
        }
    }
}

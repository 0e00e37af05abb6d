/// Request pacing for the analytics API
///
/// The API rate-limits aggressively, so the pipeline waits for the gate after
/// every request. The pause itself goes through `Sleeper` so the policy can be
/// exercised without real timers.

use std::time::Duration;

#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// `setTimeout`-backed sleeper used in the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleeper;

impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

/// Spacing policy applied between consecutive API requests
#[allow(async_fn_in_trait)]
pub trait RequestGate {
    /// Called once after each completed request, successful or not
    async fn after_request(&self);
}

/// Waits a fixed interval after every request
#[derive(Debug, Clone)]
pub struct FixedIntervalGate<S> {
    interval: Duration,
    sleeper: S,
}

impl<S: Sleeper> FixedIntervalGate<S> {
    pub fn new(interval: Duration, sleeper: S) -> Self {
        FixedIntervalGate { interval, sleeper }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl<S: Sleeper> RequestGate for FixedIntervalGate<S> {
    async fn after_request(&self) {
        if self.interval.is_zero() {
            return;
        }
        log::debug!("Pausing {}ms before next request", self.interval.as_millis());
        self.sleeper.sleep(self.interval).await;
    }
}

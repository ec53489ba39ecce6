//! Bounded polling waits.
//!
//! Every interaction in the suite goes through a [`Wait`] first: nothing is
//! clicked or typed into before the target condition has been observed true.
//! A wait that expires yields a typed [`Error::Timeout`], never a hung call
//! and never a raw driver panic.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Default timeout for element actions (matches the page-object default).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default polling interval.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Bound on post-click badge convergence waits.
pub const BADGE_CONVERGE_TIMEOUT: Duration = Duration::from_secs(5);

/// A bounded polling wait: checks a probe at a fixed interval until it
/// produces a value or the timeout elapses.
#[derive(Debug, Clone, Copy)]
pub struct Wait {
    timeout: Duration,
    interval: Duration,
}

impl Wait {
    /// Creates a wait with the given timeout and the default poll interval.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Overrides the polling interval.
    pub fn poll_every(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Polls `probe` until it yields `Some`, or fails with [`Error::Timeout`]
    /// once the timeout elapses.
    ///
    /// The probe reports `Ok(None)` for "not yet" and may keep being polled;
    /// an `Err` from the probe aborts the wait immediately, so probes that
    /// must never abort their scenario swallow transient driver failures
    /// themselves.
    pub async fn until<T, F, Fut>(&self, condition: &str, mut probe: F) -> Result<T>
    where
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = Result<Option<T>>> + Send,
        T: Send,
    {
        let start = Instant::now();
        loop {
            if let Some(value) = probe().await? {
                return Ok(value);
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::Timeout {
                    condition: condition.to_string(),
                    timeout_ms: self.timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(self.interval).await;
        }
    }
}

//! Deterministic clock for retry tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::Clock;

/// Clock that records every requested sleep.
///
/// By default sleeps complete after a single scheduler yield so retry loops
/// run to completion without real waiting. With [`MockClock::with_tokio_time`]
/// the sleeps are forwarded to `tokio::time::sleep`, which lets paused-time
/// tests interleave backoff with other events.
#[derive(Debug, Clone)]
pub struct MockClock {
    today: Arc<Mutex<NaiveDate>>,
    sleeps: Arc<Mutex<Vec<Duration>>>,
    use_tokio_time: bool,
}

impl MockClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Arc::new(Mutex::new(today)),
            sleeps: Arc::new(Mutex::new(Vec::new())),
            use_tokio_time: false,
        }
    }

    pub fn with_tokio_time(mut self) -> Self {
        self.use_tokio_time = true;
        self
    }

    pub fn set_today(&self, today: NaiveDate) {
        *self.today.lock().unwrap() = today;
    }

    /// Every duration passed to `sleep`, in call order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    pub fn total_slept(&self) -> Duration {
        self.sleeps.lock().unwrap().iter().sum()
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new(NaiveDate::from_ymd_opt(2025, 2, 11).expect("valid date"))
    }
}

#[async_trait]
impl Clock for MockClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        if self.use_tokio_time {
            tokio::time::sleep(duration).await;
        } else {
            tokio::task::yield_now().await;
        }
    }

    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap()
    }
}

//! Wall-clock [`Clock`] backed by tokio timers.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::time::Duration;

use crate::traits::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl TokioClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

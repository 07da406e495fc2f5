//! Time source abstraction.
//!
//! The retry loop waits between attempts and the data URL carries a
//! date-granularity cache buster; both go through [`Clock`] so tests can run
//! without real timers.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

#[async_trait]
pub trait Clock: Send + Sync {
    /// Suspend for `duration`.
    ///
    /// Dropping the returned future must cancel the wait.
    async fn sleep(&self, duration: Duration);

    /// Current calendar date in UTC.
    fn today(&self) -> NaiveDate;
}

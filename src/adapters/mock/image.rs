//! Scriptable image source for preload tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::ImageLoadError;
use crate::traits::ImageSource;

#[derive(Debug, Clone)]
enum Outcome {
    Loaded,
    Failed(ImageLoadError),
    /// Never completes; only cancellation ends the load.
    Pending,
}

/// Image source with a fixed outcome and optional latency.
#[derive(Debug, Clone)]
pub struct MockImageSource {
    outcome: Arc<Mutex<Outcome>>,
    delay: Option<Duration>,
    loads: Arc<Mutex<Vec<String>>>,
}

impl MockImageSource {
    pub fn loaded() -> Self {
        Self::with_outcome(Outcome::Loaded)
    }

    pub fn failing(error: ImageLoadError) -> Self {
        Self::with_outcome(Outcome::Failed(error))
    }

    pub fn pending() -> Self {
        Self::with_outcome(Outcome::Pending)
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(outcome)),
            delay: None,
            loads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Complete after `delay` of tokio time.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// URLs requested so far.
    pub fn loads(&self) -> Vec<String> {
        self.loads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSource for MockImageSource {
    async fn load(&self, url: &str) -> Result<(), ImageLoadError> {
        self.loads.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let outcome = self.outcome.lock().unwrap().clone();
        match outcome {
            Outcome::Loaded => Ok(()),
            Outcome::Failed(err) => Err(err),
            Outcome::Pending => futures::future::pending().await,
        }
    }
}

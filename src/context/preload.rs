//! Out-of-band preload of the background illustration.
//!
//! The tracker publishes its status on a watch channel. Cancelling or
//! dropping it aborts the load; nothing is published afterwards.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::traits::ImageSource;

use super::state::ImageStatus;

#[derive(Debug)]
pub struct ImagePreloader {
    status: watch::Receiver<ImageStatus>,
    handle: JoinHandle<()>,
}

impl ImagePreloader {
    /// Begin loading `url` immediately. Must be called inside a tokio runtime.
    pub fn start(source: Arc<dyn ImageSource>, url: impl Into<String>) -> Self {
        let url = url.into();
        let (tx, rx) = watch::channel(ImageStatus::Loading);

        let handle = tokio::spawn(async move {
            let status = match source.load(&url).await {
                Ok(()) => {
                    info!("Background image loaded: {}", url);
                    ImageStatus::Loaded
                }
                Err(e) => {
                    warn!("Background image failed to load: {} ({})", url, e.error_code());
                    ImageStatus::Error
                }
            };
            let _ = tx.send(status);
        });

        Self { status: rx, handle }
    }

    /// Latest published status.
    pub fn status(&self) -> ImageStatus {
        *self.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ImageStatus> {
        self.status.clone()
    }

    /// Resolve once a terminal status is published.
    ///
    /// Returns `None` if the tracker was cancelled first.
    pub async fn wait(&self) -> Option<ImageStatus> {
        wait_for_terminal(self.subscribe()).await
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ImagePreloader {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Wait on a status receiver until it reports `Loaded` or `Error`.
pub async fn wait_for_terminal(mut rx: watch::Receiver<ImageStatus>) -> Option<ImageStatus> {
    loop {
        let current = *rx.borrow_and_update();
        if current.is_terminal() {
            return Some(current);
        }
        if rx.changed().await.is_err() {
            // sender gone without a terminal status: cancelled
            let last = *rx.borrow();
            return last.is_terminal().then_some(last);
        }
    }
}

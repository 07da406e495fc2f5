//! Fetching hotspot data with retry and linear backoff.
//!
//! A load session runs as one spawned task. Aborting the task cancels the
//! in-flight request and any pending backoff timer together.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::config::HotspotConfig;
use crate::error::{classify_http_error, ErrorContext, HotspotError, HotspotResult, NetworkError};
use crate::i18n::Language;
use crate::models::HotspotDataFile;
use crate::schema::parse_data_file;
use crate::traits::{Clock, Headers, HttpClient};

use super::messages::{LoadMessage, SessionId};
use super::progress::{REQUEST_ISSUED, RESPONSE_PARSED};

/// What a load session needs from the outside world.
#[derive(Clone)]
pub struct LoaderDeps {
    pub http: Arc<dyn HttpClient>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<HotspotConfig>,
}

impl std::fmt::Debug for LoaderDeps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderDeps")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// One GET of the data file for `language`, validated.
///
/// Non-2xx statuses fail with `Unable to load hotspots (<status>)`.
pub async fn fetch_hotspot_data(deps: &LoaderDeps, language: Language) -> HotspotResult<HotspotDataFile> {
    let url = deps.config.data_url(language, deps.clock.today());

    let response = deps
        .http
        .get(&url, &Headers::new())
        .await
        .map_err(|e| HotspotError::from(classify_http_error(e, &url)))?;

    if !response.is_success() {
        return Err(NetworkError::status(response.status).into());
    }

    Ok(parse_data_file(&response.body)?)
}

/// Run attempts until one succeeds or the retry budget is spent, reporting
/// every step on `tx`.
///
/// Every failure kind is retried within the budget; classification only
/// affects logging.
pub async fn run_load_session(
    deps: LoaderDeps,
    language: Language,
    session: SessionId,
    tx: mpsc::UnboundedSender<LoadMessage>,
) {
    let max_retries = deps.config.max_retries;
    let mut attempt: u32 = 0;

    loop {
        let _ = tx.send(LoadMessage::AttemptStarted { session, attempt });
        let _ = tx.send(LoadMessage::Progress {
            session,
            value: REQUEST_ISSUED,
        });

        match fetch_hotspot_data(&deps, language).await {
            Ok(data) => {
                let _ = tx.send(LoadMessage::Progress {
                    session,
                    value: RESPONSE_PARSED,
                });
                info!(
                    "Hotspot data loaded: language={}, hotspots={}",
                    language,
                    data.hotspots.len()
                );
                let _ = tx.send(LoadMessage::Loaded { session, data });
                return;
            }
            Err(e) if e.is_cancellation() => return,
            Err(e) => {
                if attempt < max_retries {
                    warn!(
                        "Hotspot data load failed, retrying: attempt={}, language={}, category={}, error={}",
                        attempt,
                        language,
                        e.category(),
                        e
                    );
                    attempt += 1;
                    deps.clock.sleep(deps.config.backoff_for(attempt)).await;
                    continue;
                }

                let e = e.with_context(
                    ErrorContext::new("load_hotspots")
                        .with_language(language.code())
                        .with_attempts(attempt + 1)
                        .with_url(deps.config.data_path(language)),
                );
                error!("Hotspot data load failed: {}", e);
                let _ = tx.send(LoadMessage::Failed {
                    session,
                    message: e.inner().to_string(),
                    error_code: e.error_code(),
                });
                return;
            }
        }
    }
}

//! `hotspot-map fetch`

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::adapters::FilePreferences;
use crate::config::HotspotConfig;
use crate::context::{HotspotContext, HotspotSnapshot};
use crate::i18n::Language;

/// Upper bound on one fetch run, retries and image preload included.
const FETCH_DEADLINE: Duration = Duration::from_secs(120);

/// Run the loading state machine once and return where it settled.
///
/// Without an explicit language the stored preference is used, then the
/// process locale, then the configured default.
pub async fn handle_fetch_command(config: HotspotConfig, language: Option<Language>) -> HotspotSnapshot {
    let mut builder = HotspotContext::builder(config);
    match FilePreferences::new() {
        Ok(prefs) => {
            debug!("Using preference file {}", prefs.path().display());
            builder = builder.with_preferences(Arc::new(prefs));
        }
        Err(e) => warn!("Language preference unavailable: {}", e),
    }
    if let Some(language) = language {
        builder = builder.with_language(language);
    }

    let mut ctx = builder.build();
    ctx.start();

    if tokio::time::timeout(FETCH_DEADLINE, ctx.run_until_settled())
        .await
        .is_err()
    {
        warn!("Fetch did not settle within {:?}", FETCH_DEADLINE);
    }

    let snapshot = ctx.snapshot();
    ctx.shutdown();
    snapshot
}

pub fn format_snapshot(snapshot: &HotspotSnapshot) -> String {
    let mut lines = vec![
        format!("language: {}", snapshot.language),
        format!("status: {}", snapshot.status),
        format!("image: {}", snapshot.image_status),
        format!("hotspots: {}", snapshot.hotspots.len()),
        format!("progress: {:.0}%", snapshot.loading_progress * 100.0),
    ];
    if let Some(updated_at) = &snapshot.updated_at {
        lines.push(format!("updated: {}", updated_at));
    }
    if let Some(error) = &snapshot.error {
        lines.push(format!("error: {}", error));
    }
    lines.join("\n")
}

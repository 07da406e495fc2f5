//! Messages sent from background tasks to the owning [`HotspotContext`].
//!
//! Every data message carries the session it belongs to; the context drops
//! messages from sessions that have since been replaced.
//!
//! [`HotspotContext`]: super::HotspotContext

use crate::models::HotspotDataFile;

use super::state::ImageStatus;

/// Identifies one language load session (initial load, language switch or
/// explicit retry).
pub type SessionId = u64;

#[derive(Debug, Clone)]
pub enum LoadMessage {
    /// An attempt started (0-based; retries are 1 and 2)
    AttemptStarted { session: SessionId, attempt: u32 },
    /// Progress checkpoint reached
    Progress { session: SessionId, value: f64 },
    /// Data fetched and validated
    Loaded {
        session: SessionId,
        data: HotspotDataFile,
    },
    /// Retries exhausted
    Failed {
        session: SessionId,
        message: String,
        error_code: &'static str,
    },
    /// Background image reached a terminal state
    Image(ImageStatus),
}

impl LoadMessage {
    pub fn session(&self) -> Option<SessionId> {
        match self {
            LoadMessage::AttemptStarted { session, .. }
            | LoadMessage::Progress { session, .. }
            | LoadMessage::Loaded { session, .. }
            | LoadMessage::Failed { session, .. } => Some(*session),
            LoadMessage::Image(_) => None,
        }
    }
}

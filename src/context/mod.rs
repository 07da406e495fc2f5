//! The hotspot context: authoritative hotspot state for one view.
//!
//! A [`HotspotContext`] owns the active language, the loaded hotspots, the
//! load status, the selection and the image preload. Background work runs in
//! spawned tasks that report through a message channel; the owner drives the
//! context by awaiting [`HotspotContext::next_update`] (or draining with
//! [`HotspotContext::drain_pending`]) and every message is applied as a
//! whole-state replacement.
//!
//! ```ignore
//! let mut ctx = HotspotContext::builder(HotspotConfig::from_env()).build();
//! ctx.start();
//! ctx.run_until_settled().await;
//! println!("{} {}", ctx.status(), ctx.loading_progress());
//! ctx.shutdown();
//! ```

pub mod loader;
pub mod messages;
pub mod preload;
pub mod progress;
pub mod state;

pub use loader::{fetch_hotspot_data, run_load_session, LoaderDeps};
pub use messages::{LoadMessage, SessionId};
pub use preload::{wait_for_terminal, ImagePreloader};
pub use progress::{combined_progress, DataProgress};
pub use state::{HotspotState, ImageStatus, LoadStatus};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::adapters::{HttpImageSource, ReqwestHttpClient, TokioClock};
use crate::config::HotspotConfig;
use crate::i18n::{system_locale, Language, LanguagePreference, Translations};
use crate::models::{Hotspot, HotspotDataFile};
use crate::traits::{Clock, HttpClient, ImageSource, PreferenceStore};

/// Read-only copy of everything a view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotSnapshot {
    pub language: Language,
    pub hotspots: Vec<Hotspot>,
    pub status: LoadStatus,
    pub error: Option<String>,
    pub updated_at: Option<String>,
    pub selected_hotspot_id: Option<String>,
    pub loading_progress: f64,
    pub image_status: ImageStatus,
}

impl HotspotSnapshot {
    pub fn selected_hotspot(&self) -> Option<&Hotspot> {
        let id = self.selected_hotspot_id.as_deref()?;
        self.hotspots.iter().find(|h| h.id == id)
    }
}

/// Builder for [`HotspotContext`]. Unset dependencies get production
/// implementations.
pub struct HotspotContextBuilder {
    config: HotspotConfig,
    http: Option<Arc<dyn HttpClient>>,
    clock: Option<Arc<dyn Clock>>,
    image_source: Option<Arc<dyn ImageSource>>,
    preferences: Option<Arc<dyn PreferenceStore>>,
    language: Option<Language>,
    system_locale: Option<String>,
    initial_data: Option<(Vec<Hotspot>, Option<String>)>,
}

impl HotspotContextBuilder {
    pub fn with_http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_image_source(mut self, source: Arc<dyn ImageSource>) -> Self {
        self.image_source = Some(source);
        self
    }

    /// Persist language changes and read the initial language from `store`.
    pub fn with_preferences(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.preferences = Some(store);
        self
    }

    /// Start in `language`, skipping preference resolution.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Locale consulted when nothing is stored. Defaults to the process locale.
    pub fn with_system_locale(mut self, locale: impl Into<String>) -> Self {
        self.system_locale = Some(locale.into());
        self
    }

    /// Seed as `ready` without touching the network.
    pub fn with_initial_data(mut self, hotspots: Vec<Hotspot>, updated_at: Option<String>) -> Self {
        self.initial_data = Some((hotspots, updated_at));
        self
    }

    pub fn build(self) -> HotspotContext {
        let config = Arc::new(self.config);
        let http = self.http.unwrap_or_else(|| {
            Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout)) as Arc<dyn HttpClient>
        });
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(TokioClock::new()) as Arc<dyn Clock>);
        let image_source = self
            .image_source
            .unwrap_or_else(|| Arc::new(HttpImageSource::new(http.clone())) as Arc<dyn ImageSource>);
        let preference = self.preferences.map(LanguagePreference::new);

        let language = match (self.language, &preference) {
            (Some(language), _) => language,
            (None, Some(pref)) => {
                let locale = self.system_locale.or_else(system_locale);
                pref.initial(locale.as_deref(), config.default_language)
            }
            (None, None) => self
                .system_locale
                .or_else(system_locale)
                .as_deref()
                .and_then(Language::from_locale)
                .unwrap_or(config.default_language),
        };
        if let Some(pref) = &preference {
            pref.persist(language);
        }

        let (state, progress) = match self.initial_data {
            Some((hotspots, updated_at)) => {
                let mut progress = DataProgress::default();
                progress.complete();
                (HotspotState::seeded(hotspots, updated_at), progress)
            }
            None => (HotspotState::default(), DataProgress::default()),
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let mut ctx = HotspotContext {
            deps: LoaderDeps {
                http,
                clock,
                config,
            },
            image_source,
            preference,
            language,
            state,
            index: HashMap::new(),
            progress,
            image_status: ImageStatus::Idle,
            selected: None,
            retry_count: 0,
            session: 0,
            load_task: None,
            image: None,
            image_forwarder: None,
            tx,
            rx,
        };
        ctx.rebuild_index();
        ctx
    }
}

/// Explicitly created and torn down; no global state.
pub struct HotspotContext {
    deps: LoaderDeps,
    image_source: Arc<dyn ImageSource>,
    preference: Option<LanguagePreference>,
    language: Language,
    state: HotspotState,
    index: HashMap<String, usize>,
    progress: DataProgress,
    image_status: ImageStatus,
    selected: Option<String>,
    retry_count: u32,
    session: SessionId,
    load_task: Option<JoinHandle<()>>,
    image: Option<ImagePreloader>,
    image_forwarder: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<LoadMessage>,
    rx: mpsc::UnboundedReceiver<LoadMessage>,
}

impl HotspotContext {
    pub fn builder(config: HotspotConfig) -> HotspotContextBuilder {
        HotspotContextBuilder {
            config,
            http: None,
            clock: None,
            image_source: None,
            preferences: None,
            language: None,
            system_locale: None,
            initial_data: None,
        }
    }

    /// Start the image preload and, unless disabled, the first data load.
    /// Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        if self.image.is_none() {
            self.start_image_preload();
        }
        if self.deps.config.fetch_on_mount && self.load_task.is_none() {
            self.begin_session(false);
        }
    }

    /// Abort every background task. Later messages are never applied.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
        if let Some(forwarder) = self.image_forwarder.take() {
            forwarder.abort();
        }
        if let Some(image) = self.image.take() {
            image.cancel();
        }
        // invalidate anything already queued
        self.session += 1;
        while self.rx.try_recv().is_ok() {}
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language: persist it, clear the selection and the hotspot list,
    /// reset the retry counter and load the new data. No-op for the current
    /// language.
    pub fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        debug!("Language changed: {} -> {}", self.language, language);
        self.language = language;
        if let Some(pref) = &self.preference {
            pref.persist(language);
        }
        self.selected = None;
        self.retry_count = 0;
        self.state = HotspotState::default();
        self.rebuild_index();
        self.begin_session(true);
    }

    /// Reload the current language.
    pub fn retry(&mut self) {
        self.retry_count += 1;
        self.begin_session(false);
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn select_hotspot(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
    }

    pub fn selected_hotspot_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_hotspot(&self) -> Option<&Hotspot> {
        self.selected.as_deref().and_then(|id| self.hotspot(id))
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.state.hotspots
    }

    pub fn hotspot(&self, id: &str) -> Option<&Hotspot> {
        self.index.get(id).and_then(|&i| self.state.hotspots.get(i))
    }

    /// Lookup of the current hotspots by id.
    pub fn hotspots_map(&self) -> HashMap<&str, &Hotspot> {
        self.state
            .hotspots
            .iter()
            .map(|h| (h.id.as_str(), h))
            .collect()
    }

    pub fn state(&self) -> &HotspotState {
        &self.state
    }

    pub fn status(&self) -> LoadStatus {
        self.state.status
    }

    /// Error message for display. Falls back to the localized generic
    /// message when the failure carried none.
    pub fn error(&self) -> Option<String> {
        match (&self.state.error, self.state.status) {
            (Some(message), _) if !message.is_empty() => Some(message.clone()),
            (_, LoadStatus::Error) => Some(self.translations().error_loading_data.to_string()),
            _ => None,
        }
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.state.updated_at.as_deref()
    }

    pub fn data_progress(&self) -> f64 {
        self.progress.value()
    }

    /// Combined data and image progress in `[0, 1]`.
    pub fn loading_progress(&self) -> f64 {
        combined_progress(self.state.status, self.progress, self.image_status)
    }

    pub fn image_status(&self) -> ImageStatus {
        self.image_status
    }

    pub fn translations(&self) -> &'static Translations {
        self.language.translations()
    }

    pub fn config(&self) -> &HotspotConfig {
        &self.deps.config
    }

    pub fn snapshot(&self) -> HotspotSnapshot {
        HotspotSnapshot {
            language: self.language,
            hotspots: self.state.hotspots.clone(),
            status: self.state.status,
            error: self.error(),
            updated_at: self.state.updated_at.clone(),
            selected_hotspot_id: self.selected.clone(),
            loading_progress: self.loading_progress(),
            image_status: self.image_status,
        }
    }

    /// Data and image have both reached a terminal state, or the task that
    /// would report one has ended.
    pub fn is_settled(&self) -> bool {
        let data_done = self.state.status != LoadStatus::Loading
            || self.load_task.as_ref().map_or(true, |t| t.is_finished());
        let image_done = self.image.is_none()
            || self.image_status.is_terminal()
            || self.image_forwarder.as_ref().map_or(true, |t| t.is_finished());
        data_done && image_done
    }

    /// Wait for the next background message and apply it.
    pub async fn next_update(&mut self) {
        if let Some(message) = self.rx.recv().await {
            self.apply(message);
        }
    }

    /// Apply every message already queued without waiting.
    pub fn drain_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.rx.try_recv() {
            self.apply(message);
            applied += 1;
        }
        applied
    }

    pub async fn run_until_settled(&mut self) {
        loop {
            self.drain_pending();
            if self.is_settled() {
                // a finished task may have queued its last messages
                if self.drain_pending() == 0 {
                    return;
                }
                continue;
            }
            self.next_update().await;
        }
    }

    /// Apply one message. Messages from a superseded session are ignored.
    pub fn apply(&mut self, message: LoadMessage) {
        if let Some(session) = message.session() {
            if session != self.session {
                debug!("Discarding message from stale session {}", session);
                return;
            }
        }

        match message {
            LoadMessage::AttemptStarted { attempt, .. } => {
                if attempt > 0 {
                    debug!("Load attempt {} for {}", attempt, self.language);
                }
                self.state = self.state.loading();
            }
            LoadMessage::Progress { value, .. } => self.progress.advance(value),
            LoadMessage::Loaded { data, .. } => {
                let HotspotDataFile {
                    hotspots,
                    updated_at,
                    ..
                } = data;
                self.state = self.state.loaded(hotspots, Some(updated_at));
                self.progress.complete();
                self.rebuild_index();
            }
            LoadMessage::Failed { message, .. } => {
                self.state = self.state.failed(message);
                self.progress.reset();
                self.rebuild_index();
            }
            LoadMessage::Image(status) => self.image_status = status,
        }
    }

    /// Session id messages must carry to be applied.
    pub fn current_session(&self) -> SessionId {
        self.session
    }

    fn begin_session(&mut self, fresh: bool) {
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
        self.session += 1;
        self.progress.reset();
        self.state = if fresh {
            HotspotState::loading_fresh()
        } else {
            self.state.loading()
        };

        let deps = self.deps.clone();
        let language = self.language;
        let session = self.session;
        let tx = self.tx.clone();
        self.load_task = Some(tokio::spawn(run_load_session(deps, language, session, tx)));
    }

    fn start_image_preload(&mut self) {
        let preloader = ImagePreloader::start(self.image_source.clone(), self.deps.config.image_url());
        self.image_status = preloader.status();
        let rx = preloader.subscribe();
        let tx = self.tx.clone();
        self.image_forwarder = Some(tokio::spawn(async move {
            if let Some(status) = wait_for_terminal(rx).await {
                let _ = tx.send(LoadMessage::Image(status));
            }
        }));
        self.image = Some(preloader);
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .state
            .hotspots
            .iter()
            .enumerate()
            .map(|(i, h)| (h.id.clone(), i))
            .collect();
    }
}

impl Drop for HotspotContext {
    fn drop(&mut self) {
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
        if let Some(forwarder) = self.image_forwarder.take() {
            forwarder.abort();
        }
    }
}

impl std::fmt::Debug for HotspotContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotspotContext")
            .field("language", &self.language)
            .field("status", &self.state.status)
            .field("hotspots", &self.state.hotspots.len())
            .field("session", &self.session)
            .field("image_status", &self.image_status)
            .finish_non_exhaustive()
    }
}

//! Headless view model for the interactive image.
//!
//! [`HotspotView`] turns a [`HotspotContext`] plus a measured container into
//! the markers, overlay and dialog a renderer draws, and routes pointer and
//! keyboard input back into the context's selection.

pub mod dialog;
pub mod marker;
pub mod overlay;

pub use dialog::{link_focus_id, Dialog, DialogAction, DialogContent, CLOSE_BUTTON_ID};
pub use marker::{build_markers, marker_focus_id, MarkerModel, CIRCLE_RADIUS, DEFAULT_RECT_RADIUS};
pub use overlay::LoadingOverlay;

use tracing::debug;

use crate::context::HotspotContext;
use crate::geometry::Size;

/// Element id of the detail dialog; markers reference it in aria-controls.
pub const DIALOG_ID: &str = "hotspot-details";

/// Keys the view reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    ShiftTab,
    Other,
}

#[derive(Debug, Default)]
pub struct HotspotView {
    container: Size,
    dialog: Dialog,
    focused: Option<String>,
}

impl HotspotView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new container measurement.
    pub fn resize(&mut self, container: Size) {
        self.container = container;
    }

    pub fn container(&self) -> Size {
        self.container
    }

    /// Currently focused element id, if the view knows it.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Move focus outside the dialog, e.g. when the user tabs to a marker.
    pub fn focus(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.dialog.is_open() {
            if self.dialog.focus(&id) {
                self.focused = Some(id);
            }
            return;
        }
        self.focused = Some(id);
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn markers(&self, ctx: &HotspotContext) -> Vec<MarkerModel> {
        build_markers(
            ctx.hotspots(),
            self.container,
            ctx.selected_hotspot_id(),
            DIALOG_ID,
        )
    }

    pub fn overlay(&self, ctx: &HotspotContext) -> LoadingOverlay {
        LoadingOverlay::build(
            ctx.status(),
            ctx.image_status(),
            ctx.loading_progress(),
            ctx.translations(),
        )
    }

    pub fn dialog_content(&self, ctx: &HotspotContext) -> DialogContent {
        let hotspot = ctx.selected_hotspot();
        let updated_at = hotspot
            .and_then(|h| h.updated_at.as_deref())
            .or_else(|| ctx.updated_at());
        DialogContent::build(hotspot, updated_at, ctx.translations())
    }

    /// Open or close the dialog to match the context's selection.
    ///
    /// The dialog is open only while the selected id resolves to a loaded
    /// hotspot. Call after anything that may have changed the selection or
    /// the hotspot list, including a language switch or a failed reload.
    pub fn sync(&mut self, ctx: &HotspotContext) {
        if ctx.selected_hotspot().is_some() {
            let focusables = self.dialog_content(ctx).focusables();
            self.dialog.open(focusables, self.focused.clone());
            self.focused = self.dialog.focused().map(str::to_string);
        } else if self.dialog.is_open() {
            self.focused = self.dialog.close();
        }
    }

    /// Pointer activation of a marker.
    pub fn click_marker(&mut self, ctx: &mut HotspotContext, hotspot_id: &str) {
        let Some(marker) = self.markers(ctx).into_iter().find(|m| m.hotspot_id == hotspot_id) else {
            return;
        };
        self.focused = Some(marker.focus_id.clone());
        ctx.select_hotspot(marker.activate().as_deref());
        self.sync(ctx);
    }

    /// Key press while focus is outside the dialog. Returns whether it was
    /// handled.
    pub fn marker_key(&mut self, ctx: &mut HotspotContext, hotspot_id: &str, key: Key) -> bool {
        let Some(marker) = self.markers(ctx).into_iter().find(|m| m.hotspot_id == hotspot_id) else {
            return false;
        };
        match marker.handle_key(key) {
            Some(next) => {
                self.focused = Some(marker.focus_id.clone());
                ctx.select_hotspot(next.as_deref());
                self.sync(ctx);
                true
            }
            None => false,
        }
    }

    /// Key press while the dialog is open.
    pub fn dialog_key(&mut self, ctx: &mut HotspotContext, key: Key) -> DialogAction {
        let action = self.dialog.handle_key(key);
        match &action {
            DialogAction::Close => {
                debug!("Dialog closed from keyboard");
                ctx.select_hotspot(None);
                self.sync(ctx);
            }
            DialogAction::Focused(id) => self.focused = Some(id.clone()),
            DialogAction::Swallowed | DialogAction::Ignored => {}
        }
        action
    }

    /// Close button activation.
    pub fn close_dialog(&mut self, ctx: &mut HotspotContext) {
        ctx.select_hotspot(None);
        self.sync(ctx);
    }
}

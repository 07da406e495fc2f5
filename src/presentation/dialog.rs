//! Hotspot detail dialog: content and focus management.
//!
//! The dialog owns a focus ring made of its close button followed by its
//! links. Opening focuses the close button and remembers what had focus;
//! closing hands that element back.

use serde::Serialize;

use crate::i18n::Translations;
use crate::models::{Hotspot, Link, Severity};

use super::Key;

/// Focus id of the close button.
pub const CLOSE_BUTTON_ID: &str = "dialog-close";

pub fn link_focus_id(index: usize) -> String {
    format!("dialog-link-{}", index)
}

/// Text content of the dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogContent {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Categories joined by " · "; empty when there are none
    pub meta_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub links: Vec<Link>,
    /// Detail image path, resolved against the site root by the renderer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub close_label: String,
}

impl DialogContent {
    pub fn build(hotspot: Option<&Hotspot>, updated_at: Option<&str>, t: &Translations) -> Self {
        let meta_line = hotspot
            .map(|h| {
                h.categories
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(" · ")
            })
            .unwrap_or_default();

        Self {
            title: hotspot.map(|h| h.title.clone()).unwrap_or_default(),
            description: hotspot
                .map(|h| h.description.clone())
                .unwrap_or_else(|| t.no_hotspot_selected.to_string()),
            severity: hotspot.and_then(|h| h.severity),
            meta_line,
            last_updated: updated_at.map(|v| t.last_updated(v)),
            links: hotspot.and_then(|h| h.links.clone()).unwrap_or_default(),
            image: hotspot
                .and_then(|h| h.media.as_ref())
                .and_then(|m| m.image.clone()),
            close_label: t.close.to_string(),
        }
    }

    /// Focus ring for this content: close button first, then each link.
    pub fn focusables(&self) -> Vec<String> {
        std::iter::once(CLOSE_BUTTON_ID.to_string())
            .chain((0..self.links.len()).map(link_focus_id))
            .collect()
    }
}

/// What a key press inside the dialog did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Key not handled by the dialog
    Ignored,
    /// Focus moved to the given element
    Focused(String),
    /// Tab with nothing focusable; the key is swallowed
    Swallowed,
    /// Escape; the caller must clear the selection
    Close,
}

#[derive(Debug, Clone, Default)]
pub struct Dialog {
    open: bool,
    focusables: Vec<String>,
    focused: Option<String>,
    restore_focus: Option<String>,
}

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Open with the given focus ring, remembering `previously_focused`.
    /// Re-opening while open replaces the focus ring and keeps focus where
    /// it is if that element is still in the ring.
    pub fn open(&mut self, focusables: Vec<String>, previously_focused: Option<String>) {
        let keep = self.open
            && self
                .focused
                .as_ref()
                .is_some_and(|id| focusables.contains(id));
        if !self.open {
            self.restore_focus = previously_focused;
        }
        self.open = true;
        if !keep {
            self.focused = focusables
                .iter()
                .find(|id| id.as_str() == CLOSE_BUTTON_ID)
                .or_else(|| focusables.first())
                .cloned();
        }
        self.focusables = focusables;
    }

    /// Close and return the element that should receive focus back.
    pub fn close(&mut self) -> Option<String> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.focused = None;
        self.focusables.clear();
        self.restore_focus.take()
    }

    /// Track focus moved by pointer inside the dialog.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.open && self.focusables.iter().any(|f| f == id) {
            self.focused = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn handle_key(&mut self, key: Key) -> DialogAction {
        if !self.open {
            return DialogAction::Ignored;
        }
        match key {
            Key::Escape => DialogAction::Close,
            Key::Tab => self.cycle(true),
            Key::ShiftTab => self.cycle(false),
            _ => DialogAction::Ignored,
        }
    }

    fn cycle(&mut self, forward: bool) -> DialogAction {
        let len = self.focusables.len();
        if len == 0 {
            return DialogAction::Swallowed;
        }
        let current = self
            .focused
            .as_ref()
            .and_then(|f| self.focusables.iter().position(|id| id == f));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        let id = self.focusables[next].clone();
        self.focused = Some(id.clone());
        DialogAction::Focused(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::models::{Category, Coords, ResponsiveCoords, Shape};

    fn hotspot(links: usize) -> Hotspot {
        Hotspot {
            id: "chair".to_string(),
            title: "Chair".to_string(),
            short_title: None,
            description: "Adjust the seat height.".to_string(),
            aria_label: "Chair".to_string(),
            coords: ResponsiveCoords::new(Coords::center(10.0, 10.0)),
            shape: Shape::Circle { radius: 3.0 },
            media: None,
            categories: vec![Category::Ergonomics, Category::Physical],
            severity: Some(Severity::Medium),
            links: Some(
                (0..links)
                    .map(|i| Link {
                        label: format!("Guide {}", i),
                        href: format!("https://example.org/{}", i),
                    })
                    .collect(),
            ),
            updated_at: None,
        }
    }

    #[test]
    fn test_content() {
        let t = Translations::for_language(Language::En);
        let content = DialogContent::build(Some(&hotspot(1)), Some("2025-02-11"), t);
        assert_eq!(content.title, "Chair");
        assert_eq!(content.meta_line, "ergonomics · physical");
        assert_eq!(content.last_updated.as_deref(), Some("Last updated: 2025-02-11"));
        assert_eq!(content.severity, Some(Severity::Medium));
        assert_eq!(content.close_label, "Close");
        assert_eq!(content.image, None);
        assert_eq!(content.focusables(), vec![CLOSE_BUTTON_ID.to_string(), link_focus_id(0)]);
    }

    #[test]
    fn test_content_exposes_detail_image() {
        let mut h = hotspot(0);
        h.media = Some(crate::models::Media {
            image: Some("assets/hotspots/chair.png".into()),
            gallery: None,
        });
        let content = DialogContent::build(Some(&h), None, Translations::for_language(Language::En));
        assert_eq!(content.image.as_deref(), Some("assets/hotspots/chair.png"));
        assert_eq!(content.last_updated, None);
    }

    #[test]
    fn test_content_without_hotspot() {
        let t = Translations::for_language(Language::Lv);
        let content = DialogContent::build(None, None, t);
        assert_eq!(content.description, t.no_hotspot_selected);
        assert!(content.meta_line.is_empty());
        assert_eq!(content.focusables(), vec![CLOSE_BUTTON_ID.to_string()]);
    }

    #[test]
    fn test_open_focuses_close_and_close_restores() {
        let mut dialog = Dialog::new();
        dialog.open(
            vec![CLOSE_BUTTON_ID.to_string(), link_focus_id(0)],
            Some("marker-chair".to_string()),
        );
        assert!(dialog.is_open());
        assert_eq!(dialog.focused(), Some(CLOSE_BUTTON_ID));
        assert_eq!(dialog.close(), Some("marker-chair".to_string()));
        assert!(!dialog.is_open());
        assert_eq!(dialog.close(), None);
    }

    #[test]
    fn test_tab_wraps_both_ways() {
        let mut dialog = Dialog::new();
        dialog.open(
            vec![CLOSE_BUTTON_ID.to_string(), link_focus_id(0), link_focus_id(1)],
            None,
        );
        assert_eq!(dialog.handle_key(Key::Tab), DialogAction::Focused(link_focus_id(0)));
        assert_eq!(dialog.handle_key(Key::Tab), DialogAction::Focused(link_focus_id(1)));
        assert_eq!(
            dialog.handle_key(Key::Tab),
            DialogAction::Focused(CLOSE_BUTTON_ID.to_string())
        );
        assert_eq!(
            dialog.handle_key(Key::ShiftTab),
            DialogAction::Focused(link_focus_id(1))
        );
    }

    #[test]
    fn test_tab_without_focusables_is_swallowed() {
        let mut dialog = Dialog::new();
        dialog.open(Vec::new(), None);
        assert_eq!(dialog.handle_key(Key::Tab), DialogAction::Swallowed);
        assert_eq!(dialog.handle_key(Key::ShiftTab), DialogAction::Swallowed);
    }

    #[test]
    fn test_escape_and_closed_dialog() {
        let mut dialog = Dialog::new();
        assert_eq!(dialog.handle_key(Key::Escape), DialogAction::Ignored);
        dialog.open(vec![CLOSE_BUTTON_ID.to_string()], None);
        assert_eq!(dialog.handle_key(Key::Escape), DialogAction::Close);
        assert_eq!(dialog.handle_key(Key::Enter), DialogAction::Ignored);
    }

    #[test]
    fn test_reopen_keeps_original_restore_target() {
        let mut dialog = Dialog::new();
        dialog.open(vec![CLOSE_BUTTON_ID.to_string()], Some("marker-a".into()));
        dialog.open(vec![CLOSE_BUTTON_ID.to_string()], Some(CLOSE_BUTTON_ID.into()));
        assert_eq!(dialog.close(), Some("marker-a".to_string()));
    }

    #[test]
    fn test_reopen_keeps_focus_inside_ring() {
        let ring = vec![CLOSE_BUTTON_ID.to_string(), link_focus_id(0)];
        let mut dialog = Dialog::new();
        dialog.open(ring.clone(), Some("marker-a".into()));
        assert!(dialog.focus(&link_focus_id(0)));

        dialog.open(ring, None);
        assert_eq!(dialog.focused(), Some(link_focus_id(0).as_str()));

        dialog.open(vec![CLOSE_BUTTON_ID.to_string()], None);
        assert_eq!(dialog.focused(), Some(CLOSE_BUTTON_ID));
    }
}

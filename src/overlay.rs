use crate::audio::BgMusic;
use crate::core::messages::MessagePage;
use crate::core::{Room, UiCommand};
use crate::dom;
use web_sys as web;

const MESSAGE_OVERLAY: &str = "message-overlay";
const SCENE_DIM: &str = "scene-dim";
const LOADING_SCREEN: &str = "loading-screen";
const WISH_TEXT: &str = "wish-text";
const MUSIC_TOGGLE: &str = "music-toggle";

/// Applies queued room commands to the page overlay.
pub struct UiBridge {
    document: web::Document,
    music: Option<BgMusic>,
}

impl UiBridge {
    pub fn new(document: web::Document) -> Self {
        let music = BgMusic::find(&document);
        if music.is_none() {
            log::warn!("[ui] no #bg-music element; music disabled");
        }
        Self { document, music }
    }

    /// Drain and apply everything the room queued since the last flush.
    pub fn flush(&self, room: &mut Room) {
        for cmd in room.drain_ui() {
            self.apply(cmd);
        }
    }

    pub fn apply(&self, cmd: UiCommand) {
        match cmd {
            UiCommand::ShowMessage => self.show_message(),
            UiCommand::HideMessage => self.hide_message(),
            UiCommand::CollapseMessage => {
                if let Some(el) = dom::html_element(&self.document, MESSAGE_OVERLAY) {
                    dom::set_display(&el, "none");
                }
            }
            UiCommand::MessagePage(page) => self.render_page(&page),
            UiCommand::ShowWish => self.set_wish(true),
            UiCommand::HideWish => self.set_wish(false),
            UiCommand::PlayMusic => {
                if let Some(m) = &self.music {
                    m.play();
                }
            }
            UiCommand::SetMuted(muted) => {
                if let Some(m) = &self.music {
                    m.set_muted(muted);
                }
                dom::set_text(&self.document, MUSIC_TOGGLE, if muted { "🔇" } else { "🔊" });
            }
            UiCommand::FadeLoadingScreen => {
                if let Some(el) = self.document.get_element_by_id(LOADING_SCREEN) {
                    dom::set_class(&el, "fade-out", true);
                }
            }
            UiCommand::HideLoadingScreen => {
                if let Some(el) = dom::html_element(&self.document, LOADING_SCREEN) {
                    dom::set_display(&el, "none");
                }
            }
        }
    }

    fn show_message(&self) {
        let Some(overlay) = dom::html_element(&self.document, MESSAGE_OVERLAY) else {
            return;
        };
        dom::set_display(&overlay, "flex");
        if let Some(dim) = self.document.get_element_by_id(SCENE_DIM) {
            dom::set_class(&dim, "active", true);
        }
        // The fade only runs if `visible` lands after the display change is laid out.
        dom::next_frame(move || {
            dom::set_class(&overlay, "visible", true);
            if let Ok(Some(card)) = overlay.query_selector(".message-card") {
                dom::set_class(&card, "visible", true);
            }
        });
    }

    fn hide_message(&self) {
        if let Some(overlay) = self.document.get_element_by_id(MESSAGE_OVERLAY) {
            dom::set_class(&overlay, "visible", false);
            if let Ok(Some(card)) = overlay.query_selector(".message-card") {
                dom::set_class(&card, "visible", false);
            }
        }
        if let Some(dim) = self.document.get_element_by_id(SCENE_DIM) {
            dom::set_class(&dim, "active", false);
        }
    }

    fn render_page(&self, page: &MessagePage) {
        dom::set_text(&self.document, "message-text", &page.text);
        dom::set_text(&self.document, "message-indicator", &page.indicator);
        dom::set_button_disabled(&self.document, "prev-message", !page.prev_enabled);
        dom::set_button_disabled(&self.document, "next-message", !page.next_enabled);
    }

    fn set_wish(&self, visible: bool) {
        if let Some(el) = self.document.get_element_by_id(WISH_TEXT) {
            dom::set_class(&el, "visible", visible);
        }
    }
}

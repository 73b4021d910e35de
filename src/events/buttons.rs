use super::EventWiring;
use crate::dom;

pub fn wire_buttons(document: &web_sys::Document, w: &EventWiring) {
    let prev = w.clone();
    dom::add_click_listener(document, "prev-message", move || {
        prev.with_room(|room, _| {
            room.change_message(-1);
        });
    });

    let next = w.clone();
    dom::add_click_listener(document, "next-message", move || {
        next.with_room(|room, _| {
            room.change_message(1);
        });
    });

    let close = w.clone();
    dom::add_click_listener(document, "close-message", move || {
        close.with_room(|room, now_ms| {
            room.close_message(now_ms);
        });
    });

    let release = w.clone();
    dom::add_click_listener(document, "release-balloons", move || {
        release.with_room(|room, now_ms| {
            room.release_balloons(now_ms);
        });
    });

    let music = w.clone();
    dom::add_click_listener(document, "music-toggle", move || {
        music.with_room(|room, _| room.toggle_music());
    });
}

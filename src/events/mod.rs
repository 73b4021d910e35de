pub mod buttons;
pub mod pointer;

use crate::core::Room;
use crate::frame::SceneClock;
use crate::overlay::UiBridge;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles every DOM listener needs.
#[derive(Clone)]
pub struct EventWiring {
    pub canvas: web::HtmlCanvasElement,
    pub room: Rc<RefCell<Room>>,
    pub bridge: Rc<UiBridge>,
    pub clock: SceneClock,
}

impl EventWiring {
    /// Run `f` against the room, then push any resulting overlay changes out
    /// immediately rather than waiting for the next frame.
    pub fn with_room(&self, f: impl FnOnce(&mut Room, f64)) {
        let now_ms = self.clock.now_ms();
        let mut room = self.room.borrow_mut();
        f(&mut *room, now_ms);
        self.bridge.flush(&mut room);
    }
}

pub use buttons::wire_buttons;
pub use pointer::wire_input_handlers;

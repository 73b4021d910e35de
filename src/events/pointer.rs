use super::EventWiring;
use crate::dom;
use crate::input::surface_ndc;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: &EventWiring) {
    wire_click(w);
    wire_touchend(w);
    wire_dblclick(w);
    if dom::has_fine_pointer() {
        wire_pointerdown(w);
        wire_pointermove(w);
        wire_pointerup(w);
    } else {
        log::info!("[input] coarse pointer; orbit drag disabled");
    }
}

fn client_ndc(canvas: &web::HtmlCanvasElement, x: i32, y: i32) -> Option<Vec2> {
    surface_ndc(x as f32, y as f32, dom::surface_rect(canvas))
}

fn wire_click(w: &EventWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(ndc) = client_ndc(&w.canvas, ev.client_x(), ev.client_y()) else {
            return;
        };
        w.with_room(|room, now_ms| room.click(ndc, now_ms));
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchend(w: &EventWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // Keep the browser from synthesizing a second, mouse-driven click.
        ev.prevent_default();
        let Some(touch) = ev.changed_touches().get(0) else {
            return;
        };
        let Some(ndc) = client_ndc(&w.canvas, touch.client_x(), touch.client_y()) else {
            return;
        };
        w.with_room(|room, now_ms| room.tap(ndc, now_ms));
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_dblclick(w: &EventWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.with_room(|room, now_ms| {
            room.release_balloons(now_ms);
        });
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &EventWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let x = ev.client_x() as f32;
        w.with_room(|room, _| {
            if room.pointer_down(x) {
                log::debug!("[input] orbit drag start at {:.0}", x);
            }
        });
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.room.borrow().drag.active {
            return;
        }
        let x = ev.client_x() as f32;
        w.room.borrow_mut().pointer_move(x);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.with_room(|room, now_ms| room.pointer_up(now_ms));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

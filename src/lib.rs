#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod caption;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use crate::core::{Room, RoomConfig};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, room: Rc<RefCell<Room>>) {
    let (w, h) = dom::sync_canvas_backing_size(canvas);
    room.borrow_mut().set_viewport(w, h);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        room.borrow_mut().set_viewport(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("birthday-room starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("scene-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #scene-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let clock = frame::SceneClock::start();
    let room = Rc::new(RefCell::new(Room::new(RoomConfig::default())));
    let bridge = Rc::new(overlay::UiBridge::new(document.clone()));
    bridge.flush(&mut room.borrow_mut());

    wire_canvas_resize(&canvas, room.clone());

    let wiring = events::EventWiring {
        canvas: canvas.clone(),
        room: room.clone(),
        bridge: bridge.clone(),
        clock,
    };
    events::wire_input_handlers(&wiring);
    events::wire_buttons(&document, &wiring);

    let caption_text = room.borrow().scene.caption.clone();
    let caption = match caption_text.as_deref().map(|t| caption::draw_caption(&document, t)) {
        Some(Ok(image)) => image,
        Some(Err(e)) => {
            log::warn!("[caption] drawing failed: {:?}", e);
            caption::CaptionImage::blank()
        }
        None => caption::CaptionImage::blank(),
    };

    // Without WebGPU the overlay and timers still run; only the 3D view is missing.
    let gpu = frame::init_gpu(&canvas, &caption).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        room,
        bridge,
        canvas,
        gpu,
        clock,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

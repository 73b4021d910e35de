use crate::caption::CaptionImage;
use crate::core::Room;
use crate::dom;
use crate::overlay::UiBridge;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Single monotonic clock shared by the frame loop and event handlers.
#[derive(Clone, Copy, Debug)]
pub struct SceneClock {
    start: Instant,
}

impl SceneClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds since the scene started.
    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext<'a> {
    pub room: Rc<RefCell<Room>>,
    pub bridge: Rc<UiBridge>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub clock: SceneClock,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now_ms = self.clock.now_ms();
        let width = self.canvas.width();
        let height = self.canvas.height();

        let mut room = self.room.borrow_mut();
        room.set_viewport(width, height);
        room.advance(now_ms);
        self.bridge.flush(&mut room);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            let camera = room.camera();
            match g.render(&room.scene, &camera) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                    log::debug!("[render] surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("[render] render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    caption: &CaptionImage,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    dom::sync_canvas_backing_size(leaked_canvas);
    match render::GpuState::new(leaked_canvas, caption).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

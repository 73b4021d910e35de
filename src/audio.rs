use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping background track backed by the page's `#bg-music` element.
pub struct BgMusic {
    element: web::HtmlAudioElement,
}

impl BgMusic {
    pub fn find(document: &web::Document) -> Option<Self> {
        let element = document
            .get_element_by_id("bg-music")?
            .dyn_into::<web::HtmlAudioElement>()
            .ok()?;
        element.set_loop(true);
        Some(Self { element })
    }

    /// Start playback. Browsers may refuse without a prior user gesture; the
    /// rejection is logged and otherwise ignored.
    pub fn play(&self) {
        if !self.element.paused() {
            return;
        }
        let promise = match self.element.play() {
            Ok(p) => p,
            Err(e) => {
                log::debug!("[audio] play() threw: {:?}", e);
                return;
            }
        };
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[audio] playback blocked: {:?}", e);
            }
        });
    }

    pub fn set_muted(&self, muted: bool) {
        self.element.set_muted(muted);
    }
}

use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

const CAPTION_WIDTH: u32 = 512;
const CAPTION_HEIGHT: u32 = 256;
const CAPTION_FONT: &str = "bold 80px Poppins";
const CAPTION_COLOR: &str = "#ffd6ff";

/// Straight-alpha RGBA8 pixels, rows top to bottom.
pub struct CaptionImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl CaptionImage {
    /// A single clear texel, bound when no caption could be drawn.
    pub fn blank() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![0; 4],
        }
    }
}

/// Draw `text` centred on an offscreen 2D canvas and read the pixels back.
pub fn draw_caption(document: &web::Document, text: &str) -> anyhow::Result<CaptionImage> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("created element is not a canvas"))?;
    canvas.set_width(CAPTION_WIDTH);
    canvas.set_height(CAPTION_HEIGHT);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("not a 2d context"))?;

    let (w, h) = (CAPTION_WIDTH as f64, CAPTION_HEIGHT as f64);
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_font(CAPTION_FONT);
    ctx.set_fill_style_str(CAPTION_COLOR);
    ctx.set_text_align("center");
    ctx.fill_text(text, w / 2.0, h / 2.0 + 25.0)
        .map_err(|e| anyhow!("fill_text: {:?}", e))?;

    let data = ctx
        .get_image_data(0.0, 0.0, w, h)
        .map_err(|e| anyhow!("get_image_data: {:?}", e))?;
    log::debug!("[caption] drew {:?} at {}x{}", text, CAPTION_WIDTH, CAPTION_HEIGHT);
    Ok(CaptionImage {
        width: data.width(),
        height: data.height(),
        rgba: data.data().0,
    })
}

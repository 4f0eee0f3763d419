//! Canvas 2D implementation of the game's drawing surface

pub mod init;

use game_core::Surface;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    size: (u32, u32),
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = init::init_context(canvas)?;
        Ok(Self {
            context,
            size: (canvas.width(), canvas.height()),
        })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.size.0 as f32
    }

    fn height(&self) -> f32 {
        self.size.1 as f32
    }

    fn clear(&mut self) {
        self.context
            .clear_rect(0.0, 0.0, self.size.0 as f64, self.size.1 as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.context.set_fill_style_str(color);
        self.context
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.begin_path();
        // Only fails for a negative radius
        if let Err(e) = self
            .context
            .arc(x as f64, y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("Failed to trace ball arc: {:?}", e);
            return;
        }
        self.context.fill();
    }
}

//! Browser client for canvas Pong
//!
//! Hosts the `game_core` simulation on an HTML canvas: keyboard listeners
//! feed the input state and `requestAnimationFrame` drives one tick per
//! display refresh.

pub mod input;
pub mod renderer;

#[cfg(target_arch = "wasm32")]
mod driver;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Console verbosity: per-frame events only in debug builds
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Module init: route panics and log records to the browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log_level()) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger not installed: {}", e)));
    }
}

/// Start the game on the canvas with the given element id
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    driver::run(canvas_id)
}

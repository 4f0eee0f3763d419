//! Frame loop driven by `requestAnimationFrame`

use crate::input::install_listeners;
use crate::renderer::{init::find_canvas, CanvasSurface};
use game_core::{Config, Game};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Set up the canvas, input and frame loop. The loop runs until the page goes away.
pub fn run(canvas_id: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Window has no document"))?;

    let canvas = find_canvas(&document, canvas_id)?;
    let mut surface = CanvasSurface::new(&canvas)?;
    let game = Rc::new(RefCell::new(Game::new(Config::for_surface(&surface))));

    install_listeners(&document, &game)?;

    // The callback re-schedules itself, so it holds a handle to its own slot
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);
    let frame_window = window.clone();
    *callback.borrow_mut() = Some(Closure::new(move || {
        game.borrow_mut().tick(&mut surface);

        if let Err(e) = schedule(&frame_window, &next) {
            log::error!("Failed to schedule next frame: {:?}", e);
        }
    }));

    schedule(&window, &callback)?;
    log::info!("Game loop started on #{}", canvas_id);
    Ok(())
}

fn schedule(window: &Window, callback: &FrameCallback) -> Result<(), JsValue> {
    let slot = callback.borrow();
    let closure = slot
        .as_ref()
        .ok_or_else(|| JsValue::from_str("Frame callback not set"))?;
    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    Ok(())
}

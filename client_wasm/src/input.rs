//! Keyboard input handling

use game_core::Game;

/// Kind of keyboard transition delivered by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

impl KeyAction {
    /// DOM event type to listen for
    pub fn event_type(self) -> &'static str {
        match self {
            KeyAction::Down => "keydown",
            KeyAction::Up => "keyup",
        }
    }
}

/// Apply a key transition to the game. Returns `true` when the key is bound,
/// in which case the page should not also act on it (arrow keys scroll).
pub fn handle_key(game: &mut Game, action: KeyAction, key: &str) -> bool {
    match action {
        KeyAction::Down => game.key_down(key),
        KeyAction::Up => game.key_up(key),
    }
}

#[cfg(target_arch = "wasm32")]
pub use listeners::install_listeners;

#[cfg(target_arch = "wasm32")]
mod listeners {
    use super::{handle_key, KeyAction};
    use game_core::Game;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent};

    /// Register `keydown`/`keyup` listeners that live for the rest of the page
    pub fn install_listeners(document: &Document, game: &Rc<RefCell<Game>>) -> Result<(), JsValue> {
        for action in [KeyAction::Down, KeyAction::Up] {
            let game = Rc::clone(game);
            let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                if handle_key(&mut game.borrow_mut(), action, &event.key()) {
                    event.prevent_default();
                }
            });
            document
                .add_event_listener_with_callback(action.event_type(), listener.as_ref().unchecked_ref())?;
            listener.forget();
        }
        Ok(())
    }
}

//! Keyboard and mouse listeners feeding the shared input state

use std::cell::RefCell;
use std::rc::Rc;

use game_core::input::InputState;
use glam::Vec2;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, KeyboardEvent, MouseEvent, Window};

fn listen<E, F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Key codes go to the window; mouse moves are taken from the whole page
/// and made relative to the arena's padding.
pub fn install(window: &Window, input: Rc<RefCell<InputState>>, padding: Vec2) -> Result<(), JsValue> {
    {
        let input = input.clone();
        listen(window, "keydown", move |event: KeyboardEvent| {
            input.borrow_mut().key_down(event.key_code());
        })?;
    }
    {
        let input = input.clone();
        listen(window, "keyup", move |event: KeyboardEvent| {
            input.borrow_mut().key_up(event.key_code());
        })?;
    }
    listen(window, "mousemove", move |event: MouseEvent| {
        input
            .borrow_mut()
            .mouse_move(event.page_x() as f32, event.page_y() as f32, padding);
    })
}

//! Page elements the game draws into

use game_core::hud::Hud;
use game_core::map::Aabb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

fn element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{id}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("Element #{id} is not an HTML element")))
}

fn set_text(element: &HtmlElement, text: &str) {
    element.set_text_content(Some(text));
}

/// Absolutely positioned box
fn place(element: &HtmlElement, bounds: &Aabb) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("left", &format!("{}px", bounds.min.x))?;
    style.set_property("top", &format!("{}px", bounds.min.y))?;
    Ok(())
}

fn resize(element: &HtmlElement, bounds: &Aabb) -> Result<(), JsValue> {
    let size = bounds.size();
    let style = element.style();
    style.set_property("width", &format!("{}px", size.x))?;
    style.set_property("height", &format!("{}px", size.y))?;
    Ok(())
}

pub struct Dom {
    game: HtmlElement,
    ball: HtmlElement,
    left_paddle: HtmlElement,
    right_paddle: HtmlElement,
    left_score: HtmlElement,
    right_score: HtmlElement,
    computer_control: HtmlElement,
    mouse_control: HtmlElement,
    mute: HtmlElement,
    volume: HtmlElement,
    errors: HtmlElement,
}

impl Dom {
    pub fn bind(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            game: element(document, "game")?,
            ball: element(document, "ball")?,
            left_paddle: element(document, "left-paddle")?,
            right_paddle: element(document, "right-paddle")?,
            left_score: element(document, "left-score")?,
            right_score: element(document, "right-score")?,
            computer_control: element(document, "computer-control-state")?,
            mouse_control: element(document, "mouse-control-state")?,
            mute: element(document, "mute-state")?,
            volume: element(document, "volume-state")?,
            errors: element(document, "errors")?,
        })
    }

    /// Size the arena and the pieces once at startup
    pub fn layout(&self, arena: &Aabb, ball: &Aabb, left: &Aabb, right: &Aabb) -> Result<(), JsValue> {
        resize(&self.game, arena)?;
        resize(&self.ball, ball)?;
        resize(&self.left_paddle, left)?;
        resize(&self.right_paddle, right)?;
        self.draw(ball, left, right)
    }

    pub fn draw(&self, ball: &Aabb, left: &Aabb, right: &Aabb) -> Result<(), JsValue> {
        place(&self.ball, ball)?;
        place(&self.left_paddle, left)?;
        place(&self.right_paddle, right)
    }

    pub fn write_hud(&self, hud: &Hud) {
        set_text(&self.left_score, &hud.left_score);
        set_text(&self.right_score, &hud.right_score);
        set_text(&self.computer_control, &hud.computer_level);
        set_text(&self.mouse_control, hud.mouse_control);
        set_text(&self.mute, hud.mute);
        set_text(&self.volume, &hud.volume);
    }

    pub fn show_error(&self, message: &str) {
        set_text(&self.errors, message);
    }
}

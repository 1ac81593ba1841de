//! Browser front-end: DOM rendering, keyboard/mouse input and HTML audio
//! around the `game_core` simulation.

#![cfg(target_arch = "wasm32")]

mod audio;
mod dom;
mod input;

use std::cell::RefCell;
use std::rc::Rc;

use audio::HtmlAudio;
use dom::Dom;
use game_core::audio::{SoundBoard, SoundId};
use game_core::input::InputState;
use game_core::{Aabb, Config, FrameThrottle, Side, SimError, Simulation};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Everything the frame loop touches
struct Game {
    sim: Simulation,
    sound: SoundBoard<HtmlAudio>,
    dom: Dom,
    input: Rc<RefCell<InputState>>,
    throttle: FrameThrottle,
}

impl Game {
    fn tick(&mut self, now_ms: f64) {
        if !self.throttle.should_run(now_ms) {
            return;
        }
        if let Err(err) = self.step() {
            log::error!("Frame failed: {err}");
            self.dom.show_error(&err.to_string());
        }
    }

    fn step(&mut self) -> Result<(), SimError> {
        let (report, gesture) = {
            let input = self.input.borrow();
            (self.sim.frame(&input)?, input.any_down())
        };

        if let Err(err) = self
            .dom
            .draw(&report.ball, &report.left_paddle, &report.right_paddle)
        {
            log::warn!("Draw failed: {err:?}");
        }
        if report.hud_dirty {
            self.dom.write_hud(&self.sim.hud());
        }

        for id in self.sound.backend().take_refused() {
            self.sound.requeue(id);
        }
        // Held keys mean the page has had a user gesture
        if gesture && !self.sound.pending().is_empty() {
            self.sound.resume_pending();
        }
        self.sound.apply(&report.sounds);
        self.sound.set_ambient_rate(report.ambient_rate);
        if let Some(master) = report.master {
            self.sound.set_master(master);
        }
        Ok(())
    }
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game.borrow_mut().tick(time);
        request_animation_frame(game);
    });
    if let Err(err) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {err:?}");
    }
    closure.forget();
}

/// Flush parked plays once a sample can play through
fn watch_readiness(game: &Rc<RefCell<Game>>) -> Result<(), JsValue> {
    for id in SoundId::ALL {
        let element = match game.borrow().sound.backend().element(id) {
            Some(element) => element.clone(),
            None => continue,
        };
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().sound.on_ready(id);
        });
        element.add_event_listener_with_callback("canplaythrough", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Start the game in the current page.
///
/// `config_json` optionally overrides any of the default settings.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let config = match config_json {
        Some(json) => Config::from_json(&json),
        None => Ok(Config::new()),
    }
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let padding = config.padding;
    let frame_interval = config.frame_interval_ms;

    let sim = Simulation::new(config, js_sys::Date::now() as u64)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dom = Dom::bind(&document)?;
    let arena = Aabb::from_pos_size(Vec2::ZERO, sim.arena.size);
    let ball = sim.ball().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let left = sim
        .paddle(Side::Left)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let right = sim
        .paddle(Side::Right)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    dom.layout(&arena, &ball.bounds(), &left.bounds(), &right.bounds())?;
    dom.write_hud(&sim.hud());

    let mut sound = SoundBoard::new(HtmlAudio::load()?);
    sound.set_master(sim.master_audio());
    sound.start_ambient();

    let input = Rc::new(RefCell::new(InputState::new()));
    input::install(&window, input.clone(), padding)?;

    let game = Rc::new(RefCell::new(Game {
        sim,
        sound,
        dom,
        input,
        throttle: FrameThrottle::new(frame_interval),
    }));
    watch_readiness(&game)?;

    request_animation_frame(game);
    log::info!("Pong running");
    Ok(())
}

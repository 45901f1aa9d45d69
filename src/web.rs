//! Browser bindings
//!
//! The page owns rendering and keyboard/touch handlers. Handlers write the
//! three input flags through `set_input`; the animation frame calls `step`
//! once, which reads them.

use wasm_bindgen::prelude::*;

use crate::level::Grid;
use crate::session::{Session, SessionState};
use crate::sim::InputState;
use crate::tuning::Tuning;

fn to_js(e: crate::MakerError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// A play session driven from JavaScript
#[wasm_bindgen]
pub struct WebSession {
    session: Session,
    input: InputState,
}

#[wasm_bindgen]
impl WebSession {
    /// Start a session from an array of row strings
    #[wasm_bindgen(constructor)]
    pub fn new(rows: Vec<String>) -> Result<WebSession, JsValue> {
        let level = Grid::parse(&rows).map_err(to_js)?;
        Ok(Self {
            session: Session::new(level, Tuning::default()),
            input: InputState::default(),
        })
    }

    /// Start a session with physics overrides given as JSON
    pub fn with_tuning(rows: Vec<String>, tuning_json: &str) -> Result<WebSession, JsValue> {
        let level = Grid::parse(&rows).map_err(to_js)?;
        let tuning = Tuning::from_json(tuning_json).map_err(to_js)?;
        Ok(Self {
            session: Session::new(level, tuning),
            input: InputState::default(),
        })
    }

    pub fn set_input(&mut self, left: bool, right: bool, jump: bool) {
        self.input = InputState { left, right, jump };
    }

    /// Advance one frame. Returns 0 playing, 1 dead, 2 won.
    pub fn step(&mut self) -> u8 {
        self.session.step(&self.input);
        match self.session.state() {
            SessionState::Playing => 0,
            SessionState::Dead => 1,
            SessionState::Won => 2,
        }
    }

    pub fn state_name(&self) -> String {
        self.session.state().as_str().to_string()
    }

    /// Input flags are left alone; the page's handlers own them.
    pub fn restart(&mut self) {
        self.session.restart();
    }

    /// Replace the level (e.g. after editing), discarding any checkpoint
    pub fn load_level(&mut self, rows: Vec<String>) -> Result<(), JsValue> {
        let level = Grid::parse(&rows).map_err(to_js)?;
        self.session.load_level(level);
        Ok(())
    }

    pub fn player_x(&self) -> f32 {
        self.session.player().pos.x
    }

    pub fn player_y(&self) -> f32 {
        self.session.player().pos.y
    }

    pub fn score(&self) -> u32 {
        self.session.player().score
    }

    pub fn keys(&self) -> u32 {
        self.session.player().keys
    }

    pub fn total_keys(&self) -> u32 {
        self.session.total_keys()
    }

    /// Runtime grid rows for drawing (collected pickups already removed)
    pub fn grid_rows(&self) -> Vec<String> {
        self.session.grid().to_rows()
    }

    /// Flat `[x0, y0, x1, y1, ...]` of live enemy positions
    pub fn enemy_positions(&self) -> Vec<f32> {
        self.session
            .enemies()
            .iter()
            .filter(|e| !e.dead)
            .flat_map(|e| [e.pos.x, e.pos.y])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_held_input_survives_restart_and_reload() {
        let mut web = WebSession::new(rows(&["P.S...G", "XXXXXXX"])).unwrap();
        web.set_input(false, true, false);
        while web.step() == 0 {}
        assert_eq!(web.state_name(), "dead");

        web.restart();
        assert!(web.input.right);
        web.step();
        assert!(web.player_x() > 4.0);

        web.load_level(rows(&["P..G", "XXXX"])).unwrap();
        assert!(web.input.right);
        while web.step() == 0 {}
        assert_eq!(web.state_name(), "won");
    }
}

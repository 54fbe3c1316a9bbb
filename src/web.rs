//! Browser host bindings
//!
//! The page owns the canvas and input; it creates one of these per game,
//! forwards each discrete action, and repaints from the returned JSON.
//! Rejected actions surface as thrown JS errors with the rejection message.

use rand_pcg::Pcg32;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::codebreak::{CodeBreakingSession, Color, GuessRow, SecretCode, SessionStatus};
use crate::dice::{Category, DiceSet, ScoreCard, ScoringSession};
use crate::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let settings = Settings::load();
    if let Some(level) = settings.level_filter().to_level() {
        let _ = console_log::init_with_level(level);
    }
    log::info!("Arcade games logic loaded");
}

fn color_at(index: usize) -> Result<Color, JsError> {
    Color::from_index(index).ok_or_else(|| JsError::new(&format!("no palette color {index}")))
}

/// What the color-guess board needs to repaint
#[derive(Serialize)]
struct BoardView<'a> {
    rows: &'a [GuessRow],
    cursor: usize,
    status: SessionStatus,
    selected: Color,
    attempts_left: usize,
    secret: Option<&'a SecretCode>,
}

#[wasm_bindgen]
pub struct CodeBreaker {
    session: CodeBreakingSession,
}

#[wasm_bindgen]
impl CodeBreaker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CodeBreaker {
        let settings = Settings::load();
        let seed = settings.effective_seed(js_sys::Date::now() as u64);
        log::info!("Color-guess game seed: {}", seed);
        let mut session = CodeBreakingSession::new(&mut crate::seeded_rng(seed));
        let _ = session.select_color(settings.default_color);
        Self { session }
    }

    /// Palette button clicked
    pub fn select_color(&mut self, index: usize) -> Result<(), JsError> {
        self.session.select_color(color_at(index)?)?;
        Ok(())
    }

    /// Digit key pressed; other keys are ignored
    pub fn select_key(&mut self, key: char) -> Result<(), JsError> {
        if let Some(color) = Color::from_key(key) {
            self.session.select_color(color)?;
        }
        Ok(())
    }

    /// Color dropped onto a slot of the active row
    pub fn place_color(&mut self, slot: usize, index: usize) -> Result<(), JsError> {
        self.session.place_color(slot, color_at(index)?)?;
        Ok(())
    }

    /// Active-row slot clicked
    pub fn place_selected(&mut self, slot: usize) -> Result<(), JsError> {
        self.session.place_selected(slot)?;
        Ok(())
    }

    /// Space key: fill the first empty slot
    pub fn place_next(&mut self) -> Result<usize, JsError> {
        Ok(self.session.place_selected_in_next_slot()?)
    }

    pub fn clear_slot(&mut self, slot: usize) -> Result<(), JsError> {
        self.session.clear_slot(slot)?;
        Ok(())
    }

    /// OK button / Enter key. Returns the submit outcome as JSON.
    pub fn submit(&mut self) -> Result<String, JsError> {
        let outcome = self.session.submit_active_row()?;
        Ok(serde_json::to_string(&outcome)?)
    }

    pub fn snapshot(&self) -> Result<String, JsError> {
        let view = BoardView {
            rows: self.session.rows(),
            cursor: self.session.cursor(),
            status: self.session.status(),
            selected: self.session.selected_color(),
            attempts_left: self.session.attempts_left(),
            secret: self.session.revealed_secret(),
        };
        Ok(serde_json::to_string(&view)?)
    }
}

/// What the dice table needs to repaint
#[derive(Serialize)]
struct TableView<'a> {
    dice: &'a DiceSet,
    rolls_left: u8,
    round: u8,
    card: &'a ScoreCard,
    preview: Vec<(Category, u32)>,
    total_score: u32,
    upper_bonus: u32,
    finished: bool,
}

#[wasm_bindgen]
pub struct DiceGame {
    session: ScoringSession,
    rng: Pcg32,
    show_preview: bool,
}

#[wasm_bindgen]
impl DiceGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DiceGame {
        let settings = Settings::load();
        let seed = settings.effective_seed(js_sys::Date::now() as u64);
        log::info!("Dice game seed: {}", seed);
        Self {
            session: ScoringSession::new(),
            rng: crate::seeded_rng(seed),
            show_preview: settings.show_score_preview,
        }
    }

    /// Roll button. Returns the new faces.
    pub fn roll(&mut self) -> Result<Vec<u8>, JsError> {
        Ok(self.session.roll(&mut self.rng)?.to_vec())
    }

    /// Die clicked. Returns the hold flags as JSON.
    pub fn toggle_hold(&mut self, index: usize) -> Result<String, JsError> {
        let held = self.session.toggle_hold(index)?;
        Ok(serde_json::to_string(&held)?)
    }

    pub fn preview(&self, category: &str) -> Result<u32, JsError> {
        Ok(self.session.preview_score(category.parse::<Category>()?))
    }

    /// Category button. Returns the select outcome as JSON.
    pub fn select(&mut self, category: &str) -> Result<String, JsError> {
        let outcome = self.session.select_category(category.parse::<Category>()?)?;
        Ok(serde_json::to_string(&outcome)?)
    }

    pub fn snapshot(&self) -> Result<String, JsError> {
        let rolled = self.session.rolls_left() < crate::consts::ROLLS_PER_ROUND;
        let preview = if self.show_preview && rolled {
            self.session.score_preview()
        } else {
            Vec::new()
        };
        let view = TableView {
            dice: self.session.dice(),
            rolls_left: self.session.rolls_left(),
            round: self.session.round(),
            card: self.session.card(),
            preview,
            total_score: self.session.total_score(),
            upper_bonus: self.session.upper_bonus(),
            finished: self.session.is_terminal(),
        };
        Ok(serde_json::to_string(&view)?)
    }
}

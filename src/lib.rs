//! Arcade Games - session logic for the browser arcade collection
//!
//! Core modules:
//! - `codebreak`: Color-guess game (secret, guess rows, exact/partial hints)
//! - `dice`: Dice game (rolls, holds, 13-category score card, upper bonus)
//! - `settings`: Host preferences (seed, default color, log level)
//! - `web`: wasm-bindgen surface for the browser host
//!
//! Sessions are plain values. Every action takes the session by `&mut`,
//! runs to completion, and either applies fully or is rejected with an
//! [`InvalidOperation`] and no change. Randomness is always passed in.

pub mod codebreak;
pub mod dice;
pub mod error;
pub mod settings;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use codebreak::{CodeBreakingSession, Color, Hint, SecretCode, SessionStatus, SubmitOutcome};
pub use dice::{Category, RoundStatus, ScoringSession, SelectOutcome};
pub use error::{InvalidOperation, UnknownName};
pub use settings::Settings;

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Game rule constants
pub mod consts {
    /// Colors in a secret or a guess
    pub const CODE_LENGTH: usize = 4;
    /// Colors in the palette
    pub const PALETTE_SIZE: usize = 6;
    /// Guess rows per code-breaking session
    pub const MAX_ATTEMPTS: usize = 8;

    /// Dice in play
    pub const DICE_COUNT: usize = 5;
    pub const DIE_FACES: u8 = 6;
    pub const ROLLS_PER_ROUND: u8 = 3;
    pub const TOTAL_ROUNDS: u8 = 13;

    /// Upper-section sum needed for the bonus
    pub const UPPER_BONUS_THRESHOLD: u32 = 63;
    pub const UPPER_BONUS: u32 = 35;

    /// Fixed awards
    pub const FULL_HOUSE_SCORE: u32 = 25;
    pub const SMALL_STRAIGHT_SCORE: u32 = 30;
    pub const LARGE_STRAIGHT_SCORE: u32 = 40;
    pub const YAHTZEE_SCORE: u32 = 50;
}

/// Deterministic RNG for a session seed
#[inline]
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

//! Secret generation and guess scoring
//!
//! Both functions are pure: randomness comes in through the caller's RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::palette::Color;
use crate::consts::CODE_LENGTH;
use crate::error::InvalidOperation;

/// A row of guess slots, unset until the player places a color
pub type Guess = [Option<Color>; CODE_LENGTH];

/// The hidden code: four distinct palette colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[Color; CODE_LENGTH]", into = "[Color; CODE_LENGTH]")]
pub struct SecretCode([Color; CODE_LENGTH]);

impl SecretCode {
    /// Build a secret from explicit colors (replays, tests)
    pub fn new(colors: [Color; CODE_LENGTH]) -> Result<Self, InvalidOperation> {
        for (i, color) in colors.iter().enumerate() {
            if colors[i + 1..].contains(color) {
                return Err(InvalidOperation::DuplicateColor);
            }
        }
        Ok(Self(colors))
    }

    pub fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// True when every position matches
    pub fn matches(&self, guess: &[Color; CODE_LENGTH]) -> bool {
        self.0 == *guess
    }
}

impl TryFrom<[Color; CODE_LENGTH]> for SecretCode {
    type Error = InvalidOperation;

    fn try_from(colors: [Color; CODE_LENGTH]) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<SecretCode> for [Color; CODE_LENGTH] {
    fn from(secret: SecretCode) -> Self {
        secret.0
    }
}

/// Feedback pegs for a submitted row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hint {
    /// Right color, right position
    pub exact: u8,
    /// Right color, wrong position
    pub partial: u8,
}

impl Hint {
    pub fn is_solved(&self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}

/// Draw four distinct colors from the palette without replacement
pub fn generate_secret<R: Rng + ?Sized>(rng: &mut R) -> SecretCode {
    let mut pool = Color::PALETTE.to_vec();
    let mut colors = [Color::default(); CODE_LENGTH];
    for slot in colors.iter_mut() {
        let pick = rng.random_range(0..pool.len());
        *slot = pool.remove(pick);
    }
    log::trace!("Secret generated: {:?}", colors);
    SecretCode(colors)
}

/// Score a guess against the secret.
///
/// Exact matches consume both sides first. Each remaining guess color then
/// consumes the first unconsumed secret slot of the same color, so a single
/// secret color is never counted twice.
pub fn evaluate_guess(secret: &SecretCode, guess: &[Color; CODE_LENGTH]) -> Hint {
    let mut secret_used = [false; CODE_LENGTH];
    let mut guess_used = [false; CODE_LENGTH];
    let mut hint = Hint::default();

    for i in 0..CODE_LENGTH {
        if guess[i] == secret.0[i] {
            hint.exact += 1;
            secret_used[i] = true;
            guess_used[i] = true;
        }
    }

    for i in 0..CODE_LENGTH {
        if guess_used[i] {
            continue;
        }
        let found = (0..CODE_LENGTH).find(|&j| !secret_used[j] && secret.0[j] == guess[i]);
        if let Some(j) = found {
            hint.partial += 1;
            secret_used[j] = true;
        }
    }

    hint
}

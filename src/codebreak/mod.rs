//! Color-guess game logic
//!
//! A hidden code of four distinct colors, eight attempt rows, and
//! exact/partial feedback after every submitted row.

pub mod evaluate;
pub mod palette;
pub mod session;

pub use evaluate::{Guess, Hint, SecretCode, evaluate_guess, generate_secret};
pub use palette::Color;
pub use session::{CodeBreakingSession, GuessRow, SessionStatus, SubmitOutcome};

//! Dice game logic
//!
//! Five dice, three rolls per round, thirteen categories filled once each.

pub mod category;
pub mod scoring;
pub mod session;

pub use category::{Category, NUM_CATEGORIES};
pub use scoring::{Faces, face_counts, has_run, score_for};
pub use session::{DiceSet, RoundStatus, ScoreCard, ScoringSession, SelectOutcome};

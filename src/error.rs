//! Rejection kinds for session actions
//!
//! Every failure in this crate is a precondition violation. A rejected call
//! never changes the session it was made against.

use thiserror::Error;

use crate::dice::Category;

/// Why a session action was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOperation {
    #[error("guess row is incomplete")]
    RowIncomplete,

    #[error("guess row has no empty slot")]
    RowFull,

    #[error("slot {0} is out of range")]
    SlotOutOfRange(usize),

    #[error("secret code repeats a color")]
    DuplicateColor,

    #[error("no rolls left this round")]
    NoRollsLeft,

    #[error("dice have not been rolled this round")]
    NotRolledYet,

    #[error("die {0} is out of range")]
    DieOutOfRange(usize),

    #[error("category {0} is already scored")]
    CategoryAlreadyScored(Category),

    #[error("session is over")]
    SessionTerminal,
}

/// A color or category name that does not exist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} name: {name:?}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

//! Code-breaking session state and transitions
//!
//! The session owns eight guess rows and a cursor. The host edits the active
//! row, submits it, and paints whatever the returned outcome says.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::evaluate::{Guess, Hint, SecretCode, evaluate_guess, generate_secret};
use super::palette::Color;
use crate::consts::{CODE_LENGTH, MAX_ATTEMPTS};
use crate::error::InvalidOperation;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Active row is open for editing
    AwaitingInput,
    /// A submitted row matched the secret
    Won,
    /// Last row submitted without a match
    Exhausted,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionStatus::AwaitingInput)
    }
}

/// One attempt row on the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRow {
    pub slots: Guess,
    /// Set once the row is submitted; the row is frozen afterwards
    pub hint: Option<Hint>,
}

impl GuessRow {
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn is_submitted(&self) -> bool {
        self.hint.is_some()
    }

    /// Index of the first unset slot
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    /// Row that was just frozen (0-based)
    pub row: usize,
    pub hint: Hint,
    pub status: SessionStatus,
    /// The secret, present only when the session ran out of rows
    pub revealed_secret: Option<SecretCode>,
}

/// A single color-guess game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeBreakingSession {
    secret: SecretCode,
    rows: Vec<GuessRow>,
    cursor: usize,
    status: SessionStatus,
    /// Palette color placed by click/Space
    selected: Color,
}

impl CodeBreakingSession {
    /// Start a session with a freshly drawn secret
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let session = Self::with_secret(generate_secret(rng));
        log::info!("Code-breaking session started ({} attempts)", MAX_ATTEMPTS);
        session
    }

    /// Start a session with a known secret
    pub fn with_secret(secret: SecretCode) -> Self {
        Self {
            secret,
            rows: vec![GuessRow::default(); MAX_ATTEMPTS],
            cursor: 0,
            status: SessionStatus::AwaitingInput,
            selected: Color::default(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Index of the row currently open for input
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active_row(&self) -> &GuessRow {
        &self.rows[self.cursor]
    }

    pub fn submitted_rows(&self) -> impl Iterator<Item = &GuessRow> {
        self.rows.iter().filter(|r| r.is_submitted())
    }

    pub fn attempts_used(&self) -> usize {
        self.submitted_rows().count()
    }

    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS - self.attempts_used()
    }

    pub fn selected_color(&self) -> Color {
        self.selected
    }

    /// The secret, once the game is over
    pub fn revealed_secret(&self) -> Option<&SecretCode> {
        self.is_terminal().then_some(&self.secret)
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> &SecretCode {
        &self.secret
    }

    fn ensure_open(&self) -> Result<(), InvalidOperation> {
        if self.is_terminal() {
            return Err(InvalidOperation::SessionTerminal);
        }
        Ok(())
    }

    fn check_slot(slot: usize) -> Result<(), InvalidOperation> {
        if slot >= CODE_LENGTH {
            return Err(InvalidOperation::SlotOutOfRange(slot));
        }
        Ok(())
    }

    /// Set the palette color used by [`Self::place_selected`]
    pub fn select_color(&mut self, color: Color) -> Result<(), InvalidOperation> {
        self.ensure_open()?;
        self.selected = color;
        Ok(())
    }

    /// Put a color into a slot of the active row, replacing what was there.
    /// Also makes it the selected color, as a drag-and-drop does.
    pub fn place_color(&mut self, slot: usize, color: Color) -> Result<(), InvalidOperation> {
        self.ensure_open()?;
        Self::check_slot(slot)?;
        self.rows[self.cursor].slots[slot] = Some(color);
        self.selected = color;
        log::debug!("Row {} slot {} = {}", self.cursor, slot, color);
        Ok(())
    }

    /// Place the selected color into a slot
    pub fn place_selected(&mut self, slot: usize) -> Result<(), InvalidOperation> {
        self.place_color(slot, self.selected)
    }

    /// Place the selected color into the first empty slot, returning it
    pub fn place_selected_in_next_slot(&mut self) -> Result<usize, InvalidOperation> {
        self.ensure_open()?;
        let slot = self
            .active_row()
            .first_empty_slot()
            .ok_or(InvalidOperation::RowFull)?;
        self.place_selected(slot)?;
        Ok(slot)
    }

    pub fn clear_slot(&mut self, slot: usize) -> Result<(), InvalidOperation> {
        self.ensure_open()?;
        Self::check_slot(slot)?;
        self.rows[self.cursor].slots[slot] = None;
        Ok(())
    }

    /// Submit whatever has been placed on the active row
    pub fn submit_active_row(&mut self) -> Result<SubmitOutcome, InvalidOperation> {
        let guess = self.active_row().slots;
        self.submit_row(guess)
    }

    /// Submit a guess for the active row.
    ///
    /// The row is frozen with its hint. The session is won when the guess
    /// equals the secret in every position and exhausted when the last row
    /// misses; otherwise the cursor moves to the next row.
    pub fn submit_row(&mut self, guess: Guess) -> Result<SubmitOutcome, InvalidOperation> {
        self.ensure_open()?;
        let mut colors = [Color::default(); CODE_LENGTH];
        for (dst, src) in colors.iter_mut().zip(guess) {
            *dst = src.ok_or(InvalidOperation::RowIncomplete)?;
        }

        let row = self.cursor;
        let hint = evaluate_guess(&self.secret, &colors);
        self.rows[row] = GuessRow {
            slots: guess,
            hint: Some(hint),
        };

        if self.secret.matches(&colors) {
            self.status = SessionStatus::Won;
            log::info!("Code broken on attempt {}", row + 1);
        } else if row + 1 >= MAX_ATTEMPTS {
            self.status = SessionStatus::Exhausted;
            log::info!("Out of attempts, secret was {:?}", self.secret.colors());
        } else {
            self.cursor += 1;
            log::debug!(
                "Row {} hint: {} exact, {} partial",
                row,
                hint.exact,
                hint.partial
            );
        }

        Ok(SubmitOutcome {
            row,
            hint,
            status: self.status,
            revealed_secret: (self.status == SessionStatus::Exhausted).then_some(self.secret),
        })
    }
}

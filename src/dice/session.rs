//! Dice scoring session: rolls, holds, and the score card
//!
//! A round is up to three rolls followed by one category pick. Thirteen
//! rounds fill the card; the upper bonus is settled after the last pick.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::category::{Category, NUM_CATEGORIES};
use super::scoring::{Faces, score_for};
use crate::consts::*;
use crate::error::InvalidOperation;

/// Five dice and their hold flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    pub faces: Faces,
    pub held: [bool; DICE_COUNT],
}

impl Default for DiceSet {
    fn default() -> Self {
        Self {
            faces: [1; DICE_COUNT],
            held: [false; DICE_COUNT],
        }
    }
}

impl DiceSet {
    /// Re-randomize every free die
    fn roll_free<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (face, held) in self.faces.iter_mut().zip(self.held) {
            if !held {
                *face = rng.random_range(1..=DIE_FACES);
            }
        }
    }

    fn release_all(&mut self) {
        self.held = [false; DICE_COUNT];
    }
}

/// Chosen scores, one slot per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    scores: [Option<u32>; NUM_CATEGORIES],
}

impl ScoreCard {
    pub fn get(&self, category: Category) -> Option<u32> {
        self.scores[category.index()]
    }

    pub fn is_scored(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Sum of the six number categories taken so far
    pub fn upper_total(&self) -> u32 {
        Category::UPPER.iter().filter_map(|c| self.get(*c)).sum()
    }

    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| !self.is_scored(*c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Option<u32>)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }

    fn set(&mut self, category: Category, score: u32) {
        self.scores[category.index()] = Some(score);
    }
}

/// Round result after a category pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Next round is open
    Continuing { round: u8 },
    /// Card is full and the bonus has been settled
    Final {
        upper_total: u32,
        upper_bonus: u32,
        total: u32,
    },
}

/// Result of an accepted category pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOutcome {
    pub category: Category,
    pub score: u32,
    pub card: ScoreCard,
    pub total_score: u32,
    pub status: RoundStatus,
}

/// A single dice game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringSession {
    dice: DiceSet,
    rolls_left: u8,
    /// 1-based; `TOTAL_ROUNDS + 1` once the card is full
    round: u8,
    card: ScoreCard,
    total: u32,
    upper_bonus: u32,
}

impl Default for ScoringSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringSession {
    pub fn new() -> Self {
        Self {
            dice: DiceSet::default(),
            rolls_left: ROLLS_PER_ROUND,
            round: 1,
            card: ScoreCard::default(),
            total: 0,
            upper_bonus: 0,
        }
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn rolls_left(&self) -> u8 {
        self.rolls_left
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn card(&self) -> &ScoreCard {
        &self.card
    }

    /// Running total, including the bonus once awarded
    pub fn total_score(&self) -> u32 {
        self.total
    }

    pub fn upper_bonus(&self) -> u32 {
        self.upper_bonus
    }

    pub fn is_terminal(&self) -> bool {
        self.round > TOTAL_ROUNDS
    }

    fn has_rolled(&self) -> bool {
        self.rolls_left < ROLLS_PER_ROUND
    }

    fn ensure_open(&self) -> Result<(), InvalidOperation> {
        if self.is_terminal() {
            return Err(InvalidOperation::SessionTerminal);
        }
        Ok(())
    }

    /// Roll every die that is not held
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Faces, InvalidOperation> {
        self.ensure_open()?;
        if self.rolls_left == 0 {
            return Err(InvalidOperation::NoRollsLeft);
        }
        self.dice.roll_free(rng);
        self.rolls_left -= 1;
        log::debug!(
            "Round {} roll: {:?} ({} left)",
            self.round,
            self.dice.faces,
            self.rolls_left
        );
        Ok(self.dice.faces)
    }

    /// Flip the hold flag of one die. Only valid once the round has a roll.
    pub fn toggle_hold(&mut self, index: usize) -> Result<[bool; DICE_COUNT], InvalidOperation> {
        self.ensure_open()?;
        if index >= DICE_COUNT {
            return Err(InvalidOperation::DieOutOfRange(index));
        }
        if !self.has_rolled() {
            return Err(InvalidOperation::NotRolledYet);
        }
        self.dice.held[index] = !self.dice.held[index];
        Ok(self.dice.held)
    }

    /// What `category` would score with the current dice
    pub fn preview_score(&self, category: Category) -> u32 {
        score_for(category, &self.dice.faces)
    }

    /// Previews for every category still open on the card
    pub fn score_preview(&self) -> Vec<(Category, u32)> {
        self.card
            .open_categories()
            .map(|c| (c, self.preview_score(c)))
            .collect()
    }

    /// Commit the current dice to an open category and start the next round
    pub fn select_category(&mut self, category: Category) -> Result<SelectOutcome, InvalidOperation> {
        self.ensure_open()?;
        if self.card.is_scored(category) {
            return Err(InvalidOperation::CategoryAlreadyScored(category));
        }
        if !self.has_rolled() {
            return Err(InvalidOperation::NotRolledYet);
        }

        let score = self.preview_score(category);
        self.card.set(category, score);
        self.total += score;
        self.rolls_left = ROLLS_PER_ROUND;
        self.dice.release_all();
        self.round += 1;
        log::debug!("Scored {} for {}, total {}", score, category, self.total);

        let status = if self.is_terminal() {
            self.finish()
        } else {
            RoundStatus::Continuing { round: self.round }
        };

        Ok(SelectOutcome {
            category,
            score,
            card: self.card,
            total_score: self.total,
            status,
        })
    }

    /// Settle the upper bonus; runs once, right after the last pick
    fn finish(&mut self) -> RoundStatus {
        let upper_total = self.card.upper_total();
        if upper_total >= UPPER_BONUS_THRESHOLD {
            self.upper_bonus = UPPER_BONUS;
            self.total += UPPER_BONUS;
        }
        log::info!(
            "Dice game over: upper {} (bonus {}), total {}",
            upper_total,
            self.upper_bonus,
            self.total
        );
        RoundStatus::Final {
            upper_total,
            upper_bonus: self.upper_bonus,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Session whose current dice are forced to `faces` after one roll
    fn rolled_with(session: &mut ScoringSession, rng: &mut Pcg32, faces: Faces) {
        session.roll(rng).unwrap();
        session.dice.faces = faces;
    }

    #[test]
    fn test_new_session() {
        let s = ScoringSession::new();
        assert_eq!(s.rolls_left(), 3);
        assert_eq!(s.round(), 1);
        assert_eq!(s.total_score(), 0);
        assert_eq!(s.dice().faces, [1; 5]);
        assert!(!s.is_terminal());
    }

    #[test]
    fn test_roll_budget() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut s = ScoringSession::new();
        for left in (0..3).rev() {
            let faces = s.roll(&mut rng).unwrap();
            assert!(faces.iter().all(|f| (1..=6).contains(f)));
            assert_eq!(s.rolls_left(), left);
        }
        let before = s.clone();
        assert_eq!(s.roll(&mut rng), Err(InvalidOperation::NoRollsLeft));
        assert_eq!(s, before);
    }

    #[test]
    fn test_held_dice_survive_rolls() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut s = ScoringSession::new();
        s.roll(&mut rng).unwrap();
        let kept = s.dice().faces;
        s.toggle_hold(0).unwrap();
        s.toggle_hold(3).unwrap();
        s.roll(&mut rng).unwrap();
        s.roll(&mut rng).unwrap();
        assert_eq!(s.dice().faces[0], kept[0]);
        assert_eq!(s.dice().faces[3], kept[3]);
        assert_eq!(s.dice().held, [true, false, false, true, false]);
    }

    #[test]
    fn test_hold_before_roll_is_rejected() {
        let mut s = ScoringSession::new();
        assert_eq!(s.toggle_hold(2), Err(InvalidOperation::NotRolledYet));
        assert_eq!(s.dice().held, [false; 5]);
    }

    #[test]
    fn test_hold_toggles_and_bounds() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut s = ScoringSession::new();
        s.roll(&mut rng).unwrap();
        assert_eq!(s.toggle_hold(1), Ok([false, true, false, false, false]));
        assert_eq!(s.toggle_hold(1), Ok([false; 5]));
        assert_eq!(s.toggle_hold(5), Err(InvalidOperation::DieOutOfRange(5)));
    }

    #[test]
    fn test_hold_after_last_roll_and_extra_roll_rejected() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut s = ScoringSession::new();
        for _ in 0..ROLLS_PER_ROUND {
            s.roll(&mut rng).unwrap();
        }
        assert_eq!(s.rolls_left(), 0);

        assert_eq!(s.toggle_hold(0), Ok([true, false, false, false, false]));
        assert_eq!(s.toggle_hold(4), Ok([true, false, false, false, true]));
        assert_eq!(s.dice().held, [true, false, false, false, true]);

        let before = s.clone();
        assert_eq!(s.roll(&mut rng), Err(InvalidOperation::NoRollsLeft));
        assert_eq!(s, before);
    }

    #[test]
    fn test_select_resets_round() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut s = ScoringSession::new();
        rolled_with(&mut s, &mut rng, [2, 2, 2, 5, 5]);
        s.toggle_hold(0).unwrap();

        let outcome = s.select_category(Category::FullHouse).unwrap();
        assert_eq!(outcome.score, 25);
        assert_eq!(outcome.total_score, 25);
        assert_eq!(outcome.status, RoundStatus::Continuing { round: 2 });
        assert_eq!(outcome.card.get(Category::FullHouse), Some(25));
        assert_eq!(s.rolls_left(), 3);
        assert_eq!(s.dice().held, [false; 5]);
    }

    #[test]
    fn test_select_rejections_leave_state() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut s = ScoringSession::new();
        assert_eq!(
            s.select_category(Category::Chance),
            Err(InvalidOperation::NotRolledYet)
        );

        s.roll(&mut rng).unwrap();
        s.select_category(Category::Chance).unwrap();
        s.roll(&mut rng).unwrap();
        let before = s.clone();
        assert_eq!(
            s.select_category(Category::Chance),
            Err(InvalidOperation::CategoryAlreadyScored(Category::Chance))
        );
        assert_eq!(s, before);
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut s = ScoringSession::new();
        rolled_with(&mut s, &mut rng, [1, 2, 3, 4, 4]);
        let before = s.clone();
        assert_eq!(s.preview_score(Category::SmallStraight), 30);
        assert_eq!(s.preview_score(Category::SmallStraight), 30);
        assert_eq!(s, before);

        s.select_category(Category::Fours).unwrap();
        let open: Vec<Category> = s.score_preview().into_iter().map(|(c, _)| c).collect();
        assert_eq!(open.len(), 12);
        assert!(!open.contains(&Category::Fours));
    }

    fn play_all(faces_for: impl Fn(Category) -> Faces) -> (ScoringSession, SelectOutcome) {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut s = ScoringSession::new();
        let mut last = None;
        for c in Category::ALL {
            rolled_with(&mut s, &mut rng, faces_for(c));
            last = Some(s.select_category(c).unwrap());
        }
        (s, last.unwrap())
    }

    #[test]
    fn test_bonus_awarded_at_threshold() {
        // Three of each face in the upper section: 3+6+9+12+15+18 = 63
        let (s, last) = play_all(|c| match c.face() {
            Some(f) => [f, f, f, 1 + f % 6, 1 + (f + 1) % 6],
            None => [1, 1, 1, 1, 2],
        });
        assert!(s.is_terminal());
        assert_eq!(s.card().upper_total(), 63);
        assert_eq!(s.upper_bonus(), 35);
        match last.status {
            RoundStatus::Final {
                upper_total,
                upper_bonus,
                total,
            } => {
                assert_eq!(upper_total, 63);
                assert_eq!(upper_bonus, 35);
                assert_eq!(total, s.total_score());
            }
            other => panic!("expected final status, got {other:?}"),
        }
        // 63 upper + 3k(6) + 4k(6) + chance(6) + bonus
        assert_eq!(s.total_score(), 63 + 6 + 6 + 6 + 35);
    }

    #[test]
    fn test_no_bonus_below_threshold() {
        let (s, last) = play_all(|_| [1, 1, 2, 3, 5]);
        assert_eq!(s.upper_bonus(), 0);
        assert!(matches!(last.status, RoundStatus::Final { upper_bonus: 0, .. }));
        assert!(s.card().is_complete());
    }

    #[test]
    fn test_terminal_session_rejects_everything() {
        let (mut s, _) = play_all(|_| [6, 6, 6, 6, 6]);
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(s.round(), 14);
        assert_eq!(s.roll(&mut rng), Err(InvalidOperation::SessionTerminal));
        assert_eq!(s.toggle_hold(0), Err(InvalidOperation::SessionTerminal));
        assert_eq!(
            s.select_category(Category::Chance),
            Err(InvalidOperation::SessionTerminal)
        );
    }
}

//! Category scoring for a five-dice hand
//!
//! Pure functions only; nothing here touches a session.

use super::category::Category;
use crate::consts::*;

/// Five die faces. Callers pass faces in 1..=6; sessions never produce
/// anything else.
pub type Faces = [u8; DICE_COUNT];

/// `counts[f]` is how many dice show face `f` (index 0 unused).
///
/// Faces outside 1..=6 are not counted.
pub fn face_counts(faces: &Faces) -> [u8; DIE_FACES as usize + 1] {
    let mut counts = [0u8; DIE_FACES as usize + 1];
    for &f in faces {
        if (1..=DIE_FACES).contains(&f) {
            counts[f as usize] += 1;
        }
    }
    counts
}

/// True when the distinct faces contain `length` consecutive values
pub fn has_run(faces: &Faces, length: usize) -> bool {
    let counts = face_counts(faces);
    let mut run = 0;
    for present in counts[1..].iter().map(|&c| c > 0) {
        run = if present { run + 1 } else { 0 };
        if run >= length {
            return true;
        }
    }
    false
}

/// Points `category` would award for `faces`, whether or not it is taken.
///
/// Full house needs a group of three and a group of two, so five of a kind
/// does not count as one.
pub fn score_for(category: Category, faces: &Faces) -> u32 {
    let counts = face_counts(faces);
    let sum: u32 = faces.iter().map(|&f| f as u32).sum();
    let most = counts.iter().copied().max().unwrap_or(0) as usize;

    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            let face = category.face().unwrap_or(0);
            counts[face as usize] as u32 * face as u32
        }
        Category::ThreeOfAKind if most >= 3 => sum,
        Category::FourOfAKind if most >= 4 => sum,
        Category::FullHouse if counts.contains(&3) && counts.contains(&2) => FULL_HOUSE_SCORE,
        Category::SmallStraight if has_run(faces, 4) => SMALL_STRAIGHT_SCORE,
        Category::LargeStraight if has_run(faces, 5) => LARGE_STRAIGHT_SCORE,
        Category::Yahtzee if most == DICE_COUNT => YAHTZEE_SCORE,
        Category::Chance => sum,
        _ => 0,
    }
}

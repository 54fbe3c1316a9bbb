//! Property tests for hint scoring and session lifecycles

use arcade_games::codebreak::{Color, Guess, evaluate_guess, generate_secret};
use arcade_games::consts::*;
use arcade_games::dice::{Category, Faces, score_for};
use arcade_games::{
    CodeBreakingSession, InvalidOperation, RoundStatus, ScoringSession, SecretCode, SessionStatus,
    seeded_rng,
};
use proptest::prelude::*;

fn color() -> impl Strategy<Value = Color> {
    (0..PALETTE_SIZE).prop_map(|i| Color::PALETTE[i])
}

fn guess() -> impl Strategy<Value = [Color; CODE_LENGTH]> {
    prop::array::uniform4(color())
}

fn faces() -> impl Strategy<Value = Faces> {
    prop::array::uniform5(1..=DIE_FACES)
}

proptest! {
    #[test]
    fn hint_never_exceeds_code_length(seed in any::<u64>(), g in guess()) {
        let secret = generate_secret(&mut seeded_rng(seed));
        let hint = evaluate_guess(&secret, &g);
        prop_assert!(hint.exact as usize + hint.partial as usize <= CODE_LENGTH);
    }

    #[test]
    fn secret_scores_itself_as_solved(seed in any::<u64>()) {
        let secret = generate_secret(&mut seeded_rng(seed));
        let hint = evaluate_guess(&secret, secret.colors());
        prop_assert_eq!((hint.exact, hint.partial), (4, 0));
    }

    #[test]
    fn generated_secrets_never_repeat(seed in any::<u64>()) {
        let secret = generate_secret(&mut seeded_rng(seed));
        prop_assert!(SecretCode::new(*secret.colors()).is_ok());
    }

    #[test]
    fn exact_counts_positional_matches(seed in any::<u64>(), g in guess()) {
        let secret = generate_secret(&mut seeded_rng(seed));
        let positional = secret.colors().iter().zip(g.iter()).filter(|(a, b)| a == b).count();
        prop_assert_eq!(evaluate_guess(&secret, &g).exact as usize, positional);
    }

    #[test]
    fn session_terminates_by_win_or_exhaustion(
        seed in any::<u64>(),
        guesses in prop::collection::vec(guess(), MAX_ATTEMPTS),
    ) {
        let mut session = CodeBreakingSession::new(&mut seeded_rng(seed));
        let mut won_at = None;
        for (i, g) in guesses.iter().enumerate() {
            let outcome = session.submit_row(g.map(Some)).unwrap();
            if outcome.status == SessionStatus::Won {
                won_at = Some(i);
                break;
            }
        }
        prop_assert!(session.is_terminal());
        match won_at {
            Some(i) => {
                let secret = session.revealed_secret().copied().unwrap();
                prop_assert!(secret.matches(&guesses[i]));
                prop_assert!(guesses[..i].iter().all(|g| !secret.matches(g)));
            }
            None => {
                prop_assert_eq!(session.status(), SessionStatus::Exhausted);
                prop_assert_eq!(session.attempts_used(), MAX_ATTEMPTS);
            }
        }
        let g: Guess = [Some(Color::Red); CODE_LENGTH];
        prop_assert_eq!(session.submit_row(g), Err(InvalidOperation::SessionTerminal));
    }

    #[test]
    fn scores_stay_in_range(f in faces()) {
        let sum: u32 = f.iter().map(|&x| x as u32).sum();
        for c in Category::ALL {
            let score = score_for(c, &f);
            prop_assert!(score <= sum.max(YAHTZEE_SCORE));
        }
        prop_assert_eq!(score_for(Category::Chance, &f), sum);
    }

    #[test]
    fn preview_is_idempotent(seed in any::<u64>(), rolls in 1u8..=3) {
        let mut rng = seeded_rng(seed);
        let mut session = ScoringSession::new();
        for _ in 0..rolls {
            session.roll(&mut rng).unwrap();
        }
        let before = session.clone();
        for c in Category::ALL {
            prop_assert_eq!(session.preview_score(c), session.preview_score(c));
        }
        prop_assert_eq!(session, before);
    }

    #[test]
    fn bonus_applied_once_at_the_end(seed in any::<u64>(), order in Just(Category::ALL.to_vec()).prop_shuffle()) {
        let mut rng = seeded_rng(seed);
        let mut session = ScoringSession::new();
        let mut finals = 0;
        let mut running = 0;
        for (i, c) in order.iter().enumerate() {
            session.roll(&mut rng).unwrap();
            let outcome = session.select_category(*c).unwrap();
            running += outcome.score;
            match outcome.status {
                RoundStatus::Continuing { round } => {
                    prop_assert_eq!(round as usize, i + 2);
                    prop_assert_eq!(session.upper_bonus(), 0);
                    prop_assert_eq!(session.total_score(), running);
                }
                RoundStatus::Final { upper_total, upper_bonus, total } => {
                    finals += 1;
                    let expected = if upper_total >= UPPER_BONUS_THRESHOLD { UPPER_BONUS } else { 0 };
                    prop_assert_eq!(upper_bonus, expected);
                    prop_assert_eq!(total, running + expected);
                }
            }
        }
        prop_assert_eq!(finals, 1);
        prop_assert!(session.is_terminal());
        prop_assert!(session.card().is_complete());
    }
}

#[test]
fn documented_examples() {
    use Color::*;
    let secret = SecretCode::new([Blue, Red, Green, Yellow]).unwrap();
    let hint = evaluate_guess(&secret, &[Red, Blue, Green, White]);
    assert_eq!((hint.exact, hint.partial), (1, 2));

    assert_eq!(score_for(Category::FullHouse, &[2, 2, 2, 5, 5]), 25);
    assert_eq!(score_for(Category::FullHouse, &[1, 1, 1, 1, 2]), 0);
    assert_eq!(score_for(Category::SmallStraight, &[1, 2, 3, 4, 4]), 30);
    assert_eq!(score_for(Category::LargeStraight, &[1, 2, 3, 4, 5]), 40);
    assert_eq!(score_for(Category::LargeStraight, &[1, 2, 3, 4, 4]), 0);
}

#[test]
fn same_seed_same_games() {
    let mut a = CodeBreakingSession::new(&mut seeded_rng(2024));
    let mut b = CodeBreakingSession::new(&mut seeded_rng(2024));
    let row = [Some(Color::Blue), Some(Color::Red), Some(Color::Green), Some(Color::Yellow)];
    assert_eq!(a.submit_row(row), b.submit_row(row));

    let mut rng_a = seeded_rng(7);
    let mut rng_b = seeded_rng(7);
    let mut x = ScoringSession::new();
    let mut y = ScoringSession::new();
    for _ in 0..3 {
        assert_eq!(x.roll(&mut rng_a), y.roll(&mut rng_b));
    }
}

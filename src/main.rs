//! Arcade Games entry point
//!
//! The web build is driven by the page through `arcade_games::web`. The
//! native binary plays one seeded round of each game against itself and
//! logs the result, which is handy for replaying a reported seed.
//!
//! Usage: `arcade-games [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arcade_games::Settings;

    let settings = Settings::load();
    env_logger::Builder::new()
        .filter_level(settings.level_filter())
        .parse_default_env()
        .init();

    let fallback = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Seed must be an unsigned integer: {}", e);
            std::process::exit(2);
        }
        None => settings.effective_seed(fallback),
    };

    log::info!("Arcade games (native) starting with seed {}", seed);
    autoplay::code_breaking(seed, &settings);
    autoplay::dice(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is arcade_games::web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod autoplay {
    use arcade_games::codebreak::{CodeBreakingSession, Color, Hint, evaluate_guess};
    use arcade_games::consts::*;
    use arcade_games::dice::{Category, ScoringSession, face_counts};
    use arcade_games::{SecretCode, Settings, seeded_rng};

    /// Every four-color code without repeats, in palette order
    fn all_codes() -> Vec<SecretCode> {
        let mut codes = Vec::new();
        for a in Color::PALETTE {
            for b in Color::PALETTE {
                for c in Color::PALETTE {
                    for d in Color::PALETTE {
                        if let Ok(code) = SecretCode::new([a, b, c, d]) {
                            codes.push(code);
                        }
                    }
                }
            }
        }
        codes
    }

    /// Always guess the first code still consistent with every hint so far
    pub fn code_breaking(seed: u64, settings: &Settings) {
        let mut rng = seeded_rng(seed);
        let mut session = CodeBreakingSession::new(&mut rng);
        let _ = session.select_color(settings.default_color);
        let mut candidates = all_codes();
        let mut history: Vec<([Color; CODE_LENGTH], Hint)> = Vec::new();

        while !session.is_terminal() {
            candidates.retain(|c| {
                history
                    .iter()
                    .all(|(guess, hint)| evaluate_guess(c, guess) == *hint)
            });
            let Some(next) = candidates.first().copied() else {
                log::error!("No candidate code left");
                return;
            };
            let guess = *next.colors();
            match session.submit_row(guess.map(Some)) {
                Ok(outcome) => {
                    log::info!(
                        "Guess {}: {:?} -> {} exact, {} partial",
                        outcome.row + 1,
                        guess,
                        outcome.hint.exact,
                        outcome.hint.partial
                    );
                    history.push((guess, outcome.hint));
                }
                Err(e) => {
                    log::error!("Submit rejected: {}", e);
                    return;
                }
            }
        }

        log::info!(
            "Color-guess game {:?} after {} attempts",
            session.status(),
            session.attempts_used()
        );
    }

    /// Hold the most common face between rolls, then take the best open category
    pub fn dice(seed: u64) {
        let mut rng = seeded_rng(seed);
        let mut session = ScoringSession::new();

        while !session.is_terminal() {
            while session.rolls_left() > 0 {
                if let Err(e) = session.roll(&mut rng) {
                    log::error!("Roll rejected: {}", e);
                    return;
                }
                let counts = face_counts(&session.dice().faces);
                let best_face = (1..=DIE_FACES)
                    .max_by_key(|&f| (counts[f as usize], f))
                    .unwrap_or(DIE_FACES);
                for i in 0..DICE_COUNT {
                    let should_hold = session.dice().faces[i] == best_face;
                    if session.dice().held[i] != should_hold {
                        let _ = session.toggle_hold(i);
                    }
                }
            }

            let pick = session
                .score_preview()
                .into_iter()
                .max_by_key(|&(c, score)| (score, std::cmp::Reverse(c.index())))
                .map(|(c, _)| c)
                .unwrap_or(Category::Chance);
            match session.select_category(pick) {
                Ok(outcome) => {
                    log::info!(
                        "Round {}: {:?} scored {} in {}",
                        session.round() - 1,
                        session.dice().faces,
                        outcome.score,
                        pick
                    );
                }
                Err(e) => {
                    log::error!("Category rejected: {}", e);
                    return;
                }
            }
        }

        log::info!(
            "Dice game total {} (upper bonus {})",
            session.total_score(),
            session.upper_bonus()
        );
    }
}

//! The Distle player: guess selection plus belief tracking
//!
//! The game driver calls [`DistlePlayer::start_new_game`] once per game, then
//! alternates [`DistlePlayer::make_guess`] and [`DistlePlayer::get_feedback`]
//! until the secret is found.

use super::error::{PlayerError, Result};
use super::prior;
use super::session::GameSession;
use super::strategy::{Strategy, StrategyType};
use crate::core::{Transform, Word, format_transforms, length_delta};
use crate::distance::word_transforms;
use rayon::prelude::*;
use tracing::{debug, error, warn};

/// Outcome of incorporating one round of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackSummary {
    /// Candidates before the round
    pub candidates_before: usize,
    /// Candidates after the round
    pub candidates_after: usize,
    /// Candidates dropped by the prior filter after the exact filter
    pub dropped_by_prior: usize,
}

/// Automated Distle player
///
/// Holds the guess selection strategy and the state of the current game.
#[derive(Debug, Clone)]
pub struct DistlePlayer<S: Strategy = StrategyType> {
    strategy: S,
    session: GameSession,
}

impl Default for DistlePlayer<StrategyType> {
    fn default() -> Self {
        Self::new(StrategyType::default())
    }
}

impl<S: Strategy> DistlePlayer<S> {
    /// Create a player with the given strategy and no game in progress
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            session: GameSession::default(),
        }
    }

    /// Start a new game, discarding any previous state
    ///
    /// # Examples
    /// ```
    /// use distle_solver::core::Word;
    /// use distle_solver::solver::DistlePlayer;
    ///
    /// let dictionary: Vec<Word> = ["cat", "bat", "act"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let mut player = DistlePlayer::default();
    /// player.start_new_game(dictionary, 10);
    /// assert_eq!(player.session().candidates().len(), 3);
    /// ```
    pub fn start_new_game(&mut self, dictionary: impl IntoIterator<Item = Word>, max_guesses: usize) {
        self.session = GameSession::new(dictionary, max_guesses);
        debug!(
            candidates = self.session.candidates().len(),
            max_guesses, "started new game"
        );
    }

    /// Pick the next guess and record it as guessed
    ///
    /// The guess always comes from the current candidates and is never a word
    /// already guessed this game.
    ///
    /// # Errors
    /// - `PlayerError::NoCandidates` if no candidates remain
    /// - `PlayerError::Exhausted` if every candidate was already guessed
    pub fn make_guess(&mut self) -> Result<Word> {
        let candidates: Vec<&Word> = self.session.candidates().iter().collect();
        if candidates.is_empty() {
            return Err(PlayerError::NoCandidates);
        }

        let pool = self.session.guess_pool();
        let guess = self
            .strategy
            .select_guess(&pool, &candidates)
            .cloned()
            .ok_or(PlayerError::Exhausted {
                candidates: candidates.len(),
            })?;

        debug!(
            %guess,
            candidates = candidates.len(),
            pool = pool.len(),
            turn = self.session.guesses_made() + 1,
            "selected guess"
        );
        if self.session.guesses_made() >= self.session.max_guesses() {
            debug!(max_guesses = self.session.max_guesses(), "guessing past the limit");
        }

        self.session.record_guess(guess.clone());
        Ok(guess)
    }

    /// Incorporate the game's feedback for an incorrect guess
    ///
    /// Keeps only candidates whose operation list from `guess` equals
    /// `transforms` exactly, then applies the prior filter. Calling this twice
    /// with the same feedback leaves the candidates unchanged the second time.
    ///
    /// # Errors
    /// - `PlayerError::MalformedFeedback` if `transforms.len() != distance`;
    ///   the round is ignored
    /// - `PlayerError::InconsistentFeedback` if no candidate survives; the
    ///   candidate set is left empty
    pub fn get_feedback(
        &mut self,
        guess: &Word,
        distance: usize,
        transforms: &[Transform],
    ) -> Result<FeedbackSummary> {
        if transforms.len() != distance {
            warn!(
                %guess,
                distance,
                transforms = %format_transforms(transforms),
                "ignoring malformed feedback"
            );
            return Err(PlayerError::MalformedFeedback {
                distance,
                transforms: transforms.len(),
            });
        }

        let candidates_before = self.session.candidates().len();
        let expected_len = guess.len().checked_add_signed(length_delta(transforms));

        let survivors: Vec<Word> = self
            .session
            .candidates()
            .par_iter()
            .filter(|&candidate| {
                Some(candidate.len()) == expected_len
                    && word_transforms(guess, candidate) == transforms
            })
            .cloned()
            .collect();
        self.session.set_candidates(survivors);

        let dropped_by_prior = prior::retain_most_likely(self.session.candidates_mut(), distance);
        let candidates_after = self.session.candidates().len();

        debug!(
            %guess,
            distance,
            transforms = %format_transforms(transforms),
            candidates_before,
            candidates_after,
            "applied feedback"
        );

        if candidates_after == 0 {
            error!(%guess, "feedback eliminated every candidate");
            return Err(PlayerError::InconsistentFeedback {
                guess: guess.text().to_string(),
            });
        }

        Ok(FeedbackSummary {
            candidates_before,
            candidates_after,
            dropped_by_prior,
        })
    }

    /// State of the current game
    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    /// The guess selection strategy
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::word_distance;
    use crate::solver::strategy::{EntropyStrategy, FrequencyStrategy};
    use Transform::{Delete, Insert, Replace, Transpose};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary() -> Vec<Word> {
        words(&[
            "cat", "bat", "hat", "act", "cart", "at", "hack", "fkc", "back", "cast", "coat",
            "dog", "dig", "cot", "scat",
        ])
    }

    /// Feedback an honest game would report
    fn feedback(guess: &Word, secret: &Word) -> (usize, Vec<Transform>) {
        (word_distance(guess, secret), word_transforms(guess, secret))
    }

    #[test]
    fn make_guess_returns_candidate() {
        let mut player = DistlePlayer::default();
        player.start_new_game(dictionary(), 10);

        let guess = player.make_guess().unwrap();
        assert!(dictionary().contains(&guess));
        assert_eq!(player.session().history(), &[guess]);
    }

    #[test]
    fn make_guess_never_repeats() {
        let mut player = DistlePlayer::new(FrequencyStrategy);
        player.start_new_game(words(&["cat", "bat", "hat"]), 10);

        let mut seen = Vec::new();
        for _ in 0..3 {
            let guess = player.make_guess().unwrap();
            assert!(!seen.contains(&guess));
            seen.push(guess);
        }

        assert_eq!(
            player.make_guess(),
            Err(PlayerError::Exhausted { candidates: 3 })
        );
    }

    #[test]
    fn make_guess_on_empty_dictionary_fails() {
        let mut player = DistlePlayer::default();
        player.start_new_game(Vec::new(), 10);
        assert_eq!(player.make_guess(), Err(PlayerError::NoCandidates));
    }

    #[test]
    fn feedback_keeps_only_exact_operation_matches() {
        let mut player = DistlePlayer::default();
        player.start_new_game(dictionary(), 10);

        let guess = word("cat");
        let summary = player.get_feedback(&guess, 1, &[Replace]).unwrap();

        // cot, bat and hat are one replacement away; act and cart are also at
        // distance 1 but report T and I
        assert_eq!(player.session().candidates(), words(&["bat", "hat", "cot"]).as_slice());
        assert_eq!(summary.candidates_before, 15);
        assert_eq!(summary.candidates_after, 3);
        assert_eq!(summary.dropped_by_prior, 0);
    }

    #[test]
    fn feedback_is_stronger_than_distance() {
        let mut player = DistlePlayer::default();
        player.start_new_game(dictionary(), 10);

        let guess = word("cat");
        let at_distance_one = dictionary()
            .iter()
            .filter(|w| word_distance(&guess, w) == 1)
            .count();

        player.get_feedback(&guess, 1, &[Transpose]).unwrap();

        assert_eq!(player.session().candidates(), words(&["act"]).as_slice());
        assert!(at_distance_one > 1);
    }

    #[test]
    fn feedback_survivors_reproduce_reported_transforms() {
        let secret = word("fkc");
        let guess = word("hack");
        let (distance, reported) = feedback(&guess, &secret);
        assert_eq!(reported, vec![Transpose, Replace, Delete]);

        let mut player = DistlePlayer::default();
        player.start_new_game(dictionary(), 10);
        player.get_feedback(&guess, distance, &reported).unwrap();

        assert!(player.session().is_candidate(&secret));
        for candidate in player.session().candidates() {
            assert_eq!(word_transforms(&guess, candidate), reported);
        }
    }

    #[test]
    fn feedback_never_drops_the_secret() {
        let dict = dictionary();
        for secret in &dict {
            for guess in &dict {
                if guess == secret {
                    continue;
                }
                let mut player = DistlePlayer::default();
                player.start_new_game(dict.clone(), 10);

                let (distance, reported) = feedback(guess, secret);
                player.get_feedback(guess, distance, &reported).unwrap();
                assert!(
                    player.session().is_candidate(secret),
                    "{guess} dropped secret {secret}"
                );
            }
        }
    }

    #[test]
    fn feedback_is_idempotent() {
        let mut player = DistlePlayer::default();
        player.start_new_game(dictionary(), 10);

        let guess = word("cat");
        let first = player.get_feedback(&guess, 1, &[Insert]).unwrap();
        let after_first = player.session().candidates().to_vec();
        let second = player.get_feedback(&guess, 1, &[Insert]).unwrap();

        assert_eq!(player.session().candidates(), after_first.as_slice());
        assert_eq!(second.candidates_before, first.candidates_after);
        assert_eq!(second.candidates_after, first.candidates_after);
    }

    #[test]
    fn malformed_feedback_is_ignored() {
        let mut player = DistlePlayer::default();
        player.start_new_game(dictionary(), 10);

        let result = player.get_feedback(&word("cat"), 2, &[Replace]);

        assert_eq!(
            result,
            Err(PlayerError::MalformedFeedback {
                distance: 2,
                transforms: 1
            })
        );
        assert_eq!(player.session().candidates().len(), dictionary().len());
    }

    #[test]
    fn inconsistent_feedback_is_reported() {
        let mut player = DistlePlayer::default();
        player.start_new_game(dictionary(), 10);

        let result = player.get_feedback(&word("cat"), 3, &[Transpose, Transpose, Transpose]);

        assert_eq!(
            result,
            Err(PlayerError::InconsistentFeedback {
                guess: "cat".to_string()
            })
        );
        assert_eq!(player.make_guess(), Err(PlayerError::NoCandidates));
    }

    #[test]
    fn start_new_game_resets_state() {
        let mut player = DistlePlayer::default();
        player.start_new_game(dictionary(), 10);
        player.make_guess().unwrap();
        player.get_feedback(&word("cat"), 1, &[Replace]).unwrap();

        player.start_new_game(words(&["dog", "dig"]), 4);

        assert_eq!(player.session().candidates().len(), 2);
        assert!(player.session().history().is_empty());
        assert_eq!(player.session().max_guesses(), 4);
    }

    #[test]
    fn plays_to_the_secret() {
        let dict = dictionary();
        for secret in &dict {
            let mut player = DistlePlayer::new(EntropyStrategy);
            player.start_new_game(dict.clone(), 10);

            let mut solved = false;
            for _ in 0..dict.len() {
                let guess = player.make_guess().unwrap();
                if &guess == secret {
                    solved = true;
                    break;
                }
                let (distance, reported) = feedback(&guess, secret);
                player.get_feedback(&guess, distance, &reported).unwrap();
            }
            assert!(solved, "failed to find {secret}");
        }
    }
}

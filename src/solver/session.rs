//! Per-game state: the candidate dictionary and the guess history

use crate::core::Word;
use rustc_hash::FxHashSet;

/// State of one Distle game
///
/// Created when a game starts and replaced wholesale by the next one. The
/// candidate list only ever shrinks.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    candidates: Vec<Word>,
    history: Vec<Word>,
    guessed: FxHashSet<Word>,
    max_guesses: usize,
}

impl GameSession {
    /// Start a game over `dictionary`
    ///
    /// Duplicate words are dropped, keeping the first occurrence, so the
    /// iteration order of the dictionary fixes every later tie-break.
    /// `max_guesses` is informational and never enforced.
    pub fn new(dictionary: impl IntoIterator<Item = Word>, max_guesses: usize) -> Self {
        let mut seen = FxHashSet::default();
        let candidates = dictionary
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self {
            candidates,
            history: Vec::new(),
            guessed: FxHashSet::default(),
            max_guesses,
        }
    }

    /// Words still consistent with all feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Guesses made this game, oldest first
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Whether `word` has already been guessed this game
    #[must_use]
    pub fn is_guessed(&self, word: &Word) -> bool {
        self.guessed.contains(word)
    }

    /// Whether `word` is still a candidate
    #[must_use]
    pub fn is_candidate(&self, word: &Word) -> bool {
        self.candidates.contains(word)
    }

    /// Candidates that have not been guessed yet, in dictionary order
    #[must_use]
    pub fn guess_pool(&self) -> Vec<&Word> {
        self.candidates
            .iter()
            .filter(|word| !self.guessed.contains(*word))
            .collect()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }

    /// Guesses left before `max_guesses`, saturating at zero
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }

    pub(crate) fn record_guess(&mut self, word: Word) {
        if self.guessed.insert(word.clone()) {
            self.history.push(word);
        }
    }

    /// Replace the candidates with a subset of themselves
    pub(crate) fn set_candidates(&mut self, survivors: Vec<Word>) {
        debug_assert!(survivors.len() <= self.candidates.len());
        self.candidates = survivors;
    }

    pub(crate) fn candidates_mut(&mut self) -> &mut Vec<Word> {
        &mut self.candidates
    }
}

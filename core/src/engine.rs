use core::num::Saturating;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    Active,
    Won,
    Lost,
}

impl RoundPhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for RoundPhase {
    fn default() -> Self {
        Self::Active
    }
}

/// Result of submitting a letter to the live round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    AlreadyOver,
    Invalid,
    AlreadyGuessed,
    Correct,
    Wrong,
    Win,
    Lose,
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        use GuessOutcome::*;
        match self {
            AlreadyOver => false,
            Invalid => false,
            AlreadyGuessed => false,
            Correct => true,
            Wrong => true,
            Win => true,
            Lose => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// Result of a forced failed attempt, the timeout path of an external
/// countdown. Never consumes a letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeoutOutcome {
    AlreadyOver,
    TryConsumed,
    Lose,
}

impl TimeoutOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::AlreadyOver => false,
            Self::TryConsumed => true,
            Self::Lose => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Lose)
    }
}

/// Mutable state of one playthrough, replaced wholesale on reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    secret: String,
    revealed: Vec<Option<char>>,
    tries_remaining: Saturating<Tries>,
    score: Score,
    guessed: BTreeSet<char>,
    phase: RoundPhase,
}

impl Round {
    pub fn new(secret: impl Into<String>, tries: Tries) -> Self {
        let secret = secret.into().to_uppercase();
        let revealed = secret
            .chars()
            .map(|c| if c == ' ' { Some(' ') } else { None })
            .collect();
        Self {
            secret,
            revealed,
            tries_remaining: Saturating(tries),
            score: 0,
            guessed: BTreeSet::new(),
            phase: Default::default(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_finished()
    }

    /// Revealed positions in secret order; `None` marks a blank.
    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    /// Player-facing rendering of the revealed sequence, blanks as `_`.
    pub fn display_word(&self) -> String {
        self.revealed.iter().map(|slot| slot.unwrap_or('_')).collect()
    }

    pub fn tries_remaining(&self) -> Tries {
        self.tries_remaining.0
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// The secret is observable only once the round is over, for a
    /// "reveal the answer" message.
    pub fn secret(&self) -> Option<&str> {
        if self.phase.is_finished() {
            Some(&self.secret)
        } else {
            None
        }
    }

    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        use GuessOutcome::*;

        if self.phase.is_finished() {
            return AlreadyOver;
        }

        let Some(letter) = normalize_guess(input) else {
            return Invalid;
        };

        if !self.guessed.insert(letter) {
            return AlreadyGuessed;
        }

        let mut hits: Score = 0;
        for (slot, c) in self.revealed.iter_mut().zip(self.secret.chars()) {
            if c == letter && slot.is_none() {
                *slot = Some(c);
                hits += 1;
            }
        }

        if hits > 0 {
            self.score += hits;
            if self.revealed.iter().all(Option::is_some) {
                self.phase = RoundPhase::Won;
                Win
            } else {
                Correct
            }
        } else if self.consume_try() {
            Lose
        } else {
            Wrong
        }
    }

    pub fn force_failed_attempt(&mut self) -> TimeoutOutcome {
        use TimeoutOutcome::*;

        if self.phase.is_finished() {
            return AlreadyOver;
        }

        if self.consume_try() { Lose } else { TryConsumed }
    }

    /// Returns true when the decrement exhausted the round.
    fn consume_try(&mut self) -> bool {
        self.tries_remaining -= 1;
        if self.tries_remaining.0 == 0 {
            self.phase = RoundPhase::Lost;
            true
        } else {
            false
        }
    }
}

/// Accepts exactly one alphabetic character, in either case.
fn normalize_guess(input: &str) -> Option<char> {
    let mut chars = input.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let letter = first.to_ascii_uppercase();
    letter.is_ascii_uppercase().then_some(letter)
}

/// Owns the vocabulary, the injected picker, and exactly one live round.
#[derive(Clone, Debug)]
pub struct GameEngine<P> {
    vocabulary: Vocabulary,
    picker: P,
    config: GameConfig,
    round: Round,
}

impl<P: SecretPicker> GameEngine<P> {
    /// Starts the first round immediately, so the engine always holds a
    /// live round.
    pub fn new(vocabulary: Vocabulary, mut picker: P, config: GameConfig) -> Result<Self> {
        let secret = vocabulary.pick_secret(config.level, &mut picker)?;
        let round = Round::new(secret, config.tries);
        log::debug!(
            "Started {:?} round, secret of {} characters",
            config.level,
            round.revealed().len()
        );
        Ok(Self {
            vocabulary,
            picker,
            config,
            round,
        })
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn level(&self) -> Level {
        self.config.level
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Discards the previous round and starts a fresh one at `level`.
    pub fn reset(&mut self, level: Level) -> Result<&Round> {
        let secret = self.vocabulary.pick_secret(level, &mut self.picker)?;
        self.config.level = level;
        self.round = Round::new(secret, self.config.tries);
        log::debug!(
            "Started {:?} round, secret of {} characters",
            level,
            self.round.revealed().len()
        );
        Ok(&self.round)
    }

    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        self.round.guess(input)
    }

    pub fn force_failed_attempt(&mut self) -> TimeoutOutcome {
        self.round.force_failed_attempt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the first entry of the pool, forcing a known secret.
    struct FirstPicker;

    impl SecretPicker for FirstPicker {
        fn pick<'a>(&mut self, pool: &'a [String]) -> Option<&'a str> {
            pool.first().map(String::as_str)
        }
    }

    fn cat_round() -> Round {
        Round::new("CAT", DEFAULT_TRIES)
    }

    #[test]
    fn new_round_starts_blank_with_full_tries() {
        let round = cat_round();

        assert_eq!(round.tries_remaining(), 6);
        assert_eq!(round.score(), 0);
        assert!(!round.is_over());
        assert!(round.guessed_letters().is_empty());
        assert_eq!(round.revealed(), &[None, None, None]);
        assert_eq!(round.display_word(), "___");
    }

    #[test]
    fn correct_guesses_reveal_score_and_win() {
        let mut round = cat_round();

        assert_eq!(round.guess("C"), GuessOutcome::Correct);
        assert_eq!(round.revealed(), &[Some('C'), None, None]);
        assert_eq!(round.score(), 1);

        assert_eq!(round.guess("A"), GuessOutcome::Correct);
        assert_eq!(round.display_word(), "CA_");
        assert_eq!(round.score(), 2);

        assert_eq!(round.guess("T"), GuessOutcome::Win);
        assert_eq!(round.display_word(), "CAT");
        assert_eq!(round.score(), 3);
        assert!(round.is_over());
        assert_eq!(round.phase(), RoundPhase::Won);
    }

    #[test]
    fn six_misses_lose_the_round() {
        let mut round = cat_round();

        for miss in ["X", "Y", "Z", "Q", "R"] {
            assert_eq!(round.guess(miss), GuessOutcome::Wrong);
        }
        assert_eq!(round.guess("S"), GuessOutcome::Lose);
        assert_eq!(round.tries_remaining(), 0);
        assert!(round.is_over());
        assert_eq!(round.phase(), RoundPhase::Lost);
    }

    #[test]
    fn repeated_letter_scores_every_occurrence() {
        let mut round = Round::new("BANANA", DEFAULT_TRIES);

        assert_eq!(round.guess("A"), GuessOutcome::Correct);
        assert_eq!(round.score(), 3);
        assert_eq!(round.display_word(), "_A_A_A");
        assert_eq!(round.tries_remaining(), 6);
    }

    #[test]
    fn lowercase_input_is_normalized() {
        let mut round = cat_round();

        assert_eq!(round.guess("c"), GuessOutcome::Correct);
        assert_eq!(round.display_word(), "C__");
    }

    #[test]
    fn invalid_inputs_change_nothing() {
        let mut round = cat_round();
        round.guess("X");
        let before = round.clone();

        for input in ["", "AB", "1", "!", "é"] {
            assert_eq!(round.guess(input), GuessOutcome::Invalid);
        }
        assert_eq!(round, before);
    }

    #[test]
    fn resubmitted_letter_changes_nothing() {
        let mut round = cat_round();
        assert_eq!(round.guess("C"), GuessOutcome::Correct);
        assert_eq!(round.guess("X"), GuessOutcome::Wrong);
        let before = round.clone();

        assert_eq!(round.guess("C"), GuessOutcome::AlreadyGuessed);
        assert_eq!(round.guess("x"), GuessOutcome::AlreadyGuessed);
        assert_eq!(round, before);
    }

    #[test]
    fn misses_are_recorded_as_guessed() {
        let mut round = cat_round();
        round.guess("X");

        assert!(round.guessed_letters().contains(&'X'));
        assert_eq!(round.score(), 0);
        assert_eq!(round.revealed(), &[None, None, None]);
    }

    #[test]
    fn finished_round_is_frozen() {
        let mut round = Round::new("A", DEFAULT_TRIES);
        assert_eq!(round.guess("A"), GuessOutcome::Win);
        let before = round.clone();

        assert_eq!(round.guess("B"), GuessOutcome::AlreadyOver);
        assert_eq!(round.force_failed_attempt(), TimeoutOutcome::AlreadyOver);
        assert_eq!(round, before);
    }

    #[test]
    fn secret_is_hidden_until_the_round_ends() {
        let mut round = cat_round();
        assert_eq!(round.secret(), None);

        round.guess("C");
        assert_eq!(round.secret(), None);

        round.guess("A");
        round.guess("T");
        assert_eq!(round.secret(), Some("CAT"));
    }

    #[test]
    fn phrase_spaces_are_revealed_up_front() {
        let mut round = Round::new("BIG CAT", DEFAULT_TRIES);

        assert_eq!(round.display_word(), "___ ___");
        assert_eq!(round.revealed()[3], Some(' '));

        for letter in ["B", "I", "G", "C", "A"] {
            assert_eq!(round.guess(letter), GuessOutcome::Correct);
        }
        assert_eq!(round.guess("T"), GuessOutcome::Win);
        assert_eq!(round.score(), 7);
    }

    #[test]
    fn forced_attempt_spends_a_try_but_no_letter() {
        let mut round = cat_round();
        round.guess("C");

        assert_eq!(round.force_failed_attempt(), TimeoutOutcome::TryConsumed);
        assert_eq!(round.tries_remaining(), 5);
        assert_eq!(round.score(), 1);
        assert_eq!(round.guessed_letters().len(), 1);
    }

    #[test]
    fn forced_attempt_on_last_try_loses() {
        let mut round = cat_round();
        for _ in 0..5 {
            assert_eq!(round.force_failed_attempt(), TimeoutOutcome::TryConsumed);
        }

        assert_eq!(round.force_failed_attempt(), TimeoutOutcome::Lose);
        assert_eq!(round.tries_remaining(), 0);
        assert_eq!(round.phase(), RoundPhase::Lost);
    }

    #[test]
    fn distinct_letters_always_terminate_the_round() {
        let mut round = Round::new("RHYTHM", DEFAULT_TRIES);
        let mut last = GuessOutcome::Correct;

        for letter in 'A'..='Z' {
            let outcome = round.guess(&letter.to_string());
            if outcome.is_terminal() {
                last = outcome;
                break;
            }
        }
        assert!(last.is_terminal());
        assert!(round.is_over());
    }

    #[test]
    fn engine_reset_replaces_the_round_wholesale() {
        let dictionary = ["CAT", "DOG"].iter().map(|w| w.to_string()).collect();
        let vocabulary = Vocabulary::build(&dictionary, ["CAT", "DOG"]).unwrap();
        let mut engine =
            GameEngine::new(vocabulary, FirstPicker, GameConfig::default()).unwrap();

        assert_eq!(engine.guess("C"), GuessOutcome::Correct);
        assert_eq!(engine.guess("X"), GuessOutcome::Wrong);
        assert_eq!(engine.force_failed_attempt(), TimeoutOutcome::TryConsumed);

        let round = engine.reset(Level::Basic).unwrap();
        assert_eq!(round.tries_remaining(), 6);
        assert_eq!(round.score(), 0);
        assert!(!round.is_over());
        assert!(round.guessed_letters().is_empty());
        assert_eq!(round.display_word(), "___");
    }

    #[test]
    fn engine_refuses_a_level_with_no_pool() {
        let dictionary = ["CAT"].iter().map(|w| w.to_string()).collect();
        let vocabulary = Vocabulary::build(&dictionary, ["CAT"]).unwrap();
        let mut engine =
            GameEngine::new(vocabulary, FirstPicker, GameConfig::default()).unwrap();

        // no phrase pool was configured
        assert!(matches!(
            engine.reset(Level::Intermediate),
            Err(GameError::EmptyVocabulary)
        ));
    }

    #[test]
    fn normalize_accepts_single_letters_only() {
        assert_eq!(normalize_guess("a"), Some('A'));
        assert_eq!(normalize_guess("Z"), Some('Z'));
        assert_eq!(normalize_guess(""), None);
        assert_eq!(normalize_guess("ab"), None);
        assert_eq!(normalize_guess("7"), None);
        assert_eq!(normalize_guess(" "), None);
    }
}

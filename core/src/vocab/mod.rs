use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::*;

pub use dictionary::*;
pub use phrases::*;
pub use random::*;

mod dictionary;
mod phrases;
mod random;

/// Candidate words shipped with the game, for operators who do not supply
/// their own list. Still filtered against the dictionary at startup.
pub const STARTER_WORDS: &[&str] = &[
    "CAT", "BEAR", "LION", "COMPUTER", "CHINA", "NEPAL", "DENMARK", "HEN", "DOVE", "CRANE",
    "NAME", "PLACE", "FAST", "SLOW", "KING", "THOR", "KRATOS", "DANTE", "VIDEO", "MUSIC",
];

/// Injected source of randomness for secret selection, so rounds can be
/// reproduced in tests.
pub trait SecretPicker {
    /// Picks one entry of `pool`, or `None` when the pool is empty.
    fn pick<'a>(&mut self, pool: &'a [String]) -> Option<&'a str>;
}

/// Read-only pools of candidate secrets, one per level. Built once at
/// startup and never mutated by the engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    words: Vec<String>,
    phrases: Vec<String>,
}

impl Vocabulary {
    /// Primary mode: the dictionary validates an externally supplied
    /// candidate list.
    pub fn build(
        dictionary: &BTreeSet<String>,
        candidates: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self> {
        let words = filter_word_list(candidates, dictionary)?;
        Ok(Self {
            words,
            phrases: Vec::new(),
        })
    }

    /// Configuration special case: the dictionary itself is the word list.
    pub fn from_dictionary(dictionary: &BTreeSet<String>) -> Result<Self> {
        if dictionary.is_empty() {
            return Err(GameError::DictionaryEmpty);
        }
        Ok(Self {
            words: dictionary.iter().cloned().collect(),
            phrases: Vec::new(),
        })
    }

    /// Fills the intermediate-level pool from a sentence corpus.
    pub fn with_phrases<I>(mut self, sentences: I, rules: PhraseRules) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: AsRef<str>,
    {
        self.phrases = generate_phrases(sentences, rules).collect();
        if self.phrases.len() < rules.limit {
            log::warn!(
                "Phrase pool smaller than requested, found {} of {}",
                self.phrases.len(),
                rules.limit
            );
        }
        self
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn pool(&self, level: Level) -> &[String] {
        if level.uses_phrases() {
            &self.phrases
        } else {
            &self.words
        }
    }

    /// Uniform selection from the level's pool through the injected picker.
    pub fn pick_secret(&self, level: Level, picker: &mut impl SecretPicker) -> Result<String> {
        picker
            .pick(self.pool(level))
            .map(str::to_owned)
            .ok_or(GameError::EmptyVocabulary)
    }
}

use serde::{Deserialize, Serialize};

pub const MIN_PHRASE_WORDS: usize = 2;
pub const MAX_PHRASE_WORDS: usize = 5;
pub const PHRASE_POOL_LIMIT: usize = 10;

/// Bounds on phrase length and pool size for the intermediate level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRules {
    pub min_words: usize,
    pub max_words: usize,
    pub limit: usize,
}

impl PhraseRules {
    pub const fn new_unchecked(min_words: usize, max_words: usize, limit: usize) -> Self {
        Self {
            min_words,
            max_words,
            limit,
        }
    }

    pub fn new(min_words: usize, max_words: usize, limit: usize) -> Self {
        let min_words = min_words.max(1);
        let max_words = max_words.max(min_words);
        let limit = limit.max(1);
        Self::new_unchecked(min_words, max_words, limit)
    }
}

impl Default for PhraseRules {
    fn default() -> Self {
        Self::new_unchecked(MIN_PHRASE_WORDS, MAX_PHRASE_WORDS, PHRASE_POOL_LIMIT)
    }
}

/// Scans sentences in source order and yields upper-cased phrases whose
/// word count lies within the rules, stopping at `rules.limit`.
///
/// Sentences carrying a non-alphabetic token are skipped, so a phrase is
/// always guessable letter by letter. The sequence is lazy and finite;
/// deterministic whenever the corpus iterates deterministically.
pub fn generate_phrases<I>(sentences: I, rules: PhraseRules) -> impl Iterator<Item = String>
where
    I: IntoIterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: AsRef<str>,
{
    sentences
        .into_iter()
        .filter_map(move |sentence| phrase_from_sentence(sentence, rules))
        .take(rules.limit)
}

fn phrase_from_sentence<S>(sentence: S, rules: PhraseRules) -> Option<String>
where
    S: IntoIterator,
    S::Item: AsRef<str>,
{
    let mut words = Vec::new();
    for token in sentence {
        let token = token.as_ref();
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        words.push(token.to_uppercase());
    }

    if (rules.min_words..=rules.max_words).contains(&words.len()) {
        Some(words.join(" "))
    } else {
        None
    }
}

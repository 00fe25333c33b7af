use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{GameError, Result};

/// Reads a plain-text dictionary, one word per line. Entries are trimmed
/// and upper-cased, blank lines ignored.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut dictionary = BTreeSet::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            dictionary.insert(word.to_uppercase());
        }
    }

    if dictionary.is_empty() {
        return Err(GameError::DictionaryEmpty);
    }

    log::debug!(
        "Loaded {} dictionary entries from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Keeps the candidates present in the dictionary, case-insensitively,
/// in candidate order. An empty result means the caller configured an
/// unusable word list.
pub fn filter_word_list(
    candidates: impl IntoIterator<Item = impl AsRef<str>>,
    dictionary: &BTreeSet<String>,
) -> Result<Vec<String>> {
    let words: Vec<String> = candidates
        .into_iter()
        .map(|candidate| candidate.as_ref().to_uppercase())
        .filter(|word| dictionary.contains(word))
        .collect();

    if words.is_empty() {
        return Err(GameError::EmptyVocabulary);
    }
    Ok(words)
}

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Dictionary source could not be read")]
    DictionaryUnreadable(#[from] io::Error),
    #[error("Dictionary has no entries")]
    DictionaryEmpty,
    #[error("No secrets available for the chosen level")]
    EmptyVocabulary,
}

pub type Result<T> = std::result::Result<T, GameError>;

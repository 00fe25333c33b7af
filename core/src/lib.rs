use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use types::*;
pub use vocab::*;

mod engine;
mod error;
mod types;
mod vocab;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub level: Level,
    pub tries: Tries,
}

impl GameConfig {
    pub const fn new_unchecked(level: Level, tries: Tries) -> Self {
        Self { level, tries }
    }

    pub fn new(level: Level, tries: Tries) -> Self {
        let tries = tries.clamp(1, Tries::MAX);
        Self::new_unchecked(level, tries)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Level::Basic, DEFAULT_TRIES)
    }
}

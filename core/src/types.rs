use serde::{Deserialize, Serialize};

/// Count of wrong attempts a player may still make in a round.
pub type Tries = u8;

/// Points accumulated from revealed letter occurrences.
pub type Score = u32;

/// Wrong attempts granted at the start of every round.
pub const DEFAULT_TRIES: Tries = 6;

/// Selects which vocabulary pool a round draws its secret from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    /// Single words.
    Basic,
    /// Short multi-word phrases.
    Intermediate,
}

impl Level {
    pub const fn uses_phrases(self) -> bool {
        matches!(self, Self::Intermediate)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Basic
    }
}

use rand::prelude::*;

use super::SecretPicker;

/// Uniform selection backed by a seedable RNG, so a round sequence can be
/// replayed from its seed.
#[derive(Clone, Debug)]
pub struct RandomSecretPicker {
    rng: SmallRng,
}

impl RandomSecretPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl SecretPicker for RandomSecretPicker {
    fn pick<'a>(&mut self, pool: &'a [String]) -> Option<&'a str> {
        if pool.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..pool.len());
        Some(pool[index].as_str())
    }
}

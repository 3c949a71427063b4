use foldhash::fast::RandomState as FoldRandomState;
use std::collections::HashSet;

use crate::config::MAX_ALPHABET;
use crate::error::ConfigError;

/// The unsorted input every algorithm receives a copy of.
pub struct Dataset {
    pub values: Vec<i32>,
    pub alphabet: u64,
}

impl Dataset {
    /// Draws `len` values uniformly from the `alphabet` consecutive integers
    /// starting at `-(alphabet / 2)`. `alphabet` must be in `1..=2^32`.
    pub fn generate(len: usize, alphabet: u64, seed: u64) -> Result<Self, ConfigError> {
        if alphabet == 0 {
            return Err(ConfigError::EmptyAlphabet);
        }
        if alphabet > MAX_ALPHABET {
            return Err(ConfigError::AlphabetTooLarge(alphabet));
        }
        let low = -((alphabet / 2) as i64);
        let high = low + alphabet as i64 - 1;
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut values = vec![0i32; len];
        for v in &mut values {
            *v = rng.i32(low as i32..=high as i32);
        }
        Ok(Self { values, alphabet })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn size_in_bytes(&self) -> usize {
        std::mem::size_of::<i32>() * self.values.len()
    }

    pub fn distinct_keys(&self) -> usize {
        let mut seen =
            HashSet::with_capacity_and_hasher(self.values.len(), FoldRandomState::default());
        for v in &self.values {
            seen.insert(*v);
        }
        seen.len()
    }
}

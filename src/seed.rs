// seed.rs - Root seed of a run: fixed once, then only read by every derivation

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::counter_engine::Threefry4x64Engine;
use crate::derive::derive;

/// Maximum number of key words accepted when parsing.
pub const KEY_WORDS: usize = 4;

/// Errors from parsing a [`RootSeed`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed is empty")]
    Empty,

    #[error("Seed has {found} words, at most {max} allowed")]
    TooManyWords { max: usize, found: usize },

    #[error("Seed word {position} ('{word}') is not an unsigned 64-bit integer: {source}")]
    InvalidWord {
        position: usize,
        word: String,
        source: ParseIntError,
    },
}

/// Key and initial counter of the root 4×64 Threefry engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RootSeed {
    pub key: [u64; 4],
    pub counter: [u64; 4],
}

impl RootSeed {
    pub fn new(key: [u64; 4]) -> Self {
        Self {
            key,
            counter: [0; 4],
        }
    }

    pub fn with_counter(mut self, counter: [u64; 4]) -> Self {
        self.counter = counter;
        self
    }

    /// Spreads a single integer over the whole key with SplitMix64, so nearby
    /// integers still give unrelated keys.
    pub fn from_u64(seed: u64) -> Self {
        let mut state = seed;
        let mut key = [0u64; 4];
        for k in key.iter_mut() {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            *k = z ^ (z >> 31);
        }
        Self::new(key)
    }

    pub fn root_engine(&self) -> Threefry4x64Engine {
        Threefry4x64Engine::with_counter(self.key, self.counter)
    }

    /// Private engine of worker `rank`.
    pub fn worker_engine(&self, rank: u64) -> Threefry4x64Engine {
        derive(&self.root_engine(), rank)
    }
}

/// Parses up to four comma-separated words, decimal or `0x`-prefixed hex.
/// Missing trailing words are zero; the counter always starts at zero.
impl FromStr for RootSeed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SeedError::Empty);
        }

        let words: Vec<&str> = s.split(',').map(str::trim).collect();
        if words.len() > KEY_WORDS {
            return Err(SeedError::TooManyWords {
                max: KEY_WORDS,
                found: words.len(),
            });
        }

        let mut key = [0u64; 4];
        for (position, (slot, word)) in key.iter_mut().zip(&words).enumerate() {
            let parsed = match word.strip_prefix("0x").or_else(|| word.strip_prefix("0X")) {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => word.parse::<u64>(),
            };
            *slot = parsed.map_err(|source| SeedError::InvalidWord {
                position,
                word: word.to_string(),
                source,
            })?;
        }

        Ok(Self::new(key))
    }
}

/// Writes the key in the form accepted by `FromStr`.
impl fmt::Display for RootSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, k) in self.key.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{k:#018x}")?;
        }
        Ok(())
    }
}

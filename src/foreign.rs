// foreign.rs - rand-ecosystem engines as RandomEngine + Derivable
//
// Native widths follow each algorithm's natural output: ChaCha and PCG32
// produce 32-bit words, PCG64 and Xoshiro (SmallRng on 64-bit targets) 64-bit.

use rand::rngs::{SmallRng, StdRng};
use rand_chacha::{ChaCha12Rng, ChaCha20Rng, ChaCha8Rng};
use rand_core::RngCore;
use rand_pcg::{Pcg32, Pcg64, Pcg64Mcg};

use crate::derive::{derive_seeded, Derivable};
use crate::engine::RandomEngine;

macro_rules! foreign_engine {
    ($($ty:ty => $word:ty, $next:ident;)*) => {
        $(
            impl RandomEngine for $ty {
                type Word = $word;

                #[inline]
                fn next_word(&mut self) -> $word {
                    RngCore::$next(self)
                }
            }

            impl Derivable for $ty {
                fn derive(&self, index: u64) -> Self {
                    derive_seeded(self, index)
                }
            }
        )*
    };
}

foreign_engine! {
    ChaCha8Rng => u32, next_u32;
    ChaCha12Rng => u32, next_u32;
    ChaCha20Rng => u32, next_u32;
    StdRng => u32, next_u32;
    Pcg32 => u32, next_u32;
    Pcg64 => u64, next_u64;
    Pcg64Mcg => u64, next_u64;
    SmallRng => u64, next_u64;
}

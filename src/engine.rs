// engine.rs - The uniform-random-word contract shared by every engine

use crate::word::Word;

/// A uniform random bit generator: every call to [`next_word`] yields a word
/// uniformly distributed over `[min(), max()]`, which is the full word range.
///
/// [`next_word`]: RandomEngine::next_word
pub trait RandomEngine {
    type Word: Word;

    /// Advances the engine and returns one word.
    fn next_word(&mut self) -> Self::Word;

    fn min() -> Self::Word
    where
        Self: Sized,
    {
        <Self::Word as Word>::ZERO
    }

    fn max() -> Self::Word
    where
        Self: Sized,
    {
        <Self::Word as Word>::MAX
    }
}

impl<E: RandomEngine + ?Sized> RandomEngine for &mut E {
    type Word = E::Word;

    #[inline]
    fn next_word(&mut self) -> Self::Word {
        (**self).next_word()
    }
}

/// Draws a `u32` for `RngCore::next_u32`: one word, truncated when wider.
#[inline]
pub(crate) fn next_u32_from<E: RandomEngine + ?Sized>(engine: &mut E) -> u32 {
    engine.next_word().to_u64() as u32
}

/// Draws a `u64` for `RngCore::next_u64`: two 32-bit words are joined low word
/// first, matching `rand_core::impls::next_u64_via_u32`.
#[inline]
pub(crate) fn next_u64_from<E: RandomEngine + ?Sized>(engine: &mut E) -> u64 {
    if <E::Word as Word>::BITS >= 64 {
        engine.next_word().to_u64()
    } else {
        let lo = engine.next_word().to_u64();
        let hi = engine.next_word().to_u64();
        (hi << 32) | lo
    }
}

/// Implements `rand_core::RngCore` on top of [`RandomEngine`], so any engine of
/// this crate can drive `rand`/`rand_distr` samplers.
macro_rules! impl_rng_core {
    (impl<$($gen:ident $(: $bound:path)?),*> for $ty:ty) => {
        impl<$($gen $(: $bound)?),*> rand_core::RngCore for $ty {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                $crate::engine::next_u32_from(self)
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                $crate::engine::next_u64_from(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                rand_core::impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
                rand_core::RngCore::fill_bytes(self, dest);
                Ok(())
            }
        }
    };
}

pub(crate) use impl_rng_core;

// mapper.rs - Word-width adapter over any RandomEngine

use std::marker::PhantomData;

use crate::derive::Derivable;
use crate::engine::{impl_rng_core, RandomEngine};
use crate::word::Word;

/// Re-exposes an engine of native word width `E::Word` as a generator of
/// `T` words (`u32` or `u64`).
///
/// * equal widths: pass-through;
/// * narrowing: each native draw is split into chunks, least significant
///   first, and the remaining chunks are served before the engine is drawn again;
/// * widening: native draws are accumulated least significant first until one
///   full `T` word is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineMapper<E, T> {
    engine: E,
    /// Unserved chunks of the last native draw, lowest chunk in the low bits.
    buffer: u64,
    pending: u32,
    _target: PhantomData<T>,
}

pub type EngineMapper32<E> = EngineMapper<E, u32>;
pub type EngineMapper64<E> = EngineMapper<E, u64>;

/// Wraps `engine` as a 32-bit word generator.
pub fn wrap_as_32<E: RandomEngine>(engine: E) -> EngineMapper32<E> {
    EngineMapper::new(engine)
}

/// Wraps `engine` as a 64-bit word generator.
pub fn wrap_as_64<E: RandomEngine>(engine: E) -> EngineMapper64<E> {
    EngineMapper::new(engine)
}

impl<E: RandomEngine, T: Word> EngineMapper<E, T> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            buffer: 0,
            pending: 0,
            _target: PhantomData,
        }
    }

    pub fn get_ref(&self) -> &E {
        &self.engine
    }

    /// Returns the wrapped engine; buffered chunks are dropped.
    pub fn into_inner(self) -> E {
        self.engine
    }
}

impl<E: RandomEngine, T: Word> RandomEngine for EngineMapper<E, T> {
    type Word = T;

    #[inline]
    fn next_word(&mut self) -> T {
        let native = <E::Word as Word>::BITS;
        let target = T::BITS;

        if native == target {
            T::from_u64(self.engine.next_word().to_u64())
        } else if native > target {
            if self.pending == 0 {
                self.buffer = self.engine.next_word().to_u64();
                self.pending = native / target;
            }
            let chunk = T::from_u64(self.buffer);
            self.buffer >>= target;
            self.pending -= 1;
            chunk
        } else {
            let mut acc = 0u64;
            for i in 0..target / native {
                acc |= self.engine.next_word().to_u64() << (i * native);
            }
            T::from_u64(acc)
        }
    }
}

impl<E: RandomEngine + Derivable, T: Word> Derivable for EngineMapper<E, T> {
    /// Derives from the wrapped engine's state; chunks buffered in this mapper
    /// play no part and the child starts with an empty buffer.
    fn derive(&self, index: u64) -> Self {
        Self::new(self.engine.derive(index))
    }
}

impl_rng_core!(impl<E: RandomEngine, T: Word> for EngineMapper<E, T>);

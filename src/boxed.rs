// boxed.rs - Runtime type erasure for engines of one word width

use std::fmt;

use crate::derive::Derivable;
use crate::engine::{impl_rng_core, RandomEngine};
use crate::mapper::{wrap_as_32, wrap_as_64};
use crate::word::Word;

/// Object-safe view of `RandomEngine + Derivable + Clone`.
trait DynEngine<W: Word>: Send {
    fn next_word_dyn(&mut self) -> W;
    fn derive_dyn(&self, index: u64) -> Box<dyn DynEngine<W>>;
    fn clone_dyn(&self) -> Box<dyn DynEngine<W>>;
}

impl<E> DynEngine<E::Word> for E
where
    E: RandomEngine + Derivable + Clone + Send + 'static,
{
    #[inline]
    fn next_word_dyn(&mut self) -> E::Word {
        RandomEngine::next_word(self)
    }

    fn derive_dyn(&self, index: u64) -> Box<dyn DynEngine<E::Word>> {
        Box::new(Derivable::derive(self, index))
    }

    fn clone_dyn(&self) -> Box<dyn DynEngine<E::Word>> {
        Box::new(self.clone())
    }
}

/// An owned engine of any concrete type producing `W` words.
///
/// Use it at boundaries where heterogeneous engines must share one type;
/// otherwise prefer the generic [`EngineMapper`](crate::mapper::EngineMapper).
/// Cloning and derivation go through to the erased engine.
pub struct BoxedEngine<W: Word> {
    inner: Box<dyn DynEngine<W>>,
}

/// Any engine, seen as a 32-bit generator.
pub type AnyEngine32 = BoxedEngine<u32>;
/// Any engine, seen as a 64-bit generator.
pub type AnyEngine64 = BoxedEngine<u64>;

impl<W: Word> BoxedEngine<W> {
    pub fn new<E>(engine: E) -> Self
    where
        E: RandomEngine<Word = W> + Derivable + Clone + Send + 'static,
    {
        Self {
            inner: Box::new(engine),
        }
    }
}

/// Erases `engine` behind a 32-bit interface, adapting its width first.
pub fn erase_as_32<E>(engine: E) -> AnyEngine32
where
    E: RandomEngine + Derivable + Clone + Send + 'static,
{
    BoxedEngine::new(wrap_as_32(engine))
}

/// Erases `engine` behind a 64-bit interface, adapting its width first.
pub fn erase_as_64<E>(engine: E) -> AnyEngine64
where
    E: RandomEngine + Derivable + Clone + Send + 'static,
{
    BoxedEngine::new(wrap_as_64(engine))
}

impl<W: Word> RandomEngine for BoxedEngine<W> {
    type Word = W;

    #[inline]
    fn next_word(&mut self) -> W {
        self.inner.next_word_dyn()
    }
}

impl<W: Word> Derivable for BoxedEngine<W> {
    fn derive(&self, index: u64) -> Self {
        Self {
            inner: self.inner.derive_dyn(index),
        }
    }
}

impl<W: Word> Clone for BoxedEngine<W> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_dyn(),
        }
    }
}

impl<W: Word> fmt::Debug for BoxedEngine<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedEngine")
            .field("bits", &W::BITS)
            .finish_non_exhaustive()
    }
}

impl_rng_core!(impl<W: Word> for BoxedEngine<W>);

// counter_engine.rs - Sequential generator over a counter-based block function

use rand_core::SeedableRng;

use crate::engine::{impl_rng_core, RandomEngine};
use crate::threefry::{BlockFunction, Threefry2x32, Threefry2x64, Threefry4x32, Threefry4x64};
use crate::word::{self, Word, WordTuple};

/// Stream generator over a [`BlockFunction`].
///
/// The state is `(key, counter, block, cursor)`.  `cursor` counts the words of
/// `block` already handed out; when it reaches the tuple length the counter is
/// incremented and the block recomputed on the next draw.
///
/// Engines are plain values: copying one duplicates the whole state, and the
/// copies advance independently from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterEngine<B: BlockFunction> {
    key: B::Block,
    counter: B::Block,
    block: B::Block,
    cursor: usize,
}

pub type Threefry4x64Engine = CounterEngine<Threefry4x64>;
pub type Threefry2x64Engine = CounterEngine<Threefry2x64>;
pub type Threefry4x32Engine = CounterEngine<Threefry4x32>;
pub type Threefry2x32Engine = CounterEngine<Threefry2x32>;

impl<B: BlockFunction> CounterEngine<B> {
    /// Words per block.
    const WORDS: usize = <B::Block as WordTuple<B::Word>>::LEN;

    /// Creates an engine with the given key and a zero counter.
    pub fn new(key: B::Block) -> Self {
        Self::with_counter(key, B::Block::default())
    }

    /// Creates an engine at an explicit counter.
    ///
    /// No block is computed here: the first draw increments the counter and
    /// fills the block, so an engine that is only ever derived from costs no
    /// mixing.
    pub fn with_counter(key: B::Block, counter: B::Block) -> Self {
        Self {
            key,
            counter,
            block: B::Block::default(),
            cursor: Self::WORDS,
        }
    }

    pub fn key(&self) -> &B::Block {
        &self.key
    }

    pub fn counter(&self) -> &B::Block {
        &self.counter
    }

    /// Words of the current block already consumed; equal to the tuple length
    /// when the next draw refills.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Next block in sequence.
    #[inline]
    fn refill(&mut self) {
        word::increment(self.counter.as_mut());
        self.block = B::mix(&self.key, &self.counter);
        self.cursor = 0;
    }
}

impl<B: BlockFunction> Default for CounterEngine<B> {
    fn default() -> Self {
        Self::new(B::Block::default())
    }
}

impl<B: BlockFunction> RandomEngine for CounterEngine<B> {
    type Word = B::Word;

    #[inline]
    fn next_word(&mut self) -> B::Word {
        if self.cursor >= Self::WORDS {
            self.refill();
        }
        let value = self.block.as_ref()[self.cursor];
        self.cursor += 1;
        value
    }
}

impl_rng_core!(impl<B: BlockFunction> for CounterEngine<B>);

/// Seeds the key from little-endian bytes; the counter starts at zero.
macro_rules! impl_seedable {
    ($block:ty, $word:ty, $bytes:expr) => {
        impl SeedableRng for CounterEngine<$block> {
            type Seed = [u8; $bytes];

            fn from_seed(seed: Self::Seed) -> Self {
                const WIDTH: usize = <$word as Word>::BITS as usize / 8;
                let mut key = <$block as BlockFunction>::Block::default();
                for (k, chunk) in key.iter_mut().zip(seed.chunks_exact(WIDTH)) {
                    let mut buf = [0u8; WIDTH];
                    buf.copy_from_slice(chunk);
                    *k = <$word>::from_le_bytes(buf);
                }
                Self::new(key)
            }
        }
    };
}

impl_seedable!(Threefry4x64, u64, 32);
impl_seedable!(Threefry2x64, u64, 16);
impl_seedable!(Threefry4x32, u32, 16);
impl_seedable!(Threefry2x32, u32, 8);

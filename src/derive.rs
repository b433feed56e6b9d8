// derive.rs - Independent substream derivation
//
// One root engine is seeded per run; each worker/rank/task derives its own
// private engine from it with a distinct index and never shares state again.

use rand_core::{RngCore, SeedableRng};

use crate::counter_engine::{CounterEngine, Threefry4x64Engine};
use crate::threefry::{BlockFunction, Threefry4x64};
use crate::word::{self, WordTuple};

/// Engines that can spawn an independent child stream from their current
/// state and an index.
///
/// Deriving never advances the parent, and the same (state, index) pair always
/// yields the same child.
pub trait Derivable: Sized {
    fn derive(&self, index: u64) -> Self;
}

/// Derives the child engine number `index` from `parent`'s current state.
#[inline]
pub fn derive<E: Derivable>(parent: &E, index: u64) -> E {
    parent.derive(index)
}

impl<B: BlockFunction> Derivable for CounterEngine<B> {
    /// Mixes the parent key with `counter + index`, then splits the resulting
    /// block: low half becomes the child key, high half the child counter.
    /// Odd-sized tuples take a second block for the counter instead.
    fn derive(&self, index: u64) -> Self {
        let key = self.key();
        let mut probe_counter = *self.counter();
        word::add_u64(probe_counter.as_mut(), index);
        let probe = B::mix(key, &probe_counter);

        let n = <B::Block as WordTuple<B::Word>>::LEN;
        let half = n / 2;
        let mut child_key = B::Block::default();
        let mut child_counter = B::Block::default();

        if n % 2 == 0 && half > 0 {
            child_key.as_mut()[..half].copy_from_slice(&probe.as_ref()[..half]);
            child_counter.as_mut()[..half].copy_from_slice(&probe.as_ref()[half..]);
        } else {
            child_key = probe;
            child_counter = B::mix(key, &probe);
        }

        CounterEngine::with_counter(child_key, child_counter)
    }
}

/// Derivation for engines that only expose `RngCore + SeedableRng`.
///
/// Four words drawn from a clone of the parent form a Threefry key; the index is
/// mixed in as the counter and the resulting block keys the stream that fills
/// the child's seed. The parent itself is left untouched.
pub fn derive_seeded<R>(parent: &R, index: u64) -> R
where
    R: RngCore + SeedableRng + Clone,
{
    let mut probe = parent.clone();
    let key = [
        probe.next_u64(),
        probe.next_u64(),
        probe.next_u64(),
        probe.next_u64(),
    ];
    let child_key = Threefry4x64::mix(&key, &[index, 0, 0, 0]);

    let mut seed = R::Seed::default();
    Threefry4x64Engine::new(child_key).fill_bytes(seed.as_mut());
    R::from_seed(seed)
}

// threefry.rs - Threefry counter-based block function
//
// Threefry is the Threefish-derived bijection of Salmon et al., "Parallel Random
// Numbers: As Easy as 1, 2, 3" (SC'11).  The block is a pure function of
// (key, counter); no state survives between calls.

use std::fmt::Debug;
use std::marker::PhantomData;

use crate::word::{Word, WordTuple};

/// A pure, total, bijective mixing function `mix(key, counter) -> block`.
///
/// Key, counter and block share one tuple type, so their arity and word width
/// always agree.
pub trait BlockFunction: Copy + Clone + Default + Debug + PartialEq + Eq + Send + Sync + 'static {
    type Word: Word;
    type Block: WordTuple<Self::Word>;

    fn mix(key: &Self::Block, counter: &Self::Block) -> Self::Block;
}

/// Words that carry a Threefry key-schedule parity constant.
pub trait ThreefryWord: Word {
    /// Skein's C240, truncated to the word width.
    const PARITY: Self;
}

impl ThreefryWord for u32 {
    const PARITY: Self = 0x1BD1_1BDA;
}

impl ThreefryWord for u64 {
    const PARITY: Self = 0x1BD1_1BDA_A9FC_1A22;
}

/// Rotation schedule of one Threefry shape: row `round % 8`, one column per
/// mixed word pair.
pub trait RotationSchedule {
    fn rotations(round: usize) -> &'static [u32];
}

/// Number of rounds for every provided shape.  Fewer rounds leave detectable
/// bias, so this is not configurable.
pub const ROUNDS: usize = 20;

const ROTATIONS_4X64: [[u32; 2]; 8] = [
    [14, 16],
    [52, 57],
    [23, 40],
    [5, 37],
    [25, 33],
    [46, 12],
    [58, 22],
    [32, 32],
];

const ROTATIONS_2X64: [[u32; 1]; 8] = [[16], [42], [12], [31], [16], [32], [24], [21]];

const ROTATIONS_4X32: [[u32; 2]; 8] = [
    [10, 26],
    [11, 21],
    [13, 27],
    [23, 5],
    [6, 20],
    [17, 11],
    [25, 10],
    [18, 20],
];

const ROTATIONS_2X32: [[u32; 1]; 8] = [[13], [15], [26], [6], [17], [29], [16], [24]];

/// Threefry block function over `N` words of type `W`.
///
/// Only shapes with a [`RotationSchedule`] implement [`BlockFunction`]:
/// 4×64 (used throughout the crate), 2×64, 4×32 and 2×32.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Threefry<W, const N: usize>(PhantomData<W>);

pub type Threefry4x64 = Threefry<u64, 4>;
pub type Threefry2x64 = Threefry<u64, 2>;
pub type Threefry4x32 = Threefry<u32, 4>;
pub type Threefry2x32 = Threefry<u32, 2>;

impl RotationSchedule for Threefry<u64, 4> {
    #[inline(always)]
    fn rotations(round: usize) -> &'static [u32] {
        &ROTATIONS_4X64[round % 8]
    }
}

impl RotationSchedule for Threefry<u64, 2> {
    #[inline(always)]
    fn rotations(round: usize) -> &'static [u32] {
        &ROTATIONS_2X64[round % 8]
    }
}

impl RotationSchedule for Threefry<u32, 4> {
    #[inline(always)]
    fn rotations(round: usize) -> &'static [u32] {
        &ROTATIONS_4X32[round % 8]
    }
}

impl RotationSchedule for Threefry<u32, 2> {
    #[inline(always)]
    fn rotations(round: usize) -> &'static [u32] {
        &ROTATIONS_2X32[round % 8]
    }
}

impl<W, const N: usize> BlockFunction for Threefry<W, N>
where
    W: ThreefryWord,
    [W; N]: WordTuple<W>,
    Self: RotationSchedule,
{
    type Word = W;
    type Block = [W; N];

    #[inline]
    fn mix(key: &[W; N], counter: &[W; N]) -> [W; N] {
        // Extended key: the N key words plus the parity word.
        let mut ks = [W::ZERO; 5];
        ks[N] = W::PARITY;
        for i in 0..N {
            ks[i] = key[i];
            ks[N] = ks[N] ^ key[i];
        }

        let mut x = *counter;
        for i in 0..N {
            x[i] = x[i].wrapping_add(ks[i]);
        }

        for round in 0..ROUNDS {
            for (pair, &rot) in Self::rotations(round).iter().enumerate() {
                let (a, b) = (2 * pair, 2 * pair + 1);
                x[a] = x[a].wrapping_add(x[b]);
                x[b] = x[b].rotate_left(rot) ^ x[a];
            }
            if N == 4 {
                x.swap(1, 3);
            }

            if round % 4 == 3 {
                let s = round / 4 + 1;
                for i in 0..N {
                    x[i] = x[i].wrapping_add(ks[(s + i) % (N + 1)]);
                }
                x[N - 1] = x[N - 1].wrapping_add(W::from_u64(s as u64));
            }
        }

        x
    }
}

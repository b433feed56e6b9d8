// word.rs - Fixed-width unsigned words and little-endian word tuples

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::BitXor;

/// A fixed-width unsigned machine word (`u32` or `u64`).
///
/// All arithmetic is modular: nothing in this crate treats overflow as an error.
pub trait Word:
    Copy + Default + Eq + Ord + Hash + Debug + BitXor<Output = Self> + Send + Sync + 'static
{
    /// Width in bits.
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    /// Largest representable value, `2^BITS - 1`.
    const MAX: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn overflowing_add(self, rhs: Self) -> (Self, bool);
    fn rotate_left(self, n: u32) -> Self;

    /// Keeps the low `BITS` bits of `v`.
    fn from_u64(v: u64) -> Self;
    fn to_u64(self) -> u64;
}

impl Word for u32 {
    const BITS: u32 = 32;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = u32::MAX;

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        u32::overflowing_add(self, rhs)
    }

    #[inline(always)]
    fn rotate_left(self, n: u32) -> Self {
        u32::rotate_left(self, n)
    }

    #[inline(always)]
    fn from_u64(v: u64) -> Self {
        v as u32
    }

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self as u64
    }
}

impl Word for u64 {
    const BITS: u32 = 64;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = u64::MAX;

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        u64::overflowing_add(self, rhs)
    }

    #[inline(always)]
    fn rotate_left(self, n: u32) -> Self {
        u64::rotate_left(self, n)
    }

    #[inline(always)]
    fn from_u64(v: u64) -> Self {
        v
    }

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self
    }
}

/// A fixed-size tuple of words, read as a little-endian multi-word integer
/// (word 0 is least significant).
///
/// Keys, counters and blocks of one block function share a single tuple type,
/// so a key/counter arity mismatch is a type error rather than a runtime one.
pub trait WordTuple<W: Word>:
    Copy + Default + Eq + Hash + Debug + AsRef<[W]> + AsMut<[W]> + Send + Sync + 'static
{
    /// Number of words.
    const LEN: usize;
}

impl<W: Word, const N: usize> WordTuple<W> for [W; N]
where
    [W; N]: Default,
{
    const LEN: usize = N;
}

/// Adds one to a little-endian multi-word integer, wrapping silently past the
/// largest representable value.
#[inline]
pub fn increment<W: Word>(words: &mut [W]) {
    for w in words.iter_mut() {
        let (sum, carry) = w.overflowing_add(W::ONE);
        *w = sum;
        if !carry {
            return;
        }
    }
}

/// Adds `value` to a little-endian multi-word integer with carry across words,
/// wrapping silently at full width.
///
/// For 32-bit words the value is split over the two lowest words, so distinct
/// `value`s always give distinct results.
pub fn add_u64<W: Word>(words: &mut [W], mut value: u64) {
    let mut carry = false;
    for w in words.iter_mut() {
        if value == 0 && !carry {
            break;
        }
        let addend = W::from_u64(value);
        value = if W::BITS >= 64 { 0 } else { value >> W::BITS };

        let (sum, c1) = w.overflowing_add(addend);
        let (sum, c2) = sum.overflowing_add(if carry { W::ONE } else { W::ZERO });
        *w = sum;
        carry = c1 || c2;
    }
}

//! The per-pair arithmetic.
use fixdump::{SHIFT_AMOUNT, SHIFT_MSB};
use std::iter::FusedIterator;

/// The quantities computed for one operand pair `(i, j)`.
///
/// All fields are Q24.8 values. Nothing here can overflow: the largest
/// `c` is `255 * 255 + 128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub i: u8,
    pub j: u8,
    /// The raw product `i * j`.
    pub p: u32,
    /// `p` biased by half of the scale.
    pub c: u32,
    /// `c >> 8`, the biased product rounded once.
    pub t: u32,
    /// `(t + c) >> 8`.
    pub r2: u32,
}

impl Probe {
    pub fn new(i: u8, j: u8) -> Self {
        let p = u32::from(i) * u32::from(j);
        let c = p + SHIFT_MSB;
        let t = c >> SHIFT_AMOUNT;
        let r2 = (t + c) >> SHIFT_AMOUNT;
        Self { i, j, p, c, t, r2 }
    }

    /// The position of this pair in the enumeration order.
    pub fn key(&self) -> (u8, u8) {
        (self.i, self.j)
    }

    /// `(c >> 8) + c`, the intermediate sum of the second formula.
    pub fn t_plus_c(&self) -> u32 {
        self.t + self.c
    }

    /// Returns `true` if the two formulas disagree by exactly one unit.
    pub fn is_flagged(&self) -> bool {
        self.r2.wrapping_sub(self.t) == 1
    }

    /// Bit 7 of `p`, i.e., the bit that decides whether the bias rounds the
    /// product up.
    pub fn round_bit(&self) -> u32 {
        (self.p >> (SHIFT_AMOUNT - 1)) & 1
    }

    /// Returns `true` if the default scan stops after this pair.
    pub fn is_stop(&self) -> bool {
        self.is_flagged() && self.round_bit() == 1
    }
}

/// The number of operand pairs.
pub const NUM_PAIRS: usize = 256 * 256;

/// Iterate over all operand pairs with `i` as the outer loop and `j` as the
/// inner loop, both ascending.
pub fn pairs() -> Pairs {
    Pairs { next: 0 }
}

/// Map an index in `0..NUM_PAIRS` to the operand pair at that position.
#[inline]
pub fn pair_at(index: usize) -> (u8, u8) {
    debug_assert!(index < NUM_PAIRS);
    ((index >> 8) as u8, index as u8)
}

/// An iterator created by [`pairs`].
#[derive(Debug, Clone)]
pub struct Pairs {
    next: usize,
}

impl Iterator for Pairs {
    type Item = (u8, u8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < NUM_PAIRS {
            let pair = pair_at(self.next);
            self.next += 1;
            Some(pair)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = NUM_PAIRS - self.next;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Pairs {}
impl FusedIterator for Pairs {}

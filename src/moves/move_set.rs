//! Destination-square sets.
//!
//! A `MoveSet` is a bitboard with one bit per square (`a1 == bit 0`). Set
//! semantics come for free: inserting a square twice is a no-op and the
//! union of two sets is a bitwise or.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::game_state::chess_types::Square;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveSet {
    bits: u64,
}

impl MoveSet {
    #[inline]
    pub const fn new() -> Self {
        MoveSet { bits: 0 }
    }

    #[inline]
    pub const fn from_bitboard(bits: u64) -> Self {
        MoveSet { bits }
    }

    #[inline]
    pub const fn bitboard(self) -> u64 {
        self.bits
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.bits |= square.bit();
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        (self.bits & square.bit()) != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Squares in index order, `a1` first.
    pub fn iter(self) -> MoveSetIter {
        MoveSetIter { remaining: self.bits }
    }
}

pub struct MoveSetIter {
    remaining: u64,
}

impl Iterator for MoveSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while self.remaining != 0 {
            let index = self.remaining.trailing_zeros() as u8;
            self.remaining &= self.remaining - 1;
            if let Ok(square) = Square::from_index(index) {
                return Some(square);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for MoveSet {
    type Item = Square;
    type IntoIter = MoveSetIter;

    fn into_iter(self) -> MoveSetIter {
        self.iter()
    }
}

impl FromIterator<Square> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = MoveSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Square> for MoveSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for square in iter {
            self.insert(square);
        }
    }
}

impl BitOr for MoveSet {
    type Output = MoveSet;

    #[inline]
    fn bitor(self, rhs: MoveSet) -> MoveSet {
        MoveSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for MoveSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: MoveSet) {
        self.bits |= rhs.bits;
    }
}

impl fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|sq| sq.to_string())).finish()
    }
}

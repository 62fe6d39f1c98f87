use crate::chess::Position;
use crate::util::Integer;
use derive_more::*;
use std::fmt::{self, Write};

/// A set of positions on a chess board.
///
/// Bit `i` stands for the [`Position`] whose grid index is `i`,
/// so iteration follows the board's enumeration order.
#[derive(
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Constructor,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(transparent)]
pub struct Bitboard(u64);

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        for p in Position::iter() {
            f.write_char(if self.contains(p) { '■' } else { '◻' })?;
            f.write_char(if p.grid_index().1 < 7 { ' ' } else { '\n' })?;
        }

        Ok(())
    }
}

impl Bitboard {
    /// An empty board.
    #[inline(always)]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// The number of [`Position`]s in the set.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Whether the set is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether this [`Position`] is in the set.
    #[inline(always)]
    pub fn contains(&self, p: Position) -> bool {
        !(*self & p.bitboard()).is_empty()
    }

    /// Adds a [`Position`] to this set.
    #[inline(always)]
    pub fn with(&self, p: Position) -> Self {
        *self | p.bitboard()
    }

    /// An iterator over the [`Position`]s in this set, in enumeration order.
    #[inline(always)]
    pub fn iter(&self) -> Positions {
        Positions::new(*self)
    }
}

impl From<Position> for Bitboard {
    #[inline(always)]
    fn from(p: Position) -> Self {
        p.bitboard()
    }
}

impl FromIterator<Position> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::empty(), |bb, p| bb.with(p))
    }
}

impl IntoIterator for Bitboard {
    type Item = Position;
    type IntoIter = Positions;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        Positions::new(self)
    }
}

/// An iterator over the [`Position`]s in a [`Bitboard`].
#[derive(Debug, Constructor)]
pub struct Positions(Bitboard);

impl Iterator for Positions {
    type Item = Position;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            let p = <Position as Integer>::new(self.0 .0.trailing_zeros() as u8);
            self.0 ^= p.bitboard();
            Some(p)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl ExactSizeIterator for Positions {}

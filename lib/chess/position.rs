use crate::chess::{Bitboard, ParseRankError, ParseRowError, Perspective, Rank, Row};
use crate::util::Integer;
use derive_more::{Display, Error, From};
use std::{fmt, str::FromStr};

/// A square on the chess board.
///
/// Variants are laid out in grid order, row-major from white's top-left corner,
/// so `a8` is the first square and `h1` the last.
/// Equality and ordering follow that index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
#[rustfmt::skip]
pub enum Position {
    A8, B8, C8, D8, E8, F8, G8, H8,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A1, B1, C1, D1, E1, F1, G1, H1,
}

impl Position {
    /// Constructs [`Position`] from a pair of [`Rank`] and [`Row`].
    #[inline(always)]
    pub fn new(rank: Rank, row: Row) -> Self {
        <Self as Integer>::new((Row::MAX - row.get()) << 3 | rank.get())
    }

    /// This position's `(row, column)` address on the grid.
    #[inline(always)]
    pub fn grid_index(&self) -> (usize, usize) {
        (self.index() >> 3, self.index() & 0b111)
    }

    /// This position's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::new(self.get() & 0b111)
    }

    /// This position's [`Row`].
    #[inline(always)]
    pub fn row(&self) -> Row {
        Row::new(Row::MAX - (self.get() >> 3))
    }

    /// The position `ranks` columns to the right and `rows` rows up, from white's side.
    ///
    /// Returns `None` if that would fall off the board.
    #[inline(always)]
    pub fn offset(self, ranks: i8, rows: i8) -> Option<Self> {
        Some(Position::new(
            self.rank().offset(ranks)?,
            self.row().offset(rows)?,
        ))
    }

    /// Returns a [`Bitboard`] that only contains this position.
    #[inline(always)]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self.get())
    }
}

unsafe impl Integer for Position {
    const MIN: u8 = Position::A8 as _;
    const MAX: u8 = Position::H1 as _;
}

impl Perspective for Position {
    /// Flips this position's [`Row`].
    #[inline(always)]
    fn flip(&self) -> Self {
        Position::new(self.rank(), self.row().flip())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rank(), f)?;
        fmt::Display::fmt(&self.row(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Position`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParsePositionError {
    #[display(fmt = "failed to parse position")]
    InvalidRank(ParseRankError),
    #[display(fmt = "failed to parse position")]
    InvalidRow(ParseRowError),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Position::new(s[..i].parse()?, s[i..].parse()?))
    }
}

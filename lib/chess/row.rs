use crate::chess::Perspective;
use crate::util::Integer;
use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A row on the chess board, numbered from white's side.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Row {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

unsafe impl Integer for Row {
    const MIN: u8 = Row::First as _;
    const MAX: u8 = Row::Eighth as _;
}

impl Perspective for Row {
    /// This row from the opponent's perspective.
    #[inline(always)]
    fn flip(&self) -> Self {
        Self::new(Self::MAX - self.get())
    }
}

impl Sub for Row {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.get() as i8 - rhs.get() as i8
    }
}

/// The reason why parsing [`Row`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse row, expected digit in the range `(1..=8)`")]
pub struct ParseRowError;

impl FromStr for Row {
    type Err = ParseRowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Row::First),
            "2" => Ok(Row::Second),
            "3" => Ok(Row::Third),
            "4" => Ok(Row::Fourth),
            "5" => Ok(Row::Fifth),
            "6" => Ok(Row::Sixth),
            "7" => Ok(Row::Seventh),
            "8" => Ok(Row::Eighth),
            _ => Err(ParseRowError),
        }
    }
}

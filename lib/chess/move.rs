use crate::chess::{ParsePositionError, ParsePromotionError, Piece, Position, Promotion};
use derive_more::{Constructor, Display, Error};
use std::fmt;
use std::str::FromStr;

/// The characteristic of a [`Move`] that determines how it is performed and reversed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum MoveKind {
    Standard,
    /// The king moves two squares towards a rook, which jumps over it.
    Castle,
    /// A pawn captures another that just advanced two squares past it.
    EnPassant,
    /// A pawn reached the far row and awaits the choice of a piece.
    NeedsPromotion,
    /// A pawn reached the far row and was promoted.
    Promotion(Promotion),
}

/// A chess move.
///
/// Carries the captured piece, if any, so that it can be reversed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Move {
    origin: Position,
    destination: Position,
    capture: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// The source [`Position`].
    #[inline(always)]
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// The destination [`Position`].
    #[inline(always)]
    pub fn destination(&self) -> Position {
        self.destination
    }

    /// The [`Piece`] captured, if any.
    #[inline(always)]
    pub fn capture(&self) -> Option<Piece> {
        self.capture
    }

    /// The [`MoveKind`].
    #[inline(always)]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Whether this move takes a pawn to the far row.
    #[inline(always)]
    pub fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::NeedsPromotion | MoveKind::Promotion(_))
    }

    /// The [`Promotion`] specifier, if one was chosen.
    #[inline(always)]
    pub fn promotion(&self) -> Option<Promotion> {
        match self.kind {
            MoveKind::Promotion(p) => Some(p),
            _ => None,
        }
    }

    /// This move with the [`Promotion`] chosen.
    ///
    /// # Panics
    ///
    /// Panics if this move does not take a pawn to the far row.
    pub fn promoted(&self, p: Promotion) -> Self {
        assert!(self.is_promotion(), "move `{self}` is not a promotion");
        Move {
            kind: MoveKind::Promotion(p),
            ..*self
        }
    }

    /// This move's [`Coordinates`].
    #[inline(always)]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates(self.origin, self.destination, self.promotion())
    }
}

impl fmt::Display for Move {
    /// Formats the move in pure coordinate notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coordinates(), f)
    }
}

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Coordinates(pub Position, pub Position, pub Option<Promotion>);

impl Coordinates {
    /// Whether these coordinates designate a [`Move`].
    ///
    /// A missing promotion matches any promotion that is yet to be chosen.
    pub fn matches(&self, m: &Move) -> bool {
        self.0 == m.origin()
            && self.1 == m.destination()
            && match (self.2, m.kind()) {
                (None, _) => true,
                (Some(p), MoveKind::Promotion(q)) => p == q,
                (Some(_), MoveKind::NeedsPromotion) => true,
                (Some(_), _) => false,
            }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)?;
        if let Some(p) = self.2 {
            write!(f, "{p}")?;
        }

        Ok(())
    }
}

/// The reason why parsing [`Coordinates`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseCoordinatesError {
    #[display(fmt = "failed to parse move, expected `<origin><destination>[promotion]`")]
    InvalidSyntax,
    #[display(fmt = "failed to parse the origin of the move")]
    InvalidOrigin(ParsePositionError),
    #[display(fmt = "failed to parse the destination of the move")]
    InvalidDestination(ParsePositionError),
    #[display(fmt = "failed to parse the promotion of the move")]
    InvalidPromotion(ParsePromotionError),
}

impl FromStr for Coordinates {
    type Err = ParseCoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (Some(origin), Some(destination), Some(promotion)) =
            (s.get(..2), s.get(2..4), s.get(4..))
        else {
            return Err(ParseCoordinatesError::InvalidSyntax);
        };

        let origin = origin
            .parse()
            .map_err(ParseCoordinatesError::InvalidOrigin)?;

        let destination = destination
            .parse()
            .map_err(ParseCoordinatesError::InvalidDestination)?;

        let promotion = match promotion {
            "" => None,
            p => Some(p.parse().map_err(ParseCoordinatesError::InvalidPromotion)?),
        };

        Ok(Coordinates(origin, destination, promotion))
    }
}

/// Represents a [`Move`] that is illegal in the current position.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "move `{_0}` is illegal in this position")]
pub struct IllegalMove(#[error(not(source))] pub Coordinates);

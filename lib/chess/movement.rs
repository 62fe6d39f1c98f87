use crate::chess::{Bitboard, Board, Color, Direction, Game, Move, MoveKind, Piece, Position, Role};
use arrayvec::ArrayVec;

mod king;
mod knight;
mod pawn;
mod slider;

pub use king::castle_rook;

/// The pseudo-legal moves of a single piece.
///
/// A queen in the middle of an empty board has the most, 27.
pub type Moves = ArrayVec<Move, 27>;

impl Piece {
    /// The [`Position`]s this piece attacks from `origin`.
    ///
    /// Positions held by pieces of the same [`Color`] are never included,
    /// and whether moving there would expose the king is not considered.
    pub fn threatened_positions(&self, origin: Position, game: &Game) -> Bitboard {
        let board = game.board();
        match self.role() {
            Role::Pawn => pawn::threats(self.color(), origin, board),
            Role::Knight => knight::threats(self.color(), origin, board),
            Role::Bishop => slider::threats(self.color(), origin, board, &Direction::DIAGONAL),
            Role::Rook => slider::threats(self.color(), origin, board, &Direction::ORTHOGONAL),
            Role::Queen => slider::threats(self.color(), origin, board, &Direction::ALL),
            Role::King => king::threats(self.color(), origin, board),
        }
    }

    /// The moves this piece could make from `origin`, regardless of whether
    /// they would leave its own king in check.
    pub fn possible_moves(&self, origin: Position, game: &Game) -> Moves {
        match self.role() {
            Role::Pawn => pawn::moves(self.color(), origin, game),
            Role::King => king::moves(self.color(), origin, game),
            _ => captures(origin, self.threatened_positions(origin, game), game.board()),
        }
    }
}

/// A standard move to every threatened position, capturing whatever stands there.
fn captures(origin: Position, targets: Bitboard, board: &Board) -> Moves {
    targets
        .into_iter()
        .map(|p| Move::new(origin, p, board[p], MoveKind::Standard))
        .collect()
}

/// Whether the position holds a piece of the given [`Color`].
#[inline(always)]
fn is_held_by(board: &Board, p: Position, c: Color) -> bool {
    board[p].is_some_and(|piece| piece.color() == c)
}

use super::{is_held_by, Moves};
use crate::chess::{Bitboard, Board, Color, DirectedPosition, Game, Move, MoveKind};
use crate::chess::{Perspective, Piece, Position, Role, Row};

/// The two forward diagonals, unless held by a piece of the same color.
pub fn threats(c: Color, origin: Position, board: &Board) -> Bitboard {
    let dp = DirectedPosition::new(origin, c);
    [dp.front_left(), dp.front_right()]
        .into_iter()
        .flatten()
        .filter(|&p| !is_held_by(board, p, c))
        .collect()
}

pub fn moves(c: Color, origin: Position, game: &Game) -> Moves {
    let board = game.board();
    let dp = DirectedPosition::new(origin, c);
    let far = Row::Eighth.perspective(c);
    let advance = |p: Position, capture| {
        let kind = if p.row() == far {
            MoveKind::NeedsPromotion
        } else {
            MoveKind::Standard
        };

        Move::new(origin, p, capture, kind)
    };

    let mut moves = Moves::new();

    if let Some(front) = dp.front().filter(|&p| board[p].is_none()) {
        moves.push(advance(front, None));

        if origin.row() == Row::Second.perspective(c) {
            let double = DirectedPosition::new(front, c).front();
            if let Some(double) = double.filter(|&p| board[p].is_none()) {
                moves.push(Move::new(origin, double, None, MoveKind::Standard));
            }
        }
    }

    for p in [dp.front_left(), dp.front_right()].into_iter().flatten() {
        if let Some(piece) = board[p].filter(|piece| piece.color() != c) {
            moves.push(advance(p, Some(piece)));
        }
    }

    if let Some(target) = en_passant(c, origin, game) {
        if let Some(destination) = DirectedPosition::new(target, c).front() {
            let capture = Some(Piece(!c, Role::Pawn));
            moves.push(Move::new(origin, destination, capture, MoveKind::EnPassant));
        }
    }

    moves
}

/// The position of the opposing pawn that can be captured en passant, if any.
///
/// Only a pawn that just advanced two squares, landing beside this one, qualifies.
fn en_passant(c: Color, origin: Position, game: &Game) -> Option<Position> {
    let last = game.history().last()?;
    let target = last.destination();

    let is_pawn = game.board()[target] == Some(Piece(!c, Role::Pawn));
    let is_double_push = last.origin().row() == Row::Second.perspective(!c)
        && target.row() - last.origin().row() == 2 * (!c).forward()
        && last.origin().rank() == target.rank();

    let is_beside = target.row() == origin.row() && (target.rank() - origin.rank()).abs() == 1;

    (is_pawn && is_double_push && is_beside).then_some(target)
}

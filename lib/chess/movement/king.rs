use super::{captures, is_held_by, Moves};
use crate::chess::{Bitboard, Board, Color, DirectedPosition, Direction, Game, Move, MoveKind};
use crate::chess::{Perspective, Piece, Position, Rank, Role};

pub fn threats(c: Color, origin: Position, board: &Board) -> Bitboard {
    let dp = DirectedPosition::new(origin, c);
    Direction::ALL
        .into_iter()
        .filter_map(|d| dp.step(d))
        .map(Position::from)
        .filter(|&p| !is_held_by(board, p, c))
        .collect()
}

pub fn moves(c: Color, origin: Position, game: &Game) -> Moves {
    let board = game.board();
    let mut moves = captures(origin, threats(c, origin, board), board);

    if origin == Position::E1.perspective(c) && !has_moved(origin, game) {
        // Computed at most once, and only if needed.
        let mut threatened = None;
        for corner in [Position::A1, Position::H1] {
            let corner = corner.perspective(c);
            if board[corner] != Some(Piece(c, Role::Rook)) || has_moved(corner, game) {
                continue;
            }

            let towards = if corner.rank() < origin.rank() {
                Direction::Left
            } else {
                Direction::Right
            };

            let ray = DirectedPosition::new(origin, Color::White).spaces(towards);
            let mut between = ray.iter().take_while(|&&p| p != corner);
            if between.any(|&p| board[p].is_some()) {
                continue;
            }

            let path: Bitboard = [origin].into_iter().chain(ray.iter().copied().take(2)).collect();
            let attacked = threatened.get_or_insert_with(|| game.threatened(!c));
            if !(path & *attacked).is_empty() {
                continue;
            }

            moves.push(Move::new(origin, ray[1], None, MoveKind::Castle));
        }
    }

    moves
}

/// Whether any move in the history originated from this position.
fn has_moved(p: Position, game: &Game) -> bool {
    game.history().iter().any(|m| m.origin() == p)
}

/// The origin and destination of the rook that accompanies a castling king.
pub fn castle_rook(m: &Move) -> (Position, Position) {
    let row = m.origin().row();
    if m.origin().rank() < m.destination().rank() {
        (Position::new(Rank::H, row), Position::new(Rank::F, row))
    } else {
        (Position::new(Rank::A, row), Position::new(Rank::D, row))
    }
}

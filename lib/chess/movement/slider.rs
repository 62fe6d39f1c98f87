use crate::chess::{Bitboard, Board, Color, DirectedPosition, Direction, Position};

/// Walks every ray up to and including the first occupied square,
/// which is kept only if it holds an enemy piece.
pub fn threats(c: Color, origin: Position, board: &Board, directions: &[Direction]) -> Bitboard {
    let mut threats = Bitboard::empty();

    for &d in directions {
        for p in DirectedPosition::new(origin, c).spaces(d) {
            match board[p] {
                None => threats = threats.with(p),
                Some(piece) => {
                    if piece.color() != c {
                        threats = threats.with(p);
                    }

                    break;
                }
            }
        }
    }

    threats
}

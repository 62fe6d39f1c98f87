use super::is_held_by;
use crate::chess::{Bitboard, Board, Color, Position};

const JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn threats(c: Color, origin: Position, board: &Board) -> Bitboard {
    JUMPS
        .into_iter()
        .filter_map(|(ranks, rows)| origin.offset(ranks, rows))
        .filter(|&p| !is_held_by(board, p, c))
        .collect()
}

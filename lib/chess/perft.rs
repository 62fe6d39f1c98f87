use crate::chess::{Game, Move, MoveKind, Promotion};
use arrayvec::ArrayVec;
use rayon::prelude::*;

impl Game {
    /// The legal moves of the side to move, with pending promotions
    /// expanded into every [`Promotion`].
    pub fn expanded_moves(&self) -> Vec<Move> {
        self.current_moves()
            .into_iter()
            .flat_map(|m| {
                let mut moves = ArrayVec::<Move, 4>::new();
                match m.kind() {
                    MoveKind::NeedsPromotion => moves.extend(Promotion::ALL.map(|p| m.promoted(p))),
                    _ => moves.push(m),
                }

                moves
            })
            .collect()
    }

    /// Counts the leaf nodes of the legal move tree `depth` plies deep, also known as [perft].
    ///
    /// [perft]: https://www.chessprogramming.org/Perft
    pub fn perft(&self, depth: usize) -> usize {
        match depth {
            0 => 1,
            1 => self.expanded_moves().len(),
            _ => self
                .expanded_moves()
                .into_par_iter()
                .map(|m| self.performing(m).perft(depth - 1))
                .sum(),
        }
    }
}

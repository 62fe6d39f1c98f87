use crate::chess::{Game, Move};

mod greedy;

pub use greedy::*;

/// Trait for types that know how to pick a [`Move`] in a [`Game`].
pub trait Ai {
    /// Picks one of the legal moves of the side to move.
    ///
    /// # Panics
    ///
    /// May panic if there is no legal move to pick.
    fn next_move(&self, game: &Game) -> Move;
}

use crate::chess::{Color, Game, Move};
use derive_more::Display;
use tracing::instrument;

/// The standing of one side in a [`Game`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum State {
    #[display(fmt = "none")]
    None,
    #[display(fmt = "check")]
    Check,
    #[display(fmt = "checkmate")]
    Checkmate,
    #[display(fmt = "stalemate")]
    Stalemate,
}

impl State {
    /// Whether the game is over.
    #[inline(always)]
    pub fn is_final(&self) -> bool {
        matches!(self, State::Checkmate | State::Stalemate)
    }
}

/// Whether the king of `team` is threatened by the opponent.
#[inline(always)]
fn is_exposed(team: Color, game: &Game) -> bool {
    game.threatened(!team).contains(game.king(team))
}

/// The [`State`] of `team`.
///
/// If it is not `team`'s turn, a threatened king can't be saved and the game is lost.
/// Otherwise, the outcome depends on whether any move leaves the king safe.
#[instrument(level = "trace", skip(game), ret)]
pub fn state(team: Color, game: &Game) -> State {
    let threatened = is_exposed(team, game);

    if game.turn() != team {
        return if threatened {
            State::Checkmate
        } else {
            State::None
        };
    }

    let can_escape = game
        .all_moves(team)
        .into_iter()
        .any(|m| !is_exposed(team, &game.performing(m)));

    match (threatened, can_escape) {
        (true, true) => State::Check,
        (false, true) => State::None,
        (true, false) => State::Checkmate,
        (false, false) => State::Stalemate,
    }
}

/// The `candidates` that don't leave the mover's own king threatened, in the same order.
///
/// # Panics
///
/// Panics if the origin of a candidate is empty.
#[instrument(level = "trace", skip(candidates, game))]
pub fn valid_moves(candidates: impl IntoIterator<Item = Move>, game: &Game) -> Vec<Move> {
    candidates
        .into_iter()
        .filter(|&m| match game.board()[m.origin()] {
            Some(piece) => !is_exposed(piece.color(), &game.performing(m)),
            None => panic!("no piece to move at `{}`", m.origin()),
        })
        .collect()
}

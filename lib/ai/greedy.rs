use super::Ai;
use crate::chess::{Color, Game, Move};
use derive_more::Constructor;
use tracing::{debug, instrument};

/// The most valuable pieces each side has under attack.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
struct Scenario {
    /// Value of the most valuable piece threatened by the side to evaluate.
    ours: i16,
    /// Value of the most valuable piece threatened by the opponent.
    theirs: i16,
}

impl Scenario {
    fn new(team: Color, game: &Game) -> Self {
        Scenario {
            ours: most_valuable_threatened(team, game),
            theirs: most_valuable_threatened(!team, game),
        }
    }

    fn threat_score(&self) -> i16 {
        self.ours - self.theirs
    }
}

/// The value of the most valuable piece `team` threatens, or zero.
fn most_valuable_threatened(team: Color, game: &Game) -> i16 {
    game.threatened(team)
        .into_iter()
        .filter_map(|p| game.board()[p])
        .map(|piece| piece.value())
        .max()
        .unwrap_or(0)
}

/// How a move fares, compared lexicographically.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Score {
    exchange_ratio: i16,
    threat_score: i16,
}

/// A one-ply opponent that favors material.
///
/// Every legal move is scored by what it captures net of what it leaves en prise,
/// then by how much it improves the balance of threats.
/// The first move with the best score is picked.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
pub struct Greedy {}

impl Greedy {
    fn score(&self, m: Move, before: &Scenario, game: &Game) -> Score {
        let team = game.turn();
        let after = Scenario::new(team, &game.performing(m));
        let captured = m.capture().map_or(0, |piece| piece.value());

        Score {
            exchange_ratio: captured - after.theirs,
            threat_score: after.threat_score() - before.threat_score(),
        }
    }
}

impl Ai for Greedy {
    /// # Panics
    ///
    /// Panics if the side to move has no legal moves.
    #[instrument(level = "trace", skip(self, game), fields(%game))]
    fn next_move(&self, game: &Game) -> Move {
        let before = Scenario::new(game.turn(), game);

        let best = game
            .current_moves()
            .into_iter()
            .map(|m| (self.score(m, &before, game), m))
            .reduce(|best, next| if next.0 > best.0 { next } else { best });

        match best {
            Some((score, m)) => {
                debug!(
                    %m,
                    exchange_ratio = score.exchange_ratio,
                    threat_score = score.threat_score
                );
                m
            }

            None => panic!("no legal moves in `{game}`"),
        }
    }
}

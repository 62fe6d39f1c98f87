use anyhow::Error as Anyhow;
use clap::{Args, Subcommand};
use derive_more::{Display, Error, From};
use lib::chess::{Board, Color, Coordinates, Game, MoveKind};

mod analyze;
mod perft;
mod play;

#[derive(From, Subcommand)]
pub enum Applet {
    Analyze(analyze::Analyze),
    Perft(perft::Perft),
    Play(play::Play),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Analyze(a) => Ok(a.execute()?),
            Applet::Perft(a) => Ok(a.execute()?),
            Applet::Play(a) => Ok(a.execute()?),
        }
    }
}

/// The game an applet starts from.
#[derive(Debug, Clone, Args)]
pub struct Setup {
    /// The starting board, as the piece placement field of FEN.
    #[clap(short, long, default_value_t = Board::standard())]
    board: Board,

    /// The side to move first.
    #[clap(short = 's', long, default_value_t = Color::White)]
    turn: Color,

    /// Moves to replay, in pure coordinate notation.
    moves: Vec<Coordinates>,
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            board: Board::standard(),
            turn: Color::White,
            moves: Vec::new(),
        }
    }
}

/// A replayed move that leaves a promotion pending.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "move `{_0}` needs a promotion, as in `{_0}q`")]
pub struct PendingPromotion(#[error(not(source))] Coordinates);

impl Setup {
    /// Replays the moves from the starting board.
    ///
    /// Every move that reaches the far row must name its promotion.
    pub fn game(&self) -> Result<Game, Anyhow> {
        let mut game = Game::try_new(self.board, self.turn)?;
        for &c in &self.moves {
            game = game.play(c)?;
            if game.history().last().map(|m| m.kind()) == Some(MoveKind::NeedsPromotion) {
                return Err(PendingPromotion(c).into());
            }
        }

        Ok(game)
    }
}

use super::Setup;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::ai::{Ai, Greedy};
use tracing::{info, instrument};

/// Replays a game and reports on the position it leads to.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Analyze {
    #[clap(flatten)]
    setup: Setup,
}

impl Analyze {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = self.setup.game()?;
        let state = game.state();
        let moves = game.current_moves();

        if state.is_final() {
            info!(turn = %game.turn(), %state, moves = moves.len());
        } else {
            let suggestion = Greedy::new().next_move(&game);
            info!(turn = %game.turn(), %state, moves = moves.len(), %suggestion);
        }

        println!("{game}");

        Ok(())
    }
}

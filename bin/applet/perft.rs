use super::Setup;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::time::Instant;
use tracing::{info, instrument};

/// Counts the leaf nodes of the legal move tree.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Perft {
    /// How many plies deep to count.
    depth: usize,

    #[clap(flatten)]
    setup: Setup,
}

impl Perft {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = self.setup.game()?;
        let timer = Instant::now();
        let nodes = game.perft(self.depth);
        let elapsed = timer.elapsed();

        info!(
            depth = self.depth,
            nodes,
            ?elapsed,
            nps = (nodes as f64 / elapsed.as_secs_f64()) as u64,
        );

        println!("{nodes}");

        Ok(())
    }
}

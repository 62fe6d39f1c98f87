use super::Setup;
use anyhow::Error as Anyhow;
use clap::Parser;
use derive_more::{Display, Error, From};
use lib::ai::{Ai, Greedy};
use lib::chess::{MoveKind, Promotion};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::{info, instrument};

/// Configuration for greedy self-play.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename = "config", default)]
pub struct SelfPlayConfig {
    /// The maximum number of plies to play.
    #[cfg_attr(test, strategy(0usize..=1000))]
    pub plies: usize,

    /// The piece every pawn that reaches the far row is promoted to.
    #[cfg_attr(test, strategy(proptest::sample::select(Promotion::ALL.to_vec())))]
    pub promotion: Promotion,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            plies: 200,
            promotion: Promotion::default(),
        }
    }
}

impl fmt::Display for SelfPlayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`SelfPlayConfig`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse self-play configuration")]
pub struct ParseSelfPlayConfigError(ron::de::SpannedError);

impl FromStr for SelfPlayConfig {
    type Err = ParseSelfPlayConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

/// The greedy opponent plays against itself.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The self-play configuration.
    #[clap(short, long, default_value_t)]
    config: SelfPlayConfig,

    #[clap(flatten)]
    setup: Setup,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let ai = Greedy::new();
        let mut game = self.setup.game()?;

        for ply in 0..self.config.plies {
            let state = game.state();
            if state.is_final() {
                info!(ply, turn = %game.turn(), %state);
                break;
            }

            let m = ai.next_move(&game);
            game = game.performing(m);
            if m.kind() == MoveKind::NeedsPromotion {
                game = game.promoting(self.config.promotion);
            }

            info!(ply, %m, %game);
        }

        for m in game.history() {
            print!("{m} ");
        }

        println!();

        Ok(())
    }
}

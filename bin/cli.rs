use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use rayon::ThreadPoolBuilder;
use std::{cmp::min, io::stderr, num::NonZeroUsize};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Plays, replays and counts games of chess.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level of the logs written to stderr.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// How many threads may explore the move tree in parallel.
    ///
    /// Defaults to one per logical core.
    #[clap(short, long)]
    threads: Option<NonZeroUsize>,

    /// What to do, greedy self-play from the starting position if omitted.
    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// Logs from this crate at the chosen verbosity, everything else at most at `WARN`.
    fn install_subscriber(&self) {
        let targets = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let pretty = layer()
            .pretty()
            .with_thread_names(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(targets).with(pretty).init();
    }

    fn configure_thread_pool(&self) -> Result<(), Anyhow> {
        let Some(threads) = self.threads else {
            return Ok(());
        };

        ThreadPoolBuilder::new()
            .num_threads(threads.get())
            .thread_name(|i| format!("perft-{i}"))
            .build_global()?;

        Ok(())
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.install_subscriber();
        self.configure_thread_pool()?;
        self.applet.unwrap_or_default().execute()
    }
}

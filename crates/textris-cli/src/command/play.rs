use std::io;

use anyhow::Context as _;
use textris_engine::{Game, PieceSeed, PlayOutcome};
use tracing::info;

use crate::terminal::Terminal;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the piece sequence, as 32 hexadecimal digits
    #[clap(long)]
    pub(crate) seed: Option<PieceSeed>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { seed } = arg;

    let mut game = match seed {
        Some(seed) => {
            info!(%seed, "using fixed seed");
            Game::with_seed(*seed)
        }
        None => Game::new(),
    };

    let mut input = io::stdin().lock();
    let mut terminal = Terminal::stdout();
    let outcome = game
        .play(&mut input, &mut terminal)
        .context("Failed to run the game on the terminal")?;
    if outcome == PlayOutcome::InputClosed {
        info!("input closed before the game ended");
    }
    Ok(())
}

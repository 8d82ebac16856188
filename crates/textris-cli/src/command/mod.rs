use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::logging;

use self::play::PlayArg;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    play: PlayArg,
    /// Write logs to this file; nothing is logged when omitted
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Maximum level of logged events
    #[clap(long, default_value_t = Level::INFO)]
    log_level: Level,
}

pub fn run() -> anyhow::Result<()> {
    let CommandArgs {
        play,
        log_file,
        log_level,
    } = CommandArgs::parse();

    if let Some(path) = &log_file {
        logging::init(path, log_level)?;
    }
    play::run(&play)
}

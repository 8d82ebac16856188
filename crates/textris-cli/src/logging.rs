use std::{fs::File, path::Path, sync::Mutex};

use anyhow::Context as _;
use tracing::Level;

/// Sends log events to `path`.
///
/// The terminal shows the game itself, so logs never go to stdout or stderr.
pub(crate) fn init(path: &Path, level: Level) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

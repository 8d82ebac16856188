mod command;
mod logging;
mod terminal;

fn main() -> anyhow::Result<()> {
    command::run()
}

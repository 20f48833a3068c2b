#![forbid(unsafe_code)]

//! `counter` binary.

use anyhow::Context;

use counter_widget::app;
use counter_widget::cli::{Cli, Command};
use counter_widget::config::Config;
use counter_widget::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::resolve(&cli).context("failed to load configuration")?;
    logging::init(&config, cli.is_interactive()).context("failed to set up logging")?;

    match &cli.command {
        Some(Command::Render(args)) => {
            let output = app::render_headless(&config, args)?;
            println!("{output}");
        }
        None => {
            let widget = app::run_interactive(&config).context("counter exited with an error")?;
            println!("Final count: {}", widget.state().counter());
        }
    }

    Ok(())
}

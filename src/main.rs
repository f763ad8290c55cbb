// Entrypoint: parse arguments, set up logging, build the HTTP client and
// run once. Cancelling at the prompt is a clean exit; any error exits 1.

use std::io;
use std::process;

use clap::Parser;
use minijs::api::MinifierClient;
use minijs::app::{self, RunOutcome};
use minijs::cli::Cli;
use minijs::ui::ConsolePrompter;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let client = MinifierClient::new(cli.endpoint.clone())?;
    tracing::debug!(endpoint = client.endpoint(), "minifier client ready");
    let mut prompter = ConsolePrompter;
    let stdout = io::stdout();

    match app::run(&cli.run_options(), &mut prompter, &client, &mut stdout.lock())? {
        RunOutcome::Written { output } => tracing::debug!(output = %output.display(), "done"),
        RunOutcome::Cancelled => tracing::debug!("nothing written"),
    }
    Ok(())
}

// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, load settings, run the command.
// - Returns `anyhow::Result` so fatal errors exit non-zero with a message.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dp_request_cli::{command, Console, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dp-request")]
#[command(author, version, about = "Administrative commands for the DP API", long_about = None)]
struct Cli {
    /// Read configuration from this env file instead of ./.env
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send a POST request to the configured API_URL with API_CREDENTIALS
    SendRequest,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.env_file.as_deref()).context("failed to load settings")?;

    match cli.command {
        Commands::SendRequest => {
            let outcome = command::handle(
                &settings,
                Console::detect(),
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            tracing::debug!(?outcome, "send-request finished");
        }
    }
    Ok(())
}

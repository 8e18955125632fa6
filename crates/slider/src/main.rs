mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose, cli.global.quiet);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8, quiet: bool) {
    let filter = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(mut cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands must work even when the config itself is broken
        Command::Config(args) => commands::config_cmd::handle(&args, &mut cli.global),

        // Offline: needs presentation settings only, never the feed config
        Command::Decode(args) => {
            config::resolve_presentation_lenient(&mut cli.global);
            commands::decode::handle(&args, &cli.global)
        }

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "slider", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let catalog_config = config::resolve(&mut cli.global)?;
            tracing::debug!(command = ?cmd, endpoint = %catalog_config.endpoint, "dispatching command");
            commands::dispatch(cmd, &cli.global, &catalog_config).await
        }
    }
}

//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &mut GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let mut cfg = config::load_config()?;
            config::apply_overrides(&mut cfg, global);
            config::resolve_presentation(global, &cfg)?;

            let out = output::render_single(
                &global.output_format(),
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_default(),
                |c| c.feed.endpoint.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }
            let path = config::save_config(&Config::default())?;
            if !global.quiet {
                eprintln!("Wrote default config to {}", path.display());
            }
            Ok(())
        }
    }
}

//! Command dispatch: loads the catalog and routes to per-command handlers.

pub mod categories;
pub mod config_cmd;
pub mod decode;
pub mod products;
pub mod show;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use slider_core::{Catalog, CatalogConfig, LoadOutcome};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Route a catalog-backed command to its handler.
pub async fn dispatch(
    cmd: Command,
    global: &GlobalOpts,
    config: &CatalogConfig,
) -> Result<(), CliError> {
    match cmd {
        Command::Categories(args) => {
            let Some(mut catalog) = load_catalog(global, config).await? else {
                return Ok(());
            };
            categories::handle(&mut catalog, &args, global)
        }
        Command::Products(args) => {
            let Some(mut catalog) = load_catalog(global, config).await? else {
                return Ok(());
            };
            products::handle(&mut catalog, &args, global)
        }
        Command::Show(args) => {
            let Some(mut catalog) = load_catalog(global, config).await? else {
                return Ok(());
            };
            show::handle(&mut catalog, &args, global)
        }

        // Handled in main before config resolution
        Command::Config(_) | Command::Completions(_) | Command::Decode(_) => unreachable!(),
    }
}

/// Load the feed from `--file` or the network and install it.
///
/// Returns `None` when the feed reported a non-success status and the
/// empty-state notice was printed instead (`--strict` turns that into an
/// error).
async fn load_catalog(
    global: &GlobalOpts,
    config: &CatalogConfig,
) -> Result<Option<Catalog>, CliError> {
    let mut catalog = Catalog::new(config)?;

    let outcome = if let Some(ref path) = global.file {
        debug!(path = %path.display(), "loading feed from file");
        let raw = read_payload(path)?;
        catalog.load_bytes(&raw)?
    } else {
        let pb = output::spinner(global, &format!("Fetching {}", catalog.endpoint()));
        let result = catalog.refresh().await;
        pb.finish_and_clear();
        result?
    };

    match outcome {
        LoadOutcome::Loaded { .. } => Ok(Some(catalog)),
        LoadOutcome::NoData { status } if global.strict => Err(CliError::NoData { status }),
        LoadOutcome::NoData { status } => {
            if !global.quiet {
                eprintln!("No products to show (feed status: {status})");
            }
            Ok(None)
        }
    }
}

/// Read a payload from `path`, or stdin when `path` is `-`.
pub(crate) fn read_payload(path: &Path) -> Result<Vec<u8>, CliError> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read(path)?)
}

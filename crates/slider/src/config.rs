//! CLI configuration: a thin layer over `slider_config`.
//!
//! Loads the shared file + env config and applies `GlobalOpts` flag
//! overrides (`--endpoint`, `--image-base`, `--timeout`, `--insecure`,
//! `--output`, `--color`) on top.

use clap::ValueEnum;
use tracing::warn;

use slider_core::CatalogConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use slider_config::{Config, config_path, load_config, load_config_or_default, save_config};

/// Apply flag overrides to a loaded config. Flags win over file and env.
pub fn apply_overrides(cfg: &mut Config, global: &GlobalOpts) {
    if let Some(ref endpoint) = global.endpoint {
        cfg.feed.endpoint.clone_from(endpoint);
    }
    if let Some(ref base) = global.image_base {
        cfg.feed.image_base_url.clone_from(base);
    }
    if let Some(timeout) = global.timeout {
        cfg.feed.timeout = timeout;
    }
    if global.insecure {
        cfg.feed.insecure = true;
    }
}

/// Fill unset presentation flags from `[defaults]`.
pub fn resolve_presentation(global: &mut GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    if global.output.is_none() {
        global.output = Some(parse_value::<OutputFormat>(
            "defaults.output",
            &cfg.defaults.output,
        )?);
    }
    if global.color.is_none() {
        global.color = Some(parse_value::<ColorMode>("defaults.color", &cfg.defaults.color)?);
    }
    Ok(())
}

/// Presentation-only resolution for offline commands.
///
/// An unreadable config file or a bad `[defaults]` value is logged and
/// skipped; flags still apply and the rest falls back to table/auto.
pub fn resolve_presentation_lenient(global: &mut GlobalOpts) {
    let cfg = load_config_or_default();
    if let Err(e) = resolve_presentation(global, &cfg) {
        warn!(error = %e, "ignoring config presentation defaults");
    }
}

/// Load config (file + env), apply flags, and build the runtime config.
pub fn resolve(global: &mut GlobalOpts) -> Result<CatalogConfig, CliError> {
    let mut cfg = load_config()?;
    apply_overrides(&mut cfg, global);
    resolve_presentation(global, &cfg)?;
    Ok(cfg.to_catalog_config()?)
}

fn parse_value<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("unsupported value '{raw}'"),
    })
}

//! Shared configuration for the slider CLI.
//!
//! A TOML file in the platform config directory, layered with `SLIDER_*`
//! environment variables, translated into `slider_core::CatalogConfig`.
//! The CLI adds flag overrides on top.
//!
//! Nested keys use a double underscore in the environment:
//! `SLIDER_FEED__ENDPOINT`, `SLIDER_FEED__IMAGE_BASE_URL`,
//! `SLIDER_DEFAULTS__OUTPUT`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use slider_core::{CatalogConfig, DEFAULT_FEED_URL, DEFAULT_IMAGE_BASE_URL, TlsVerification};

/// Environment variable that points at an alternate config file.
pub const CONFIG_PATH_ENV: &str = "SLIDER_CONFIG";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Presentation defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Where and how to fetch the feed.
    #[serde(default)]
    pub feed: FeedSettings,
}

impl Config {
    /// Shorthand for `self.feed.to_catalog_config()`.
    pub fn to_catalog_config(&self) -> Result<CatalogConfig, ConfigError> {
        self.feed.to_catalog_config()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// Feed endpoint settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeedSettings {
    /// Full feed URL, including the `action` query flag.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Host that product image paths are relative to.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Accept invalid TLS certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            image_base_url: default_image_base_url(),
            timeout: default_timeout(),
            insecure: false,
            ca_cert: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_FEED_URL.into()
}
fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}

impl FeedSettings {
    /// Translate into the runtime config `slider-core` consumes.
    pub fn to_catalog_config(&self) -> Result<CatalogConfig, ConfigError> {
        let endpoint = parse_url("endpoint", &self.endpoint)?;
        let image_base_url = parse_url("image_base_url", &self.image_base_url)?;

        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        let tls = if self.insecure {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.ca_cert {
            TlsVerification::CustomCa(ca_path.clone())
        } else {
            TlsVerification::SystemDefaults
        };

        Ok(CatalogConfig {
            endpoint,
            image_base_url,
            timeout: Duration::from_secs(self.timeout),
            tls,
        })
    }
}

fn parse_url(field: &str, raw: &str) -> Result<url::Url, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL: {raw}"),
    })
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `$SLIDER_CONFIG`, else the platform
/// config directory.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    ProjectDirs::from("ru", "vodovoz", "slider").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("slider");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load Config from `path` (missing file is fine) + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SLIDER_").ignore(&["CONFIG"]).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

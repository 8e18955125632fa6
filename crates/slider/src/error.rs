//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use slider_config::ConfigError;
use slider_core::{CoreError, DecodeError, SelectionError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const DECODE: i32 = 9;
    pub const NO_DATA: i32 = 10;
}

#[derive(Debug, Error, Diagnostic)]
#[allow(unused_assignments)]
pub enum CliError {
    // ── Network ──────────────────────────────────────────────────────
    #[error("Could not reach the feed at {url}")]
    #[diagnostic(
        code(slider::connection_failed),
        help(
            "Check your network connection and the feed URL.\n\
             URL: {url}\n\
             Override it with --endpoint or SLIDER_ENDPOINT."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Feed request timed out")]
    #[diagnostic(
        code(slider::timeout),
        help("Increase the timeout with --timeout <SECONDS> or feed.timeout in the config.")
    )]
    Timeout,

    #[error("Feed endpoint returned HTTP {status}")]
    #[diagnostic(code(slider::http_error), help("{message}"))]
    Http { status: u16, message: String },

    // ── Data ─────────────────────────────────────────────────────────
    #[error("Could not decode the feed payload")]
    #[diagnostic(
        code(slider::decode_failed),
        help("The payload does not have the expected catalog shape. Try: slider decode <FILE>")
    )]
    Decode {
        #[source]
        source: DecodeError,
    },

    #[error("Feed reported status {status:?} and carries no data")]
    #[diagnostic(
        code(slider::no_data),
        help("The endpoint answered but has nothing to show. Retry later or drop --strict.")
    )]
    NoData { status: String },

    #[error("Category index {index} is out of range")]
    #[diagnostic(
        code(slider::category_not_found),
        help("The feed has {len} categories (indexes start at 0).\nRun: slider categories")
    )]
    CategoryOutOfRange { index: usize, len: usize },

    #[error("Invalid image path {path:?}")]
    #[diagnostic(code(slider::invalid_image_path), help("{reason}"))]
    InvalidImagePath { path: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(slider::validation))]
    Validation { field: String, reason: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(slider::config),
        help("Inspect the effective configuration with: slider config show")
    )]
    Config { message: String },

    #[error("Config file already exists at {path}")]
    #[diagnostic(
        code(slider::config_exists),
        help("Pass --force to overwrite it.")
    )]
    ConfigExists { path: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    #[diagnostic(code(slider::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Http { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Decode { .. } => exit_code::DECODE,
            Self::NoData { .. } => exit_code::NO_DATA,
            Self::CategoryOutOfRange { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ConfigExists { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Error mapping ────────────────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::Timeout => CliError::Timeout,

            CoreError::Http { status, message } => CliError::Http { status, message },

            CoreError::Decode(source) => CliError::Decode { source },

            CoreError::Selection(e) => e.into(),

            CoreError::InvalidImagePath { path, reason } => {
                CliError::InvalidImagePath { path, reason }
            }

            CoreError::Config { message } => CliError::Config { message },
        }
    }
}

impl From<SelectionError> for CliError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::IndexOutOfRange { index, len } => {
                CliError::CategoryOutOfRange { index, len }
            }
        }
    }
}

impl From<DecodeError> for CliError {
    fn from(source: DecodeError) -> Self {
        CliError::Decode { source }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}

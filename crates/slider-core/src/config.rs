// ── Runtime catalog configuration ──
//
// Describes where the feed lives and how to reach it. Core never reads
// config files; the CLI (via `slider-config`) builds a `CatalogConfig` and
// hands it in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::CoreError;
use crate::images::DEFAULT_IMAGE_BASE_URL;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification.
    DangerAcceptInvalid,
}

impl From<&TlsVerification> for slider_api::TlsMode {
    fn from(tls: &TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => Self::System,
            TlsVerification::CustomCa(path) => Self::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => Self::DangerAcceptInvalid,
        }
    }
}

/// Configuration for loading the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Full feed URL, including its query flag.
    pub endpoint: Url,
    /// Host that image paths are relative to.
    pub image_base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
    pub tls: TlsVerification,
}

impl CatalogConfig {
    /// Build a config from string URLs, validating both.
    pub fn from_urls(endpoint: &str, image_base_url: &str) -> Result<Self, CoreError> {
        let parse = |field: &str, raw: &str| {
            Url::parse(raw).map_err(|e| CoreError::Config {
                message: format!("invalid {field} {raw:?}: {e}"),
            })
        };
        Ok(Self {
            endpoint: parse("endpoint", endpoint)?,
            image_base_url: parse("image base URL", image_base_url)?,
            ..Self::default()
        })
    }

    pub(crate) fn transport(&self) -> slider_api::TransportConfig {
        slider_api::TransportConfig {
            tls: (&self.tls).into(),
            timeout: self.timeout,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(slider_api::DEFAULT_FEED_URL).expect("default feed URL is valid"),
            image_base_url: Url::parse(DEFAULT_IMAGE_BASE_URL)
                .expect("default image URL is valid"),
            timeout: Duration::from_secs(30),
            tls: TlsVerification::default(),
        }
    }
}

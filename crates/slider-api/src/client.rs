// Feed endpoint HTTP client
//
// Wraps `reqwest::Client` with the single GET the product slider needs.
// The body is handed back as raw bytes: decoding belongs to `slider-core`,
// so this module only cares about transport and HTTP status.

use bytes::Bytes;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// The production feed endpoint, including its fixed `action` flag.
pub const DEFAULT_FEED_URL: &str =
    "https://szorin.vodovoz.ru/newmobile/glavnaya/super_top.php?action=topglav";

/// Longest slice of an error body kept for diagnostics.
const BODY_PREVIEW_LEN: usize = 200;

/// Raw HTTP client for the product feed.
///
/// One endpoint, no authentication, no pagination. Every call issues a
/// fresh GET; there is no caching or retry at this layer.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl FeedClient {
    /// Create a client for `endpoint` from a `TransportConfig`.
    pub fn new(endpoint: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, endpoint })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Parse `endpoint` and build a client with default transport settings.
    pub fn from_url_str(endpoint: &str) -> Result<Self, Error> {
        let endpoint = Url::parse(endpoint)?;
        Self::new(endpoint, &TransportConfig::default())
    }

    /// The feed URL this client fetches.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the raw feed payload.
    ///
    /// Any 2xx response yields its body unchanged, whatever its content.
    /// Non-2xx responses become [`Error::Http`] with a short body preview.
    pub async fn fetch_feed_bytes(&self) -> Result<Bytes, Error> {
        debug!("GET {}", self.endpoint);

        let resp = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                body_preview: preview(&body),
            });
        }

        let body = resp.bytes().await.map_err(Error::Transport)?;
        trace!(len = body.len(), "feed body received");
        Ok(body)
    }
}

/// Cut `body` to at most `BODY_PREVIEW_LEN` bytes on a char boundary.
fn preview(body: &str) -> String {
    if body.len() <= BODY_PREVIEW_LEN {
        return body.to_owned();
    }
    let mut end = BODY_PREVIEW_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_owned()
}

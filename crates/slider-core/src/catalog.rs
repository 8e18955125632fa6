// ── Catalog facade ──
//
// Runs the load pipeline the presentation layer needs: fetch the payload,
// decode it, gate on the feed status, and only then hand the feed to the
// selection state. A failed or unsuccessful load leaves the previous state
// in place.

use tracing::{info, warn};

use slider_api::FeedClient;

use crate::config::CatalogConfig;
use crate::decode::decode;
use crate::error::{CoreError, SelectionError};
use crate::images::ImageResolver;
use crate::model::Feed;
use crate::selection::SelectionState;

/// Result of a load that got as far as a decoded feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The feed was installed; selection reset to the first category.
    Loaded { categories: usize, products: usize },
    /// The feed decoded but reported a non-success status. State untouched.
    NoData { status: String },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Owns the feed client, image resolver, and selection state.
///
/// Single-writer: `refresh` and `select_category` take `&mut self`. If two
/// refreshes are driven back to back the later one wins; nothing is merged.
#[derive(Debug)]
pub struct Catalog {
    client: FeedClient,
    images: ImageResolver,
    state: SelectionState,
}

impl Catalog {
    /// Build a catalog, constructing the HTTP client from `config`.
    pub fn new(config: &CatalogConfig) -> Result<Self, CoreError> {
        let client = FeedClient::new(config.endpoint.clone(), &config.transport())?;
        let images = ImageResolver::new(config.image_base_url.clone());
        Ok(Self::with_client(client, images))
    }

    /// Build a catalog around an existing client.
    pub fn with_client(client: FeedClient, images: ImageResolver) -> Self {
        Self {
            client,
            images,
            state: SelectionState::new(),
        }
    }

    /// Fetch, decode, and install the feed.
    pub async fn refresh(&mut self) -> Result<LoadOutcome, CoreError> {
        let body = self.client.fetch_feed_bytes().await?;
        self.load_bytes(&body)
    }

    /// Same pipeline as [`refresh`](Self::refresh), minus the network.
    pub fn load_bytes(&mut self, raw: &[u8]) -> Result<LoadOutcome, CoreError> {
        let feed = decode(raw)?;
        Ok(self.apply(feed))
    }

    /// Install `feed` if its status marks it as usable.
    pub fn apply(&mut self, feed: Feed) -> LoadOutcome {
        if !feed.is_success() {
            warn!(status = %feed.status, "feed reported no data; keeping current state");
            return LoadOutcome::NoData {
                status: feed.status,
            };
        }

        let outcome = LoadOutcome::Loaded {
            categories: feed.categories.len(),
            products: feed.product_count(),
        };
        info!(?outcome, "catalog loaded");
        self.state.initialize(feed);
        outcome
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn select_category(&mut self, index: usize) -> Result<(), SelectionError> {
        self.state.select_category(index)
    }

    pub fn images(&self) -> &ImageResolver {
        &self.images
    }

    pub fn endpoint(&self) -> &url::Url {
        self.client.endpoint()
    }
}

// slider-api: Async Rust client for the product slider feed endpoint

pub mod client;
pub mod error;
pub mod transport;

pub use client::{DEFAULT_FEED_URL, FeedClient};
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};

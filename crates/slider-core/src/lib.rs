//! Feed decoding and selection state for the product slider.
//!
//! This crate owns the domain model and the logic a presentation layer
//! builds on:
//!
//! - **[`decode()`]** turns the raw catalog payload into a [`Feed`]. It
//!   copes with the feed's encodings (price as a list of `{PRICE}` objects,
//!   photos as a `{VALUE: [...]}` wrapper, nullable fields) and reports
//!   every missing required field as a typed [`DecodeError`].
//!
//! - **[`SelectionState`]** holds the decoded feed and the active category.
//!   `active_categories()` / `active_products()` are the read side;
//!   `select_category()` is the only mutator.
//!
//! - **[`Catalog`]** runs fetch → decode → status gate → initialize on top
//!   of the `slider-api` client, returning a [`LoadOutcome`].
//!
//! - **[`ImageResolver`]** joins feed image paths onto the image host.
//!
//! - **[`wire`]** encodes a [`Feed`] back into the payload shape.

pub mod catalog;
pub mod config;
pub mod decode;
pub mod error;
pub mod images;
pub mod model;
pub mod selection;
pub mod wire;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{Catalog, LoadOutcome};
pub use config::{CatalogConfig, TlsVerification};
pub use decode::{decode, decode_str, decode_value};
pub use error::{CoreError, DecodeError, FieldContext, SelectionError};
pub use images::{DEFAULT_IMAGE_BASE_URL, ImageResolver};
pub use model::{Category, Feed, Product, SUCCESS_STATUS};
pub use selection::SelectionState;
pub use wire::{to_wire, to_wire_bytes};

pub use slider_api::DEFAULT_FEED_URL;

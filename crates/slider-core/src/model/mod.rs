// ── Domain model ──
//
// Strongly-typed values produced by the feed decoder. Field names here are
// the crate's own; the wire keys (`TOVARY`, `DETAIL_PICTURE`, ...) only
// appear in `decode` and `wire`.

pub mod category;
pub mod feed;
pub mod product;

pub use category::Category;
pub use feed::{Feed, SUCCESS_STATUS};
pub use product::Product;

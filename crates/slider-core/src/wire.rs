// ── Wire encoding ──
//
// The inverse of `decode`: renders a `Feed` back into the payload shape the
// endpoint serves. Used for fixtures and for `slider decode --wire`. Absent
// optional fields are omitted, and a price becomes a one-element
// `EXTENDED_PRICE` list.

use serde_json::{Map, Value, json};

use crate::decode::keys;
use crate::model::{Category, Feed, Product};

/// Encode `feed` as a JSON document in the endpoint's wire shape.
pub fn to_wire(feed: &Feed) -> Value {
    json!({
        keys::STATUS: feed.status,
        keys::CATEGORIES: feed.categories.iter().map(category_to_wire).collect::<Vec<_>>(),
    })
}

/// Encode `feed` as compact JSON bytes.
pub fn to_wire_bytes(feed: &Feed) -> Vec<u8> {
    to_wire(feed).to_string().into_bytes()
}

fn category_to_wire(category: &Category) -> Value {
    json!({
        keys::ID: category.id,
        keys::NAME: category.name,
        keys::PRODUCTS: category.products.iter().map(product_to_wire).collect::<Vec<_>>(),
    })
}

fn product_to_wire(product: &Product) -> Value {
    let mut obj = Map::new();
    obj.insert(keys::ID.into(), Value::from(product.id.as_str()));

    if let Some(name) = &product.name {
        obj.insert(keys::NAME.into(), Value::from(name.as_str()));
    }
    if let Some(path) = &product.image_path {
        obj.insert(keys::DETAIL_PICTURE.into(), Value::from(path.as_str()));
    }
    if let Some(rating) = product.rating {
        obj.insert(keys::RATING.into(), Value::from(rating));
    }
    if let Some(price) = product.price {
        obj.insert(
            keys::EXTENDED_PRICE.into(),
            json!([{ keys::PRICE: price }]),
        );
    }
    if let Some(photos) = &product.additional_photo_paths {
        obj.insert(keys::MORE_PHOTO.into(), json!({ keys::VALUE: photos }));
    }

    Value::Object(obj)
}
